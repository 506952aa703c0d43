use taskflow_core::{TaskInput, TaskStatus};
use taskflow_server::store::MemoryTaskStore;
use taskflow_server::task::{TaskService, TaskServiceError};

fn input(title: &str) -> TaskInput {
    TaskInput {
        title: Some(title.to_string()),
        ..TaskInput::default()
    }
}

#[tokio::test]
async fn created_tasks_default_to_pending() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);

    let task = service.create(input("Buy milk")).await.unwrap();

    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.description, "");
    assert_eq!(task.created_at, task.updated_at);
}

#[tokio::test]
async fn can_create_and_get_back_the_same_task() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    let created = service.create(input("Buy milk")).await.unwrap();

    let fetched = service.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn can_toggle_twice_back_to_the_original_status() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    let created = service.create(input("Buy milk")).await.unwrap();

    let toggled = service.toggle_status(created.id).await.unwrap();
    assert_eq!(toggled.status, TaskStatus::Completed);

    let restored = service.toggle_status(created.id).await.unwrap();
    assert_eq!(restored.status, TaskStatus::Pending);
}

#[tokio::test]
async fn toggle_refreshes_only_updated_at() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    let created = service.create(input("Buy milk")).await.unwrap();

    let toggled = service.toggle_status(created.id).await.unwrap();

    assert_eq!(toggled.created_at, created.created_at);
    assert!(toggled.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_replaces_only_supplied_fields() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    let created = service.create(input("Buy milk")).await.unwrap();

    let updated = service
        .update(
            created.id,
            TaskInput {
                description: Some("Two liters".to_string()),
                ..TaskInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Buy milk");
    assert_eq!(updated.description, "Two liters");
    assert_eq!(updated.status, TaskStatus::Pending);
}

#[tokio::test]
async fn update_can_set_status_directly_without_toggling() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    let created = service
        .create(TaskInput {
            title: Some("Buy milk".to_string()),
            status: Some("completed".to_string()),
            ..TaskInput::default()
        })
        .await
        .unwrap();
    assert_eq!(created.status, TaskStatus::Completed);

    let updated = service
        .update(
            created.id,
            TaskInput {
                status: Some("pending".to_string()),
                ..TaskInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, TaskStatus::Pending);
    assert_eq!(updated.title, "Buy milk");

    let stored = service.get_by_id(created.id).await.unwrap();
    assert_eq!(stored.status, TaskStatus::Pending);
}

#[tokio::test]
async fn failed_update_leaves_the_stored_record_unchanged() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    let created = service.create(input("Buy milk")).await.unwrap();

    let result = service.update(created.id, input("   ")).await;
    assert!(matches!(result, Err(TaskServiceError::Validation(_))));

    let stored = service.get_by_id(created.id).await.unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn list_all_returns_newest_first() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    service.create(input("First errand")).await.unwrap();
    service.create(input("Second errand")).await.unwrap();

    let tasks = service.list_all().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].title, "Second errand");
    assert_eq!(tasks[1].title, "First errand");
}

#[tokio::test]
async fn delete_returns_the_removed_record() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    let created = service.create(input("Buy milk")).await.unwrap();

    let removed = service.delete(created.id).await.unwrap();

    assert_eq!(removed, created);
    assert!(service.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn cannot_get_deleted_task() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    let created = service.create(input("Buy milk")).await.unwrap();
    service.delete(created.id).await.unwrap();

    let result = service.get_by_id(created.id).await;

    assert!(matches!(result, Err(TaskServiceError::NotFound)));
}

#[tokio::test]
async fn toggle_missing_task_fails_not_found() {
    let store = MemoryTaskStore::new();
    let service = TaskService::new(&store);
    let created = service.create(input("Buy milk")).await.unwrap();
    service.delete(created.id).await.unwrap();

    let result = service.toggle_status(created.id).await;

    assert!(matches!(result, Err(TaskServiceError::NotFound)));
}
