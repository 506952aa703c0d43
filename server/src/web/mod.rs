use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::Json,
    routing::get,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::store::MemoryTaskStore;
use crate::task::api::{ErrorResponse, TaskState, create_task_router};

/// JSON body describing the running service.
#[derive(Debug, Serialize)]
struct InfoResponse {
    message: &'static str,
    version: &'static str,
}

/// Handler for GET / that reports the service is up.
async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Task Manager API is running",
        version: "1.0.0",
    })
}

/// Fallback handler that rejects any route the router does not know.
async fn fallback_handler(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("Route {} not found", uri))),
    )
}

/// Assembles the full application router with tracing and CORS applied.
pub fn create_app(config: &Config, state: TaskState) -> anyhow::Result<Router> {
    let origin = config.client_origin.parse::<HeaderValue>()?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/", get(info_handler))
        .merge(create_task_router(state))
        .fallback(fallback_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );
    Ok(app)
}

/// Starts the web server on the configured port and serves until shutdown.
#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let server_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    let state = TaskState {
        store: Arc::new(MemoryTaskStore::new()),
    };
    let app = create_app(&config, state)?;
    axum::serve(listener, app).await?;
    Ok(())
}
