//! Client-side state for the taskflow task tracker.
//!
//! [`TaskBoard`] owns the fetched task collection and reconciles it after
//! every remote call made through the injected [`TasksApi`]. Derived views
//! (counts, filtering, search) are computed on demand and never stored.

pub mod api;
pub mod board;

pub use api::{ApiError, TasksApi};
pub use board::{StatusFilter, TaskBoard, TaskStats};
