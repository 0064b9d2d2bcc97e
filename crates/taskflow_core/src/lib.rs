//! Core domain logic for Taskflow.
//! This crate is the single source of truth for task-tracking invariants.

pub mod demo;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod tracker;

pub use demo::{seed_demo_data, DemoSeed};
pub use logging::{
    default_log_level, flush_logging, init_logging, logging_status, LoggingStatus,
};
pub use model::project::{Project, PROJECT_STATUS_ACTIVE};
pub use model::task::{Priority, Task, TaskStatus};
pub use model::user::{Role, User};
pub use model::{Entity, EntityId};
pub use repo::memory_repo::{InMemoryRepository, Repository, StoreError, StoreResult};
pub use repo::project_repo::ProjectStore;
pub use repo::task_repo::TaskStore;
pub use repo::user_repo::UserStore;
pub use service::project_service::{ProjectService, ProjectServiceError};
pub use service::task_service::{TaskService, TaskServiceError};
pub use service::user_service::{UserService, UserServiceError};
pub use tracker::{TaskTracker, TrackerError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
