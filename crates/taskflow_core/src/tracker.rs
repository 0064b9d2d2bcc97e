//! Composition root for the task tracker.
//!
//! # Responsibility
//! - Own the user, project and task stores for the process lifetime.
//! - Hand out service views that borrow exactly the stores they need.
//!
//! # Invariants
//! - Each store has exactly one mutable borrower at a time (its service).
//! - No global or static state; callers pass the tracker by reference.

use crate::repo::memory_repo::StoreError;
use crate::repo::project_repo::ProjectStore;
use crate::repo::task_repo::TaskStore;
use crate::repo::user_repo::UserStore;
use crate::service::project_service::{ProjectService, ProjectServiceError};
use crate::service::task_service::{TaskService, TaskServiceError};
use crate::service::user_service::{UserService, UserServiceError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Any failure raised by the tracker's services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    User(UserServiceError),
    Project(ProjectServiceError),
    Task(TaskServiceError),
    /// Store invariant broken outside any service call.
    Store(StoreError),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(err) => write!(f, "{err}"),
            Self::Project(err) => write!(f, "{err}"),
            Self::Task(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::User(err) => Some(err),
            Self::Project(err) => Some(err),
            Self::Task(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<UserServiceError> for TrackerError {
    fn from(value: UserServiceError) -> Self {
        Self::User(value)
    }
}

impl From<ProjectServiceError> for TrackerError {
    fn from(value: ProjectServiceError) -> Self {
        Self::Project(value)
    }
}

impl From<TaskServiceError> for TrackerError {
    fn from(value: TaskServiceError) -> Self {
        Self::Task(value)
    }
}

/// Owner of all in-memory stores.
#[derive(Debug, Default)]
pub struct TaskTracker {
    users: UserStore,
    projects: ProjectStore,
    tasks: TaskStore,
}

impl TaskTracker {
    /// Creates a tracker with three empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&mut self) -> UserService<'_> {
        UserService::new(&mut self.users)
    }

    pub fn projects(&mut self) -> ProjectService<'_> {
        ProjectService::new(&mut self.projects, &self.users, &self.tasks)
    }

    pub fn tasks(&mut self) -> TaskService<'_> {
        TaskService::new(&mut self.tasks, &self.projects, &self.users)
    }

    /// Read-only access to the user store.
    pub fn user_store(&self) -> &UserStore {
        &self.users
    }

    pub fn project_store(&self) -> &ProjectStore {
        &self.projects
    }

    pub fn task_store(&self) -> &TaskStore {
        &self.tasks
    }
}
