//! Task use-case service.
//!
//! # Responsibility
//! - Create tasks inside existing projects.
//! - Assign tasks and move them between statuses.
//! - Answer per-project, per-user and per-status task queries.
//!
//! # Invariants
//! - A task is created with status `New` and no assignee.
//! - Any registered user may be assigned; assignment always overwrites.
//! - Status changes are unrestricted.
//! - Task queries do not check that the filter key exists.

use crate::model::task::{Priority, Task, TaskStatus};
use crate::model::{is_blank, EntityId};
use crate::repo::memory_repo::{Repository, StoreError};
use crate::repo::project_repo::ProjectStore;
use crate::repo::task_repo::TaskStore;
use crate::repo::user_repo::UserStore;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from task service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskServiceError {
    TaskNotFound(EntityId),
    ProjectNotFound(EntityId),
    UserNotFound(EntityId),
    /// Task title is blank after trim.
    InvalidTitle,
    Store(StoreError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::InvalidTitle => write!(f, "task title must not be blank"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for TaskServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Task service facade.
///
/// Mutates the task store; reads projects and users to validate references.
pub struct TaskService<'a> {
    tasks: &'a mut TaskStore,
    projects: &'a ProjectStore,
    users: &'a UserStore,
}

impl<'a> TaskService<'a> {
    pub fn new(tasks: &'a mut TaskStore, projects: &'a ProjectStore, users: &'a UserStore) -> Self {
        Self {
            tasks,
            projects,
            users,
        }
    }

    /// Creates a task in `project_id`.
    ///
    /// # Errors
    /// - `ProjectNotFound` when the project does not exist.
    /// - `InvalidTitle` when `title` is blank.
    pub fn create_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        project_id: EntityId,
        priority: Priority,
    ) -> Result<Task, TaskServiceError> {
        if !self.projects.contains(project_id) {
            return Err(TaskServiceError::ProjectNotFound(project_id));
        }

        let title = title.into();
        if is_blank(&title) {
            return Err(TaskServiceError::InvalidTitle);
        }

        let task = self
            .tasks
            .add(Task::new(title, description, project_id, priority))?;
        info!(
            "event=task_create module=task_service status=ok task_id={} project_id={} priority={}",
            task.id.unwrap_or_default(),
            project_id,
            priority
        );
        Ok(task)
    }

    /// Sets the assignee of `task_id`, replacing any previous one.
    ///
    /// # Errors
    /// - `TaskNotFound`, then `UserNotFound`.
    pub fn assign_task(
        &mut self,
        task_id: EntityId,
        user_id: EntityId,
    ) -> Result<(), TaskServiceError> {
        let mut task = self.load_task(task_id)?;
        if !self.users.contains(user_id) {
            return Err(TaskServiceError::UserNotFound(user_id));
        }

        task.assign_to(user_id);
        self.tasks.update(task)?;
        info!(
            "event=task_assign module=task_service status=ok task_id={} user_id={}",
            task_id, user_id
        );
        Ok(())
    }

    /// Moves `task_id` to `status`, whatever its current status is.
    pub fn update_task_status(
        &mut self,
        task_id: EntityId,
        status: TaskStatus,
    ) -> Result<(), TaskServiceError> {
        let mut task = self.load_task(task_id)?;
        let previous = task.status;

        task.change_status(status);
        self.tasks.update(task)?;
        info!(
            "event=task_status module=task_service status=ok task_id={} from={} to={}",
            task_id, previous, status
        );
        Ok(())
    }

    pub fn get_task(&self, task_id: EntityId) -> Option<Task> {
        debug!("event=task_get module=task_service task_id={task_id}");
        self.tasks.get_by_id(task_id)
    }

    /// Tasks of `project_id`; empty for unknown or deleted projects.
    pub fn get_tasks_by_project(&self, project_id: EntityId) -> Vec<Task> {
        self.tasks.find_by_project(project_id)
    }

    /// Tasks assigned to `user_id`; empty for unknown users.
    pub fn get_tasks_by_user(&self, user_id: EntityId) -> Vec<Task> {
        self.tasks.find_by_assignee(user_id)
    }

    pub fn get_tasks_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks.find_by_status(status)
    }

    fn load_task(&self, task_id: EntityId) -> Result<Task, TaskServiceError> {
        self.tasks
            .get_by_id(task_id)
            .ok_or(TaskServiceError::TaskNotFound(task_id))
    }
}
