//! Project domain model.
//!
//! # Responsibility
//! - Hold project metadata and ownership.
//! - Compute completion progress from the project's tasks.
//!
//! # Invariants
//! - `owner_id` is fixed at creation.
//! - A project keeps no task list of its own. Membership is defined by
//!   `Task::project_id`, so a task is counted at most once.

use crate::model::task::Task;
use crate::model::{now_epoch_ms, write_id, Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Status assigned to every newly created project.
pub const PROJECT_STATUS_ACTIVE: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
    pub owner_id: EntityId,
    /// Free-form status label, `"active"` on creation.
    pub status: String,
    /// Unix epoch milliseconds. Informational only.
    pub created_at: i64,
}

impl Project {
    /// Creates an unsaved, active project.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        owner_id: EntityId,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            owner_id,
            status: PROJECT_STATUS_ACTIVE.to_string(),
            created_at: now_epoch_ms(),
        }
    }

    pub fn is_owned_by(&self, user_id: EntityId) -> bool {
        self.owner_id == user_id
    }

    /// Percentage (0-100) of this project's tasks that are completed.
    ///
    /// Tasks belonging to other projects are ignored. Returns `0.0` for an
    /// unsaved project or when no task belongs to it.
    pub fn calculate_progress<'a, I>(&self, tasks: I) -> f64
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let Some(project_id) = self.id else {
            return 0.0;
        };

        let (total, completed) = tasks
            .into_iter()
            .filter(|task| task.project_id == project_id)
            .fold((0_usize, 0_usize), |(total, completed), task| {
                (total + 1, completed + usize::from(task.is_completed()))
            });

        if total == 0 {
            return 0.0;
        }
        (completed as f64 / total as f64) * 100.0
    }
}

impl Entity for Project {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Display for Project {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Project(id=")?;
        write_id(f, self.id)?;
        write!(
            f,
            ", name={}, status={}, owner={})",
            self.name, self.status, self.owner_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Project;
    use crate::model::task::{Priority, Task, TaskStatus};

    fn saved_project(id: u64) -> Project {
        let mut project = Project::new("core", "", 1);
        project.id = Some(id);
        project
    }

    fn task_in(project_id: u64, status: TaskStatus) -> Task {
        let mut task = Task::new("t", "", project_id, Priority::Medium);
        task.change_status(status);
        task
    }

    #[test]
    fn progress_is_zero_without_tasks() {
        let project = saved_project(1);
        let tasks: Vec<Task> = Vec::new();
        assert_eq!(project.calculate_progress(&tasks), 0.0);
    }

    #[test]
    fn progress_counts_only_own_completed_tasks() {
        let project = saved_project(1);
        let tasks = vec![
            task_in(1, TaskStatus::Completed),
            task_in(1, TaskStatus::InReview),
            task_in(1, TaskStatus::New),
            task_in(1, TaskStatus::Completed),
            task_in(2, TaskStatus::Completed),
        ];
        assert_eq!(project.calculate_progress(&tasks), 50.0);
    }

    #[test]
    fn unsaved_project_has_no_progress() {
        let project = Project::new("draft", "", 1);
        let tasks = vec![task_in(1, TaskStatus::Completed)];
        assert_eq!(project.calculate_progress(&tasks), 0.0);
    }
}
