//! Task store with project, assignee and status lookups.
//!
//! # Invariants
//! - `find_by_project` is the only source of a project's task list.
//! - Unknown filter keys yield an empty result, never an error.

use crate::model::task::{Task, TaskStatus};
use crate::model::EntityId;
use crate::repo::memory_repo::InMemoryRepository;

/// In-memory store of tasks.
pub type TaskStore = InMemoryRepository<Task>;

impl InMemoryRepository<Task> {
    pub fn find_by_project(&self, project_id: EntityId) -> Vec<Task> {
        self.filtered(|task| task.project_id == project_id)
    }

    pub fn find_by_assignee(&self, assignee_id: EntityId) -> Vec<Task> {
        self.filtered(|task| task.assignee_id == Some(assignee_id))
    }

    pub fn find_by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.filtered(|task| task.status == status)
    }

    /// Borrowing view of one project's tasks, used for progress.
    pub(crate) fn project_tasks(&self, project_id: EntityId) -> impl Iterator<Item = &Task> {
        self.iter().filter(move |task| task.project_id == project_id)
    }

    fn filtered(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.iter().filter(|task| predicate(task)).cloned().collect()
    }
}
