//! Task domain model.
//!
//! # Invariants
//! - `project_id` is fixed at creation.
//! - `status` has no guarded transitions: every state is reachable from
//!   every other state, and `Completed` can be reverted.

use crate::model::{now_epoch_ms, write_id, Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created, not started.
    #[default]
    New,
    InProgress,
    InReview,
    /// Counts towards project progress.
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::New,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Task urgency. Informational only; it does not affect progress.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|priority| priority.as_str() == value)
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of work inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<EntityId>,
    pub title: String,
    pub description: String,
    /// Owning project. Authoritative for project membership.
    pub project_id: EntityId,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Responsible user, `None` until assigned.
    pub assignee_id: Option<EntityId>,
    /// Unix epoch milliseconds. Informational only.
    pub created_at: i64,
}

impl Task {
    /// Creates an unsaved task with status `New` and no assignee.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        project_id: EntityId,
        priority: Priority,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            project_id,
            priority,
            status: TaskStatus::New,
            assignee_id: None,
            created_at: now_epoch_ms(),
        }
    }

    /// Replaces the current assignee, if any.
    pub fn assign_to(&mut self, user_id: EntityId) {
        self.assignee_id = Some(user_id);
    }

    pub fn change_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

impl Entity for Task {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task(id=")?;
        write_id(f, self.id)?;
        write!(
            f,
            ", title={}, status={}, priority={}, assignee=",
            self.title, self.status, self.priority
        )?;
        match self.assignee_id {
            Some(user_id) => write!(f, "{user_id})"),
            None => f.write_str("none)"),
        }
    }
}
