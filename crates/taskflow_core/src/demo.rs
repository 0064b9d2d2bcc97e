//! Demo data seeding for interactive sessions.
//!
//! Seeds an admin, two members, one project with two tasks, assigns both
//! tasks and completes the first, so a fresh session shows 50% progress.

use crate::model::task::{Priority, TaskStatus};
use crate::model::EntityId;
use crate::repo::memory_repo::StoreError;
use crate::tracker::{TaskTracker, TrackerError};
use log::info;

/// Ids created by `seed_demo_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSeed {
    /// Admin user; the shell acts as this user.
    pub admin_id: EntityId,
    pub member_ids: [EntityId; 2],
    pub project_id: EntityId,
    pub task_ids: [EntityId; 2],
}

/// Populates `tracker` with the demo data set.
///
/// # Errors
/// Propagates the first service failure, e.g. `DuplicateEmail` when the
/// tracker was already seeded.
pub fn seed_demo_data(tracker: &mut TaskTracker) -> Result<DemoSeed, TrackerError> {
    let mut users = tracker.users();
    let admin = users.register_user("Administrator", "admin@example.com", Some("admin"))?;
    let first_member = users.register_user("Ivan Ivanov", "ivan@example.com", None)?;
    let second_member = users.register_user("Maria Petrova", "maria@example.com", None)?;
    let admin_id = stored_id(admin.id)?;
    let member_ids = [stored_id(first_member.id)?, stored_id(second_member.id)?];

    let project = tracker.projects().create_project(
        "Web application",
        "Task management system",
        admin_id,
    )?;
    let project_id = stored_id(project.id)?;

    let mut tasks = tracker.tasks();
    let design = tasks.create_task(
        "Design the architecture",
        "Draw the component and data diagrams",
        project_id,
        Priority::High,
    )?;
    let models = tasks.create_task(
        "Implement data models",
        "Create the user, project and task records",
        project_id,
        Priority::Medium,
    )?;
    let task_ids = [stored_id(design.id)?, stored_id(models.id)?];

    tasks.assign_task(task_ids[0], member_ids[0])?;
    tasks.assign_task(task_ids[1], member_ids[1])?;
    tasks.update_task_status(task_ids[0], TaskStatus::Completed)?;

    info!(
        "event=demo_seed module=demo status=ok users=3 projects=1 tasks={}",
        task_ids.len()
    );
    Ok(DemoSeed {
        admin_id,
        member_ids,
        project_id,
        task_ids,
    })
}

fn stored_id(id: Option<EntityId>) -> Result<EntityId, TrackerError> {
    id.ok_or(TrackerError::Store(StoreError::MissingId))
}
