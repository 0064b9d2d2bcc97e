//! Project use-case service.
//!
//! # Responsibility
//! - Create projects for existing owners.
//! - Authorize project deletion.
//! - Report completion progress from the task store.
//!
//! # Invariants
//! - Only the owner or an admin may delete a project.
//! - Deleting a project leaves its tasks in place (no cascade).

use crate::model::project::Project;
use crate::model::{is_blank, EntityId};
use crate::repo::memory_repo::{Repository, StoreError};
use crate::repo::project_repo::ProjectStore;
use crate::repo::task_repo::TaskStore;
use crate::repo::user_repo::UserStore;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from project service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectServiceError {
    /// Owner or requesting user does not exist.
    UserNotFound(EntityId),
    ProjectNotFound(EntityId),
    /// Project name is blank after trim.
    InvalidName,
    /// Requester is neither the owner nor an admin.
    Forbidden {
        project_id: EntityId,
        user_id: EntityId,
    },
    Store(StoreError),
}

impl Display for ProjectServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::InvalidName => write!(f, "project name must not be blank"),
            Self::Forbidden {
                project_id,
                user_id,
            } => write!(
                f,
                "user {user_id} may not delete project {project_id}; only the owner or an admin can"
            ),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProjectServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ProjectServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Project service facade.
///
/// Mutates the project store; reads users for ownership checks and tasks
/// for progress.
pub struct ProjectService<'a> {
    projects: &'a mut ProjectStore,
    users: &'a UserStore,
    tasks: &'a TaskStore,
}

impl<'a> ProjectService<'a> {
    pub fn new(projects: &'a mut ProjectStore, users: &'a UserStore, tasks: &'a TaskStore) -> Self {
        Self {
            projects,
            users,
            tasks,
        }
    }

    /// Creates an active project owned by `owner_id`.
    ///
    /// # Errors
    /// - `UserNotFound` when the owner is not registered.
    /// - `InvalidName` when `name` is blank.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        owner_id: EntityId,
    ) -> Result<Project, ProjectServiceError> {
        if !self.users.contains(owner_id) {
            return Err(ProjectServiceError::UserNotFound(owner_id));
        }

        let name = name.into();
        if is_blank(&name) {
            return Err(ProjectServiceError::InvalidName);
        }

        let project = self
            .projects
            .add(Project::new(name, description, owner_id))?;
        info!(
            "event=project_create module=project_service status=ok project_id={} owner_id={}",
            project.id.unwrap_or_default(),
            owner_id
        );
        Ok(project)
    }

    pub fn get_project(&self, project_id: EntityId) -> Option<Project> {
        debug!("event=project_get module=project_service project_id={project_id}");
        self.projects.get_by_id(project_id)
    }

    pub fn get_all_projects(&self) -> Vec<Project> {
        self.projects.get_all()
    }

    /// Projects owned by `owner_id`; empty for unknown users.
    pub fn get_projects_by_owner(&self, owner_id: EntityId) -> Vec<Project> {
        self.projects.find_by_owner(owner_id)
    }

    /// Deletes a project on behalf of `requesting_user_id`.
    ///
    /// The project's tasks are not removed and keep referencing the deleted
    /// project id.
    ///
    /// # Errors
    /// - `ProjectNotFound`, then `UserNotFound`, then `Forbidden`.
    pub fn delete_project(
        &mut self,
        project_id: EntityId,
        requesting_user_id: EntityId,
    ) -> Result<(), ProjectServiceError> {
        let project = self
            .projects
            .get_ref(project_id)
            .ok_or(ProjectServiceError::ProjectNotFound(project_id))?;
        let requester = self
            .users
            .get_ref(requesting_user_id)
            .ok_or(ProjectServiceError::UserNotFound(requesting_user_id))?;

        if !project.is_owned_by(requesting_user_id) && !requester.is_admin() {
            warn!(
                "event=project_delete module=project_service status=forbidden project_id={} user_id={}",
                project_id, requesting_user_id
            );
            return Err(ProjectServiceError::Forbidden {
                project_id,
                user_id: requesting_user_id,
            });
        }

        self.projects.delete(project_id)?;

        let orphaned = self.tasks.project_tasks(project_id).count();
        info!(
            "event=project_delete module=project_service status=ok project_id={} user_id={} orphaned_tasks={}",
            project_id, requesting_user_id, orphaned
        );
        Ok(())
    }

    /// Completion percentage in `[0, 100]`; `0.0` for a project without tasks.
    pub fn get_project_progress(&self, project_id: EntityId) -> Result<f64, ProjectServiceError> {
        let project = self
            .projects
            .get_ref(project_id)
            .ok_or(ProjectServiceError::ProjectNotFound(project_id))?;
        Ok(project.calculate_progress(self.tasks.project_tasks(project_id)))
    }
}
