//! Project store with owner lookup.

use crate::model::project::Project;
use crate::model::EntityId;
use crate::repo::memory_repo::InMemoryRepository;

/// In-memory store of projects.
pub type ProjectStore = InMemoryRepository<Project>;

impl InMemoryRepository<Project> {
    pub fn find_by_owner(&self, owner_id: EntityId) -> Vec<Project> {
        self.iter()
            .filter(|project| project.owner_id == owner_id)
            .cloned()
            .collect()
    }
}
