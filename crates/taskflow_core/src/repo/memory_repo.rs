//! Generic repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/get/list/update/delete over any `Entity` type.
//! - Assign sequential ids at first insertion.
//!
//! # Invariants
//! - Ids start at 1 and only grow; a deleted id is never handed out again.
//! - Id 0 is never stored. Once `EntityId::MAX` is taken, auto-assignment
//!   fails with `IdSpaceExhausted` instead of wrapping.
//! - A failed `add` leaves entries and counter untouched.
//! - Reads return snapshots. Mutating a returned value does not change the
//!   store until it is passed back through `update`.

use crate::model::{Entity, EntityId};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIRST_ID: EntityId = 1;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure for keyed CRUD operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entry exists at the requested id.
    NotFound(EntityId),
    /// `update` was given an entity that was never inserted.
    MissingId,
    /// `add` was given a preset id that is already occupied.
    DuplicateId(EntityId),
    /// `add` was given a preset id outside the assignable range.
    InvalidId(EntityId),
    /// Every id up to `EntityId::MAX` has been handed out.
    IdSpaceExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "entity not found: {id}"),
            Self::MissingId => write!(f, "entity has no id; it was never stored"),
            Self::DuplicateId(id) => write!(f, "entity id already in use: {id}"),
            Self::InvalidId(id) => write!(f, "entity id out of range: {id}"),
            Self::IdSpaceExhausted => write!(f, "entity id space exhausted"),
        }
    }
}

impl Error for StoreError {}

/// Keyed CRUD contract over one entity type.
pub trait Repository<T: Entity> {
    /// Inserts `entity`, assigning the next id when it has none.
    ///
    /// Returns the stored snapshot, id included.
    fn add(&mut self, entity: T) -> StoreResult<T>;
    fn get_by_id(&self, id: EntityId) -> Option<T>;
    /// Snapshot of all entries. Order is not part of the contract.
    fn get_all(&self) -> Vec<T>;
    /// Replaces the entry stored at the entity's id.
    fn update(&mut self, entity: T) -> StoreResult<()>;
    fn delete(&mut self, id: EntityId) -> StoreResult<()>;
}

/// Process-memory store backed by an ordered map.
///
/// Domain stores are type aliases over this struct with extra query methods
/// (see `UserStore`, `ProjectStore`, `TaskStore`).
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entries: BTreeMap<EntityId, T>,
    /// `None` once `EntityId::MAX` has been handed out.
    next_id: Option<EntityId>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: Some(FIRST_ID),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Borrowing iterator used by the derived queries.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Borrowing variant of `get_by_id`.
    pub(crate) fn get_ref(&self, id: EntityId) -> Option<&T> {
        self.entries.get(&id)
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, mut entity: T) -> StoreResult<T> {
        let (id, next_id) = match entity.id() {
            Some(preset) => {
                if preset < FIRST_ID {
                    return Err(StoreError::InvalidId(preset));
                }
                if self.entries.contains_key(&preset) {
                    return Err(StoreError::DuplicateId(preset));
                }
                let next_id = match (self.next_id, preset.checked_add(1)) {
                    (Some(current), Some(after)) => Some(current.max(after)),
                    _ => None,
                };
                (preset, next_id)
            }
            None => {
                let id = self.next_id.ok_or(StoreError::IdSpaceExhausted)?;
                entity.set_id(id);
                (id, id.checked_add(1))
            }
        };

        self.next_id = next_id;
        self.entries.insert(id, entity.clone());
        Ok(entity)
    }

    fn get_by_id(&self, id: EntityId) -> Option<T> {
        self.entries.get(&id).cloned()
    }

    fn get_all(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }

    fn update(&mut self, entity: T) -> StoreResult<()> {
        let id = entity.id().ok_or(StoreError::MissingId)?;
        match self.entries.get_mut(&id) {
            Some(slot) => {
                *slot = entity;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn delete(&mut self, id: EntityId) -> StoreResult<()> {
        self.entries
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
