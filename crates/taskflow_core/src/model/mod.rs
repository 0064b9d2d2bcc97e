//! Domain model for users, projects and tasks.
//!
//! # Responsibility
//! - Define the entity records shared by stores and services.
//! - Provide the identity capability every stored entity must expose.
//!
//! # Invariants
//! - An entity id is `None` until a store assigns it on first insertion.
//! - Once assigned, an id is never changed or reused by the same store.

pub mod project;
pub mod task;
pub mod user;

use std::fmt::Formatter;
use std::time::{SystemTime, UNIX_EPOCH};

/// Integer identity assigned by the storage layer.
pub type EntityId = u64;

/// Identity slot required of every entity kept in a store.
///
/// Stores rely on this capability instead of inspecting values at runtime,
/// so an entity without an identity cannot be stored at all.
pub trait Entity: Clone {
    /// Returns the assigned id, or `None` before first insertion.
    fn id(&self) -> Option<EntityId>;

    /// Records the id chosen by the store.
    fn set_id(&mut self, id: EntityId);
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Falls back to `0` when the system clock is set before the epoch.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Writes an entity id for `Display` impls, `unsaved` when absent.
pub(crate) fn write_id(f: &mut Formatter<'_>, id: Option<EntityId>) -> std::fmt::Result {
    match id {
        Some(id) => write!(f, "{id}"),
        None => f.write_str("unsaved"),
    }
}
