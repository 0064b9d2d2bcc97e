//! Repository layer: the generic keyed store and its per-domain helpers.
//!
//! # Responsibility
//! - Define the CRUD contract shared by every entity kind.
//! - Own identity assignment for inserted entities.
//! - Offer read-only derived queries (by email, owner, project, ...).
//!
//! # Invariants
//! - Each store instance hands out ids from its own counter, starting at 1.
//! - Derived queries never mutate; uniqueness rules live in services.

pub mod memory_repo;
pub mod project_repo;
pub mod task_repo;
pub mod user_repo;
