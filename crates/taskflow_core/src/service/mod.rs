//! Domain use-case services.
//!
//! # Responsibility
//! - Enforce validation, authorization and referential integrity.
//! - Be the only place that constructs or mutates entities for callers.
//!
//! # Invariants
//! - A service mutates only its own store; other stores are borrowed
//!   read-only to validate references.
//! - Existence is checked before any store write, so store-level
//!   `NotFound` is not reachable through service calls.

pub mod project_service;
pub mod task_service;
pub mod user_service;
