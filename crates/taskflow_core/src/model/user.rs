//! User domain model.
//!
//! # Invariants
//! - `email` is unique across all users (enforced by `UserService`).
//! - `role` only takes the two values accepted at registration.

use crate::model::{write_id, Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Registration value for the admin role.
pub const ROLE_ADMIN: &str = "admin";
/// Registration value for the member role.
pub const ROLE_MEMBER: &str = "member";

/// Authorization role of a registered user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May delete any project.
    Admin,
    /// May only delete projects they own.
    #[default]
    Member,
}

impl Role {
    /// Stable string id used at registration and in serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => ROLE_ADMIN,
            Self::Member => ROLE_MEMBER,
        }
    }

    /// Parses an exact role string; no trimming or case folding.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            ROLE_ADMIN => Some(Self::Admin),
            ROLE_MEMBER => Some(Self::Member),
            _ => None,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered user. Referenced by id from projects and tasks, never owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<EntityId>,
    pub name: String,
    /// Natural lookup key, compared case-sensitively.
    pub email: String,
    pub role: Role,
}

impl User {
    /// Creates an unsaved user; the store assigns `id` on insertion.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Entity for User {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "User(id=")?;
        write_id(f, self.id)?;
        write!(
            f,
            ", name={}, email={}, role={})",
            self.name, self.email, self.role
        )
    }
}
