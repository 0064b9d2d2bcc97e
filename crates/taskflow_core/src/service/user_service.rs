//! User registration and lookup.
//!
//! # Invariants
//! - Emails are unique across the user store (exact match).
//! - Only `admin` and `member` are accepted as roles.

use crate::model::user::{Role, User, ROLE_MEMBER};
use crate::model::{is_blank, EntityId};
use crate::repo::memory_repo::{Repository, StoreError};
use crate::repo::user_repo::UserStore;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from user service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserServiceError {
    /// Another user already registered this exact email.
    DuplicateEmail(String),
    /// Role is not exactly `admin` or `member`.
    InvalidRole(String),
    /// Name is blank after trim.
    InvalidName,
    Store(StoreError),
}

impl Display for UserServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail(email) => write!(f, "user with email {email} already exists"),
            Self::InvalidRole(role) => {
                write!(f, "invalid role `{role}`; expected admin|member")
            }
            Self::InvalidName => write!(f, "user name must not be blank"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UserServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for UserServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// User service over a borrowed user store.
pub struct UserService<'a> {
    users: &'a mut UserStore,
}

impl<'a> UserService<'a> {
    pub fn new(users: &'a mut UserStore) -> Self {
        Self { users }
    }

    /// Registers a new user and returns the stored record.
    ///
    /// `role` defaults to `member` when `None`.
    ///
    /// # Errors
    /// - `DuplicateEmail` when the email is already registered.
    /// - `InvalidRole` when `role` is not exactly `admin` or `member`.
    /// - `InvalidName` when `name` is blank.
    pub fn register_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Option<&str>,
    ) -> Result<User, UserServiceError> {
        let name = name.into();
        let email = email.into();

        if self.users.find_by_email(&email).is_some() {
            return Err(UserServiceError::DuplicateEmail(email));
        }

        let role_text = role.unwrap_or(ROLE_MEMBER);
        let role = Role::parse(role_text)
            .ok_or_else(|| UserServiceError::InvalidRole(role_text.to_string()))?;

        if is_blank(&name) {
            return Err(UserServiceError::InvalidName);
        }

        let user = self.users.add(User::new(name, email, role))?;
        info!(
            "event=user_register module=user_service status=ok user_id={} role={}",
            user.id.unwrap_or_default(),
            user.role
        );
        Ok(user)
    }

    pub fn get_user(&self, user_id: EntityId) -> Option<User> {
        debug!("event=user_get module=user_service user_id={user_id}");
        self.users.get_by_id(user_id)
    }

    pub fn get_all_users(&self) -> Vec<User> {
        self.users.get_all()
    }
}
