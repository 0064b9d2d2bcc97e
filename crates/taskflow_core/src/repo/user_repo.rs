//! User store with email lookup.

use crate::model::user::User;
use crate::repo::memory_repo::InMemoryRepository;

/// In-memory store of registered users.
pub type UserStore = InMemoryRepository<User>;

impl InMemoryRepository<User> {
    /// Exact, case-sensitive email match; the first match wins.
    ///
    /// Uniqueness is enforced by `UserService`, not here.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.iter().find(|user| user.email == email).cloned()
    }
}
