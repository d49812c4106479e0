//! Store port for user records.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId, UserPatch};

use super::StoreError;

/// Persistence operations over users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every user in ascending identity order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Fetch a user, failing with [`StoreError::NotFound`] when absent.
    async fn get(&self, id: UserId) -> Result<User, StoreError>;

    /// Store a new user under a fresh identity.
    ///
    /// Fails with [`StoreError::UniqueViolation`] when the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Apply the fields present in `patch` and return the stored result.
    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError>;

    /// Remove a user together with its favourite links.
    async fn delete(&self, id: UserId) -> Result<(), StoreError>;
}
