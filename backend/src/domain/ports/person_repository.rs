//! Store port for person records.

use async_trait::async_trait;

use crate::domain::{NewPerson, Person, PersonId, PersonPatch};

use super::StoreError;

/// Persistence operations over people.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Return every person in ascending identity order.
    async fn list(&self) -> Result<Vec<Person>, StoreError>;

    /// Fetch a person, failing with [`StoreError::NotFound`] when absent.
    async fn get(&self, id: PersonId) -> Result<Person, StoreError>;

    /// Store a new person under a fresh identity.
    async fn create(&self, person: NewPerson) -> Result<Person, StoreError>;

    /// Apply the fields present in `patch` and return the stored result.
    async fn update(&self, id: PersonId, patch: PersonPatch) -> Result<Person, StoreError>;

    /// Remove a person together with the favourite links pointing at it.
    async fn delete(&self, id: PersonId) -> Result<(), StoreError>;
}
