//! Store ports for the two favourite link tables.
//!
//! Link creation is checked by the store: a dangling user, planet or person
//! reference fails with [`StoreError::ForeignKeyViolation`].

use async_trait::async_trait;

use crate::domain::{
    FavoritePerson, FavoritePersonId, FavoritePlanet, FavoritePlanetId, PersonId, PlanetId,
    UserId,
};

use super::StoreError;

/// Persistence operations over user-to-planet favourites.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoritePlanetRepository: Send + Sync {
    /// Link `user_id` to `planet_id` under a fresh identity.
    async fn create(
        &self,
        user_id: UserId,
        planet_id: PlanetId,
    ) -> Result<FavoritePlanet, StoreError>;

    /// Remove a link, failing with [`StoreError::NotFound`] when absent.
    async fn delete(&self, id: FavoritePlanetId) -> Result<(), StoreError>;

    /// Return the user's planet links in ascending identity order.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<FavoritePlanet>, StoreError>;
}

/// Persistence operations over user-to-person favourites.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoritePersonRepository: Send + Sync {
    /// Link `user_id` to `people_id` under a fresh identity.
    async fn create(
        &self,
        user_id: UserId,
        people_id: PersonId,
    ) -> Result<FavoritePerson, StoreError>;

    /// Remove a link, failing with [`StoreError::NotFound`] when absent.
    async fn delete(&self, id: FavoritePersonId) -> Result<(), StoreError>;

    /// Return the user's person links in ascending identity order.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<FavoritePerson>, StoreError>;
}
