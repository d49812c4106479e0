//! Store port for planet records.

use async_trait::async_trait;

use crate::domain::{NewPlanet, Planet, PlanetId, PlanetPatch};

use super::StoreError;

/// Persistence operations over planets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Return every planet in ascending identity order.
    async fn list(&self) -> Result<Vec<Planet>, StoreError>;

    /// Fetch a planet, failing with [`StoreError::NotFound`] when absent.
    async fn get(&self, id: PlanetId) -> Result<Planet, StoreError>;

    /// Store a new planet under a fresh identity.
    ///
    /// Fails with [`StoreError::UniqueViolation`] when the name is taken.
    async fn create(&self, planet: NewPlanet) -> Result<Planet, StoreError>;

    /// Apply the fields present in `patch` and return the stored result.
    async fn update(&self, id: PlanetId, patch: PlanetPatch) -> Result<Planet, StoreError>;

    /// Remove a planet together with the favourite links pointing at it.
    async fn delete(&self, id: PlanetId) -> Result<(), StoreError>;
}
