//! PostgreSQL-backed `PlanetRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PlanetRepository, StoreError};
use crate::domain::{EntityKind, NewPlanet, Planet, PlanetId, PlanetPatch};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPlanetRow, PlanetChangeset, PlanetRow};
use super::pool::DbPool;
use super::schema::planets;

/// Diesel-backed implementation of the [`PlanetRepository`] port.
#[derive(Clone)]
pub struct DieselPlanetRepository {
    pool: DbPool,
}

impl DieselPlanetRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetRepository for DieselPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PlanetRow> = planets::table
            .order(planets::id.asc())
            .select(PlanetRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Planet::from).collect())
    }

    async fn get(&self, id: PlanetId) -> Result<Planet, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        planets::table
            .find(id.get())
            .select(PlanetRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(Planet::from)
            .ok_or_else(|| StoreError::not_found(EntityKind::Planet, id.get()))
    }

    async fn create(&self, planet: NewPlanet) -> Result<Planet, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: PlanetRow = diesel::insert_into(planets::table)
            .values(NewPlanetRow::from(&planet))
            .returning(PlanetRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(&self, id: PlanetId, patch: PlanetPatch) -> Result<Planet, StoreError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(planets::table.find(id.get()))
            .set(PlanetChangeset::from(&patch))
            .returning(PlanetRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(Planet::from)
            .ok_or_else(|| StoreError::not_found(EntityKind::Planet, id.get()))
    }

    async fn delete(&self, id: PlanetId) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(planets::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(StoreError::not_found(EntityKind::Planet, id.get()));
        }
        Ok(())
    }
}
