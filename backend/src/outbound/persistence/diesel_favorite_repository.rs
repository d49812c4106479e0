//! PostgreSQL-backed favourite link repositories.
//!
//! Reference integrity is left to the database: a dangling `user_id`,
//! `planet_id` or `people_id` fails the insert with a foreign key violation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FavoritePersonRepository, FavoritePlanetRepository, StoreError};
use crate::domain::{
    EntityKind, FavoritePerson, FavoritePersonId, FavoritePlanet, FavoritePlanetId, PersonId,
    PlanetId, UserId,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    FavoritePersonRow, FavoritePlanetRow, NewFavoritePersonRow, NewFavoritePlanetRow,
};
use super::pool::DbPool;
use super::schema::{favorites_people, favorites_planets};

/// Diesel-backed implementation of [`FavoritePlanetRepository`].
#[derive(Clone)]
pub struct DieselFavoritePlanetRepository {
    pool: DbPool,
}

impl DieselFavoritePlanetRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoritePlanetRepository for DieselFavoritePlanetRepository {
    async fn create(
        &self,
        user_id: UserId,
        planet_id: PlanetId,
    ) -> Result<FavoritePlanet, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: FavoritePlanetRow = diesel::insert_into(favorites_planets::table)
            .values(NewFavoritePlanetRow {
                planet_id: planet_id.get(),
                user_id: user_id.get(),
            })
            .returning(FavoritePlanetRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn delete(&self, id: FavoritePlanetId) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(favorites_planets::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(StoreError::not_found(EntityKind::FavoritePlanet, id.get()));
        }
        Ok(())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<FavoritePlanet>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FavoritePlanetRow> = favorites_planets::table
            .filter(favorites_planets::user_id.eq(user_id.get()))
            .order(favorites_planets::id.asc())
            .select(FavoritePlanetRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(FavoritePlanet::from).collect())
    }
}

/// Diesel-backed implementation of [`FavoritePersonRepository`].
#[derive(Clone)]
pub struct DieselFavoritePersonRepository {
    pool: DbPool,
}

impl DieselFavoritePersonRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoritePersonRepository for DieselFavoritePersonRepository {
    async fn create(
        &self,
        user_id: UserId,
        people_id: PersonId,
    ) -> Result<FavoritePerson, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: FavoritePersonRow = diesel::insert_into(favorites_people::table)
            .values(NewFavoritePersonRow {
                people_id: people_id.get(),
                user_id: user_id.get(),
            })
            .returning(FavoritePersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn delete(&self, id: FavoritePersonId) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(favorites_people::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(StoreError::not_found(EntityKind::FavoritePerson, id.get()));
        }
        Ok(())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<FavoritePerson>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FavoritePersonRow> = favorites_people::table
            .filter(favorites_people::user_id.eq(user_id.get()))
            .order(favorites_people::id.asc())
            .select(FavoritePersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(FavoritePerson::from).collect())
    }
}
