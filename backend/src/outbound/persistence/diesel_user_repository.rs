//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StoreError, UserRepository};
use crate::domain::{EntityKind, NewUser, User, UserId, UserPatch};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
///
/// Favourite links are removed by the `ON DELETE CASCADE` references when a
/// user row goes away.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(User::from)
            .ok_or_else(|| StoreError::not_found(EntityKind::User, id.get()))
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow::from(&user))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        // Diesel refuses an empty changeset.
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(users::table.find(id.get()))
            .set(UserChangeset::from(&patch))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(User::from)
            .ok_or_else(|| StoreError::not_found(EntityKind::User, id.get()))
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(StoreError::not_found(EntityKind::User, id.get()));
        }
        Ok(())
    }
}
