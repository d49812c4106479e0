//! PostgreSQL-backed `PersonRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PersonRepository, StoreError};
use crate::domain::{EntityKind, NewPerson, Person, PersonId, PersonPatch};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPersonRow, PersonChangeset, PersonRow};
use super::pool::DbPool;
use super::schema::people;

/// Diesel-backed implementation of the [`PersonRepository`] port.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn list(&self) -> Result<Vec<Person>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PersonRow> = people::table
            .order(people::id.asc())
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn get(&self, id: PersonId) -> Result<Person, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        people::table
            .find(id.get())
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(Person::from)
            .ok_or_else(|| StoreError::not_found(EntityKind::Person, id.get()))
    }

    async fn create(&self, person: NewPerson) -> Result<Person, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: PersonRow = diesel::insert_into(people::table)
            .values(NewPersonRow::from(&person))
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(&self, id: PersonId, patch: PersonPatch) -> Result<Person, StoreError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(people::table.find(id.get()))
            .set(PersonChangeset::from(&patch))
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
            .map(Person::from)
            .ok_or_else(|| StoreError::not_found(EntityKind::Person, id.get()))
    }

    async fn delete(&self, id: PersonId) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(people::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted == 0 {
            return Err(StoreError::not_found(EntityKind::Person, id.get()));
        }
        Ok(())
    }
}
