//! In-memory entity store.
//!
//! Implements every store port over a single set of tables guarded by one
//! `RwLock`, so each operation (including reference checks and cascading
//! deletes) is atomic. Used when no database is configured and as an
//! isolated fixture store in tests.
//!
//! Identities come from per-table counters that only ever increase, so an
//! identity is never handed out twice within one store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    FavoritePersonRepository, FavoritePlanetRepository, PersonRepository, PlanetRepository,
    StoreError, UserRepository,
};
use crate::domain::{
    EntityKind, FavoritePerson, FavoritePersonId, FavoritePlanet, FavoritePlanetId, NewPerson,
    NewPlanet, NewUser, Person, PersonId, PersonPatch, Planet, PlanetId, PlanetPatch, User,
    UserId, UserPatch,
};

#[derive(Debug, Default)]
struct Sequence(i32);

impl Sequence {
    fn next(&mut self) -> Result<i32, StoreError> {
        let next = self
            .0
            .checked_add(1)
            .ok_or_else(|| StoreError::query("identity sequence exhausted"))?;
        self.0 = next;
        Ok(next)
    }
}

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    sequence: Sequence,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            sequence: Sequence::default(),
        }
    }
}

impl<T> Table<T> {
    fn get(&self, kind: EntityKind, id: i32) -> Result<&T, StoreError> {
        self.rows
            .get(&id)
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    fn get_mut(&mut self, kind: EntityKind, id: i32) -> Result<&mut T, StoreError> {
        self.rows
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    fn remove(&mut self, kind: EntityKind, id: i32) -> Result<T, StoreError> {
        self.rows
            .remove(&id)
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> Result<T, StoreError> {
        let id = self.sequence.next()?;
        let row = build(id);
        self.rows.insert(id, row.clone());
        Ok(row)
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Table<User>,
    planets: Table<Planet>,
    people: Table<Person>,
    favorite_planets: Table<FavoritePlanet>,
    favorite_people: Table<FavoritePerson>,
}

impl Tables {
    fn ensure_unique_email(&self, email: &str, except: Option<UserId>) -> Result<(), StoreError> {
        let taken = self
            .users
            .values()
            .any(|user| user.email == email && Some(user.id) != except);
        if taken {
            return Err(StoreError::unique_violation(format!(
                "a user with email {email} already exists"
            )));
        }
        Ok(())
    }

    fn ensure_unique_planet_name(
        &self,
        name: &str,
        except: Option<PlanetId>,
    ) -> Result<(), StoreError> {
        let taken = self
            .planets
            .values()
            .any(|planet| planet.name == name && Some(planet.id) != except);
        if taken {
            return Err(StoreError::unique_violation(format!(
                "a planet named {name} already exists"
            )));
        }
        Ok(())
    }

    fn ensure_reference(&self, kind: EntityKind, id: i32) -> Result<(), StoreError> {
        let exists = match kind {
            EntityKind::User => self.users.rows.contains_key(&id),
            EntityKind::Planet => self.planets.rows.contains_key(&id),
            EntityKind::Person => self.people.rows.contains_key(&id),
            EntityKind::FavoritePlanet => self.favorite_planets.rows.contains_key(&id),
            EntityKind::FavoritePerson => self.favorite_people.rows.contains_key(&id),
        };
        if exists {
            Ok(())
        } else {
            Err(StoreError::foreign_key_violation(format!(
                "{kind} {id} does not exist"
            )))
        }
    }
}

/// Shared in-memory store. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn get(&self, id: UserId) -> Result<User, StoreError> {
        let tables = self.tables.read().await;
        tables.users.get(EntityKind::User, id.get()).cloned()
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        tables.ensure_unique_email(&user.email, None)?;
        tables
            .users
            .insert_with(|id| user.into_user(UserId::new(id)))
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        tables.users.get(EntityKind::User, id.get())?;
        if let Some(email) = patch.email.as_deref() {
            tables.ensure_unique_email(email, Some(id))?;
        }
        let user = tables.users.get_mut(EntityKind::User, id.get())?;
        patch.apply(user);
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.users.remove(EntityKind::User, id.get())?;
        tables
            .favorite_planets
            .rows
            .retain(|_, link| link.user_id != id);
        tables
            .favorite_people
            .rows
            .retain(|_, link| link.user_id != id);
        Ok(())
    }
}

#[async_trait]
impl PlanetRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Planet>, StoreError> {
        Ok(self.tables.read().await.planets.values().cloned().collect())
    }

    async fn get(&self, id: PlanetId) -> Result<Planet, StoreError> {
        let tables = self.tables.read().await;
        tables.planets.get(EntityKind::Planet, id.get()).cloned()
    }

    async fn create(&self, planet: NewPlanet) -> Result<Planet, StoreError> {
        let mut tables = self.tables.write().await;
        tables.ensure_unique_planet_name(&planet.name, None)?;
        tables
            .planets
            .insert_with(|id| planet.into_planet(PlanetId::new(id)))
    }

    async fn update(&self, id: PlanetId, patch: PlanetPatch) -> Result<Planet, StoreError> {
        let mut tables = self.tables.write().await;
        tables.planets.get(EntityKind::Planet, id.get())?;
        if let Some(name) = patch.name.as_deref() {
            tables.ensure_unique_planet_name(name, Some(id))?;
        }
        let planet = tables.planets.get_mut(EntityKind::Planet, id.get())?;
        patch.apply(planet);
        Ok(planet.clone())
    }

    async fn delete(&self, id: PlanetId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.planets.remove(EntityKind::Planet, id.get())?;
        tables
            .favorite_planets
            .rows
            .retain(|_, link| link.planet_id != id);
        Ok(())
    }
}

#[async_trait]
impl PersonRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.tables.read().await.people.values().cloned().collect())
    }

    async fn get(&self, id: PersonId) -> Result<Person, StoreError> {
        let tables = self.tables.read().await;
        tables.people.get(EntityKind::Person, id.get()).cloned()
    }

    async fn create(&self, person: NewPerson) -> Result<Person, StoreError> {
        let mut tables = self.tables.write().await;
        tables
            .people
            .insert_with(|id| person.into_person(PersonId::new(id)))
    }

    async fn update(&self, id: PersonId, patch: PersonPatch) -> Result<Person, StoreError> {
        let mut tables = self.tables.write().await;
        let person = tables.people.get_mut(EntityKind::Person, id.get())?;
        patch.apply(person);
        Ok(person.clone())
    }

    async fn delete(&self, id: PersonId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.people.remove(EntityKind::Person, id.get())?;
        tables
            .favorite_people
            .rows
            .retain(|_, link| link.people_id != id);
        Ok(())
    }
}

#[async_trait]
impl FavoritePlanetRepository for InMemoryStore {
    async fn create(
        &self,
        user_id: UserId,
        planet_id: PlanetId,
    ) -> Result<FavoritePlanet, StoreError> {
        let mut tables = self.tables.write().await;
        tables.ensure_reference(EntityKind::User, user_id.get())?;
        tables.ensure_reference(EntityKind::Planet, planet_id.get())?;
        tables.favorite_planets.insert_with(|id| FavoritePlanet {
            id: FavoritePlanetId::new(id),
            planet_id,
            user_id,
        })
    }

    async fn delete(&self, id: FavoritePlanetId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables
            .favorite_planets
            .remove(EntityKind::FavoritePlanet, id.get())
            .map(drop)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<FavoritePlanet>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .favorite_planets
            .values()
            .filter(|link| link.user_id == user_id)
            .copied()
            .collect())
    }
}

#[async_trait]
impl FavoritePersonRepository for InMemoryStore {
    async fn create(
        &self,
        user_id: UserId,
        people_id: PersonId,
    ) -> Result<FavoritePerson, StoreError> {
        let mut tables = self.tables.write().await;
        tables.ensure_reference(EntityKind::User, user_id.get())?;
        tables.ensure_reference(EntityKind::Person, people_id.get())?;
        tables.favorite_people.insert_with(|id| FavoritePerson {
            id: FavoritePersonId::new(id),
            people_id,
            user_id,
        })
    }

    async fn delete(&self, id: FavoritePersonId) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables
            .favorite_people
            .remove(EntityKind::FavoritePerson, id.get())
            .map(drop)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<FavoritePerson>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .favorite_people
            .values()
            .filter(|link| link.user_id == user_id)
            .copied()
            .collect())
    }
}
