//! Favourite links and the combined per-user favourites view.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::ports::{
    FavoritePersonRepository, FavoritePlanetRepository, StoreError, UserRepository,
};
use super::{FavoritePersonId, FavoritePlanetId, PersonId, PlanetId, UserId};

/// A user having favourited a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavoritePlanet {
    pub id: FavoritePlanetId,
    pub planet_id: PlanetId,
    pub user_id: UserId,
}

/// A user having favourited a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavoritePerson {
    pub id: FavoritePersonId,
    pub people_id: PersonId,
    pub user_id: UserId,
}

/// One entry of the combined favourites view.
///
/// Serialised untagged: planet links keep `planet_id`, person links keep
/// `people_id`, and nothing else tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FavoriteEntry {
    /// A favourite planet link.
    Planet(FavoritePlanet),
    /// A favourite person link.
    Person(FavoritePerson),
}

impl From<FavoritePlanet> for FavoriteEntry {
    fn from(value: FavoritePlanet) -> Self {
        Self::Planet(value)
    }
}

impl From<FavoritePerson> for FavoriteEntry {
    fn from(value: FavoritePerson) -> Self {
        Self::Person(value)
    }
}

/// Read-side service assembling a user's favourites.
#[derive(Clone)]
pub struct FavoritesService {
    users: Arc<dyn UserRepository>,
    planets: Arc<dyn FavoritePlanetRepository>,
    people: Arc<dyn FavoritePersonRepository>,
}

impl FavoritesService {
    /// Build the service over the given ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        planets: Arc<dyn FavoritePlanetRepository>,
        people: Arc<dyn FavoritePersonRepository>,
    ) -> Self {
        Self {
            users,
            planets,
            people,
        }
    }

    /// Planet links followed by person links for `user_id`.
    ///
    /// Fails with [`StoreError::NotFound`] when the user does not exist.
    pub async fn for_user(&self, user_id: UserId) -> Result<Vec<FavoriteEntry>, StoreError> {
        self.users.get(user_id).await?;
        let planets = self.planets.list_by_user(user_id).await?;
        let people = self.people.list_by_user(user_id).await?;
        debug!(
            %user_id,
            planets = planets.len(),
            people = people.len(),
            "assembled favourites"
        );

        Ok(planets
            .into_iter()
            .map(FavoriteEntry::from)
            .chain(people.into_iter().map(FavoriteEntry::from))
            .collect())
    }
}
