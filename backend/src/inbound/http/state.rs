//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::FavoritesService;
use crate::domain::ports::{
    FavoritePersonRepository, FavoritePlanetRepository, PersonRepository, PlanetRepository,
    UserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub planets: Arc<dyn PlanetRepository>,
    pub people: Arc<dyn PersonRepository>,
    pub favorite_planets: Arc<dyn FavoritePlanetRepository>,
    pub favorite_people: Arc<dyn FavoritePersonRepository>,
}

impl HttpState {
    /// Build state from a single store implementing every port, such as
    /// [`crate::outbound::memory::InMemoryStore`].
    pub fn from_store<S>(store: S) -> Self
    where
        S: UserRepository
            + PlanetRepository
            + PersonRepository
            + FavoritePlanetRepository
            + FavoritePersonRepository
            + Clone
            + 'static,
    {
        Self {
            users: Arc::new(store.clone()),
            planets: Arc::new(store.clone()),
            people: Arc::new(store.clone()),
            favorite_planets: Arc::new(store.clone()),
            favorite_people: Arc::new(store),
        }
    }

    /// The combined favourites view over this state's ports.
    pub fn favorites(&self) -> FavoritesService {
        FavoritesService::new(
            Arc::clone(&self.users),
            Arc::clone(&self.favorite_planets),
            Arc::clone(&self.favorite_people),
        )
    }
}
