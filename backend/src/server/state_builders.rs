//! Builds [`HttpState`] from the server configuration.

use std::sync::Arc;

use holocron::inbound::http::state::HttpState;
use holocron::outbound::memory::InMemoryStore;
use holocron::outbound::persistence::{
    DbPool, DieselFavoritePersonRepository, DieselFavoritePlanetRepository,
    DieselPersonRepository, DieselPlanetRepository, DieselUserRepository,
};

use super::ServerConfig;

fn diesel_state(pool: &DbPool) -> HttpState {
    HttpState {
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        planets: Arc::new(DieselPlanetRepository::new(pool.clone())),
        people: Arc::new(DieselPersonRepository::new(pool.clone())),
        favorite_planets: Arc::new(DieselFavoritePlanetRepository::new(pool.clone())),
        favorite_people: Arc::new(DieselFavoritePersonRepository::new(pool.clone())),
    }
}

/// PostgreSQL repositories when a pool is configured, otherwise a fresh
/// in-memory store shared by every port.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => diesel_state(pool),
        None => HttpState::from_store(InMemoryStore::new()),
    }
}
