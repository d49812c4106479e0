//! Domain ports for the hexagonal boundary.
//!
//! Inbound adapters depend on these traits only; outbound adapters (the
//! in-memory store and the Diesel repositories) implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod favorite_repository;
mod person_repository;
mod planet_repository;
mod store_error;
mod user_repository;

pub use favorite_repository::{FavoritePersonRepository, FavoritePlanetRepository};
#[cfg(test)]
pub use favorite_repository::{MockFavoritePersonRepository, MockFavoritePlanetRepository};
#[cfg(test)]
pub use person_repository::MockPersonRepository;
pub use person_repository::PersonRepository;
#[cfg(test)]
pub use planet_repository::MockPlanetRepository;
pub use planet_repository::PlanetRepository;
pub use store_error::StoreError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
