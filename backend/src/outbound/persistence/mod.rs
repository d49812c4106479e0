//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the store ports backed by PostgreSQL via
//! `diesel-async` and a `bb8` pool.
//!
//! - Repositories only translate between Diesel rows and domain records.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Cascading deletes and reference checks are enforced by the schema in
//!   `backend/migrations/`.
//!
//! ```ignore
//! use holocron::outbound::persistence::{DbPool, PoolConfig, DieselPlanetRepository};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/holocron")).await?;
//! let planets = DieselPlanetRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_favorite_repository;
mod diesel_person_repository;
mod diesel_planet_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_favorite_repository::{
    DieselFavoritePersonRepository, DieselFavoritePlanetRepository,
};
pub use diesel_person_repository::DieselPersonRepository;
pub use diesel_planet_repository::DieselPlanetRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::run_pending_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
