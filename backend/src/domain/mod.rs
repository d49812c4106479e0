//! Domain records, identities, errors and ports.
//!
//! Purpose: define the five record kinds (users, planets, people and the two
//! favourite link tables), the partial-update types that go with them, and
//! the store ports that adapters implement. Nothing here knows about HTTP or
//! SQL.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failures.
//! - User, Planet, Person, FavoritePlanet, FavoritePerson: stored records.
//! - New* drafts and *Patch partial updates.
//! - FavoritesService: the combined favourites view.

pub mod error;
pub mod favorite;
pub mod identity;
pub mod password;
pub mod person;
pub mod planet;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::favorite::{FavoriteEntry, FavoritePerson, FavoritePlanet, FavoritesService};
pub use self::identity::{
    EntityKind, FavoritePersonId, FavoritePlanetId, PersonId, PlanetId, UserId,
};
pub use self::password::{PasswordError, PasswordHash};
pub use self::person::{NewPerson, Person, PersonPatch};
pub use self::planet::{NewPlanet, Planet, PlanetPatch};
pub use self::user::{NewUser, User, UserPatch};
