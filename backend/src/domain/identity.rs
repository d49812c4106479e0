//! Store-assigned record identities.
//!
//! Every table uses a 32-bit serial key. Each record kind gets its own newtype
//! so a planet identity cannot be passed where a user identity is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_identity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw store identity.
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Return the raw store identity.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_identity! {
    /// Identity of a [`crate::domain::User`].
    UserId
}

define_identity! {
    /// Identity of a [`crate::domain::Planet`].
    PlanetId
}

define_identity! {
    /// Identity of a [`crate::domain::Person`].
    PersonId
}

define_identity! {
    /// Identity of a [`crate::domain::FavoritePlanet`] link.
    FavoritePlanetId
}

define_identity! {
    /// Identity of a [`crate::domain::FavoritePerson`] link.
    FavoritePersonId
}

/// Record kinds held by the store, used to label lookups and failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A registered user.
    User,
    /// A planet.
    Planet,
    /// A person (character).
    Person,
    /// A user-to-planet favourite link.
    FavoritePlanet,
    /// A user-to-person favourite link.
    FavoritePerson,
}

impl EntityKind {
    /// Lower-case label used in messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Planet => "planet",
            Self::Person => "person",
            Self::FavoritePlanet => "favorite planet",
            Self::FavoritePerson => "favorite person",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
