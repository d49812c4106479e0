//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it. Conversions into domain records live next to each row type.

use diesel::prelude::*;

use crate::domain::{
    FavoritePerson, FavoritePersonId, FavoritePlanet, FavoritePlanetId, NewPerson, NewPlanet,
    NewUser, PasswordHash, Person, PersonId, PersonPatch, Planet, PlanetId, PlanetPatch, User,
    UserId, UserPatch,
};

use super::schema::{favorites_people, favorites_planets, people, planets, users};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
            password: PasswordHash::from_phc(row.password_hash),
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub is_active: bool,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            password_hash: user.password.as_str(),
            is_active: user.is_active,
        }
    }
}

/// Changeset for user updates. `None` leaves the column untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password_hash: Option<&'a str>,
    pub is_active: Option<bool>,
}

impl<'a> From<&'a UserPatch> for UserChangeset<'a> {
    fn from(patch: &'a UserPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            email: patch.email.as_deref(),
            password_hash: patch.password.as_ref().map(PasswordHash::as_str),
            is_active: patch.is_active,
        }
    }
}

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PlanetRow {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Self {
            id: PlanetId::new(row.id),
            name: row.name,
            diameter: row.diameter,
            rotation_period: row.rotation_period,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = planets)]
pub(crate) struct NewPlanetRow<'a> {
    pub name: &'a str,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
}

impl<'a> From<&'a NewPlanet> for NewPlanetRow<'a> {
    fn from(planet: &'a NewPlanet) -> Self {
        Self {
            name: &planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
        }
    }
}

/// Changeset for planet updates. `Some(None)` writes SQL `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = planets)]
pub(crate) struct PlanetChangeset<'a> {
    pub name: Option<&'a str>,
    pub diameter: Option<Option<i32>>,
    pub rotation_period: Option<Option<i32>>,
}

impl<'a> From<&'a PlanetPatch> for PlanetChangeset<'a> {
    fn from(patch: &'a PlanetPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            diameter: patch.diameter,
            rotation_period: patch.rotation_period,
        }
    }
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = people)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: PersonId::new(row.id),
            name: row.name,
            height: row.height,
            mass: row.mass,
            hair_color: row.hair_color,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = people)]
pub(crate) struct NewPersonRow<'a> {
    pub name: &'a str,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<&'a str>,
}

impl<'a> From<&'a NewPerson> for NewPersonRow<'a> {
    fn from(person: &'a NewPerson) -> Self {
        Self {
            name: &person.name,
            height: person.height,
            mass: person.mass,
            hair_color: person.hair_color.as_deref(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = people)]
pub(crate) struct PersonChangeset<'a> {
    pub name: Option<&'a str>,
    pub height: Option<Option<i32>>,
    pub mass: Option<Option<i32>>,
    pub hair_color: Option<Option<&'a str>>,
}

impl<'a> From<&'a PersonPatch> for PersonChangeset<'a> {
    fn from(patch: &'a PersonPatch) -> Self {
        Self {
            name: patch.name.as_deref(),
            height: patch.height,
            mass: patch.mass,
            hair_color: patch.hair_color.as_ref().map(Option::as_deref),
        }
    }
}

// ---------------------------------------------------------------------------
// Favourite links
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = favorites_planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavoritePlanetRow {
    pub id: i32,
    pub planet_id: i32,
    pub user_id: i32,
}

impl From<FavoritePlanetRow> for FavoritePlanet {
    fn from(row: FavoritePlanetRow) -> Self {
        Self {
            id: FavoritePlanetId::new(row.id),
            planet_id: PlanetId::new(row.planet_id),
            user_id: UserId::new(row.user_id),
        }
    }
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = favorites_planets)]
pub(crate) struct NewFavoritePlanetRow {
    pub planet_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, Copy, Queryable, Selectable)]
#[diesel(table_name = favorites_people)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavoritePersonRow {
    pub id: i32,
    pub people_id: i32,
    pub user_id: i32,
}

impl From<FavoritePersonRow> for FavoritePerson {
    fn from(row: FavoritePersonRow) -> Self {
        Self {
            id: FavoritePersonId::new(row.id),
            people_id: PersonId::new(row.people_id),
            user_id: UserId::new(row.user_id),
        }
    }
}

#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = favorites_people)]
pub(crate) struct NewFavoritePersonRow {
    pub people_id: i32,
    pub user_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn user_row_keeps_the_stored_hash() {
        let user = User::from(UserRow {
            id: 3,
            name: "Lando".to_owned(),
            email: "lando@bespin.example".to_owned(),
            password_hash: "$argon2id$stored".to_owned(),
            is_active: false,
        });

        assert_eq!(user.id, UserId::new(3));
        assert_eq!(user.password.as_str(), "$argon2id$stored");
        assert!(!user.is_active);
    }

    #[rstest]
    fn person_changeset_distinguishes_clear_from_skip() {
        let patch = PersonPatch {
            hair_color: Some(None),
            ..PersonPatch::default()
        };
        let changeset = PersonChangeset::from(&patch);

        assert_eq!(changeset.name, None);
        assert_eq!(changeset.height, None);
        assert_eq!(changeset.hair_color, Some(None));
    }

    #[rstest]
    fn user_changeset_carries_the_new_hash() {
        let patch = UserPatch {
            password: Some(PasswordHash::from_phc("$argon2id$rotated")),
            ..UserPatch::default()
        };
        let changeset = UserChangeset::from(&patch);

        assert_eq!(changeset.password_hash, Some("$argon2id$rotated"));
        assert_eq!(changeset.email, None);
    }
}
