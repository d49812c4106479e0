//! User records.

use serde::Serialize;

use super::{PasswordHash, UserId};

/// A registered user.
///
/// Serialises as `{ "id", "name", "email", "is_active" }`; the password hash
/// is never part of the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: PasswordHash,
    pub is_active: bool,
}

/// Field values for a user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: PasswordHash,
    pub is_active: bool,
}

impl NewUser {
    /// Attach the store-assigned identity.
    pub fn into_user(self, id: UserId) -> User {
        let Self {
            name,
            email,
            password,
            is_active,
        } = self;
        User {
            id,
            name,
            email,
            password,
            is_active,
        }
    }
}

/// Partial update for a user; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<PasswordHash>,
    pub is_active: Option<bool>,
}

impl UserPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.is_active.is_none()
    }

    /// Overwrite the fields present in the patch.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(password) = self.password {
            user.password = password;
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn luke() -> User {
        NewUser {
            name: "Luke".to_owned(),
            email: "luke@tatooine.example".to_owned(),
            password: PasswordHash::from_phc("$argon2id$fixture"),
            is_active: true,
        }
        .into_user(UserId::new(1))
    }

    #[rstest]
    fn serialisation_omits_password(luke: User) {
        let value = serde_json::to_value(&luke).expect("serialise user");

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Luke",
                "email": "luke@tatooine.example",
                "is_active": true,
            })
        );
    }

    #[rstest]
    fn patch_only_touches_present_fields(mut luke: User) {
        let patch = UserPatch {
            is_active: Some(false),
            ..UserPatch::default()
        };
        assert!(!patch.is_empty());

        patch.apply(&mut luke);

        assert!(!luke.is_active);
        assert_eq!(luke.name, "Luke");
        assert_eq!(luke.email, "luke@tatooine.example");
    }

    #[rstest]
    fn empty_patch_is_a_no_op(luke: User) {
        let mut updated = luke.clone();
        let patch = UserPatch::default();
        assert!(patch.is_empty());

        patch.apply(&mut updated);

        assert_eq!(updated, luke);
    }
}
