//! Person (character) records.

use serde::Serialize;

use super::PersonId;

/// A person. Only `name` is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
}

/// Field values for a person that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
}

impl NewPerson {
    /// Attach the store-assigned identity.
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color,
        }
    }
}

/// Partial update for a person; see [`crate::domain::PlanetPatch`] for the
/// nested-`Option` convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    pub name: Option<String>,
    pub height: Option<Option<i32>>,
    pub mass: Option<Option<i32>>,
    pub hair_color: Option<Option<String>>,
}

impl PersonPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.height.is_none()
            && self.mass.is_none()
            && self.hair_color.is_none()
    }

    /// Overwrite the fields present in the patch.
    pub fn apply(self, person: &mut Person) {
        if let Some(name) = self.name {
            person.name = name;
        }
        if let Some(height) = self.height {
            person.height = height;
        }
        if let Some(mass) = self.mass {
            person.mass = mass;
        }
        if let Some(hair_color) = self.hair_color {
            person.hair_color = hair_color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn serialises_optional_fields_as_null() {
        let person = NewPerson {
            name: "Chewbacca".to_owned(),
            height: Some(228),
            mass: None,
            hair_color: None,
        }
        .into_person(PersonId::new(3));

        assert_eq!(
            serde_json::to_value(&person).expect("serialise person"),
            json!({
                "id": 3,
                "name": "Chewbacca",
                "height": 228,
                "mass": null,
                "hair_color": null,
            })
        );
    }

    #[rstest]
    fn hair_color_patch_keeps_measurements() {
        let mut person = NewPerson {
            name: "Leia".to_owned(),
            height: Some(150),
            mass: Some(49),
            hair_color: None,
        }
        .into_person(PersonId::new(5));

        PersonPatch {
            hair_color: Some(Some("brown".to_owned())),
            ..PersonPatch::default()
        }
        .apply(&mut person);

        assert_eq!(person.hair_color.as_deref(), Some("brown"));
        assert_eq!(person.height, Some(150));
        assert_eq!(person.mass, Some(49));
    }
}
