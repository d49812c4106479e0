//! Planet records.

use serde::Serialize;

use super::PlanetId;

/// A planet. `name` is unique across planets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
}

/// Field values for a planet that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
}

impl NewPlanet {
    /// Attach the store-assigned identity.
    pub fn into_planet(self, id: PlanetId) -> Planet {
        Planet {
            id,
            name: self.name,
            diameter: self.diameter,
            rotation_period: self.rotation_period,
        }
    }
}

/// Partial update for a planet.
///
/// The outer `Option` records presence; for nullable columns the inner
/// `Option` carries the new value, so `Some(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetPatch {
    pub name: Option<String>,
    pub diameter: Option<Option<i32>>,
    pub rotation_period: Option<Option<i32>>,
}

impl PlanetPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.diameter.is_none() && self.rotation_period.is_none()
    }

    /// Overwrite the fields present in the patch.
    pub fn apply(self, planet: &mut Planet) {
        if let Some(name) = self.name {
            planet.name = name;
        }
        if let Some(diameter) = self.diameter {
            planet.diameter = diameter;
        }
        if let Some(rotation_period) = self.rotation_period {
            planet.rotation_period = rotation_period;
        }
    }
}
