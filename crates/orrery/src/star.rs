//! Central star of a heliocentric system

use serde::{Deserialize, Serialize};
use units::{Length, Mass, SOLAR_MASS_KG, SOLAR_RADIUS_M};

use crate::constants::SOLAR_LUMINOSITY_W;

fn default_name() -> String {
    "Sun".to_string()
}

/// An immutable stellar host
///
/// All physical fields are SI. Luminosity drives the snowline used by the
/// generator's type classifier; mass drives every Kepler-derived quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(rename = "mass_kg")]
    pub mass: Mass,
    #[serde(rename = "radius_m")]
    pub radius: Length,
    #[serde(default)]
    pub luminosity_w: f64,
}

impl Star {
    pub fn new(name: impl Into<String>, mass: Mass, radius: Length, luminosity_w: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            luminosity_w,
        }
    }
}

impl Default for Star {
    /// Solar values: 1.9885e30 kg, 6.9634e8 m, 3.828e26 W
    fn default() -> Self {
        Self {
            name: default_name(),
            mass: Mass::from_kg(SOLAR_MASS_KG),
            radius: Length::from_meters(SOLAR_RADIUS_M),
            luminosity_w: SOLAR_LUMINOSITY_W,
        }
    }
}
