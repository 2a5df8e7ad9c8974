//! Planet classification by orbital distance
//!
//! A single-tier classifier: where a planet sits relative to its star's
//! snowline decides what kind of body accretes there. The kind is assigned
//! once at generation time and stored, never recomputed.

use serde::{Deserialize, Serialize};

/// Classification of a planet by formation distance
///
/// Thresholds are multiples of the stellar snowline:
///
/// | Kind     | Distance range       | Analog            |
/// |----------|----------------------|-------------------|
/// | Rocky    | < 0.8 × snowline     | Earth, Venus      |
/// | GasGiant | < 2.5 × snowline     | Jupiter, Saturn   |
/// | IceGiant | < 8.0 × snowline     | Uranus, Neptune   |
/// | Dwarf    | ≥ 8.0 × snowline     | Pluto, Eris       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetKind {
    /// Inside the snowline: silicate/metal bodies
    Rocky,
    /// Just beyond the snowline, where runaway gas accretion peaks
    GasGiant,
    /// Outer disk: slower accretion, volatile-rich envelopes
    IceGiant,
    /// Far outer system: small icy leftovers
    Dwarf,
}

impl PlanetKind {
    /// Rocky/gas-giant boundary as a multiple of the snowline
    pub const ROCKY_LIMIT: f64 = 0.8;

    /// Gas-giant/ice-giant boundary as a multiple of the snowline
    pub const GAS_GIANT_LIMIT: f64 = 2.5;

    /// Ice-giant/dwarf boundary as a multiple of the snowline
    pub const ICE_GIANT_LIMIT: f64 = 8.0;

    /// Classify a planet by its orbital distance relative to the snowline
    ///
    /// Both arguments are in AU.
    pub fn from_distance(distance_au: f64, snowline_au: f64) -> Self {
        match distance_au {
            d if d < snowline_au * Self::ROCKY_LIMIT => Self::Rocky,
            d if d < snowline_au * Self::GAS_GIANT_LIMIT => Self::GasGiant,
            d if d < snowline_au * Self::ICE_GIANT_LIMIT => Self::IceGiant,
            _ => Self::Dwarf,
        }
    }

    /// Human-readable name for the planet kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rocky => "rocky",
            Self::GasGiant => "gas giant",
            Self::IceGiant => "ice giant",
            Self::Dwarf => "dwarf",
        }
    }
}

impl std::fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
