use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in kilograms (1.9885 × 10³⁰ kg)
pub const SOLAR_MASS_KG: f64 = 1.9885e30;

/// Mass of the Earth in kilograms (5.972 × 10²⁴ kg)
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Mass of Jupiter in kilograms (1.898 × 10²⁷ kg)
pub const JUPITER_MASS_KG: f64 = 1.898e27;

/// Mass of Neptune in kilograms (8.681 × 10²⁵ kg)
pub const NEPTUNE_MASS_KG: f64 = 8.681e25;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with kilograms as the base unit,
/// matching the SI data contract, while planet-relative constructors keep
/// generation heuristics readable.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// // Create masses using different units
/// let sun_mass = Mass::from_solar_masses(1.0);
/// let earth_mass = Mass::from_earth_masses(1.0);
/// let kg_mass = Mass::from_kg(1000.0);
///
/// // Convert between units
/// let earth_in_kg = earth_mass.to_kg();
/// let sun_in_earths = sun_mass.to_earth_masses();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kilograms

impl Mass {
    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG)
    }

    /// Creates a new `Mass` from a value in Jupiter masses.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_KG)
    }

    /// Creates a new `Mass` from a value in Neptune masses.
    pub fn from_neptune_masses(value: f64) -> Self {
        Self(value * NEPTUNE_MASS_KG)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * SOLAR_MASS_KG)
    }

    /// Returns the mass in kilograms.
    pub fn to_kg(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 / EARTH_MASS_KG
    }

    /// Converts the mass to Jupiter masses.
    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 / JUPITER_MASS_KG
    }

    /// Converts the mass to Neptune masses.
    pub fn to_neptune_masses(&self) -> f64 {
        self.0 / NEPTUNE_MASS_KG
    }

    /// Converts the mass to solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0 / SOLAR_MASS_KG
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Natural logarithm
    pub fn ln(&self) -> f64 {
        self.0.ln()
    }

    /// Square root
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
