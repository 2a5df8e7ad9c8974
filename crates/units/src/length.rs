use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Astronomical unit in meters (IAU 2012 definition)
pub const AU_M: f64 = 1.495978707e11;
pub const KM_M: f64 = 1.0e3;

/// Mean radius of the Earth in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;
/// Mean radius of Jupiter in meters
pub const JUPITER_RADIUS_M: f64 = 6.9911e7;
/// Mean radius of Neptune in meters
pub const NEPTUNE_RADIUS_M: f64 = 2.5362e7;
/// Mean radius of the Sun in meters
pub const SOLAR_RADIUS_M: f64 = 6.9634e8;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with meters as the base unit,
/// so serialized values and raw accessors line up with the SI data contract.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// // Create lengths using different units
/// let earth_orbit = Length::from_au(1.0);
/// let earth_radius = Length::from_earth_radii(1.0);
/// let distance = Length::from_km(1000.0);
///
/// // Convert between units
/// let orbit_in_km = earth_orbit.to_km();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * KM_M)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_M)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M)
    }

    /// Creates a new `Length` from a value in Jupiter radii.
    pub fn from_jupiter_radii(value: f64) -> Self {
        Self(value * JUPITER_RADIUS_M)
    }

    /// Creates a new `Length` from a value in Neptune radii.
    pub fn from_neptune_radii(value: f64) -> Self {
        Self(value * NEPTUNE_RADIUS_M)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_M)
    }

    /// Returns the length in meters.
    pub fn to_m(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 / KM_M
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_M
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS_M
    }

    /// Converts the length to Jupiter radii.
    pub fn to_jupiter_radii(&self) -> f64 {
        self.0 / JUPITER_RADIUS_M
    }

    /// Converts the length to Neptune radii.
    pub fn to_neptune_radii(&self) -> f64 {
        self.0 / NEPTUNE_RADIUS_M
    }

    /// Converts the length to solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_M
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
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

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
