use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Seconds in one day
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Seconds in one Julian year (365.25 days)
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with seconds as the base unit, which is
/// what the Kepler formulas and the serialized contract operate in. Day and
/// year constructors cover simulation-friendly step sizes.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let step = Time::from_days(1.0);
/// let orbit = Time::from_years(1.0);
///
/// let seconds = step.to_seconds();
/// let days = orbit.to_days();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    /// Creates a new `Time` from a value in Julian years.
    pub fn from_years(value: f64) -> Self {
        Self(value * SECONDS_PER_YEAR)
    }

    /// Returns the time in seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    /// Converts the time to days.
    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }

    /// Converts the time to Julian years.
    pub fn to_years(&self) -> f64 {
        self.0 / SECONDS_PER_YEAR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
