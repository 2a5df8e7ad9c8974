//! Planet representation with Kepler-derived orbital state
//!
//! A planet is a 2D circular heliocentric orbit: its position is fully
//! determined by orbital radius and phase angle. Period and tangential speed
//! are derived from the central mass once, at construction.

use std::f64::consts::TAU;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time, Velocity};

use crate::error::{Error, Result};
use crate::kepler;
use crate::planet_kind::PlanetKind;

/// A planet on a circular 2D orbit
///
/// All physical fields are SI. `phase_rad` is the only field `step` mutates
/// and is kept in [0, 2π) by wraparound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub kind: PlanetKind,

    #[serde(rename = "mass_kg")]
    pub mass: Mass,
    #[serde(rename = "radius_m")]
    pub radius: Length,

    /// Orbital radius. Hand-editing this does NOT refresh `period` or
    /// `orbital_speed`; rebuild via [`Planet::from_orbit`] instead.
    #[serde(rename = "distance_m")]
    pub distance: Length,
    /// Orbital angle in radians, wrapped into [0, 2π)
    #[serde(default)]
    pub phase_rad: f64,

    /// Orbital period, derived at construction from Kepler's third law
    #[serde(rename = "period_s")]
    pub period: Time,
    /// Circular-orbit tangential speed, derived at construction
    #[serde(rename = "orbital_speed_mps")]
    pub orbital_speed: Velocity,
}

impl Planet {
    /// Create a planet on a circular orbit around a central mass
    ///
    /// Derives `period` and `orbital_speed` from the orbital radius and the
    /// central mass. Fails with a domain error when either is non-positive.
    pub fn from_orbit(
        name: impl Into<String>,
        kind: PlanetKind,
        mass: Mass,
        radius: Length,
        distance: Length,
        phase_rad: f64,
        central_mass: Mass,
    ) -> Result<Self> {
        let period = kepler::orbital_period(distance, central_mass)?;
        let orbital_speed = kepler::circular_speed(distance, central_mass)?;

        Ok(Self {
            name: name.into(),
            kind,
            mass,
            radius,
            distance,
            phase_rad,
            period,
            orbital_speed,
        })
    }

    /// Heliocentric position in meters
    pub fn position_m(&self) -> Point2<f64> {
        let r = self.distance.to_m();
        Point2::new(r * self.phase_rad.cos(), r * self.phase_rad.sin())
    }

    /// Angular speed in rad/s
    ///
    /// Fails with a domain error when the period is non-positive.
    pub fn angular_speed_rad_s(&self) -> Result<f64> {
        let period_s = self.period.to_seconds();
        if period_s <= 0.0 {
            return Err(Error::Domain("period must be > 0"));
        }
        Ok(TAU / period_s)
    }

    /// Advance the orbital phase by `dt`
    ///
    /// Rejects negative time steps before touching any state; a zero step is
    /// a valid no-op. The phase wraps into [0, 2π).
    pub fn step(&mut self, dt: Time) -> Result<()> {
        if dt.to_seconds() < 0.0 {
            return Err(Error::InvalidArgument("dt must be >= 0"));
        }
        let omega = self.angular_speed_rad_s()?;
        self.phase_rad = (self.phase_rad + omega * dt.to_seconds()).rem_euclid(TAU);
        Ok(())
    }
}
