//! Two-body circular-orbit Kepler relations
//!
//! Pure functions over the standard gravitational parameter G·M. No other
//! orbital elements are modeled: zero eccentricity, zero inclination.

use std::f64::consts::TAU;

use units::{Length, Mass, Time, Velocity};

use crate::constants::G;
use crate::error::{Error, Result};

/// Orbital period of a circular two-body orbit
///
/// Kepler's 3rd law: T = 2π·sqrt(r³ / (G·M))
///
/// # Arguments
/// * `distance` - orbital radius between planet and central body
/// * `central_mass` - mass of the central body
pub fn orbital_period(distance: Length, central_mass: Mass) -> Result<Time> {
    let r = distance.to_m();
    let m = central_mass.to_kg();

    if r <= 0.0 {
        return Err(Error::Domain("distance must be > 0"));
    }
    if m <= 0.0 {
        return Err(Error::Domain("central mass must be > 0"));
    }

    Ok(Time::from_seconds(TAU * (r.powi(3) / (G * m)).sqrt()))
}

/// Tangential speed of a circular two-body orbit
///
/// v = sqrt(G·M / r)
///
/// # Arguments
/// * `distance` - orbital radius between planet and central body
/// * `central_mass` - mass of the central body
pub fn circular_speed(distance: Length, central_mass: Mass) -> Result<Velocity> {
    let r = distance.to_m();
    let m = central_mass.to_kg();

    if r <= 0.0 {
        return Err(Error::Domain("distance must be > 0"));
    }
    if m <= 0.0 {
        return Err(Error::Domain("central mass must be > 0"));
    }

    Ok(Velocity::from_meters_per_sec((G * m / r).sqrt()))
}
