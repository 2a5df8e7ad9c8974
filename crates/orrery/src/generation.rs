//! Seeded procedural system generation
//!
//! Planets are placed on log-spaced orbital radii between an inner and an
//! outer bound, jittered, classified against the stellar snowline, and given
//! mass/radius draws plausible for their kind. The same seed reproduces the
//! same system bit-for-bit: the RNG is instance-local and every planet
//! consumes exactly four uniform draws, in a fixed order.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing::debug;
use units::{Length, Mass};

use crate::constants::SOLAR_LUMINOSITY_W;
use crate::error::{Error, Result};
use crate::planet::Planet;
use crate::planet_kind::PlanetKind;
use crate::star::Star;
use crate::system::SolarSystem;

/// Default inner placement bound in AU
pub const DEFAULT_INNER_AU: f64 = 0.4;
/// Default outer placement bound in AU
pub const DEFAULT_OUTER_AU: f64 = 40.0;

/// Two orbits closer than this count as the same orbit
const ORBIT_OVERLAP_EPSILON_M: f64 = 1e-3;

/// Snowline distance in AU for a star of the given luminosity
///
/// ~2.7 AU scaled by sqrt(L / L☉); negative luminosities are treated as
/// dark (snowline at 0, everything classifies as dwarf-belt distance).
pub fn snowline_au(luminosity_w: f64) -> f64 {
    2.7 * (luminosity_w.max(0.0) / SOLAR_LUMINOSITY_W).sqrt()
}

/// Generate `count` planets around `sun` on jittered log-spaced orbits
///
/// Placement interpolates logarithmically between `inner_au` and `outer_au`
/// (both exclusive bounds on validity, not on output: jitter of ±8% can land
/// a planet slightly outside). The result is sorted by ascending orbital
/// radius.
///
/// With `seed: Some(s)` the output is reproducible across runs; with `None`
/// a fresh seed is taken. The RNG is always local to this call, so
/// concurrent generations cannot interleave their streams.
///
/// Per planet the draw order is: distance jitter, mass multiplier, radius
/// multiplier, phase — one uniform draw each.
pub fn generate_planets(
    sun: &Star,
    count: usize,
    seed: Option<u64>,
    inner_au: f64,
    outer_au: f64,
) -> Result<Vec<Planet>> {
    if inner_au <= 0.0 || outer_au <= 0.0 || outer_au <= inner_au {
        return Err(Error::InvalidArgument(
            "inner_au and outer_au must be > 0 and outer_au > inner_au",
        ));
    }

    let mut rng = ChaChaRng::seed_from_u64(seed.unwrap_or_else(rand::random));
    if count == 0 {
        return Ok(Vec::new());
    }

    let snowline = snowline_au(sun.luminosity_w);

    // Log spacing for natural-looking orbits
    let log_inner = inner_au.ln();
    let log_outer = outer_au.ln();

    let mut planets = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f64 / (count - 1).max(1) as f64;
        let base_au = (log_inner + t * (log_outer - log_inner)).exp();
        let jitter = rng.random_range(0.92..1.08);
        let distance_au = base_au * jitter;

        let kind = PlanetKind::from_distance(distance_au, snowline);

        let (mass, radius) = match kind {
            PlanetKind::Rocky => (
                Mass::from_earth_masses(rng.random_range(0.05..5.0)),
                Length::from_earth_radii(rng.random_range(0.3..1.6)),
            ),
            PlanetKind::GasGiant => (
                Mass::from_jupiter_masses(rng.random_range(0.1..3.0)),
                Length::from_jupiter_radii(rng.random_range(0.7..1.3)),
            ),
            PlanetKind::IceGiant => (
                Mass::from_neptune_masses(rng.random_range(0.5..2.0)),
                Length::from_neptune_radii(rng.random_range(0.7..1.2)),
            ),
            PlanetKind::Dwarf => (
                Mass::from_earth_masses(rng.random_range(0.0001..0.01)),
                Length::from_earth_radii(rng.random_range(0.05..0.3)),
            ),
        };

        let phase_rad = rng.random_range(0.0..TAU);

        planets.push(Planet::from_orbit(
            format!("Planet {}", i + 1),
            kind,
            mass,
            radius,
            Length::from_au(distance_au),
            phase_rad,
            sun.mass,
        )?);
    }

    planets.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(count, ?seed, snowline_au = snowline, "generated planets");
    Ok(planets)
}

/// A user-defined planet to insert into an existing system
///
/// `new` fills the optional fields with their defaults: zero phase, Earth
/// mass, Earth radius, no orbit sharing.
#[derive(Debug, Clone)]
pub struct CustomPlanet {
    pub name: String,
    pub kind: PlanetKind,
    pub distance_au: f64,
    /// Wrapped into [0, 360) before conversion to radians
    pub phase_deg: f64,
    pub mass: Mass,
    pub radius: Length,
    /// Permit an orbital radius already taken by another planet
    pub allow_overlap: bool,
}

impl CustomPlanet {
    pub fn new(name: impl Into<String>, kind: PlanetKind, distance_au: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            distance_au,
            phase_deg: 0.0,
            mass: Mass::from_earth_masses(1.0),
            radius: Length::from_earth_radii(1.0),
            allow_overlap: false,
        }
    }
}

/// Insert a single user-defined planet into an existing system
///
/// Period and orbital speed are derived from the system's star mass. On any
/// failure the planet sequence is left untouched; on success the new planet
/// is appended and the sequence re-sorted by ascending orbital radius.
pub fn add_custom_planet(system: &mut SolarSystem, request: CustomPlanet) -> Result<()> {
    if request.distance_au <= 0.0 {
        return Err(Error::InvalidArgument("distance_au must be > 0"));
    }

    let distance = Length::from_au(request.distance_au);

    if !request.allow_overlap {
        let distance_m = distance.to_m();
        if let Some(existing) = system
            .planets
            .iter()
            .find(|p| (p.distance.to_m() - distance_m).abs() < ORBIT_OVERLAP_EPSILON_M)
        {
            return Err(Error::OrbitConflict(existing.distance.to_m()));
        }
    }

    let phase_rad = request.phase_deg.rem_euclid(360.0).to_radians();

    let planet = Planet::from_orbit(
        request.name,
        request.kind,
        request.mass,
        request.radius,
        distance,
        phase_rad,
        system.sun.mass,
    )?;

    debug!(name = %planet.name, distance_au = request.distance_au, "inserting custom planet");
    system.planets.push(planet);
    system.sort_planets();
    Ok(())
}
