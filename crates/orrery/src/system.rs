//! Heliocentric system container

use std::collections::HashMap;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use units::Time;

use crate::error::{Error, Result};
use crate::planet::Planet;
use crate::star::Star;

/// One star plus its ordered planets (2D circular orbit model)
///
/// Planets are kept sorted by ascending orbital radius as an operational
/// convention: the constructor and the insertion paths re-sort, but the
/// fields are open and direct mutation bypasses that convention undetected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSystem {
    pub sun: Star,
    #[serde(default)]
    pub planets: Vec<Planet>,
}

impl SolarSystem {
    /// Create a system from a star and a (possibly empty) planet set
    ///
    /// Planets are sorted by ascending orbital radius.
    pub fn new(sun: Star, planets: Vec<Planet>) -> Self {
        let mut system = Self { sun, planets };
        system.sort_planets();
        system
    }

    /// Restore ascending-distance order after an insertion
    pub fn sort_planets(&mut self) {
        self.planets.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Advance every planet's orbital phase by `dt`, in sequence order
    ///
    /// A negative `dt` is rejected before any planet is touched.
    pub fn step(&mut self, dt: Time) -> Result<()> {
        if dt.to_seconds() < 0.0 {
            return Err(Error::InvalidArgument("dt must be >= 0"));
        }
        for planet in &mut self.planets {
            planet.step(dt)?;
        }
        Ok(())
    }

    /// Snapshot of every planet's heliocentric position, keyed by name
    ///
    /// Duplicate names collapse: the outermost duplicate wins. Callers that
    /// need every position must keep names unique.
    pub fn state_m(&self) -> HashMap<String, Point2<f64>> {
        self.planets
            .iter()
            .map(|p| (p.name.clone(), p.position_m()))
            .collect()
    }

    /// Number of planets in the system
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Read-only iteration over the planet sequence
    pub fn iter(&self) -> std::slice::Iter<'_, Planet> {
        self.planets.iter()
    }
}
