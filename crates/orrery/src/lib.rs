//! Seeded 2D heliocentric system generation and stepping
//!
//! This crate generates simplified planetary systems around a single star,
//! advances planet orbital phase with circular-orbit Kepler mechanics, and
//! round-trips whole systems through JSON. Orbits are perfectly circular and
//! coplanar; there is no planet-planet gravity.

pub mod constants;
pub mod error;
pub mod generation;
pub mod io;
pub mod kepler;
pub mod planet;
pub mod planet_kind;
pub mod star;
pub mod system;

// Re-export key types at crate root
pub use error::{Error, Result};
pub use generation::{
    add_custom_planet, generate_planets, snowline_au, CustomPlanet, DEFAULT_INNER_AU,
    DEFAULT_OUTER_AU,
};
pub use planet::Planet;
pub use planet_kind::PlanetKind;
pub use star::Star;
pub use system::SolarSystem;

#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod io_test;
