pub mod length;
pub mod mass;
pub mod time;
pub mod velocity;


pub use length::{Length, AU_M, EARTH_RADIUS_M, JUPITER_RADIUS_M, NEPTUNE_RADIUS_M, SOLAR_RADIUS_M};
pub use mass::{Mass, EARTH_MASS_KG, JUPITER_MASS_KG, NEPTUNE_MASS_KG, SOLAR_MASS_KG};
pub use time::{Time, SECONDS_PER_DAY, SECONDS_PER_YEAR};
pub use velocity::Velocity;
