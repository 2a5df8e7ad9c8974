//! Physical constants shared across the engine

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67430e-11;

/// Luminosity of the Sun in watts, the reference for snowline scaling
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;
