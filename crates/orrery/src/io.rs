//! JSON round-trip for whole systems
//!
//! The textual form is a human-readable tree: one `sun` object and an array
//! of `planets`, all fields SI-named. Deserializing the output of
//! [`to_json`] reproduces the system field-for-field.

use std::fs;
use std::path::Path;

use serde_json::error::Category;
use tracing::debug;

use crate::error::{Error, Result};
use crate::system::SolarSystem;

fn classify(err: serde_json::Error) -> Error {
    match err.classify() {
        Category::Data => Error::MissingField(err),
        _ => Error::Json(err),
    }
}

/// Render a system as pretty-printed JSON
pub fn to_json(system: &SolarSystem) -> Result<String> {
    serde_json::to_string_pretty(system).map_err(Error::Json)
}

/// Parse a system from JSON text
///
/// Required fields that are absent surface as [`Error::MissingField`];
/// syntactically broken input surfaces as [`Error::Json`].
pub fn from_json(text: &str) -> Result<SolarSystem> {
    serde_json::from_str(text).map_err(classify)
}

/// Write a system to a JSON file
pub fn save_json(path: impl AsRef<Path>, system: &SolarSystem) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_json(system)?)?;
    debug!(path = %path.display(), planets = system.len(), "saved system");
    Ok(())
}

/// Read a system back from a JSON file
pub fn load_json(path: impl AsRef<Path>) -> Result<SolarSystem> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let system = from_json(&text)?;
    debug!(path = %path.display(), planets = system.len(), "loaded system");
    Ok(system)
}
