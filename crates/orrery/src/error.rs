//! Error taxonomy for the engine
//!
//! Every failure is fatal to the calling operation and surfaces before any
//! mutation takes place; nothing is retried internally.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value violates a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A physics routine received a nonsensical operand.
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// Custom insertion collides with an existing orbital radius.
    #[error("a planet already orbits at {0} m")]
    OrbitConflict(f64),

    /// Deserialization input is valid JSON but does not satisfy the data
    /// model: a required field is absent or a value is out of vocabulary.
    #[error("missing field: {0}")]
    MissingField(#[source] serde_json::Error),

    /// Input is not valid JSON at all.
    #[error("malformed json: {0}")]
    Json(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
