use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value violates a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The requested checkpoint file does not exist.
    #[error("checkpoint not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The artifact could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] bincode::Error),
}
