//! Checkpoint persistence
//!
//! A checkpoint is a gzip-compressed bincode artifact holding a map of
//! array names to [`Array`] values. Loading returns an exact value and
//! shape round trip for every stored key.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;

use crate::array::Array;
use crate::error::{Error, Result};

/// Persist named arrays to a compressed checkpoint at `path`
///
/// Parent directories are created as needed. An empty map is rejected
/// before anything touches the filesystem.
pub fn save(path: impl AsRef<Path>, arrays: &BTreeMap<String, Array>) -> Result<()> {
    let path = path.as_ref();
    if arrays.is_empty() {
        return Err(Error::InvalidArgument("provide at least one array"));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    bincode::serialize_into(&mut encoder, arrays)?;
    encoder.finish()?;

    debug!(path = %path.display(), arrays = arrays.len(), "saved checkpoint");
    Ok(())
}

/// Load every named array from a checkpoint written by [`save`]
pub fn load(path: impl AsRef<Path>) -> Result<BTreeMap<String, Array>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let arrays: BTreeMap<String, Array> = bincode::deserialize_from(decoder)?;

    debug!(path = %path.display(), arrays = arrays.len(), "loaded checkpoint");
    Ok(arrays)
}
