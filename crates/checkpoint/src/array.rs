//! Fixed-shape numeric arrays
//!
//! The smallest array type that can carry a trajectory: a shape and a flat
//! row-major f64 buffer. Shape is preserved exactly through a save/load
//! round trip.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A fixed-shape array of f64 values, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Array {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl Array {
    /// One-dimensional array over the given values
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Array with an explicit shape over a row-major buffer
    ///
    /// Fails when the shape's volume does not match the buffer length.
    pub fn from_shape_vec(shape: Vec<usize>, data: Vec<f64>) -> Result<Self> {
        let volume: usize = shape.iter().product();
        if volume != data.len() {
            return Err(Error::InvalidArgument(
                "shape volume must match data length",
            ));
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
