//! Input abstractions for point coordinates.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for coordinate sources, so that
//! points can be created from slices, vectors or ndarray views through a
//! single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Fail-fast validation**: Non-contiguous ndarray inputs are rejected before any copy.
//!
//! ## Invariants
//!
//! * Returned slices must represent all elements in the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not clean, impute or rescale coordinates.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Axis, Data, Ix1, Ix2};

// External dependencies
use num_traits::Float;

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::primitives::errors::KnnError;
use crate::primitives::errors::KnnResult;
use crate::primitives::point::Point;

/// Trait for types that can supply point coordinates.
pub trait CoordinateInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_coordinates(&self) -> KnnResult<&[T]>;
}

impl<T: Float> CoordinateInput<T> for [T] {
    fn as_coordinates(&self) -> KnnResult<&[T]> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> CoordinateInput<T> for [T; N] {
    fn as_coordinates(&self) -> KnnResult<&[T]> {
        Ok(self.as_slice())
    }
}

impl<T: Float> CoordinateInput<T> for Vec<T> {
    fn as_coordinates(&self) -> KnnResult<&[T]> {
        Ok(self.as_slice())
    }
}

impl<T: Float, I> CoordinateInput<T> for Point<T, I> {
    fn as_coordinates(&self) -> KnnResult<&[T]> {
        Ok(self.coords())
    }
}

#[cfg(feature = "cpu")]
impl<T: Float, S> CoordinateInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_coordinates(&self) -> KnnResult<&[T]> {
        self.as_slice().ok_or_else(|| {
            KnnError::InvalidArgument("ndarray input must be contiguous in memory".to_string())
        })
    }
}

/// Convert each row of a 2-D array into a point identified by its row index.
#[cfg(feature = "cpu")]
pub fn points_from_rows<T, S>(rows: &ArrayBase<S, Ix2>) -> Vec<Point<T, usize>>
where
    T: Float,
    S: Data<Elem = T>,
{
    rows.axis_iter(Axis(0))
        .enumerate()
        // Row views of a column-major array are strided, copy element-wise.
        .map(|(i, row)| Point::new(row.iter().copied().collect::<Vec<T>>(), i))
        .collect()
}
