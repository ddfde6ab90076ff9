//! Point values stored in the index.
//!
//! ## Purpose
//!
//! A point couples a fixed-length coordinate vector with an opaque
//! identifier. Geometry only ever looks at the coordinates; the identifier
//! is carried along for reporting.
//!
//! ## Invariants
//!
//! * A point is immutable once created.
//! * All points of one index share the same coordinate length.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::input::CoordinateInput;
use crate::primitives::errors::{KnnError, KnnResult};

/// A point in k-dimensional space tagged with an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<T, I> {
    coords: Vec<T>,
    id: I,
}

impl<T: Float, I> Point<T, I> {
    /// Create a point from its coordinates and identifier.
    pub fn new(coords: impl Into<Vec<T>>, id: I) -> Self {
        Self {
            coords: coords.into(),
            id,
        }
    }

    /// Create a point from any supported coordinate source.
    pub fn from_input<C>(coords: &C, id: I) -> KnnResult<Self>
    where
        C: CoordinateInput<T> + ?Sized,
    {
        Ok(Self::new(coords.as_coordinates()?.to_vec(), id))
    }

    /// Coordinate values.
    #[inline]
    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    /// Identifier supplied at creation.
    #[inline]
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Number of coordinates.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// Coordinate along `dim`.
    #[inline]
    pub(crate) fn coord(&self, dim: usize) -> T {
        self.coords[dim]
    }

    /// Split the point back into coordinates and identifier.
    pub fn into_parts(self) -> (Vec<T>, I) {
        (self.coords, self.id)
    }
}

/// Split a flattened row-major buffer into points identified by row index.
pub fn points_from_flat<T: Float>(
    data: &[T],
    dimensions: usize,
) -> KnnResult<Vec<Point<T, usize>>> {
    if dimensions == 0 {
        return Err(KnnError::InvalidArgument("dimensions must be at least 1".to_string()));
    }
    if !data.len().is_multiple_of(dimensions) {
        return Err(KnnError::InvalidArgument(format!(
            "flat buffer of length {} is not a multiple of {} dimensions",
            data.len(),
            dimensions
        )));
    }

    Ok(data
        .chunks_exact(dimensions)
        .enumerate()
        .map(|(i, row)| Point::new(row.to_vec(), i))
        .collect())
}
