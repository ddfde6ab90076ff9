//! Distance calculations used by the KD-tree search.
//!
//! ## Purpose
//!
//! This module provides the distance seam between the searcher and the
//! geometry: full point-to-point distance and the per-dimension distance to
//! a splitting hyperplane used for pruning.
//!
//! ## Design notes
//!
//! * **Squared space**: Comparisons happen on squared distances; the square
//!   root is taken once per reported neighbor via `post_process_distance`.
//! * **Trait-based**: The searcher is generic over [`PointDistance`].
//!
//! ## Invariants
//!
//! * `split_distance_squared` never exceeds the squared distance of any point
//!   on the far side of the hyperplane (pruning stays exact).
//!
//! ## Non-goals
//!
//! * Metrics other than Euclidean are not provided.

// External dependencies
use num_traits::Float;

/// Trait for distance calculations used in KD-tree search.
pub trait PointDistance<T: Float> {
    /// Squared distance between two points of equal dimensionality.
    fn distance_squared(&self, a: &[T], b: &[T]) -> T;

    /// Squared distance from the query to the splitting hyperplane along `dim`.
    fn split_distance_squared(&self, dim: usize, split_val: T, query_val: T) -> T;

    /// Map a squared distance to the value reported to callers.
    fn post_process_distance(&self, d: T) -> T;
}

/// Euclidean (L2) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl<T: Float> PointDistance<T> for Euclidean {
    #[inline]
    fn distance_squared(&self, a: &[T], b: &[T]) -> T {
        a.iter().zip(b).fold(T::zero(), |acc, (&x, &y)| {
            let d = x - y;
            acc + d * d
        })
    }

    #[inline]
    fn split_distance_squared(&self, _dim: usize, split_val: T, query_val: T) -> T {
        let diff = query_val - split_val;
        diff * diff
    }

    #[inline]
    fn post_process_distance(&self, d: T) -> T {
        d.sqrt()
    }
}
