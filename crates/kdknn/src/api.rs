//! High-level API for building and querying KD-trees.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring construction, and the plain `build` / `search`
//! functions for the common case.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is checked when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` coordinates and any identifier type.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KnnBuilder`] via `KnnBuilder::new()`.
//! 2. Chain configuration methods (`.parallel()`, `.parallel_threshold()`).
//! 3. Call `.build(points)` to get a [`KdTree`], then `.search(&query, k)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::input::CoordinateInput;
use crate::math::neighborhood::Neighborhood;
use crate::primitives::errors::{KnnError, KnnResult};
use crate::primitives::point::Point;
use crate::tree::builder::{build_kdtree, build_kdtree_parallel, DEFAULT_PARALLEL_THRESHOLD};
use crate::tree::node::KdTree;

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`KdTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnnBuilder {
    /// Split large ranges across threads during construction.
    pub parallel: bool,

    /// Ranges larger than this are built in parallel.
    pub parallel_threshold: usize,
}

impl Default for KnnBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KnnBuilder {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * parallel: true when the `cpu` feature is enabled
    /// * parallel_threshold: 1024
    pub fn new() -> Self {
        Self {
            parallel: cfg!(feature = "cpu"),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the range size above which construction forks.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    fn validate(&self) -> KnnResult<()> {
        if self.parallel_threshold == 0 {
            return Err(KnnError::InvalidArgument(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the tree, consuming the points.
    #[cfg(feature = "cpu")]
    pub fn build<T, I>(self, points: Vec<Point<T, I>>) -> KnnResult<KdTree<T, I>>
    where
        T: Float + Send,
        I: Send,
    {
        self.validate()?;
        if self.parallel {
            build_kdtree_parallel(points, self.parallel_threshold)
        } else {
            build_kdtree(points)
        }
    }

    /// Build the tree, consuming the points.
    #[cfg(not(feature = "cpu"))]
    pub fn build<T: Float, I>(self, points: Vec<Point<T, I>>) -> KnnResult<KdTree<T, I>> {
        self.validate()?;
        if self.parallel {
            build_kdtree_parallel(points, self.parallel_threshold)
        } else {
            build_kdtree(points)
        }
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Build a KD-tree from `points` on the current thread.
pub fn build<T: Float, I>(points: Vec<Point<T, I>>) -> KnnResult<KdTree<T, I>> {
    build_kdtree(points)
}

/// Find the `k` nearest points in `tree` to `query`, nearest first.
pub fn search<'a, T, I, Q>(
    tree: &'a KdTree<T, I>,
    query: &Q,
    k: usize,
) -> KnnResult<Neighborhood<'a, T, I>>
where
    T: Float,
    Q: CoordinateInput<T> + ?Sized,
{
    tree.search(query, k)
}
