//! KD-tree construction by recursive median splitting.
//!
//! ## Purpose
//!
//! This module turns an unordered collection of points into a balanced
//! [`KdTree`]. Construction can be parallelized at the top levels of
//! recursion to speed up initialization for large datasets.
//!
//! ## Design notes
//!
//! * **Selection, not sorting**: Each level partitions its range with
//!   `select_nth_unstable_by`, giving O(n log n) expected build cost.
//! * **Lower median**: A range of `n` points splits at index `(n - 1) / 2`.
//! * **Recursive Parallelism**: Uses `rayon::join` while a range holds more
//!   points than the configured threshold.
//! * **Owned ranges**: Each recursive call owns its points, so the parallel
//!   path needs no shared mutable state.
//!
//! ## Invariants
//!
//! * Parallel construction produces an identical tree to sequential construction.
//! * Input is validated before any partitioning happens.
//!
//! ## Non-goals
//!
//! * This module does not implement the search logic (see `engine::search`).
//! * This module does not support dynamic updates.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::join;

// External dependencies
use core::cmp::Ordering::Equal;
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::{KnnError, KnnResult};
use crate::primitives::point::Point;
use crate::tree::node::{split_dimension, KdNode, KdTree};

/// Default number of points above which a range is split across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

// ============================================================================
// Validation
// ============================================================================

/// Check that all points share one dimensionality and return it.
///
/// Returns 0 for an empty collection.
pub(crate) fn validate_points<T: Float, I>(points: &[Point<T, I>]) -> KnnResult<usize> {
    let Some(first) = points.first() else {
        return Ok(0);
    };

    let dims = first.dimensions();
    if dims == 0 {
        return Err(KnnError::InvalidArgument(
            "points must have at least one coordinate".to_string(),
        ));
    }

    if let Some(bad) = points.iter().find(|p| p.dimensions() != dims) {
        return Err(KnnError::DimensionMismatch {
            expected: dims,
            found: bad.dimensions(),
        });
    }

    Ok(dims)
}

/// Partition `points` around its lower median on `dim` and return the median index.
fn partition_median<T: Float, I>(points: &mut [Point<T, I>], dim: usize) -> usize {
    let mid = (points.len() - 1) / 2;
    points.select_nth_unstable_by(mid, |a, b| {
        a.coord(dim).partial_cmp(&b.coord(dim)).unwrap_or(Equal)
    });
    mid
}

// ============================================================================
// Sequential Build
// ============================================================================

/// Build a KD-tree on the current thread.
pub fn build_kdtree<T: Float, I>(points: Vec<Point<T, I>>) -> KnnResult<KdTree<T, I>> {
    let dims = validate_points(&points)?;
    let n = points.len();

    let root = if n == 0 {
        None
    } else {
        build_recursive_sequential(points, dims, 0)
    };

    let tree = KdTree::from_parts(root, dims, n);
    debug!(
        "built kd-tree: {} points, {} dimensions, height {}",
        n,
        dims,
        tree.height()
    );
    Ok(tree)
}

fn build_recursive_sequential<T: Float, I>(
    mut points: Vec<Point<T, I>>,
    dims: usize,
    depth: usize,
) -> Option<Box<KdNode<T, I>>> {
    if points.is_empty() {
        return None;
    }

    let mid = partition_median(&mut points, split_dimension(depth, dims));

    // points: [left.., median], right_points: [right..]
    let right_points = points.split_off(mid + 1);
    let point = points.pop()?;

    let left = build_recursive_sequential(points, dims, depth + 1);
    let right = build_recursive_sequential(right_points, dims, depth + 1);

    Some(Box::new(KdNode { point, left, right }))
}

// ============================================================================
// Parallel Build
// ============================================================================

/// Build a KD-tree, splitting ranges larger than `threshold` across rayon's pool.
#[cfg(feature = "cpu")]
pub fn build_kdtree_parallel<T, I>(
    points: Vec<Point<T, I>>,
    threshold: usize,
) -> KnnResult<KdTree<T, I>>
where
    T: Float + Send,
    I: Send,
{
    let dims = validate_points(&points)?;
    let n = points.len();

    let root = if n == 0 {
        None
    } else {
        build_recursive_parallel(points, dims, 0, threshold.max(1))
    };

    let tree = KdTree::from_parts(root, dims, n);
    debug!(
        "built kd-tree in parallel: {} points, {} dimensions, height {}, threshold {}",
        n,
        dims,
        tree.height(),
        threshold
    );
    Ok(tree)
}

#[cfg(feature = "cpu")]
fn build_recursive_parallel<T, I>(
    mut points: Vec<Point<T, I>>,
    dims: usize,
    depth: usize,
    threshold: usize,
) -> Option<Box<KdNode<T, I>>>
where
    T: Float + Send,
    I: Send,
{
    let n = points.len();
    if n <= threshold {
        return build_recursive_sequential(points, dims, depth);
    }

    let mid = partition_median(&mut points, split_dimension(depth, dims));

    let right_points = points.split_off(mid + 1);
    let point = points.pop()?;

    let (left, right) = join(
        || build_recursive_parallel(points, dims, depth + 1, threshold),
        || build_recursive_parallel(right_points, dims, depth + 1, threshold),
    );

    Some(Box::new(KdNode { point, left, right }))
}

/// Fallback for builds without the `cpu` feature.
#[cfg(not(feature = "cpu"))]
pub fn build_kdtree_parallel<T: Float, I>(
    points: Vec<Point<T, I>>,
    _threshold: usize,
) -> KnnResult<KdTree<T, I>> {
    build_kdtree(points)
}
