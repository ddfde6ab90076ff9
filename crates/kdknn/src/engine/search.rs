//! Branch-and-bound k-nearest neighbor search.
//!
//! ## Purpose
//!
//! This module finds the exact `k` closest points to a query in a built
//! [`KdTree`], and answers batches of queries against one tree, in parallel
//! when the `cpu` feature is enabled.
//!
//! ## Design notes
//!
//! * **Depth threading**: The split axis of each node is recomputed from the
//!   recursion depth, exactly as the builder assigned it.
//! * **Near side first**: The subtree on the query's side of the hyperplane is
//!   visited first, so the bound tightens before the far side is considered.
//! * **Pruning**: The far subtree is skipped once the set is full and the
//!   hyperplane is farther than the current k-th best.
//! * **Read-only**: The tree is only borrowed; every search owns its own
//!   result set, so concurrent searches need no synchronization.
//!
//! ## Invariants
//!
//! * Results are the true k nearest points, ascending by distance.
//! * `k` larger than the tree returns every point.
//! * `k == 0` and non-finite query coordinates are rejected before traversal.
//! * Equal-distance ties resolve in traversal order, so output is deterministic.
//!
//! ## Non-goals
//!
//! * This module does not implement approximate search.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use log::trace;
use num_traits::Float;

// Internal dependencies
use crate::input::CoordinateInput;
use crate::math::distance::{Euclidean, PointDistance};
use crate::math::neighborhood::{Neighbor, NeighborSet, Neighborhood};
use crate::primitives::errors::{KnnError, KnnResult};
use crate::tree::node::{split_dimension, KdNode, KdTree};

// ============================================================================
// Validation
// ============================================================================

fn validate_k(k: usize) -> KnnResult<()> {
    if k == 0 {
        return Err(KnnError::InvalidArgument("k must be at least 1".to_string()));
    }
    Ok(())
}

fn validate_query<T: Float, I>(tree: &KdTree<T, I>, query: &[T], k: usize) -> KnnResult<()> {
    validate_k(k)?;
    // An empty tree has no dimensionality to disagree with.
    if !tree.is_empty() && query.len() != tree.dimensions() {
        return Err(KnnError::DimensionMismatch {
            expected: tree.dimensions(),
            found: query.len(),
        });
    }
    if query.iter().any(|v| !v.is_finite()) {
        return Err(KnnError::InvalidArgument(
            "query coordinates must be finite".to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Single Query
// ============================================================================

/// Find the `k` nearest neighbors of `query` using a caller-supplied metric.
pub fn find_k_nearest<'a, T, I, D>(
    tree: &'a KdTree<T, I>,
    query: &[T],
    k: usize,
    dist_calc: &D,
) -> KnnResult<Neighborhood<'a, T, I>>
where
    T: Float,
    D: PointDistance<T>,
{
    validate_query(tree, query, k)?;
    Ok(search_validated(tree, query, k, dist_calc))
}

fn search_validated<'a, T, I, D>(
    tree: &'a KdTree<T, I>,
    query: &[T],
    k: usize,
    dist_calc: &D,
) -> Neighborhood<'a, T, I>
where
    T: Float,
    D: PointDistance<T>,
{
    let Some(root) = tree.root() else {
        return Neighborhood::new();
    };

    let mut set = NeighborSet::new(k);
    search_recursive(root, 0, tree.dimensions(), query, dist_calc, &mut set);

    let neighbors: Vec<Neighbor<'a, T, I>> = set
        .into_entries()
        .into_iter()
        .map(|(d, point)| Neighbor {
            point,
            distance: dist_calc.post_process_distance(d),
        })
        .collect();

    trace!("kNN search: k = {}, found {}", k, neighbors.len());
    Neighborhood::from_neighbors(neighbors)
}

fn search_recursive<'a, T, I, D>(
    node: &'a KdNode<T, I>,
    depth: usize,
    dims: usize,
    query: &[T],
    dist_calc: &D,
    set: &mut NeighborSet<'a, T, I>,
) where
    T: Float,
    D: PointDistance<T>,
{
    let dist = dist_calc.distance_squared(node.point.coords(), query);
    set.offer(dist, &node.point);

    let axis = split_dimension(depth, dims);
    let split_val = node.point.coord(axis);
    let diff = query[axis] - split_val;

    let (nearer, farther) = if diff < T::zero() {
        (node.left(), node.right())
    } else {
        (node.right(), node.left())
    };

    if let Some(next) = nearer {
        search_recursive(next, depth + 1, dims, query, dist_calc, set);
    }

    if let Some(next) = farther {
        // Can a point beyond the hyperplane beat the current worst?
        let can_improve = match set.worst() {
            None => true,
            Some(worst) => dist_calc.split_distance_squared(axis, split_val, query[axis]) <= worst,
        };
        if can_improve {
            search_recursive(next, depth + 1, dims, query, dist_calc, set);
        }
    }
}

// ============================================================================
// Tree Methods
// ============================================================================

impl<T: Float, I> KdTree<T, I> {
    /// Find the `k` nearest points to `query` by Euclidean distance.
    pub fn search<Q>(&self, query: &Q, k: usize) -> KnnResult<Neighborhood<'_, T, I>>
    where
        Q: CoordinateInput<T> + ?Sized,
    {
        find_k_nearest(self, query.as_coordinates()?, k, &Euclidean)
    }

    /// Answer many queries against this tree, in query order.
    ///
    /// Every query is validated before any search runs. With the `cpu`
    /// feature the searches run on rayon's pool.
    #[cfg(feature = "cpu")]
    pub fn search_many<Q>(&self, queries: &[Q], k: usize) -> KnnResult<Vec<Neighborhood<'_, T, I>>>
    where
        T: Send + Sync,
        I: Sync,
        Q: CoordinateInput<T> + Sync,
    {
        let slices = self.validate_batch(queries, k)?;
        Ok(slices
            .par_iter()
            .map(|q| search_validated(self, q, k, &Euclidean))
            .collect())
    }

    /// Answer many queries against this tree, in query order.
    #[cfg(not(feature = "cpu"))]
    pub fn search_many<Q>(&self, queries: &[Q], k: usize) -> KnnResult<Vec<Neighborhood<'_, T, I>>>
    where
        Q: CoordinateInput<T>,
    {
        let slices = self.validate_batch(queries, k)?;
        Ok(slices
            .iter()
            .map(|q| search_validated(self, q, k, &Euclidean))
            .collect())
    }

    fn validate_batch<'q, Q>(&self, queries: &'q [Q], k: usize) -> KnnResult<Vec<&'q [T]>>
    where
        Q: CoordinateInput<T>,
    {
        validate_k(k)?;
        queries
            .iter()
            .map(|q| -> KnnResult<&'q [T]> {
                let coords = q.as_coordinates()?;
                validate_query(self, coords, k)?;
                Ok(coords)
            })
            .collect()
    }
}
