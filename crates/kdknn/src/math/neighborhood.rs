//! Bounded neighbor set and search results.
//!
//! ## Purpose
//!
//! This module holds the "best k seen so far" container the searcher fills
//! while traversing the tree, and the [`Neighborhood`] handed back to
//! callers once a search completes.
//!
//! ## Design notes
//!
//! * **Sorted insert**: Candidates are inserted at their position by binary
//!   search instead of re-sorting after each insert.
//! * **Borrowed points**: Entries reference points owned by the tree, so a
//!   result never copies coordinates unless asked to.
//!
//! ## Key concepts
//!
//! * **Worst distance**: The distance of the last (k-th) entry; the bound used
//!   for both admission and pruning.
//!
//! ## Invariants
//!
//! * Entries are ascending by distance at all times.
//! * The set never holds more than `k` entries.
//! * Among equal distances, earlier insertions come first.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::Point;

// ============================================================================
// Neighbor Set
// ============================================================================

/// Ascending, size-capped collection of candidate neighbors.
///
/// Distances stored here are whatever the searcher compares on (squared
/// Euclidean in practice).
#[derive(Debug)]
pub(crate) struct NeighborSet<'a, T, I> {
    k: usize,
    entries: Vec<(T, &'a Point<T, I>)>,
}

impl<'a, T: Float, I> NeighborSet<'a, T, I> {
    pub(crate) fn new(k: usize) -> Self {
        Self {
            k,
            entries: Vec::with_capacity(k.saturating_add(1).min(1024)),
        }
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.entries.len() >= self.k
    }

    /// Distance of the current k-th entry, if the set is full.
    #[inline]
    pub(crate) fn worst(&self) -> Option<T> {
        if self.is_full() {
            self.entries.last().map(|e| e.0)
        } else {
            None
        }
    }

    /// Offer a candidate. Returns true if it was admitted.
    pub(crate) fn offer(&mut self, dist: T, point: &'a Point<T, I>) -> bool {
        if let Some(worst) = self.worst() {
            if dist.partial_cmp(&worst) != Some(Ordering::Less) {
                return false;
            }
        }

        let pos = self.entries.partition_point(|e| e.0 <= dist);
        self.entries.insert(pos, (dist, point));
        if self.entries.len() > self.k {
            self.entries.pop();
        }
        true
    }

    pub(crate) fn into_entries(self) -> Vec<(T, &'a Point<T, I>)> {
        self.entries
    }
}

// ============================================================================
// Neighborhood Structure
// ============================================================================

/// One search result: a stored point and its distance to the query.
#[derive(Debug)]
pub struct Neighbor<'a, T, I> {
    /// Point held by the tree.
    pub point: &'a Point<T, I>,
    /// Euclidean distance to the query.
    pub distance: T,
}

// Manual impls: the identifier is only borrowed, so it needs no Clone bound.
impl<'a, T: Copy, I> Clone for Neighbor<'a, T, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: Copy, I> Copy for Neighbor<'a, T, I> {}

/// Result of a k-nearest neighbor search, ascending by distance.
#[derive(Debug)]
pub struct Neighborhood<'a, T, I> {
    neighbors: Vec<Neighbor<'a, T, I>>,
}

impl<'a, T: Copy, I> Clone for Neighborhood<'a, T, I> {
    fn clone(&self) -> Self {
        Self {
            neighbors: self.neighbors.clone(),
        }
    }
}

impl<'a, T: Float, I> Neighborhood<'a, T, I> {
    /// Create an empty neighborhood.
    pub fn new() -> Self {
        Self {
            neighbors: Vec::new(),
        }
    }

    pub(crate) fn from_neighbors(neighbors: Vec<Neighbor<'a, T, I>>) -> Self {
        Self { neighbors }
    }

    /// Number of neighbors found.
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if no neighbor was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors in ascending distance order.
    pub fn iter(&self) -> std::slice::Iter<'_, Neighbor<'a, T, I>> {
        self.neighbors.iter()
    }

    /// Neighbors as a slice.
    pub fn as_slice(&self) -> &[Neighbor<'a, T, I>] {
        &self.neighbors
    }

    /// Identifiers of the neighbors, nearest first.
    pub fn ids(&self) -> impl Iterator<Item = &'a I> + '_ {
        self.neighbors.iter().map(|n| n.point.id())
    }

    /// Distances of the neighbors, nearest first.
    pub fn distances(&self) -> impl Iterator<Item = T> + '_ {
        self.neighbors.iter().map(|n| n.distance)
    }

    /// Points of the neighbors, nearest first.
    pub fn points(&self) -> impl Iterator<Item = &'a Point<T, I>> + '_ {
        self.neighbors.iter().map(|n| n.point)
    }

    /// Distance to the farthest neighbor (bandwidth), zero when empty.
    pub fn max_distance(&self) -> T {
        self.neighbors
            .last()
            .map(|n| n.distance)
            .unwrap_or_else(T::zero)
    }

    /// Owned copies of the neighbor points, nearest first.
    pub fn to_points(&self) -> Vec<Point<T, I>>
    where
        I: Clone,
    {
        self.neighbors.iter().map(|n| n.point.clone()).collect()
    }
}

impl<'a, T: Float, I> Default for Neighborhood<'a, T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'n, 'a, T, I> IntoIterator for &'n Neighborhood<'a, T, I> {
    type Item = &'n Neighbor<'a, T, I>;
    type IntoIter = std::slice::Iter<'n, Neighbor<'a, T, I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.neighbors.iter()
    }
}
