//! KD-tree node layout.
//!
//! ## Purpose
//!
//! This module defines the immutable tree produced by the builder and read
//! by the searcher.
//!
//! ## Design notes
//!
//! * **Exclusive ownership**: Each node owns its children through `Box`;
//!   dropping a node drops its whole subtree.
//! * **Implicit split dimension**: Nodes do not store their axis. It is
//!   `depth % dimensions`, threaded through every traversal.
//!
//! ## Invariants
//!
//! * For a node at depth `d` with axis `a = d % D`, every point in the left
//!   subtree has `coord[a] <= node.coord[a]` and every point in the right
//!   subtree has `coord[a] >= node.coord[a]`.
//! * `len` equals the number of nodes reachable from `root`.
//!
//! ## Non-goals
//!
//! * Nodes cannot be inserted or removed after construction.

// Internal dependencies
use crate::primitives::point::Point;

/// Axis used to split the points at `depth`.
#[inline]
pub(crate) fn split_dimension(depth: usize, dimensions: usize) -> usize {
    depth % dimensions
}

// ============================================================================
// Node
// ============================================================================

/// A node in the KD-tree.
#[derive(Debug, Clone)]
pub struct KdNode<T, I> {
    pub(crate) point: Point<T, I>,
    pub(crate) left: Option<Box<KdNode<T, I>>>,
    pub(crate) right: Option<Box<KdNode<T, I>>>,
}

impl<T, I> KdNode<T, I> {
    /// Point stored at this node.
    #[inline]
    pub fn point(&self) -> &Point<T, I> {
        &self.point
    }

    /// Subtree of points at or below this node's coordinate on its axis.
    #[inline]
    pub fn left(&self) -> Option<&KdNode<T, I>> {
        self.left.as_deref()
    }

    /// Subtree of points at or above this node's coordinate on its axis.
    #[inline]
    pub fn right(&self) -> Option<&KdNode<T, I>> {
        self.right.as_deref()
    }

    fn height(&self) -> usize {
        let l = self.left().map_or(0, KdNode::height);
        let r = self.right().map_or(0, KdNode::height);
        1 + l.max(r)
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Static KD-tree over identified points.
#[derive(Debug, Clone)]
pub struct KdTree<T, I> {
    pub(crate) root: Option<Box<KdNode<T, I>>>,
    pub(crate) dimensions: usize,
    pub(crate) len: usize,
}

impl<T, I> KdTree<T, I> {
    pub(crate) fn from_parts(
        root: Option<Box<KdNode<T, I>>>,
        dimensions: usize,
        len: usize,
    ) -> Self {
        Self {
            root,
            dimensions,
            len,
        }
    }

    /// Root node, `None` for an empty tree.
    #[inline]
    pub fn root(&self) -> Option<&KdNode<T, I>> {
        self.root.as_deref()
    }

    /// Number of points in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Dimensionality shared by all points (0 for an empty tree).
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of levels; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.root().map_or(0, KdNode::height)
    }

    /// Pre-order walk yielding `(depth, node)`.
    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            stack: self.root().map(|r| (0, r)).into_iter().collect(),
        }
    }
}

/// Pre-order iterator over the nodes of a [`KdTree`].
pub struct Iter<'a, T, I> {
    stack: Vec<(usize, &'a KdNode<T, I>)>,
}

impl<'a, T, I> Iterator for Iter<'a, T, I> {
    type Item = (usize, &'a KdNode<T, I>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push((depth + 1, right));
        }
        if let Some(left) = node.left() {
            self.stack.push((depth + 1, left));
        }
        Some((depth, node))
    }
}

impl<'a, T, I> IntoIterator for &'a KdTree<T, I> {
    type Item = (usize, &'a KdNode<T, I>);
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
