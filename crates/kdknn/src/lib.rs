//! # kdknn
//!
//! Static KD-tree index for exact k-nearest-neighbor search in
//! k-dimensional Euclidean space.
//!
//! Points are split recursively at the lower median of a rotating axis
//! (`depth % D`); queries walk the tree depth-first, visiting the near side
//! of each splitting hyperplane first and pruning far sides that cannot hold
//! anything closer than the current k-th best.
//!
//! ## Example
//!
//! ```
//! use kdknn::prelude::*;
//!
//! let points = vec![
//!     Point::new([1.0, 2.0, 3.0], 0),
//!     Point::new([4.0, 5.0, 6.0], 1),
//!     Point::new([7.0, 8.0, 9.0], 2),
//!     Point::new([2.0, 3.0, 1.0], 3),
//!     Point::new([5.0, 6.0, 4.0], 4),
//!     Point::new([8.0, 9.0, 7.0], 5),
//! ];
//!
//! let tree = KnnBuilder::new().build(points).unwrap();
//! let nearest = tree.search(&[3.0, 4.0, 5.0], 2).unwrap();
//!
//! let ids: Vec<i32> = nearest.ids().copied().collect();
//! assert_eq!(ids, vec![1, 4]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API          (KnnBuilder, build, search)
//!   ↓
//! Layer 4: Engine       (branch-and-bound search, batch queries)
//!   ↓
//! Layer 3: Tree         (node layout, median-split construction)
//!   ↓
//! Layer 2: Math         (distance, bounded neighbor set)
//!   ↓
//! Layer 1: Primitives   (Point, KnnError)
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): parallel construction and batch queries via `rayon`,
//!   plus `ndarray` inputs.

#![deny(missing_docs)]

/// Layer 1: value types and errors.
pub mod primitives;

/// Layer 2: distance and neighbor containers.
pub mod math;

/// Layer 3: tree layout and construction.
pub mod tree;

/// Layer 4: search engine.
pub mod engine;

/// Layer 5: user-facing API.
pub mod api;

/// Coordinate input adapters.
pub mod input;

/// Common imports.
pub mod prelude {
    pub use crate::api::{build, search, KnnBuilder};
    #[cfg(feature = "cpu")]
    pub use crate::input::points_from_rows;
    pub use crate::input::CoordinateInput;
    pub use crate::math::distance::{Euclidean, PointDistance};
    pub use crate::math::neighborhood::{Neighbor, Neighborhood};
    pub use crate::primitives::errors::{KnnError, KnnResult};
    pub use crate::primitives::point::{points_from_flat, Point};
    pub use crate::tree::node::{KdNode, KdTree};
}

/// Lower-level building blocks for custom metrics and build strategies.
pub mod internals {
    pub use crate::engine::search::find_k_nearest;
    pub use crate::tree::builder::{
        build_kdtree, build_kdtree_parallel, DEFAULT_PARALLEL_THRESHOLD,
    };
}
