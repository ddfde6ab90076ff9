//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the geometry shared by the tree builder and the
//! searcher: distance computation and the bounded neighbor set.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Tree
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Distance metric seam (Euclidean).
pub mod distance;

/// Bounded neighbor set and search results.
pub mod neighborhood;
