//! Layer 4: Engine
//!
//! ## Purpose
//!
//! This layer provides the branch-and-bound k-nearest-neighbor searcher and
//! its batch variant, which fans independent queries out over rayon.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Tree
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exact kNN search over a built tree.
pub mod search;
