//! Layer 3: Tree
//!
//! ## Purpose
//!
//! This layer provides the KD-tree itself: its node layout and the
//! median-split construction, sequential or parallel.
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Tree ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Median-split construction (sequential and rayon-parallel).
pub mod builder;

/// Node and tree types.
pub mod node;
