//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer provides the value types shared by every other layer: points
//! and the crate error type.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error taxonomy.
pub mod errors;

/// Identified points in k-dimensional space.
pub mod point;
