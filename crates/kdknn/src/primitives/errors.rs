//! Error types for KD-tree construction and search.
//!
//! ## Purpose
//!
//! This module defines the single error enum surfaced by every fallible
//! operation in the crate.
//!
//! ## Design notes
//!
//! * **Eager**: Every check runs before partitioning or traversal begins.
//! * **Cloneable**: Errors are plain data so builders can defer and replay them.
//!
//! ## Invariants
//!
//! * An operation that returns an error has not touched the tree or its input.
//!
//! ## Non-goals
//!
//! * This module does not model transient failures; nothing is retried.

// External dependencies
use thiserror::Error;

/// Errors produced while building or querying a [`KdTree`](crate::tree::node::KdTree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnnError {
    /// Two coordinate sequences that must agree in length do not.
    #[error("dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch {
        /// Dimensionality established by the first point or by the tree.
        expected: usize,
        /// Dimensionality of the offending point or query.
        found: usize,
    },

    /// A parameter is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used across the crate.
pub type KnnResult<T> = Result<T, KnnError>;
