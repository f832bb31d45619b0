//! # Error Module
//!
//! The two failure kinds of a universal set.
//!
//! Both errors are surfaced synchronously and never retried internally.
//! No operation mutates state before failing, so a caller that observes
//! an `Err` can assume the set is exactly as it was before the call.

use thiserror::Error;

/// Errors produced by [`UniversalSet`](crate::UniversalSet) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetError {
    /// The operation has no well-defined result while the set still
    /// represents an unbounded domain. Not retryable in the same mode;
    /// resolved only by degrading the set first (directly via `degrade`,
    /// or implicitly via `retain_all` / `clear`).
    #[error("`{operation}` has no finite result while the set is universal; degrade it first")]
    Unsupported {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    /// Narrowing-by-intersection was attempted on a set constructed without
    /// a type witness. Not recoverable without reconstructing the set with
    /// a witness supplied.
    #[error("narrowing an untyped collection requires a type witness supplied at construction")]
    MissingWitness,
}

// =============================================================================
// TESTS
// =============================================================================
