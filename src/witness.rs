//! # Type Witness Module
//!
//! Runtime type identification for narrowing an untyped collection.
//!
//! Narrowing-by-intersection accepts a slice of `&dyn Any` so that a
//! heterogeneous input can be intersected with the set. Deciding which of
//! those items are actually values of the element type `E` requires a
//! probe, and the probe is what a [`TypeWitness`] carries.
//!
//! [`TypeWitness::of`] builds the standard downcast probe and covers every
//! `E: Any`. [`TypeWitness::with_probe`] accepts a custom probe for element
//! types that want a stricter admission rule than a plain downcast.

use std::any::Any;
use std::fmt;

/// Probe signature: given an untyped value, answer `Some(&E)` if the value
/// is of the element type, `None` otherwise.
pub type Probe<E> = for<'a> fn(&'a dyn Any) -> Option<&'a E>;

/// A runtime descriptor of the element type `E`.
///
/// Required only by the narrowing-by-intersection operation
/// ([`UniversalSet::retain_all`](crate::UniversalSet::retain_all)); a set
/// that never narrows an untyped collection never needs one.
pub struct TypeWitness<E> {
    probe: Probe<E>,
}

impl<E: Any> TypeWitness<E> {
    /// The standard witness: items are recognized by downcast.
    #[must_use]
    pub fn of() -> Self {
        Self {
            probe: |value| value.downcast_ref::<E>(),
        }
    }
}

impl<E> TypeWitness<E> {
    /// A witness with a caller-supplied probe.
    #[must_use]
    pub fn with_probe(probe: Probe<E>) -> Self {
        Self { probe }
    }

    /// Test a single untyped value against the element type.
    pub(crate) fn probe<'a>(&self, value: &'a dyn Any) -> Option<&'a E> {
        (self.probe)(value)
    }
}

// Manual impls: a probe is a plain fn pointer, so the witness is always
// copyable regardless of whether `E` is.
impl<E> Clone for TypeWitness<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TypeWitness<E> {}

impl<E> fmt::Debug for TypeWitness<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TypeWitness")
    }
}

// =============================================================================
// TESTS
// =============================================================================
