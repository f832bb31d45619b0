//! # Omniset
//!
//! A set that behaves as if it contains every value of its element type,
//! until it is irreversibly narrowed ("degraded") to an ordinary finite set.
//!
//! Intended for "assume everything is present until proven otherwise"
//! situations: default-allow filters, permissive initial state for an
//! allow-list that is narrowed later, and similar.
//!
//! ## Design Principles
//!
//! - All finite state lives in a `BTreeSet` for deterministic ordering
//! - Pure and synchronous: no I/O, no async, no internal locking
//! - Operations that have no finite answer while the set is universal
//!   return an explicit error instead of panicking
//!
//! ## The two modes
//!
//! A [`UniversalSet`] starts in *universal* mode: membership queries answer
//! `true` for every value, and nothing is ever materialized. A one-way
//! transition to *degraded* mode - triggered by [`UniversalSet::degrade`],
//! [`UniversalSet::retain_all`], [`UniversalSet::retain_all_of`] or
//! [`UniversalSet::clear`] - replaces the unbounded placeholder with a
//! concrete finite set, after which every operation behaves exactly as on
//! that finite set.

pub mod error;
pub mod set;
pub mod witness;

pub use error::SetError;
pub use set::UniversalSet;
pub use witness::TypeWitness;
