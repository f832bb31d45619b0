//! # Universal Set
//!
//! The container itself: a set that answers "yes" to every membership
//! query until a narrowing operation forces it to become finite.
//!
//! The mode is modeled as a sum type over {Universal, Degraded(backing)}
//! rather than a flag plus an optional set, so backing-set access is only
//! reachable in the Degraded variant. The transition is monotonic: once
//! degraded, a set never returns to universal mode.

use crate::error::SetError;
use crate::witness::TypeWitness;
use std::any::Any;
use std::collections::btree_set::Iter;
use std::collections::BTreeSet;

// =============================================================================
// STATE
// =============================================================================

/// The two operating modes. `Degraded` owns the backing set exclusively;
/// it is created at the moment of degradation and never shared.
#[derive(Debug, Clone)]
enum State<E: Ord> {
    /// Conceptually contains every value of `E`. Nothing is materialized.
    Universal,
    /// An ordinary finite set.
    Degraded(BTreeSet<E>),
}

// =============================================================================
// UNIVERSAL SET
// =============================================================================

/// A set containing every value of `E` until irreversibly narrowed.
///
/// Freshly constructed, the set is in universal mode: [`contains`] answers
/// `true` for any value and [`is_empty`] answers `false`, while operations
/// with no finite answer (`len`, `iter`, `insert`, ...) return
/// [`SetError::Unsupported`]. Calling [`degrade`], [`retain_all`],
/// [`retain_all_of`] or [`clear`] flips the set into degraded mode, after
/// which it behaves exactly like the `BTreeSet` backing it.
///
/// [`contains`]: UniversalSet::contains
/// [`is_empty`]: UniversalSet::is_empty
/// [`degrade`]: UniversalSet::degrade
/// [`retain_all`]: UniversalSet::retain_all
/// [`retain_all_of`]: UniversalSet::retain_all_of
/// [`clear`]: UniversalSet::clear
#[derive(Debug, Clone)]
pub struct UniversalSet<E: Ord> {
    /// Current mode. Monotonic: `Universal` -> `Degraded`, never back.
    state: State<E>,

    /// Runtime descriptor of `E`, needed only by [`UniversalSet::retain_all`].
    witness: Option<TypeWitness<E>>,
}

impl<E: Ord> Default for UniversalSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord> UniversalSet<E> {
    /// Create a set in universal mode, without a type witness.
    ///
    /// Use this when [`UniversalSet::retain_all`] will never be called
    /// before the set is degraded by other means; every other operation
    /// works without a witness.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Universal,
            witness: None,
        }
    }

    /// Attach a type witness, enabling [`UniversalSet::retain_all`].
    #[must_use]
    pub fn with_witness(mut self, witness: TypeWitness<E>) -> Self {
        self.witness = Some(witness);
        self
    }

    // =========================================================================
    // MODE
    // =========================================================================

    /// Whether the set has been narrowed to a finite set.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self.state, State::Degraded(_))
    }

    /// Narrow the set to an empty finite set.
    ///
    /// Returns `true` if the set was still universal and the transition
    /// happened. Returns `false` if the set was already degraded, in which
    /// case nothing changes (in particular, the backing set is not reset).
    pub fn degrade(&mut self) -> bool {
        match self.state {
            State::Universal => {
                self.state = State::Degraded(BTreeSet::new());
                true
            }
            State::Degraded(_) => false,
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Number of elements.
    ///
    /// A universal set has no finite cardinality, so this fails with
    /// [`SetError::Unsupported`] until the set is degraded.
    pub fn len(&self) -> Result<usize, SetError> {
        match &self.state {
            State::Universal => Err(SetError::Unsupported { operation: "len" }),
            State::Degraded(backing) => Ok(backing.len()),
        }
    }

    /// Whether the set is empty. A universal set never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.state {
            State::Universal => false,
            State::Degraded(backing) => backing.is_empty(),
        }
    }

    /// Membership test. Unconditionally `true` while universal.
    #[must_use]
    pub fn contains(&self, value: &E) -> bool {
        match &self.state {
            State::Universal => true,
            State::Degraded(backing) => backing.contains(value),
        }
    }

    /// Whether every given value is a member. Unconditionally `true`
    /// while universal (vacuously so for an empty input).
    pub fn contains_all<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        match &self.state {
            State::Universal => true,
            State::Degraded(backing) => values.into_iter().all(|v| backing.contains(v)),
        }
    }

    /// Iterate the elements in ascending order.
    ///
    /// An unbounded domain cannot be enumerated, so this fails with
    /// [`SetError::Unsupported`] until the set is degraded.
    pub fn iter(&self) -> Result<Iter<'_, E>, SetError> {
        match &self.state {
            State::Universal => Err(SetError::Unsupported { operation: "iter" }),
            State::Degraded(backing) => Ok(backing.iter()),
        }
    }

    /// Copy the elements out into a `Vec`, in ascending order.
    ///
    /// Fails with [`SetError::Unsupported`] until the set is degraded.
    pub fn to_vec(&self) -> Result<Vec<E>, SetError>
    where
        E: Clone,
    {
        match &self.state {
            State::Universal => Err(SetError::Unsupported {
                operation: "to_vec",
            }),
            State::Degraded(backing) => Ok(backing.iter().cloned().collect()),
        }
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Add a value. Returns whether the set changed.
    ///
    /// Adding to a set that already contains everything is meaningless,
    /// so this fails with [`SetError::Unsupported`] while universal.
    pub fn insert(&mut self, value: E) -> Result<bool, SetError> {
        match &mut self.state {
            State::Universal => Err(SetError::Unsupported {
                operation: "insert",
            }),
            State::Degraded(backing) => Ok(backing.insert(value)),
        }
    }

    /// Remove a value. Returns whether the set changed.
    ///
    /// Fails with [`SetError::Unsupported`] while universal: removal from
    /// an unbounded domain has no finite representation.
    pub fn remove(&mut self, value: &E) -> Result<bool, SetError> {
        match &mut self.state {
            State::Universal => Err(SetError::Unsupported {
                operation: "remove",
            }),
            State::Degraded(backing) => Ok(backing.remove(value)),
        }
    }

    /// Add every given value. Returns whether the set changed.
    ///
    /// Fails with [`SetError::Unsupported`] while universal, before
    /// consuming any input.
    pub fn insert_all<I>(&mut self, values: I) -> Result<bool, SetError>
    where
        I: IntoIterator<Item = E>,
    {
        match &mut self.state {
            State::Universal => Err(SetError::Unsupported {
                operation: "insert_all",
            }),
            State::Degraded(backing) => {
                let mut changed = false;
                for value in values {
                    changed |= backing.insert(value);
                }
                Ok(changed)
            }
        }
    }

    /// Remove every given value. Returns whether the set changed.
    ///
    /// Fails with [`SetError::Unsupported`] while universal.
    pub fn remove_all<'a, I>(&mut self, values: I) -> Result<bool, SetError>
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        match &mut self.state {
            State::Universal => Err(SetError::Unsupported {
                operation: "remove_all",
            }),
            State::Degraded(backing) => {
                let mut changed = false;
                for value in values {
                    changed |= backing.remove(value);
                }
                Ok(changed)
            }
        }
    }

    // =========================================================================
    // NARROWING
    // =========================================================================

    /// Narrowing-by-intersection over an untyped collection.
    ///
    /// Items are tested against the element type with the witness supplied
    /// at construction; items of any other type are discarded. While
    /// universal, this degrades the set to exactly the recognized items and
    /// returns `Ok(true)` - going from unbounded to bounded always counts
    /// as a change, even when the result is empty. Once degraded, this is a
    /// standard intersection and returns whether the contents changed.
    ///
    /// Fails with [`SetError::MissingWitness`], before mutating anything,
    /// if no witness was supplied.
    pub fn retain_all(&mut self, items: &[&dyn Any]) -> Result<bool, SetError>
    where
        E: Clone,
    {
        let witness = self.witness.ok_or(SetError::MissingWitness)?;
        let recognized: BTreeSet<E> = items
            .iter()
            .filter_map(|item| witness.probe(*item).cloned())
            .collect();

        match &mut self.state {
            State::Universal => {
                self.state = State::Degraded(recognized);
                Ok(true)
            }
            State::Degraded(backing) => {
                let before = backing.len();
                backing.retain(|value| recognized.contains(value));
                Ok(backing.len() != before)
            }
        }
    }

    /// Narrowing-by-intersection over a typed sequence of `E`.
    ///
    /// The statically-typed counterpart of [`UniversalSet::retain_all`]:
    /// the type system plays the role of the witness, so this never fails.
    /// While universal, degrades the set to exactly the given values and
    /// returns `true`; once degraded, a standard intersection returning
    /// whether the contents changed.
    pub fn retain_all_of<'a, I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a E>,
        E: Clone + 'a,
    {
        match &mut self.state {
            State::Universal => {
                let narrowed: BTreeSet<E> = values.into_iter().cloned().collect();
                self.state = State::Degraded(narrowed);
                true
            }
            State::Degraded(backing) => {
                let keep: BTreeSet<&E> = values.into_iter().collect();
                let before = backing.len();
                backing.retain(|value| keep.contains(value));
                backing.len() != before
            }
        }
    }

    /// Remove every element.
    ///
    /// While universal this is an implicit degradation to the empty finite
    /// set; once degraded it clears the backing set in place.
    pub fn clear(&mut self) {
        match &mut self.state {
            State::Universal => {
                self.state = State::Degraded(BTreeSet::new());
            }
            State::Degraded(backing) => {
                backing.clear();
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
