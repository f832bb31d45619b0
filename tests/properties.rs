//! Property tests for the universal set.
//!
//! The properties mirror the mode contract: everything is a member before
//! narrowing, and after narrowing membership coincides exactly with the
//! retained input.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use omniset::UniversalSet;
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn universal_set_contains_any_value(value in any::<i64>()) {
        let set = UniversalSet::<i64>::new();
        prop_assert!(set.contains(&value));
        prop_assert!(!set.is_empty());
    }

    #[test]
    fn membership_after_narrowing_matches_retained_input(
        retained in prop::collection::btree_set(any::<i64>(), 0..32),
        probes in prop::collection::vec(any::<i64>(), 0..32),
    ) {
        let mut set = UniversalSet::<i64>::new();
        prop_assert!(set.retain_all_of(&retained));

        prop_assert_eq!(set.len().unwrap(), retained.len());
        for probe in &probes {
            prop_assert_eq!(set.contains(probe), retained.contains(probe));
        }
    }

    #[test]
    fn narrowing_twice_intersects(
        first in prop::collection::btree_set(any::<i64>(), 0..32),
        second in prop::collection::btree_set(any::<i64>(), 0..32),
    ) {
        let mut set = UniversalSet::<i64>::new();
        set.retain_all_of(&first);
        set.retain_all_of(&second);

        let expected: BTreeSet<i64> = first.intersection(&second).copied().collect();
        let actual: BTreeSet<i64> = set.iter().unwrap().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn clear_always_yields_the_empty_finite_set(
        seed in prop::collection::btree_set(any::<i64>(), 0..32),
        degrade_first in any::<bool>(),
    ) {
        let mut set = UniversalSet::<i64>::new();
        if degrade_first {
            set.degrade();
            set.insert_all(seed.clone()).unwrap();
        }

        set.clear();
        prop_assert!(set.is_degraded());
        prop_assert!(set.is_empty());
        prop_assert_eq!(set.len().unwrap(), 0);
        for value in &seed {
            prop_assert!(!set.contains(value));
        }
    }

    #[test]
    fn degradation_is_monotonic(
        retained in prop::collection::btree_set(any::<i64>(), 0..16),
    ) {
        let mut set = UniversalSet::<i64>::new();
        set.retain_all_of(&retained);
        prop_assert!(set.is_degraded());

        // No later operation brings the set back to universal mode.
        set.clear();
        prop_assert!(set.is_degraded());
        prop_assert!(!set.degrade());
        prop_assert!(set.is_degraded());
    }
}
