//! Property-based tests for the selection functions.
//!
//! These tests verify the selection contract against a reference model
//! (`BTreeSet`, which is distinct and ordered by construction) and the
//! invariances the operations guarantee.

#![cfg(feature = "select")]

use proptest::prelude::*;
use rankset::select::{largest_distinct, nth_largest_distinct, second_largest_distinct};
use std::collections::BTreeSet;

// =============================================================================
// Reference Model Law
// Description: the runner-up equals the second entry of the distinct values
// ranked in descending order, and is absent when fewer than two exist
// =============================================================================

proptest! {
    #[test]
    fn prop_second_largest_matches_reference_model(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let distinct: BTreeSet<i32> = values.iter().copied().collect();
        let expected = distinct.iter().rev().nth(1).copied();

        prop_assert_eq!(second_largest_distinct(values), expected);
    }
}

// =============================================================================
// Order Invariance Law
// Description: permuting the input never changes the result
// =============================================================================

proptest! {
    #[test]
    fn prop_order_invariance_law(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let baseline = second_largest_distinct(values.clone());

        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(second_largest_distinct(reversed), baseline);

        let mut ascending = values;
        ascending.sort_unstable();
        prop_assert_eq!(second_largest_distinct(ascending), baseline);
    }
}

// =============================================================================
// Duplicate Invariance Law
// Description: extra copies of existing elements never change the result
// =============================================================================

proptest! {
    #[test]
    fn prop_duplicate_invariance_law(
        values in prop::collection::vec(any::<i32>(), 1..50),
        index: prop::sample::Index,
        copies in 1..5usize
    ) {
        let baseline = second_largest_distinct(values.clone());

        let duplicated = values[index.index(values.len())];
        let mut padded = values;
        padded.extend(std::iter::repeat_n(duplicated, copies));

        prop_assert_eq!(second_largest_distinct(padded), baseline);
    }
}

// =============================================================================
// Degenerate Input Law
// Description: fewer than two distinct values yields no result
// =============================================================================

proptest! {
    #[test]
    fn prop_single_distinct_value_has_no_runner_up(value: i32, copies in 1..30usize) {
        let values = vec![value; copies];
        prop_assert_eq!(second_largest_distinct(values), None);
    }
}

// =============================================================================
// Membership and Strict Dominance Law
// Description: a present result is an input member with exactly one distinct
// input value strictly greater than it
// =============================================================================

proptest! {
    #[test]
    fn prop_result_membership_and_dominance(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        if let Some(runner_up) = second_largest_distinct(values.clone()) {
            prop_assert!(values.contains(&runner_up));

            let distinct: BTreeSet<i32> = values.into_iter().collect();
            let strictly_greater = distinct.iter().filter(|&&v| v > runner_up).count();
            prop_assert_eq!(strictly_greater, 1);
        }
    }
}

// =============================================================================
// Implementation Agreement Law
// Description: the single-pass scans and the sort-based rank path produce
// identical results for every input
// =============================================================================

proptest! {
    #[test]
    fn prop_single_pass_agrees_with_sort_based_rank(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        prop_assert_eq!(
            second_largest_distinct(values.clone()),
            nth_largest_distinct(values.clone(), 2)
        );
        prop_assert_eq!(
            largest_distinct(values.clone()),
            nth_largest_distinct(values, 1)
        );
    }
}

// =============================================================================
// Rank Exhaustion Law
// Description: ranks walk the distinct values exactly once, then yield None
// =============================================================================

proptest! {
    #[test]
    fn prop_ranks_enumerate_distinct_values_exactly(
        values in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let distinct: BTreeSet<i32> = values.iter().copied().collect();

        for (offset, expected) in distinct.iter().rev().enumerate() {
            prop_assert_eq!(
                nth_largest_distinct(values.clone(), offset + 1),
                Some(*expected)
            );
        }

        prop_assert_eq!(nth_largest_distinct(values, distinct.len() + 1), None);
    }
}
