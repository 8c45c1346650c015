//! Single-pass extrema tracking over distinct values.

use std::cmp::Ordering;

/// Returns the largest distinct value, or `None` if the input is empty.
///
/// Equivalent to the plain maximum: deduplication cannot change rank 1.
///
/// # Examples
///
/// ```rust
/// use rankset::select::largest_distinct;
///
/// assert_eq!(largest_distinct([3, 5, 2, 5, 6, 6, 1]), Some(6));
/// assert_eq!(largest_distinct(Vec::<i32>::new()), None);
/// ```
#[inline]
#[must_use]
pub fn largest_distinct<I>(values: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    values.into_iter().max()
}

/// Returns the second-largest distinct value, or `None` if fewer than two
/// distinct values exist.
///
/// The result, when present, is the largest value strictly less than the
/// maximum: exactly one distinct input value is strictly greater than it.
/// Duplicates of the maximum do not count as a runner-up.
///
/// The scan tracks the two largest distinct values seen so far, skipping
/// values equal to either. Input order never affects the result.
///
/// # Complexity
///
/// O(n) time, O(1) space. Produces the same result as ranking the distinct
/// values in descending order and taking the second position.
///
/// # Examples
///
/// ```rust
/// use rankset::select::second_largest_distinct;
///
/// // Distinct values in descending order: [6, 5, 3, 2, 1]
/// assert_eq!(second_largest_distinct([3, 5, 2, 5, 6, 6, 1]), Some(5));
///
/// // A duplicated maximum is a single distinct value
/// assert_eq!(second_largest_distinct([10, 10, 2]), Some(2));
///
/// // Degenerate inputs have no runner-up
/// assert_eq!(second_largest_distinct([7, 7, 7]), None);
/// assert_eq!(second_largest_distinct(Vec::<i32>::new()), None);
/// ```
#[must_use]
pub fn second_largest_distinct<I>(values: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut largest: Option<I::Item> = None;
    let mut runner_up: Option<I::Item> = None;

    for value in values {
        match largest.as_ref().map(|current| value.cmp(current)) {
            None => largest = Some(value),
            Some(Ordering::Greater) => runner_up = largest.replace(value),
            Some(Ordering::Equal) => {}
            Some(Ordering::Less) => {
                match runner_up.as_ref().map(|current| value.cmp(current)) {
                    None | Some(Ordering::Greater) => runner_up = Some(value),
                    Some(Ordering::Equal | Ordering::Less) => {}
                }
            }
        }
    }

    runner_up
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn second_largest_distinct_demoted_maximum_becomes_runner_up() {
        // 9 arrives after 6 has been promoted to largest
        assert_eq!(second_largest_distinct([6, 9, 1]), Some(6));
    }

    #[rstest]
    fn second_largest_distinct_handles_extreme_values() {
        assert_eq!(
            second_largest_distinct([i64::MIN, i64::MAX]),
            Some(i64::MIN)
        );
        assert_eq!(second_largest_distinct([i64::MIN, i64::MIN]), None);
    }

    #[rstest]
    fn second_largest_distinct_works_on_borrowed_elements() {
        let words = ["pear", "apple", "pear", "quince"];
        assert_eq!(second_largest_distinct(words), Some("pear"));
    }
}
