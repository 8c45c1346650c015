//! Persistent collection of distinct values in descending rank order.
//!
//! This module provides [`DistinctSet`], an immutable collection that
//! collapses duplicate values and answers rank queries (largest,
//! runner-up, n-th largest) directly, using an adaptive representation:
//!
//! - Inline storage (`SmallVec`) for small collections (up to 8 elements)
//! - A shared, descending-sorted `Vec` once the collection grows past 8
//!   elements, where descending rank k is the element at index k − 1
//! - Automatic demotion back to inline storage when size drops to 8 or fewer
//!
//! All operations return new instances; existing instances are never
//! modified. The large representation is wrapped in `Arc`, so clones and
//! derived collections share structure.
//!
//! # Time Complexity
//!
//! | Operation        | Small (n <= 8)    | Ranked (n > 8)      |
//! |------------------|-------------------|---------------------|
//! | `insert`         | O(n)              | O(n)                |
//! | `remove`         | O(n)              | O(n)                |
//! | `contains`       | O(n)              | O(log n)            |
//! | `largest`        | O(n)              | O(1)                |
//! | `second_largest` | O(n)              | O(1)                |
//! | `nth_largest`    | O(n log n)        | O(1)                |
//! | `iter_ranked`    | O(n log n)        | O(1) + O(n)         |
//!
//! # Examples
//!
//! ```rust
//! use rankset::persistent::DistinctSet;
//!
//! let scores: DistinctSet<i32> = [3, 5, 2, 5, 6, 6, 1].into_iter().collect();
//!
//! // Duplicates occupy a single rank
//! assert_eq!(scores.len(), 5);
//! assert_eq!(scores.largest(), Some(&6));
//! assert_eq!(scores.second_largest(), Some(&5));
//! assert_eq!(scores.nth_largest(4), Some(&2));
//!
//! // Updates are persistent: the original collection is unchanged
//! let with_ten = scores.insert(10);
//! assert_eq!(scores.largest(), Some(&6));
//! assert_eq!(with_ten.largest(), Some(&10));
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::sync::Arc;

/// The threshold for transitioning between Small and Ranked states.
/// Collections with more than this many elements use a shared sorted `Vec`.
const INLINE_CAPACITY: usize = 8;

/// A strictly descending, deduplicated vector wrapped in `Arc` for
/// structural sharing. Descending rank k lives at index k − 1.
#[derive(Clone)]
struct RankedVec<T>(Arc<Vec<T>>);

impl<T: Clone + Ord> RankedVec<T> {
    #[inline]
    fn from_ranked(vec: Vec<T>) -> Self {
        #[cfg(debug_assertions)]
        debug_assert!(
            is_strictly_descending(&vec),
            "{}",
            RANKED_INVARIANT_PANIC_MESSAGE
        );
        Self(Arc::new(vec))
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Binary search adapted to the descending order: the comparator ranks
    /// the probed element against the target, not the other way around.
    #[inline]
    fn position<Q>(&self, element: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0
            .binary_search_by(|probe| element.cmp(probe.borrow()))
    }

    fn insert(&self, element: T) -> Option<Self> {
        match self.position(&element) {
            Ok(_) => None,
            Err(position) => {
                let mut new_vec = Vec::with_capacity(self.0.len() + 1);
                new_vec.extend_from_slice(&self.0[..position]);
                new_vec.push(element);
                new_vec.extend_from_slice(&self.0[position..]);
                Some(Self::from_ranked(new_vec))
            }
        }
    }

    fn remove<Q>(&self, element: &Q) -> Option<Self>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(element).ok().map(|position| {
            let mut new_vec = Vec::with_capacity(self.0.len() - 1);
            new_vec.extend_from_slice(&self.0[..position]);
            new_vec.extend_from_slice(&self.0[position + 1..]);
            Self::from_ranked(new_vec)
        })
    }
}

/// Internal representation of the collection state.
#[derive(Clone)]
enum DistinctSetInner<T: Clone + Ord> {
    Empty,
    Small(SmallVec<[T; INLINE_CAPACITY]>),
    Ranked(RankedVec<T>),
}

/// A persistent collection of distinct values queryable by descending rank.
///
/// The collection automatically transitions between three states based on
/// size:
/// - Empty: No elements
/// - Small: Up to 8 elements stored inline in a `SmallVec`, unordered
/// - Ranked: More than 8 elements in a shared `Vec` sorted descending
///
/// All operations are immutable and return new instances.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone` and `Ord`. Distinctness
///   is defined by `Ord`'s total order: values comparing equal are one
///   element.
///
/// # Examples
///
/// ```rust
/// use rankset::persistent::DistinctSet;
///
/// let collection: DistinctSet<i32> = [9, 4, 9, 7].into_iter().collect();
///
/// assert_eq!(collection.len(), 3);
/// assert_eq!(collection.second_largest(), Some(&7));
///
/// let ranked: Vec<&i32> = collection.iter_ranked().collect();
/// assert_eq!(ranked, vec![&9, &7, &4]);
/// ```
#[derive(Clone)]
pub struct DistinctSet<T: Clone + Ord> {
    inner: DistinctSetInner<T>,
}

impl<T: Clone + Ord> DistinctSet<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankset::persistent::DistinctSet;
    ///
    /// let collection: DistinctSet<i32> = DistinctSet::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: DistinctSetInner::Empty,
        }
    }

    /// Returns the number of distinct values in the collection.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.inner {
            DistinctSetInner::Empty => 0,
            DistinctSetInner::Small(vec) => vec.len(),
            DistinctSetInner::Ranked(ranked) => ranked.len(),
        }
    }

    /// Returns `true` if the collection contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.inner, DistinctSetInner::Empty)
    }

    /// Returns `true` if the collection contains the specified element.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait. For example, with `DistinctSet<String>`, you can
    /// search using `&str` directly without allocating a new `String`.
    ///
    /// # Complexity
    ///
    /// - O(n) for the Small state (linear search)
    /// - O(log n) for the Ranked state (binary search)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankset::persistent::DistinctSet;
    ///
    /// let collection: DistinctSet<i32> = [1, 2].into_iter().collect();
    /// assert!(collection.contains(&1));
    /// assert!(!collection.contains(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.inner {
            DistinctSetInner::Empty => false,
            DistinctSetInner::Small(vec) => vec.iter().any(|item| item.borrow() == element),
            DistinctSetInner::Ranked(ranked) => ranked.position(element).is_ok(),
        }
    }

    /// Inserts an element into the collection, returning a new collection.
    ///
    /// If an equal element already exists, returns a clone of the current
    /// collection (idempotent operation). Inserting the 9th distinct
    /// element promotes the collection to the Ranked state.
    ///
    /// # Complexity
    ///
    /// O(n) in both states.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankset::persistent::DistinctSet;
    ///
    /// let collection = DistinctSet::new().insert(42);
    /// assert_eq!(collection.len(), 1);
    ///
    /// // Duplicate insertion is idempotent
    /// let same = collection.insert(42);
    /// assert_eq!(same.len(), 1);
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        match &self.inner {
            DistinctSetInner::Empty => {
                let mut vec = SmallVec::new();
                vec.push(element);
                Self {
                    inner: DistinctSetInner::Small(vec),
                }
            }
            DistinctSetInner::Small(vec) => {
                if vec.iter().any(|item| item == &element) {
                    return self.clone();
                }

                if vec.len() >= INLINE_CAPACITY {
                    let mut ranked: Vec<T> = vec.iter().cloned().collect();
                    ranked.push(element);
                    ranked.sort_unstable_by(|left, right| right.cmp(left));
                    Self {
                        inner: DistinctSetInner::Ranked(RankedVec::from_ranked(ranked)),
                    }
                } else {
                    let mut new_vec = vec.clone();
                    new_vec.push(element);
                    Self {
                        inner: DistinctSetInner::Small(new_vec),
                    }
                }
            }
            DistinctSetInner::Ranked(ranked) => ranked.insert(element).map_or_else(
                || self.clone(),
                |new_ranked| Self {
                    inner: DistinctSetInner::Ranked(new_ranked),
                },
            ),
        }
    }

    /// Removes an element from the collection, returning a new collection.
    ///
    /// If the element does not exist, returns a clone of the current
    /// collection. Dropping to 8 or fewer elements demotes the collection
    /// back to inline storage; removing the last element yields the empty
    /// collection.
    ///
    /// Supports borrowed forms of the element type through `Borrow`, like
    /// [`contains`](Self::contains).
    ///
    /// # Complexity
    ///
    /// O(n) in both states.
    #[must_use]
    pub fn remove<Q>(&self, element: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.inner {
            DistinctSetInner::Empty => self.clone(),
            DistinctSetInner::Small(vec) => {
                let matches = |item: &T| T::borrow(item) == element;
                if !vec.iter().any(matches) {
                    return self.clone();
                }

                let new_vec: SmallVec<[T; INLINE_CAPACITY]> =
                    vec.iter().filter(|item| !matches(item)).cloned().collect();

                Self {
                    inner: if new_vec.is_empty() {
                        DistinctSetInner::Empty
                    } else {
                        DistinctSetInner::Small(new_vec)
                    },
                }
            }
            DistinctSetInner::Ranked(ranked) => ranked.remove(element).map_or_else(
                || self.clone(),
                |new_ranked| {
                    if new_ranked.len() <= INLINE_CAPACITY {
                        Self {
                            inner: DistinctSetInner::Small(
                                new_ranked.as_slice().iter().cloned().collect(),
                            ),
                        }
                    } else {
                        Self {
                            inner: DistinctSetInner::Ranked(new_ranked),
                        }
                    }
                },
            ),
        }
    }

    /// Returns a reference to the largest element (descending rank 1), or
    /// `None` if the collection is empty.
    ///
    /// # Complexity
    ///
    /// O(n) for the Small state, O(1) for the Ranked state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankset::persistent::DistinctSet;
    ///
    /// let collection: DistinctSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(collection.largest(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn largest(&self) -> Option<&T> {
        match &self.inner {
            DistinctSetInner::Empty => None,
            DistinctSetInner::Small(vec) => vec.iter().max(),
            DistinctSetInner::Ranked(ranked) => ranked.as_slice().first(),
        }
    }

    /// Returns a reference to the smallest element, or `None` if the
    /// collection is empty.
    #[inline]
    #[must_use]
    pub fn smallest(&self) -> Option<&T> {
        match &self.inner {
            DistinctSetInner::Empty => None,
            DistinctSetInner::Small(vec) => vec.iter().min(),
            DistinctSetInner::Ranked(ranked) => ranked.as_slice().last(),
        }
    }

    /// Returns a reference to the second-largest element (descending
    /// rank 2), or `None` if fewer than two distinct values exist.
    ///
    /// The result, when present, is the largest element strictly less than
    /// the maximum. Since the collection already holds each value once, a
    /// duplicated maximum in the source input cannot produce a runner-up.
    ///
    /// # Complexity
    ///
    /// O(n) for the Small state, O(1) for the Ranked state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankset::persistent::DistinctSet;
    ///
    /// let scores: DistinctSet<i32> = [3, 5, 2, 5, 6, 6, 1].into_iter().collect();
    /// assert_eq!(scores.second_largest(), Some(&5));
    ///
    /// let tied: DistinctSet<i32> = [7, 7, 7].into_iter().collect();
    /// assert_eq!(tied.second_largest(), None);
    /// ```
    #[must_use]
    pub fn second_largest(&self) -> Option<&T> {
        match &self.inner {
            DistinctSetInner::Empty => None,
            DistinctSetInner::Small(vec) => {
                let largest = vec.iter().max()?;
                vec.iter().filter(|&item| item < largest).max()
            }
            DistinctSetInner::Ranked(ranked) => ranked.as_slice().get(1),
        }
    }

    /// Returns a reference to the element at the given 1-indexed descending
    /// rank, or `None` when the rank is 0 or exceeds the collection size.
    ///
    /// Rank 1 is the maximum, rank `len()` the minimum.
    ///
    /// # Complexity
    ///
    /// O(n log n) for the Small state (ranks a temporary view of the inline
    /// elements), O(1) for the Ranked state (direct index).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankset::persistent::DistinctSet;
    ///
    /// let collection: DistinctSet<i32> = [20, 40, 10, 30].into_iter().collect();
    ///
    /// assert_eq!(collection.nth_largest(1), Some(&40));
    /// assert_eq!(collection.nth_largest(3), Some(&20));
    /// assert_eq!(collection.nth_largest(0), None);
    /// assert_eq!(collection.nth_largest(5), None);
    /// ```
    #[must_use]
    pub fn nth_largest(&self, rank: usize) -> Option<&T> {
        if rank == 0 {
            return None;
        }

        match &self.inner {
            DistinctSetInner::Empty => None,
            DistinctSetInner::Small(vec) => {
                let mut ranked: SmallVec<[&T; INLINE_CAPACITY]> = vec.iter().collect();
                ranked.sort_unstable_by(|left, right| right.cmp(left));
                ranked.get(rank - 1).copied()
            }
            DistinctSetInner::Ranked(ranked) => ranked.as_slice().get(rank - 1),
        }
    }

    /// Returns an iterator over references to the elements.
    ///
    /// Iteration order is unspecified; use [`iter_ranked`](Self::iter_ranked)
    /// for descending rank order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> DistinctSetIterator<'_, T> {
        DistinctSetIterator {
            inner: match &self.inner {
                DistinctSetInner::Empty => [].iter(),
                DistinctSetInner::Small(vec) => vec.as_slice().iter(),
                DistinctSetInner::Ranked(ranked) => ranked.as_slice().iter(),
            },
        }
    }

    /// Returns an iterator over references to the elements in descending
    /// rank order (largest first).
    ///
    /// # Complexity
    ///
    /// - Small state: O(n log n) to rank a temporary view of the inline
    ///   elements (no heap allocation)
    /// - Ranked state: O(1) for iterator creation, O(n) for full traversal
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankset::persistent::DistinctSet;
    ///
    /// let collection: DistinctSet<i32> = [2, 9, 4].into_iter().collect();
    /// let ranked: Vec<&i32> = collection.iter_ranked().collect();
    /// assert_eq!(ranked, vec![&9, &4, &2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_ranked(&self) -> DistinctSetRankedIterator<'_, T> {
        match &self.inner {
            DistinctSetInner::Empty => DistinctSetRankedIterator {
                inner: RankedIteratorInner::Shared([].iter()),
            },
            DistinctSetInner::Small(vec) => {
                let mut ranked: SmallVec<[&T; INLINE_CAPACITY]> = vec.iter().collect();
                ranked.sort_unstable_by(|left, right| right.cmp(left));
                DistinctSetRankedIterator {
                    inner: RankedIteratorInner::Inline(ranked, 0),
                }
            }
            DistinctSetInner::Ranked(ranked) => DistinctSetRankedIterator {
                inner: RankedIteratorInner::Shared(ranked.as_slice().iter()),
            },
        }
    }

    /// Creates a `DistinctSet` from a strictly descending, deduplicated
    /// `Vec`, avoiding the sort that [`FromIterator`] performs.
    ///
    /// # Preconditions
    ///
    /// The vector must be sorted in strictly descending order (deduplicated).
    /// In debug builds this is validated with `debug_assert!`; in release
    /// builds invalid input yields an incorrect collection state (logic
    /// error, not memory unsafety).
    ///
    /// # Complexity
    ///
    /// O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankset::persistent::DistinctSet;
    ///
    /// let collection = DistinctSet::from_ranked_vec(vec![50, 30, 10]);
    /// assert_eq!(collection.largest(), Some(&50));
    /// ```
    #[must_use]
    pub fn from_ranked_vec(vec: Vec<T>) -> Self {
        #[cfg(debug_assertions)]
        debug_assert!(
            is_strictly_descending(&vec),
            "{}",
            RANKED_INVARIANT_PANIC_MESSAGE
        );

        if vec.is_empty() {
            return Self::new();
        }

        if vec.len() <= INLINE_CAPACITY {
            Self {
                inner: DistinctSetInner::Small(SmallVec::from_vec(vec)),
            }
        } else {
            Self {
                inner: DistinctSetInner::Ranked(RankedVec::from_ranked(vec)),
            }
        }
    }

    /// Returns a `Vec` containing clones of all elements in descending rank
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rankset::persistent::DistinctSet;
    ///
    /// let collection: DistinctSet<i32> = [1, 3, 2].into_iter().collect();
    /// assert_eq!(collection.to_ranked_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn to_ranked_vec(&self) -> Vec<T> {
        match &self.inner {
            DistinctSetInner::Empty => Vec::new(),
            DistinctSetInner::Small(vec) => {
                let mut ranked: Vec<T> = vec.iter().cloned().collect();
                ranked.sort_unstable_by(|left, right| right.cmp(left));
                ranked
            }
            DistinctSetInner::Ranked(ranked) => ranked.as_slice().to_vec(),
        }
    }

    /// Returns `true` if the collection is in the Empty state.
    ///
    /// This is primarily useful for testing state transitions.
    #[cfg(test)]
    const fn is_empty_state(&self) -> bool {
        matches!(self.inner, DistinctSetInner::Empty)
    }

    /// Returns `true` if the collection is in the Small state.
    ///
    /// This is primarily useful for testing state transitions.
    #[cfg(test)]
    const fn is_small_state(&self) -> bool {
        matches!(self.inner, DistinctSetInner::Small(_))
    }

    /// Returns `true` if the collection is in the Ranked state.
    ///
    /// This is primarily useful for testing state transitions.
    #[cfg(test)]
    const fn is_ranked_state(&self) -> bool {
        matches!(self.inner, DistinctSetInner::Ranked(_))
    }
}

impl<T: Clone + Ord> Default for DistinctSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for DistinctSet<T> {
    /// Builds the collection from arbitrary input: duplicates are collapsed
    /// and order is irrelevant.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        values.sort_unstable_by(|left, right| right.cmp(left));
        values.dedup();
        Self::from_ranked_vec(values)
    }
}

/// Iterator over references to elements in a `DistinctSet`, in unspecified
/// order.
pub struct DistinctSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for DistinctSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for DistinctSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Iterator over references to elements in descending rank order.
///
/// The Small state ranks a temporary inline view (`SmallVec` of references,
/// no heap allocation); the Ranked state iterates the shared slice directly.
pub struct DistinctSetRankedIterator<'a, T> {
    inner: RankedIteratorInner<'a, T>,
}

enum RankedIteratorInner<'a, T> {
    Inline(SmallVec<[&'a T; INLINE_CAPACITY]>, usize),
    Shared(std::slice::Iter<'a, T>),
}

impl<'a, T> Iterator for DistinctSetRankedIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            RankedIteratorInner::Inline(elements, index) => {
                elements.get(*index).copied().inspect(|_| *index += 1)
            }
            RankedIteratorInner::Shared(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.inner {
            RankedIteratorInner::Inline(elements, index) => elements.len() - *index,
            RankedIteratorInner::Shared(iter) => iter.len(),
        };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for DistinctSetRankedIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        match &self.inner {
            RankedIteratorInner::Inline(elements, index) => elements.len() - *index,
            RankedIteratorInner::Shared(iter) => iter.len(),
        }
    }
}

impl<T: Clone + Ord + std::fmt::Debug> std::fmt::Debug for DistinctSet<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.iter_ranked()).finish()
    }
}

impl<T: Clone + Ord> PartialEq for DistinctSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_ranked().eq(other.iter_ranked())
    }
}

impl<T: Clone + Ord> Eq for DistinctSet<T> {}

impl<'a, T: Clone + Ord> IntoIterator for &'a DistinctSet<T> {
    type Item = &'a T;
    type IntoIter = DistinctSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for DistinctSet<T>
where
    T: serde::Serialize + Clone + Ord,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.iter_ranked() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct DistinctSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> DistinctSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for DistinctSetVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = DistinctSet<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of values")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Note: input is not trusted to be ranked or deduplicated;
        // FromIterator re-establishes both invariants.
        let mut values: Vec<T> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(value) = access.next_element()? {
            values.push(value);
        }
        Ok(values.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for DistinctSet<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(DistinctSetVisitor::new())
    }
}

/// Message constant for panic when `from_ranked_vec` receives invalid input.
const RANKED_INVARIANT_PANIC_MESSAGE: &str =
    "from_ranked_vec requires strictly decreasing elements (descending + deduplicated)";

#[cfg(debug_assertions)]
#[inline]
fn is_strictly_descending<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|window| window[0] > window[1])
}

static_assertions::assert_impl_all!(DistinctSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(DistinctSet<String>: Send, Sync);
