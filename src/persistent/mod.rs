//! Persistent (immutable) collections over distinct values.
//!
//! This module provides [`DistinctSet`], an immutable collection that
//! collapses duplicates and keeps its elements queryable by descending
//! rank, using structural sharing to minimize copying.
//!
//! # Structural Sharing
//!
//! Operations like `insert` and `remove` create new versions without
//! modifying the original; once a collection grows past its inline
//! capacity, versions share their sorted backing storage through `Arc`.
//!
//! # Examples
//!
//! ```rust
//! use rankset::persistent::DistinctSet;
//!
//! let scores: DistinctSet<i32> = [3, 5, 2, 5, 6, 6, 1].into_iter().collect();
//! assert_eq!(scores.second_largest(), Some(&5));
//!
//! // Persistence: the original collection is preserved
//! let rescored = scores.insert(8);
//! assert_eq!(scores.largest(), Some(&6));   // Original unchanged
//! assert_eq!(rescored.largest(), Some(&8)); // New version
//! ```

mod distinct_set;

pub use distinct_set::{DistinctSet, DistinctSetIterator, DistinctSetRankedIterator};
