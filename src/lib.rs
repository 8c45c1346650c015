//! # rankset
//!
//! Ranked selection over distinct values.
//!
//! ## Overview
//!
//! This library answers one family of questions: given a finite collection
//! of comparable values, what is the value at a given *descending rank*
//! once duplicates are collapsed? Rank 1 is the maximum, rank 2 is the
//! runner-up (the largest value strictly less than the maximum), and so on.
//! It provides:
//!
//! - **Selection**: pure functions over any `IntoIterator`, including a
//!   single-pass, allocation-free runner-up scan
//! - **Persistent Collections**: [`DistinctSet`], an immutable collection of
//!   distinct values held in descending rank order with structural sharing
//!
//! Fewer than two distinct values is not an error: rank queries beyond the
//! number of distinct values yield `None`.
//!
//! ## Feature Flags
//!
//! - `select`: Pure selection functions
//! - `persistent`: The `DistinctSet` persistent collection
//! - `serde`: Serialization support for `DistinctSet`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rankset::prelude::*;
//!
//! assert_eq!(second_largest_distinct([3, 5, 2, 5, 6, 6, 1]), Some(5));
//! assert_eq!(second_largest_distinct([7, 7, 7]), None);
//! ```
//!
//! [`DistinctSet`]: persistent::DistinctSet

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use rankset::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "select")]
    pub use crate::select::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "select")]
pub mod select;

#[cfg(feature = "persistent")]
pub mod persistent;
