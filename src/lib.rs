//! # Seqkit
//!
//! Lazy, single-pass sequence pipelines over typed record collections.
//!
//! A [`Sequence`] wraps a pull-based iterator and composes intermediate
//! adapters (filter, map, flat_map, distinct, limit, skip) with terminal
//! reductions (collect, min/max, reduce, group_by, sum/average, joining).
//! Every sequence carries an explicit bounded/unbounded flag so that a
//! fully-consuming terminal on an infinite pipeline fails fast instead of
//! diverging.
//!
//! ## Modules
//!
//! - `error` - Crate error type and result alias
//! - `fixtures` - Deterministic people and car datasets loaded from JSON
//! - `sequence` - The pipeline type, adapters, and pluggable accumulators
//!
//! ## Example
//!
//! ```rust
//! use seqkit::Sequence;
//!
//! # fn example() -> seqkit::Result<()> {
//! let evens: Vec<u32> = Sequence::iterate(0u32, |n| n + 2)
//!     .limit(5)
//!     .collect()?;
//! assert_eq!(evens, vec![0, 2, 4, 6, 8]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fixtures;
pub mod sequence;

pub use error::{Error, Result};
pub use sequence::Sequence;
