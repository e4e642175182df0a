//! Composable lazy iterator adapters, also known as "pipe algorithms".
//!
//! Every adapter in this crate consumes one or more input sequences and
//! produces a new sequence one element at a time. Nothing is computed until
//! the consumer pulls, and no intermediate collections are built. Because each
//! adapter is itself an [`Iterator`], adapters compose freely.
//!
//! See the [`pipe`] and [`sorted`] submodules for the adapters, and the
//! [`soundex`] submodule for an encoder built entirely out of them.
//!
//! # Operations
//!
//! - [`pipe::Concat`]: Append sequences end-to-end.
//! - [`pipe::Filter`]: Keep the elements a predicate accepts.
//! - [`pipe::ZipWith`]: Apply a function across sequences, position by position.
//! - [`pipe::Dedupe`]: Collapse runs of equal adjacent elements.
//! - [`pipe::TakeFirst`], [`pipe::PadTo`], [`pipe::DropFirst`]: Bound a sequence.
//! - [`sorted::Merge`]: Merge two sorted sequences.
//! - [`sorted::Union`], [`sorted::Intersection`], [`sorted::Difference`],
//!   [`sorted::SymmetricDifference`]: Set algebra over sorted, unique sequences.
//! - [`materialize`]: Drain a sequence into an accumulator.
//!
//! # Examples
//!
//! Merge two sorted sequences and remove the elements of a third:
//!
//! ```rust
//! use pipe_algorithms::prelude::*;
//!
//! let odds = [1, 3, 5, 7];
//! let evens = [2, 4, 6];
//! let out: Vec<_> = odds
//!     .into_iter()
//!     .merge_sorted(evens)
//!     .difference([3, 4])
//!     .collect();
//! assert_eq!(out, [1, 2, 5, 6, 7]);
//! ```
//!
//! Compute a soundex code:
//!
//! ```rust
//! use pipe_algorithms::soundex::soundex;
//!
//! let code: String = soundex("Tymczak".chars()).collect();
//! assert_eq!(code, "T-522");
//! ```
//!
//! # Exhaustion
//!
//! Exhaustion is `None`. Every adapter fuses its inputs, so once an adapter
//! returns `None` it keeps returning `None`: all adapters implement
//! [`FusedIterator`][core::iter::FusedIterator].
//!
//! # Configuration
//!
//! Adapters are configured through consuming builder methods (`by`,
//! `set_bound`, `set_fill`, ...). Configuration must happen before the first
//! pull; reconfiguring a started adapter panics with a [`Misuse`] message.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod utils;

/// The pipe algorithms prelude.
pub mod prelude {
    pub use super::pipe::PipeExt as _;

    pub use super::pipe::Concat as _;
    #[cfg(feature = "alloc")]
    pub use super::pipe::ZipWith as _;
}

pub mod order;
pub mod pipe;
pub mod sorted;
pub mod soundex;

#[cfg(feature = "alloc")]
mod materialize;

pub use error::Misuse;
#[cfg(feature = "alloc")]
pub use materialize::{materialize, materialize_into, Accumulate};
pub use utils::Countdown;

/// Helper types for concatenating tuples of sequences.
pub mod tuple {
    pub use crate::pipe::concat::tuple::{
        Concat0, Concat1, Concat10, Concat11, Concat12, Concat2, Concat3, Concat4, Concat5,
        Concat6, Concat7, Concat8, Concat9,
    };
}

/// Helper types for concatenating fixed-length arrays of sequences.
pub mod array {
    pub use crate::pipe::concat::array::Concat;
}

/// Helper types for sequences stored in a `Vec<T>`.
#[cfg(feature = "alloc")]
pub mod vec {
    pub use crate::pipe::concat::vec::Concat;
    pub use crate::pipe::zip::{ZipLongest, ZipShortest};
}
