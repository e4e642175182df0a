//! Lazy adapters over a single sequence, or over several sequences in order.
//!
//! Most adapters here are available as methods through [`PipeExt`]. The
//! multi-input adapters ([`Concat`] and [`ZipWith`]) are implemented for
//! tuples, arrays and vectors of sequences instead.
//!
//! # Examples
//!
//! ```
//! use pipe_algorithms::prelude::*;
//!
//! let s: Vec<_> = [0, 3, 3, 0, 5, 5, 5, 8]
//!     .into_iter()
//!     .filter_truthy()
//!     .dedupe()
//!     .drop_first(1)
//!     .pad_to(4, 0)
//!     .collect();
//! assert_eq!(s, [5, 8, 0, 0]);
//! ```
//!
//! | Name          | Produces                                               |
//! | ---           | ---                                                    |
//! | [`Concat`]    | every element of each input, one input after another   |
//! | [`Filter`]    | the elements the predicate accepts                     |
//! | [`ZipWith`]   | `f` applied to the elements at each position           |
//! | [`Dedupe`]    | the first element of each run of equal elements        |
//! | [`TakeFirst`] | at most `n` elements                                   |
//! | [`PadTo`]     | at least `n` elements                                  |
//! | [`DropFirst`] | everything after the first `n` elements                |

pub(crate) mod concat;
mod dedupe;
mod drop_first;
mod filter;
mod lookahead;
mod pad_to;
mod pipe_ext;
mod take_first;
#[cfg(feature = "alloc")]
pub(crate) mod zip;

pub use concat::Concat;
pub use dedupe::Dedupe;
pub use drop_first::DropFirst;
pub use filter::{Filter, IsTruthy, Predicate, Truthy};
pub use lookahead::Lookahead;
pub use pad_to::PadTo;
pub use pipe_ext::PipeExt;
pub use take_first::TakeFirst;
#[cfg(feature = "alloc")]
pub use zip::{ZipLongest, ZipShortest, ZipWith};
