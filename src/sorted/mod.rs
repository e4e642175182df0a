//! Algorithms over sorted sequences.
//!
//! Every algorithm here takes two sequences sorted by the same
//! [`Comparator`][crate::order::Comparator] (by default the natural ordering)
//! and produces a sorted sequence. Sortedness is assumed, never checked.
//!
//! [`Union`], [`Intersection`] and [`SymmetricDifference`] additionally assume
//! each input is free of duplicates, i.e. that the inputs are sets. [`Merge`]
//! and [`Difference`] work on inputs with duplicates too.
//!
//! | Name                    | Produces                                   | Ties (`left == right`)    |
//! | ---                     | ---                                        | ---                       |
//! | [`Merge`]               | every element of both inputs               | left first, then right    |
//! | [`Union`]               | elements in either input                   | left element, once        |
//! | [`Intersection`]        | elements in both inputs                    | left element, once        |
//! | [`Difference`]          | elements of the left input only            | dropped                   |
//! | [`SymmetricDifference`] | elements in exactly one input              | dropped                   |
//!
//! # Examples
//!
//! ```
//! use pipe_algorithms::prelude::*;
//!
//! let a = [1, 2, 3, 4];
//! let b = [2, 4, 5];
//!
//! assert!(a.into_iter().union(b).eq([1, 2, 3, 4, 5]));
//! assert!(a.into_iter().intersection(b).eq([2, 4]));
//! assert!(a.into_iter().difference(b).eq([1, 3]));
//! assert!(a.into_iter().symmetric_difference(b).eq([1, 3, 5]));
//! ```

// Adds `by`, `Debug` and `FusedIterator`, shared by the two-input algorithms.
// Defined before the submodules so they can see it.
macro_rules! impl_sorted_common {
    ($StructName:ident) => {
        impl<I, J, C> $StructName<I, J, C>
        where
            I: Iterator,
            J: Iterator<Item = I::Item>,
        {
            /// Use `comparator` to order elements.
            ///
            /// # Panics
            ///
            /// Panics if iteration has already begun.
            #[track_caller]
            pub fn by<D>(self, comparator: D) -> $StructName<I, J, D>
            where
                D: FnMut(&I::Item, &I::Item) -> core::cmp::Ordering,
            {
                self.lifecycle.configure(stringify!($StructName), "by");
                $StructName {
                    left: self.left,
                    right: self.right,
                    comparator,
                    lifecycle: self.lifecycle,
                }
            }
        }

        impl<I, J, C> core::fmt::Debug for $StructName<I, J, C>
        where
            I: Iterator + core::fmt::Debug,
            J: Iterator<Item = I::Item> + core::fmt::Debug,
            I::Item: core::fmt::Debug,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($StructName))
                    .field("left", &self.left)
                    .field("right", &self.right)
                    .finish()
            }
        }

        impl<I, J, C> core::iter::FusedIterator for $StructName<I, J, C>
        where
            I: Iterator,
            J: Iterator<Item = I::Item>,
            C: $crate::order::Comparator<I::Item>,
        {
        }
    };
}

mod difference;
mod intersection;
mod merge;
mod symmetric_difference;
mod union;

pub use difference::Difference;
pub use intersection::Intersection;
pub use merge::Merge;
pub use symmetric_difference::SymmetricDifference;
pub use union::Union;
