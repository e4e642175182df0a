//! Three-way comparison functions.
//!
//! The sorted-sequence algorithms and [`Dedupe`][crate::pipe::Dedupe] decide
//! what "sorted" and "equal" mean through a [`Comparator`]. By default they use
//! [`Natural`], which is [`Ord::cmp`]. Any closure of the shape
//! `FnMut(&T, &T) -> Ordering` is a comparator too.
//!
//! # Examples
//!
//! ```
//! use core::cmp::Ordering;
//! use pipe_algorithms::order::{Comparator, Natural};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! let mut by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"xyz"), Ordering::Equal);
//! ```

use core::cmp::Ordering;

/// A three-way ordering over `T`.
///
/// Implementations must behave like a total order for the algorithms using
/// them to produce meaningful results; this is assumed, never checked.
pub trait Comparator<T: ?Sized> {
    /// Compare `a` against `b`.
    fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

/// The natural ordering of `T`, as given by its [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_matches_ord() {
        assert_eq!(Natural.compare(&3, &3), Ordering::Equal);
        assert_eq!(Natural.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn closure_is_a_comparator() {
        fn reversed<C: Comparator<i32>>(mut comp: C) -> Ordering {
            comp.compare(&1, &2)
        }
        assert_eq!(reversed(|a: &i32, b: &i32| b.cmp(a)), Ordering::Greater);
    }
}
