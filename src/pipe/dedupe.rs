use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

use crate::order::{Comparator, Natural};
use crate::utils::Lifecycle;

use super::Lookahead;

/// A sequence that collapses runs of equal adjacent elements into one.
///
/// Two elements are equal when the comparator returns
/// [`Ordering::Equal`]. The element kept for each run is the first element of
/// that run.
///
/// This `struct` is created by the [`dedupe`] and [`dedupe_by`] methods on
/// [`PipeExt`]. See their documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::pipe::Dedupe;
///
/// let s: Vec<_> = Dedupe::new([3, 3, 3, 5, 5, 3, 3]).collect();
/// assert_eq!(s, [3, 5, 3]);
///
/// let s: Vec<_> = Dedupe::new(["a", "B", "b", "A"])
///     .by(|a: &&str, b: &&str| a.to_lowercase().cmp(&b.to_lowercase()))
///     .collect();
/// assert_eq!(s, ["a", "B", "A"]);
/// ```
///
/// [`dedupe`]: crate::pipe::PipeExt::dedupe
/// [`dedupe_by`]: crate::pipe::PipeExt::dedupe_by
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct Dedupe<I: Iterator, C = Natural> {
    input: Lookahead<I>,
    comparator: C,
    lifecycle: Lifecycle,
}

impl<I: Iterator> Dedupe<I> {
    /// Collapse runs of equal adjacent elements of `input`.
    pub fn new<S>(input: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            input: Lookahead::new(input),
            comparator: Natural,
            lifecycle: Lifecycle::new(),
        }
    }
}

impl<I: Iterator, C> Dedupe<I, C> {
    /// Use `comparator` to decide which adjacent elements are equal.
    ///
    /// # Panics
    ///
    /// Panics if iteration has already begun.
    #[track_caller]
    pub fn by<D>(self, comparator: D) -> Dedupe<I, D>
    where
        D: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        self.lifecycle.configure("Dedupe", "by");
        Dedupe {
            input: self.input,
            comparator,
            lifecycle: self.lifecycle,
        }
    }
}

impl<I, C> Iterator for Dedupe<I, C>
where
    I: Iterator,
    C: Comparator<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        let first = self.input.consume()?;
        while let Some(next) = self.input.get() {
            if self.comparator.compare(&first, next) != Ordering::Equal {
                break;
            }
            self.input.advance();
        }
        Some(first)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.input.size_hint();
        (usize::from(low > 0), high)
    }
}

impl<I, C> FusedIterator for Dedupe<I, C>
where
    I: Iterator,
    C: Comparator<I::Item>,
{
}

impl<I, C> fmt::Debug for Dedupe<I, C>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dedupe").field("input", &self.input).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dedupe<const N: usize>(input: [i32; N]) -> impl Iterator<Item = i32> {
        Dedupe::new(input)
    }

    #[test]
    fn runs() {
        assert!(dedupe([]).next().is_none());
        assert!(dedupe([3]).eq([3]));
        assert!(dedupe([3, 5]).eq([3, 5]));
        assert!(dedupe([3, 5, 3]).eq([3, 5, 3]));
        assert!(dedupe([3, 3, 5]).eq([3, 5]));
        assert!(dedupe([3, 5, 5]).eq([3, 5]));
        assert!(dedupe([3, 3, 3, 3, 3, 5, 5, 5, 5, 5, 3, 3]).eq([3, 5, 3]));
    }

    #[test]
    fn keeps_first_of_each_run() {
        let a = [1u8];
        let b = [1u8];
        let mut s = Dedupe::new([&a[..], &b[..]]);
        let kept = s.next().map(<[u8]>::as_ptr);
        assert_eq!(kept, Some(a.as_ptr()));
        assert_ne!(kept, Some(b.as_ptr()));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn custom_comparator() {
        let s = Dedupe::new([1, 11, 21, 2, 12, 3]).by(|a: &i32, b: &i32| (a % 10).cmp(&(b % 10)));
        assert!(s.eq([1, 2, 3]));
    }

    #[test]
    fn exhaustion_is_stable() {
        let mut s = dedupe([7, 7]);
        assert_eq!(s.next(), Some(7));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    #[should_panic(expected = "`Dedupe::by` must be called before iteration begins")]
    fn by_after_start() {
        let mut s = Dedupe::new([1, 2]);
        s.next();
        let _ = s.by(|a: &i32, b: &i32| a.cmp(b));
    }
}
