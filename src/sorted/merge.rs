use core::cmp::Ordering;

use crate::order::{Comparator, Natural};
use crate::pipe::Lookahead;
use crate::utils::Lifecycle;

/// A sequence that merges two sorted sequences into one sorted sequence.
///
/// Stability: when equal elements occur in both inputs, all of the left
/// input's equal elements come before all of the right input's.
///
/// This `struct` is created by the [`merge_sorted`] and [`merge_sorted_by`]
/// methods on [`PipeExt`]. See their documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::sorted::Merge;
///
/// let s: Vec<_> = Merge::new([2, 4], [1, 3, 5, 7]).collect();
/// assert_eq!(s, [1, 2, 3, 4, 5, 7]);
///
/// // Sorted by descending order instead.
/// let s: Vec<_> = Merge::new([4, 2], [7, 5, 3, 1])
///     .by(|a: &i32, b: &i32| b.cmp(a))
///     .collect();
/// assert_eq!(s, [7, 5, 4, 3, 2, 1]);
/// ```
///
/// [`merge_sorted`]: crate::pipe::PipeExt::merge_sorted
/// [`merge_sorted_by`]: crate::pipe::PipeExt::merge_sorted_by
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct Merge<I: Iterator, J: Iterator, C = Natural> {
    left: Lookahead<I>,
    right: Lookahead<J>,
    comparator: C,
    lifecycle: Lifecycle,
}

impl<I, J> Merge<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    /// Merge `left` and `right`, both sorted by their natural ordering.
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator<IntoIter = I>,
        R: IntoIterator<IntoIter = J>,
    {
        Self {
            left: Lookahead::new(left),
            right: Lookahead::new(right),
            comparator: Natural,
            lifecycle: Lifecycle::new(),
        }
    }
}

impl_sorted_common!(Merge);

impl<I, J, C> Iterator for Merge<I, J, C>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    C: Comparator<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        let Some(x) = self.left.get() else {
            return self.right.consume();
        };
        let Some(y) = self.right.get() else {
            return self.left.consume();
        };
        match self.comparator.compare(x, y) {
            Ordering::Greater => self.right.consume(),
            Ordering::Less | Ordering::Equal => self.left.consume(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (l1, h1) = self.left.size_hint();
        let (l2, h2) = self.right.size_hint();
        let high = match (h1, h2) {
            (Some(h1), Some(h2)) => h1.checked_add(h2),
            _ => None,
        };
        (l1.saturating_add(l2), high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_all() {
        assert!(Merge::new([0; 0], []).next().is_none());
        assert!(Merge::new([3], []).eq([3]));
        assert!(Merge::new([], [3]).eq([3]));
        assert!(Merge::new([3], [3]).eq([3, 3]));
        assert!(Merge::new([2, 4], [1, 3, 5, 7]).eq([1, 2, 3, 4, 5, 7]));
        assert!(Merge::new([2, 4], [3, 5, 7]).eq([2, 3, 4, 5, 7]));
        assert!(Merge::new([1, 3, 5, 7], [2, 4]).eq([1, 2, 3, 4, 5, 7]));
        assert!(Merge::new([3, 5, 7], [2, 4]).eq([2, 3, 4, 5, 7]));
    }

    #[test]
    fn left_wins_ties() {
        let a = [7];
        let b = [7];
        let mut s = Merge::new([&a], [&b]);
        assert!(s.next().is_some_and(|x| core::ptr::eq(x, &a)));
        assert!(s.next().is_some_and(|x| core::ptr::eq(x, &b)));
        assert!(s.next().is_none());
    }

    #[test]
    fn keeps_duplicates() {
        assert!(Merge::new([1, 1, 2], [1, 2, 2]).eq([1, 1, 1, 2, 2, 2]));
    }

    #[test]
    fn exhaustion_is_stable() {
        let mut s = Merge::new([1], [2]);
        assert_eq!(s.size_hint(), (2, Some(2)));
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.next(), Some(2));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    #[should_panic(expected = "`Merge::by` must be called before iteration begins")]
    fn by_after_start() {
        let mut s = Merge::new([1], [2]);
        s.next();
        let _ = s.by(|a: &i32, b: &i32| b.cmp(a));
    }
}
