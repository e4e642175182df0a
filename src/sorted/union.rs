use core::cmp::Ordering;

use crate::order::{Comparator, Natural};
use crate::pipe::Lookahead;
use crate::utils::Lifecycle;

/// A sequence of the elements in either of two sorted, unique sequences
/// ("or").
///
/// Stability: when an element occurs in both inputs, the left input's
/// element is produced.
///
/// This `struct` is created by the [`union`] and [`union_by`] methods on
/// [`PipeExt`]. See their documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::sorted::Union;
///
/// let s: Vec<_> = Union::new([1, 3, 4], [2, 3, 4]).collect();
/// assert_eq!(s, [1, 2, 3, 4]);
/// ```
///
/// [`union`]: crate::pipe::PipeExt::union
/// [`union_by`]: crate::pipe::PipeExt::union_by
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct Union<I: Iterator, J: Iterator, C = Natural> {
    left: Lookahead<I>,
    right: Lookahead<J>,
    comparator: C,
    lifecycle: Lifecycle,
}

impl<I, J> Union<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    /// Unite `left` and `right`, both sorted by their natural ordering.
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

impl_sorted_common!(Union);

impl<I, J, C> Iterator for Union<I, J, C>
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
            Ordering::Less => self.left.consume(),
            Ordering::Greater => self.right.consume(),
            Ordering::Equal => {
                self.right.advance();
                self.left.consume()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (l1, h1) = self.left.size_hint();
        let (l2, h2) = self.right.size_hint();
        let high = match (h1, h2) {
            (Some(h1), Some(h2)) => h1.checked_add(h2),
            _ => None,
        };
        (core::cmp::max(l1, l2), high)
    }
}
