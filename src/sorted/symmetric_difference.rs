use core::cmp::Ordering;

use crate::order::{Comparator, Natural};
use crate::pipe::Lookahead;
use crate::utils::Lifecycle;

/// A sequence of the elements in exactly one of two sorted, unique sequences
/// ("xor").
///
/// Once either input is exhausted, the entire rest of the other input is
/// produced.
///
/// This `struct` is created by the [`symmetric_difference`] and
/// [`symmetric_difference_by`] methods on [`PipeExt`]. See their
/// documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::sorted::SymmetricDifference;
///
/// let s: Vec<_> = SymmetricDifference::new([1, 2, 3, 4], [2, 4, 5]).collect();
/// assert_eq!(s, [1, 3, 5]);
/// ```
///
/// [`symmetric_difference`]: crate::pipe::PipeExt::symmetric_difference
/// [`symmetric_difference_by`]: crate::pipe::PipeExt::symmetric_difference_by
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct SymmetricDifference<I: Iterator, J: Iterator, C = Natural> {
    left: Lookahead<I>,
    right: Lookahead<J>,
    comparator: C,
    lifecycle: Lifecycle,
}

impl<I, J> SymmetricDifference<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    /// Keep the elements found in only one of `left` and `right`, both sorted
    /// by their natural ordering.
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

impl_sorted_common!(SymmetricDifference);

impl<I, J, C> Iterator for SymmetricDifference<I, J, C>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    C: Comparator<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        loop {
            let Some(x) = self.left.get() else {
                return self.right.consume();
            };
            let Some(y) = self.right.get() else {
                return self.left.consume();
            };
            match self.comparator.compare(x, y) {
                Ordering::Less => return self.left.consume(),
                Ordering::Greater => return self.right.consume(),
                Ordering::Equal => {
                    self.left.advance();
                    self.right.advance();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, h1) = self.left.size_hint();
        let (_, h2) = self.right.size_hint();
        let high = match (h1, h2) {
            (Some(h1), Some(h2)) => h1.checked_add(h2),
            _ => None,
        };
        (0, high)
    }
}
