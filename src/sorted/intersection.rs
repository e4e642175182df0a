use core::cmp::Ordering;

use crate::order::{Comparator, Natural};
use crate::pipe::Lookahead;
use crate::utils::Lifecycle;

/// A sequence of the elements in both of two sorted, unique sequences
/// ("and").
///
/// Stability: every produced element comes from the left input. The
/// sequence ends as soon as either input is exhausted.
///
/// This `struct` is created by the [`intersection`] and [`intersection_by`]
/// methods on [`PipeExt`]. See their documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::sorted::Intersection;
///
/// let s: Vec<_> = Intersection::new([1, 3, 5], [2, 3, 4, 5]).collect();
/// assert_eq!(s, [3, 5]);
/// ```
///
/// [`intersection`]: crate::pipe::PipeExt::intersection
/// [`intersection_by`]: crate::pipe::PipeExt::intersection_by
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct Intersection<I: Iterator, J: Iterator, C = Natural> {
    left: Lookahead<I>,
    right: Lookahead<J>,
    comparator: C,
    lifecycle: Lifecycle,
}

impl<I, J> Intersection<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    /// Intersect `left` and `right`, both sorted by their natural ordering.
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

impl_sorted_common!(Intersection);

impl<I, J, C> Iterator for Intersection<I, J, C>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    C: Comparator<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        loop {
            let x = self.left.get()?;
            let y = self.right.get()?;
            match self.comparator.compare(x, y) {
                Ordering::Less => {
                    self.left.advance();
                }
                Ordering::Greater => {
                    self.right.advance();
                }
                Ordering::Equal => {
                    self.right.advance();
                    return self.left.consume();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, h1) = self.left.size_hint();
        let (_, h2) = self.right.size_hint();
        let high = match (h1, h2) {
            (Some(h1), Some(h2)) => Some(core::cmp::min(h1, h2)),
            (high, None) | (None, high) => high,
        };
        (0, high)
    }
}
