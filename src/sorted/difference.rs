use core::cmp::Ordering;
use core::iter::Fuse;

use crate::order::{Comparator, Natural};
use crate::pipe::Lookahead;
use crate::utils::Lifecycle;

/// A sequence of the elements of one sorted sequence that are not in
/// another ("and not").
///
/// Each element of the right input cancels at most one equal element of the
/// left input, so inputs with duplicates behave like multisets. Once the right
/// input is exhausted the rest of the left input is produced as is.
///
/// This `struct` is created by the [`difference`] and [`difference_by`]
/// methods on [`PipeExt`]. See their documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::sorted::Difference;
///
/// let s: Vec<_> = Difference::new([1, 2, 3, 4], [2, 4, 5]).collect();
/// assert_eq!(s, [1, 3]);
/// ```
///
/// [`difference`]: crate::pipe::PipeExt::difference
/// [`difference_by`]: crate::pipe::PipeExt::difference_by
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct Difference<I: Iterator, J: Iterator, C = Natural> {
    left: Fuse<I>,
    right: Lookahead<J>,
    comparator: C,
    lifecycle: Lifecycle,
}

impl<I, J> Difference<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    /// Remove the elements of `right` from `left`, both sorted by their
    /// natural ordering.
    pub fn new<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator<IntoIter = I>,
        R: IntoIterator<IntoIter = J>,
    {
        Self {
            left: left.into_iter().fuse(),
            right: Lookahead::new(right),
            comparator: Natural,
            lifecycle: Lifecycle::new(),
        }
    }
}

impl_sorted_common!(Difference);

impl<I, J, C> Iterator for Difference<I, J, C>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    C: Comparator<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        let mut x = self.left.next()?;
        loop {
            let Some(y) = self.right.get() else {
                return Some(x);
            };
            match self.comparator.compare(&x, y) {
                Ordering::Less => return Some(x),
                Ordering::Greater => {
                    self.right.advance();
                }
                Ordering::Equal => {
                    x = self.left.next()?;
                    self.right.advance();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.left.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorted::tests::{LEFT, RIGHTS};

    #[test]
    fn difference_all() {
        assert!(Difference::new([0; 0], []).next().is_none());
        assert!(Difference::new([1], []).eq([1]));
        assert!(Difference::new([], [1]).next().is_none());
        assert!(Difference::new([1], [1]).next().is_none());
    }

    #[test]
    fn difference_against_fixtures() {
        let expected: [&[i32]; 8] = [
            &[1, 2, 3, 4],
            &[2, 3, 4],
            &[1, 3, 4],
            &[1, 2, 4],
            &[1, 2, 3],
            &[1, 2, 3, 4],
            &[1, 4],
            &[1, 3],
        ];
        for (right, expected) in RIGHTS.into_iter().zip(expected) {
            let s = Difference::new(LEFT, right.iter().copied());
            assert!(s.eq(expected.iter().copied()), "{LEFT:?} - {right:?}");
        }
    }

    #[test]
    fn duplicates_cancel_one_for_one() {
        assert!(Difference::new([1, 1, 2, 2, 2], [1, 2, 2]).eq([1, 2]));
    }

    #[test]
    fn left_exhaustion_ends_the_sequence() {
        let mut s = Difference::new([1, 2], [2, 3, 4]);
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }
}
