use core::fmt;
use core::iter::FusedIterator;

use super::Concat as ConcatTrait;

/// A sequence that appends a fixed number of sequences end-to-end.
///
/// This `struct` is created by the [`concat`] method on the [`Concat`] trait.
/// See its documentation for more.
///
/// [`concat`]: crate::pipe::Concat::concat
/// [`Concat`]: crate::pipe::Concat
pub struct Concat<I, const N: usize> {
    inputs: [I; N],
    index: usize,
}

impl<I: Iterator, const N: usize> Iterator for Concat<I, N> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(input) = self.inputs.get_mut(self.index) {
            match input.next() {
                Some(item) => return Some(item),
                None => self.index += 1,
            }
        }
        None
    }
}

impl<I: Iterator, const N: usize> FusedIterator for Concat<I, N> {}

impl<I: fmt::Debug, const N: usize> fmt::Debug for Concat<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inputs.iter()).finish()
    }
}

impl<S: IntoIterator, const N: usize> ConcatTrait for [S; N] {
    type Item = S::Item;
    type Iter = Concat<S::IntoIter, N>;

    fn concat(self) -> Self::Iter {
        Concat {
            inputs: self.map(IntoIterator::into_iter),
            index: 0,
        }
    }
}
