use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::utils::Lifecycle;

use super::Concat as ConcatTrait;

/// A sequence that appends multiple sequences of the same type end-to-end.
///
/// This `struct` is created by the [`concat`] method on the [`Concat`] trait,
/// or directly through [`Concat::new`]. See its documentation for more.
///
/// [`concat`]: crate::pipe::Concat::concat
/// [`Concat`]: crate::pipe::Concat
pub struct Concat<I> {
    inputs: Vec<I>,
    index: usize,
    lifecycle: Lifecycle,
}

impl<I: Iterator> Concat<I> {
    /// Concatenate `inputs`, in order.
    pub fn new<S>(inputs: impl IntoIterator<Item = S>) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            inputs: inputs.into_iter().map(IntoIterator::into_iter).collect(),
            index: 0,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Replace the inputs.
    ///
    /// # Panics
    ///
    /// Panics if iteration has already begun.
    #[track_caller]
    pub fn set_inputs<S>(mut self, inputs: impl IntoIterator<Item = S>) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        self.lifecycle.configure("Concat", "set_inputs");
        self.inputs = inputs.into_iter().map(IntoIterator::into_iter).collect();
        self.index = 0;
        self
    }
}

impl<I: Iterator> Iterator for Concat<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        while let Some(input) = self.inputs.get_mut(self.index) {
            match input.next() {
                Some(item) => return Some(item),
                None => self.index += 1,
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inputs
            .get(self.index..)
            .unwrap_or_default()
            .iter()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(low, high), (l, h)| {
                let high = match (high, h) {
                    (Some(high), Some(h)) => high.checked_add(h),
                    _ => None,
                };
                (low.saturating_add(l), high)
            })
    }
}

impl<I: Iterator> FusedIterator for Concat<I> {}

impl<I: fmt::Debug> fmt::Debug for Concat<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inputs.iter()).finish()
    }
}

impl<S: IntoIterator> ConcatTrait for Vec<S> {
    type Item = S::Item;
    type Iter = Concat<S::IntoIter>;

    fn concat(self) -> Self::Iter {
        Concat::new(self)
    }
}
