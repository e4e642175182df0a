use core::fmt;
use core::iter::{Fuse, FusedIterator};

use crate::utils::{Countdown, Lifecycle};

/// A sequence of the first `bound` elements of its input.
///
/// If the input is shorter than `bound`, every input element is produced.
/// The bound may be any [`Countdown`]: it is decremented by one per pull
/// until it is no longer positive.
///
/// This `struct` is created by the [`take_first`] method on [`PipeExt`]. See
/// its documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::pipe::TakeFirst;
///
/// let s: Vec<_> = TakeFirst::new([1, 1, 2, 3, 5], 2).collect();
/// assert_eq!(s, [1, 1]);
///
/// let s: Vec<_> = TakeFirst::new([1, 1, 2, 3], 10).collect();
/// assert_eq!(s, [1, 1, 2, 3]);
/// ```
///
/// [`take_first`]: crate::pipe::PipeExt::take_first
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct TakeFirst<I, N = usize> {
    input: Fuse<I>,
    remaining: N,
    lifecycle: Lifecycle,
}

impl<I: Iterator, N: Countdown> TakeFirst<I, N> {
    /// Take the first `bound` elements of `input`.
    pub fn new<S>(input: S, bound: N) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            input: input.into_iter().fuse(),
            remaining: bound,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Change how many elements are taken.
    ///
    /// # Panics
    ///
    /// Panics if iteration has already begun.
    #[track_caller]
    pub fn set_bound(mut self, bound: N) -> Self {
        self.lifecycle.configure("TakeFirst", "set_bound");
        self.remaining = bound;
        self
    }
}

impl<I: Iterator, N: Countdown> Iterator for TakeFirst<I, N> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        if !self.remaining.is_positive() {
            return None;
        }
        self.remaining.decrement();
        self.input.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.input.size_hint();
        match self.remaining.steps() {
            Some(n) => (low.min(n), Some(high.map_or(n, |h| h.min(n)))),
            None => (low, high),
        }
    }
}

impl<I: Iterator, N: Countdown> FusedIterator for TakeFirst<I, N> {}

impl<I: fmt::Debug, N: fmt::Debug> fmt::Debug for TakeFirst<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeFirst")
            .field("input", &self.input)
            .field("remaining", &self.remaining)
            .finish()
    }
}
