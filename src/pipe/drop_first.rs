use core::fmt;
use core::iter::{Fuse, FusedIterator};

use crate::utils::{Countdown, Lifecycle};

/// A sequence of the elements of its input after the first `bound`.
///
/// The skipped elements are pulled and discarded on the first pull. If the
/// input is not longer than `bound`, nothing remains.
///
/// This `struct` is created by the [`drop_first`] method on [`PipeExt`]. See
/// its documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::pipe::DropFirst;
///
/// let s: Vec<_> = DropFirst::new([1, 1, 2, 3], 2).collect();
/// assert_eq!(s, [2, 3]);
///
/// let s: Vec<i32> = DropFirst::new([1, 1, 2, 3], 10).collect();
/// assert!(s.is_empty());
/// ```
///
/// [`drop_first`]: crate::pipe::PipeExt::drop_first
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct DropFirst<I, N = usize> {
    input: Fuse<I>,
    remaining: N,
    lifecycle: Lifecycle,
}

impl<I: Iterator, N: Countdown> DropFirst<I, N> {
    /// Discard the first `bound` elements of `input`.
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

    /// Change how many elements are discarded.
    ///
    /// # Panics
    ///
    /// Panics if iteration has already begun.
    #[track_caller]
    pub fn set_bound(mut self, bound: N) -> Self {
        self.lifecycle.configure("DropFirst", "set_bound");
        self.remaining = bound;
        self
    }
}

impl<I: Iterator, N: Countdown> Iterator for DropFirst<I, N> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        while self.remaining.is_positive() {
            self.remaining.decrement();
            self.input.next()?;
        }
        self.input.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.input.size_hint();
        match self.remaining.steps() {
            Some(n) => (low.saturating_sub(n), high.map(|h| h.saturating_sub(n))),
            None => (0, high.map(|_| 0)),
        }
    }
}

impl<I: Iterator, N: Countdown> FusedIterator for DropFirst<I, N> {}

impl<I: fmt::Debug, N: fmt::Debug> fmt::Debug for DropFirst<I, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropFirst")
            .field("input", &self.input)
            .field("remaining", &self.remaining)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_prefix() {
        assert!(DropFirst::new([1, 2, 3], 0).eq([1, 2, 3]));
        assert!(DropFirst::new([1, 2, 3], 1).eq([2, 3]));
        assert!(DropFirst::new([1, 2, 3], 3).eq(core::iter::empty::<i32>()));
        assert!(DropFirst::new([1, 2, 3], -1_i8).eq([1, 2, 3]));
    }

    #[test]
    fn size_hint_subtracts_bound() {
        assert_eq!(DropFirst::new([1, 2, 3], 1).size_hint(), (2, Some(2)));
        assert_eq!(DropFirst::new([1, 2, 3], 5).size_hint(), (0, Some(0)));
        assert_eq!(DropFirst::new([1, 2, 3], -1_i8).size_hint(), (3, Some(3)));
        assert_eq!(DropFirst::new(0..10, u128::MAX).size_hint(), (0, Some(0)));
        assert_eq!(DropFirst::new(0.., 2).size_hint(), (usize::MAX - 2, None));
    }

    #[test]
    fn short_input_stays_exhausted() {
        let mut s = DropFirst::new([1, 2], 5);
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    #[should_panic(expected = "`DropFirst::set_bound` must be called before iteration begins")]
    fn set_bound_after_start() {
        let mut s = DropFirst::new([1, 2], 1);
        s.next();
        let _ = s.set_bound(0);
    }
}
