use core::fmt;
use core::iter::{Fuse, FusedIterator};

use crate::utils::{Countdown, Lifecycle};

/// A sequence padded with a fill value up to a minimum length.
///
/// Every input element is produced. Once the input is exhausted the fill
/// value is produced until `bound` elements have been produced in total. An
/// input longer than `bound` is passed through untruncated; pair with
/// [`TakeFirst`] for an exact length.
///
/// This `struct` is created by the [`pad_to`] method on [`PipeExt`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::pipe::PadTo;
///
/// let s: Vec<_> = PadTo::new([1, 1, 2, 3], 9, 0).collect();
/// assert_eq!(s, [1, 1, 2, 3, 0, 0, 0, 0, 0]);
///
/// let s: Vec<_> = PadTo::new([1, 1, 2, 3], 2, 0).collect();
/// assert_eq!(s, [1, 1, 2, 3]);
/// ```
///
/// [`TakeFirst`]: crate::pipe::TakeFirst
/// [`pad_to`]: crate::pipe::PipeExt::pad_to
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct PadTo<I: Iterator, N = usize> {
    input: Fuse<I>,
    remaining: N,
    fill: I::Item,
    lifecycle: Lifecycle,
}

impl<I, N> PadTo<I, N>
where
    I: Iterator,
    I::Item: Clone,
    N: Countdown,
{
    /// Pad `input` with `fill` up to `bound` elements.
    pub fn new<S>(input: S, bound: N, fill: I::Item) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            input: input.into_iter().fuse(),
            remaining: bound,
            fill,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Change the minimum length.
    ///
    /// # Panics
    ///
    /// Panics if iteration has already begun.
    #[track_caller]
    pub fn set_bound(mut self, bound: N) -> Self {
        self.lifecycle.configure("PadTo", "set_bound");
        self.remaining = bound;
        self
    }

    /// Change the fill value.
    ///
    /// # Panics
    ///
    /// Panics if iteration has already begun.
    #[track_caller]
    pub fn set_fill(mut self, fill: I::Item) -> Self {
        self.lifecycle.configure("PadTo", "set_fill");
        self.fill = fill;
        self
    }
}

impl<I, N> Iterator for PadTo<I, N>
where
    I: Iterator,
    I::Item: Clone,
    N: Countdown,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        let pad = self.remaining.is_positive();
        if pad {
            self.remaining.decrement();
        }
        match self.input.next() {
            Some(item) => Some(item),
            None if pad => Some(self.fill.clone()),
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.input.size_hint();
        match self.remaining.steps() {
            Some(n) => (low.max(n), high.map(|h| h.max(n))),
            None => (usize::MAX, None),
        }
    }
}

impl<I, N> FusedIterator for PadTo<I, N>
where
    I: Iterator,
    I::Item: Clone,
    N: Countdown,
{
}

impl<I, N> fmt::Debug for PadTo<I, N>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
    N: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PadTo")
            .field("input", &self.input)
            .field("remaining", &self.remaining)
            .field("fill", &self.fill)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_input() {
        assert!(PadTo::new([1, 2], 5, 0).eq([1, 2, 0, 0, 0]));
        assert!(PadTo::new(core::iter::empty(), 3, 'x').eq(['x', 'x', 'x']));
    }

    #[test]
    fn long_input_is_not_truncated() {
        assert!(PadTo::new([1, 2, 3, 4], 2, 0).eq([1, 2, 3, 4]));
        assert!(PadTo::new([1, 2, 3], 0, 0).eq([1, 2, 3]));
    }

    #[test]
    fn set_fill_before_start() {
        let s = PadTo::new(['a'], 3, '0').set_fill('-').set_bound(4);
        assert!(s.eq(['a', '-', '-', '-']));
    }

    #[test]
    fn size_hint_covers_padding() {
        assert_eq!(PadTo::new([1, 2], 5, 0).size_hint(), (5, Some(5)));
        assert_eq!(PadTo::new([1, 2, 3], 2, 0).size_hint(), (3, Some(3)));
        assert_eq!(PadTo::new(0.., 2, 0).size_hint(), (usize::MAX, None));

        let mut s = PadTo::new([1], 2.5_f64, 0);
        assert_eq!(s.size_hint(), (3, Some(3)));
        s.next();
        assert_eq!(s.size_hint(), (2, Some(2)));
        assert_eq!(s.count(), 2);
    }

    #[test]
    fn exhaustion_is_stable() {
        let mut s = PadTo::new([1], 2, 9);
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.next(), Some(9));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    #[should_panic(expected = "`PadTo::set_fill` must be called before iteration begins")]
    fn set_fill_after_start() {
        let mut s = PadTo::new([1], 2, 0);
        s.next();
        let _ = s.set_fill(5);
    }
}
