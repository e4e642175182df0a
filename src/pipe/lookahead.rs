use core::fmt;
use core::iter::{Fuse, FusedIterator};

/// A single-element lookahead buffer over a sequence.
///
/// The buffer is read through [`get`], which pulls from the underlying
/// sequence only when nothing is buffered yet, and cleared through
/// [`advance`], which never pulls. [`consume`] does both.
///
/// This `struct` is created by the [`lookahead`] method on [`PipeExt`]. See
/// its documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::pipe::Lookahead;
///
/// let mut buf = Lookahead::new([1, 2, 3]);
/// assert_eq!(buf.get(), Some(&1));
/// assert_eq!(buf.get(), Some(&1));
/// assert_eq!(buf.advance().get(), Some(&2));
/// assert_eq!(buf.consume(), Some(2));
/// assert_eq!(buf.consume(), Some(3));
/// assert!(!buf.has_value());
/// assert_eq!(buf.consume(), None);
/// ```
///
/// [`get`]: Lookahead::get
/// [`advance`]: Lookahead::advance
/// [`consume`]: Lookahead::consume
/// [`lookahead`]: crate::pipe::PipeExt::lookahead
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct Lookahead<I: Iterator> {
    iter: Fuse<I>,
    slot: Option<I::Item>,
}

impl<I: Iterator> Lookahead<I> {
    /// Wrap a sequence. The buffer starts out empty.
    pub fn new<S>(input: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: input.into_iter().fuse(),
            slot: None,
        }
    }

    /// Return the buffered element, loading it first if the buffer is empty.
    ///
    /// Returns `None` once the underlying sequence is exhausted.
    #[inline]
    pub fn get(&mut self) -> Option<&I::Item> {
        if self.slot.is_none() {
            self.slot = self.iter.next();
        }
        self.slot.as_ref()
    }

    /// Clear the buffer without loading the next element.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.slot = None;
        self
    }

    /// Would [`get`][Lookahead::get] return an element?
    pub fn has_value(&mut self) -> bool {
        self.get().is_some()
    }

    /// Take the buffered element, loading it first if the buffer is empty.
    ///
    /// If the sequence is exhausted nothing is advanced.
    #[inline]
    pub fn consume(&mut self) -> Option<I::Item> {
        match self.slot.take() {
            Some(item) => Some(item),
            None => self.iter.next(),
        }
    }
}

impl<I: Iterator> Iterator for Lookahead<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.consume()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.slot.is_some());
        let (low, high) = self.iter.size_hint();
        (
            low.saturating_add(buffered),
            high.and_then(|high| high.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> FusedIterator for Lookahead<I> {}

impl<I> fmt::Debug for Lookahead<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookahead")
            .field("iter", &self.iter)
            .field("slot", &self.slot)
            .finish()
    }
}
