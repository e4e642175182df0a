use core::fmt;
use core::iter::{Fuse, FusedIterator};

use crate::utils::Lifecycle;

/// A test applied to each element by [`Filter`].
///
/// Implemented by [`IsTruthy`] and by every `FnMut(&T) -> bool`.
pub trait Predicate<T: ?Sized> {
    /// Should `item` be kept?
    fn test(&mut self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

/// Values that are "empty" or "zero" in a boolean context.
///
/// Numbers are truthy when non-zero (`NaN` is truthy), collections and
/// strings when non-empty, and `Option`s when `Some`.
pub trait Truthy {
    /// Is this value truthy?
    fn is_truthy(&self) -> bool;
}

macro_rules! impl_truthy_num {
    ($zero:literal => $($T:ident)+) => {$(
        impl Truthy for $T {
            #[inline]
            fn is_truthy(&self) -> bool {
                *self != $zero
            }
        }
    )+};
}

impl_truthy_num! { 0 => u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }
impl_truthy_num! { 0.0 => f32 f64 }

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    #[inline]
    fn is_truthy(&self) -> bool {
        N != 0
    }
}

#[cfg(feature = "alloc")]
impl Truthy for alloc::string::String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(feature = "alloc")]
impl<T> Truthy for alloc::vec::Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// The default [`Filter`] predicate: keeps [`Truthy`] elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IsTruthy;

impl<T: Truthy + ?Sized> Predicate<T> for IsTruthy {
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        item.is_truthy()
    }
}

/// A sequence that keeps only the elements accepted by a predicate.
///
/// Rejected elements never end the sequence: the filter keeps pulling until
/// an element passes or the input is exhausted.
///
/// This `struct` is created by the [`filter_truthy`] and [`filter_with`]
/// methods on [`PipeExt`]. See their documentation for more.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::pipe::Filter;
///
/// let s: Vec<_> = Filter::new([0, 3, 0, 13]).collect();
/// assert_eq!(s, [3, 13]);
///
/// let s: Vec<_> = Filter::new([2, 3, 4, 5, 6, 5, 4, 3, 2])
///     .with_predicate(|x: &i32| *x > 3)
///     .collect();
/// assert_eq!(s, [4, 5, 6, 5, 4]);
/// ```
///
/// [`filter_truthy`]: crate::pipe::PipeExt::filter_truthy
/// [`filter_with`]: crate::pipe::PipeExt::filter_with
/// [`PipeExt`]: crate::pipe::PipeExt
pub struct Filter<I, P = IsTruthy> {
    input: Fuse<I>,
    predicate: P,
    lifecycle: Lifecycle,
}

impl<I: Iterator> Filter<I> {
    /// Keep the truthy elements of `input`.
    pub fn new<S>(input: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            input: input.into_iter().fuse(),
            predicate: IsTruthy,
            lifecycle: Lifecycle::new(),
        }
    }
}

impl<I: Iterator, P> Filter<I, P> {
    /// Replace the predicate.
    ///
    /// # Panics
    ///
    /// Panics if iteration has already begun.
    #[track_caller]
    pub fn with_predicate<Q>(self, predicate: Q) -> Filter<I, Q>
    where
        Q: FnMut(&I::Item) -> bool,
    {
        self.lifecycle.configure("Filter", "with_predicate");
        Filter {
            input: self.input,
            predicate,
            lifecycle: self.lifecycle,
        }
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        loop {
            let item = self.input.next()?;
            if self.predicate.test(&item) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.input.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("input", &self.input).finish()
    }
}
