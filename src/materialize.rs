//! Draining sequences into in-memory collections.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

/// A collection that elements can be appended to by value.
///
/// The accumulator's own type picks how elements are appended: vectors push,
/// strings append text, boxed slices are rebuilt with the new elements at the
/// end.
pub trait Accumulate<T>: Sized {
    /// Append every element of `items`, returning the grown accumulator.
    fn accumulate<I>(self, items: I) -> Self
    where
        I: Iterator<Item = T>;
}

impl<T> Accumulate<T> for Vec<T> {
    fn accumulate<I>(mut self, items: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        self.extend(items);
        self
    }
}

impl<T> Accumulate<T> for VecDeque<T> {
    fn accumulate<I>(mut self, items: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        self.extend(items);
        self
    }
}

impl<T> Accumulate<T> for Box<[T]> {
    fn accumulate<I>(self, items: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        let mut items = items.peekable();
        if items.peek().is_none() {
            return self;
        }
        let mut vec = self.into_vec();
        vec.extend(items);
        vec.into_boxed_slice()
    }
}

macro_rules! impl_accumulate_for_string {
    ($(<$($lt:lifetime),*> $T:ty;)+) => {$(
        impl<$($lt),*> Accumulate<$T> for String {
            fn accumulate<I>(mut self, items: I) -> Self
            where
                I: Iterator<Item = $T>,
            {
                self.extend(items);
                self
            }
        }
    )+};
}

impl_accumulate_for_string! {
    <> char;
    <'a> &'a char;
    <'a> &'a str;
    <> String;
}

/// Drain `iter` into a new `Vec`.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::prelude::*;
///
/// let v = pipe_algorithms::materialize([3, 1, 2].into_iter().pad_to(5, 0));
/// assert_eq!(v, [3, 1, 2, 0, 0]);
/// ```
pub fn materialize<S>(iter: S) -> Vec<S::Item>
where
    S: IntoIterator,
{
    materialize_into(iter, Vec::new())
}

/// Drain `iter` into `start`, appending after whatever `start` holds.
///
/// Infinite sequences never return.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::materialize_into;
/// use pipe_algorithms::soundex::soundex;
///
/// let s = materialize_into(soundex("Jackson".chars()), String::from("code: "));
/// assert_eq!(s, "code: J-250");
///
/// let b: Box<[i32]> = materialize_into([3, 4], Box::from([1, 2]));
/// assert_eq!(&*b, [1, 2, 3, 4]);
/// ```
pub fn materialize_into<S, A>(iter: S, start: A) -> A
where
    S: IntoIterator,
    A: Accumulate<S::Item>,
{
    start.accumulate(iter.into_iter())
}
