use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use fixedbitset::FixedBitSet;

use crate::utils::Lifecycle;

/// Applies a function across multiple sequences, position by position.
///
/// The function receives one element from each input, in input order,
/// collected into a `Vec`.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::prelude::*;
///
/// let sum = |row: Vec<i32>| row.into_iter().sum::<i32>();
///
/// let s: Vec<_> = vec![vec![3, 1, 2], vec![3]]
///     .zip_longest_with(sum)
///     .collect();
/// assert_eq!(s, [6, 1, 2]);
///
/// let s: Vec<_> = [vec![3, 4, 5], vec![1, 2]].zip_shortest_with(sum).collect();
/// assert_eq!(s, [4, 6]);
/// ```
pub trait ZipWith {
    /// The element type shared by every input.
    type Item;

    /// The type of the input sequences.
    type Input: Iterator<Item = Self::Item>;

    /// Zip until every input is exhausted, substituting a replacement value
    /// for the inputs that ran out early.
    fn zip_longest_with<F, U>(self, f: F) -> ZipLongest<Self::Input, F>
    where
        F: FnMut(Vec<Self::Item>) -> U,
        Self::Item: Clone + Default;

    /// Zip until any input is exhausted.
    fn zip_shortest_with<F, U>(self, f: F) -> ZipShortest<Self::Input, F>
    where
        F: FnMut(Vec<Self::Item>) -> U;
}

impl<S: IntoIterator> ZipWith for Vec<S> {
    type Item = S::Item;
    type Input = S::IntoIter;

    fn zip_longest_with<F, U>(self, f: F) -> ZipLongest<Self::Input, F>
    where
        F: FnMut(Vec<Self::Item>) -> U,
        Self::Item: Clone + Default,
    {
        ZipLongest::new(f, self)
    }

    fn zip_shortest_with<F, U>(self, f: F) -> ZipShortest<Self::Input, F>
    where
        F: FnMut(Vec<Self::Item>) -> U,
    {
        ZipShortest::new(f, self)
    }
}

impl<S: IntoIterator, const N: usize> ZipWith for [S; N] {
    type Item = S::Item;
    type Input = S::IntoIter;

    fn zip_longest_with<F, U>(self, f: F) -> ZipLongest<Self::Input, F>
    where
        F: FnMut(Vec<Self::Item>) -> U,
        Self::Item: Clone + Default,
    {
        ZipLongest::new(f, self)
    }

    fn zip_shortest_with<F, U>(self, f: F) -> ZipShortest<Self::Input, F>
    where
        F: FnMut(Vec<Self::Item>) -> U,
    {
        ZipShortest::new(f, self)
    }
}

/// A sequence that applies a function across its inputs until all of them
/// are exhausted.
///
/// Inputs that run out early contribute the replacement value, which is
/// `T::default()` unless changed through [`set_replace`]. An input is never
/// pulled again once it has been exhausted. With zero inputs the sequence is
/// empty.
///
/// This `struct` is created by the [`zip_longest_with`] method on the
/// [`ZipWith`] trait. See its documentation for more.
///
/// [`set_replace`]: ZipLongest::set_replace
/// [`zip_longest_with`]: ZipWith::zip_longest_with
pub struct ZipLongest<I: Iterator, F> {
    inputs: Vec<I>,
    exhausted: FixedBitSet,
    func: F,
    replace: I::Item,
    done: bool,
    lifecycle: Lifecycle,
}

impl<I, F> ZipLongest<I, F>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Zip `inputs` with `func`, substituting `T::default()` for exhausted
    /// inputs.
    pub fn new<S, U>(func: F, inputs: impl IntoIterator<Item = S>) -> Self
    where
        S: IntoIterator<IntoIter = I>,
        F: FnMut(Vec<I::Item>) -> U,
        I::Item: Default,
    {
        Self::with_replace(func, inputs, I::Item::default())
    }

    /// Zip `inputs` with `func`, substituting `replace` for exhausted inputs.
    pub fn with_replace<S, U>(func: F, inputs: impl IntoIterator<Item = S>, replace: I::Item) -> Self
    where
        S: IntoIterator<IntoIter = I>,
        F: FnMut(Vec<I::Item>) -> U,
    {
        let inputs: Vec<I> = inputs.into_iter().map(IntoIterator::into_iter).collect();
        Self {
            exhausted: FixedBitSet::with_capacity(inputs.len()),
            inputs,
            func,
            replace,
            done: false,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Change the value substituted for exhausted inputs.
    ///
    /// # Panics
    ///
    /// Panics if iteration has already begun.
    #[track_caller]
    pub fn set_replace(mut self, replace: I::Item) -> Self {
        self.lifecycle.configure("ZipLongest", "set_replace");
        self.replace = replace;
        self
    }
}

impl<I, F, U> Iterator for ZipLongest<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(Vec<I::Item>) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        self.lifecycle.start();
        if self.done {
            return None;
        }

        let mut row = Vec::with_capacity(self.inputs.len());
        for (index, input) in self.inputs.iter_mut().enumerate() {
            if !self.exhausted.contains(index) {
                if let Some(item) = input.next() {
                    row.push(item);
                    continue;
                }
                self.exhausted.insert(index);
            }
            row.push(self.replace.clone());
        }

        if self.exhausted.count_ones(..) == self.inputs.len() {
            self.done = true;
            return None;
        }
        Some((self.func)(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.inputs
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.exhausted.contains(*index))
            .map(|(_, input)| input.size_hint())
            .fold((0, Some(0)), |(low, high), (l, h)| {
                let high = match (high, h) {
                    (Some(high), Some(h)) => Some(core::cmp::max(high, h)),
                    _ => None,
                };
                (core::cmp::max(low, l), high)
            })
    }
}

impl<I, F, U> FusedIterator for ZipLongest<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(Vec<I::Item>) -> U,
{
}

impl<I, F> fmt::Debug for ZipLongest<I, F>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipLongest")
            .field("inputs", &self.inputs)
            .field("replace", &self.replace)
            .field("done", &self.done)
            .finish()
    }
}

/// A sequence that applies a function across its inputs until any of them is
/// exhausted.
///
/// Inputs are pulled in order and pulling stops at the first exhausted input.
/// With zero inputs the sequence is empty.
///
/// This `struct` is created by the [`zip_shortest_with`] method on the
/// [`ZipWith`] trait. See its documentation for more.
///
/// [`zip_shortest_with`]: ZipWith::zip_shortest_with
pub struct ZipShortest<I, F> {
    inputs: Vec<I>,
    func: F,
    done: bool,
}

impl<I: Iterator, F> ZipShortest<I, F> {
    /// Zip `inputs` with `func`.
    pub fn new<S, U>(func: F, inputs: impl IntoIterator<Item = S>) -> Self
    where
        S: IntoIterator<IntoIter = I>,
        F: FnMut(Vec<I::Item>) -> U,
    {
        let inputs: Vec<I> = inputs.into_iter().map(IntoIterator::into_iter).collect();
        Self {
            done: inputs.is_empty(),
            inputs,
            func,
        }
    }
}

impl<I, F, U> Iterator for ZipShortest<I, F>
where
    I: Iterator,
    F: FnMut(Vec<I::Item>) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut row = Vec::with_capacity(self.inputs.len());
        for input in self.inputs.iter_mut() {
            match input.next() {
                Some(item) => row.push(item),
                None => {
                    // Can no longer produce full rows, so the sequence is over.
                    self.done = true;
                    return None;
                }
            }
        }
        Some((self.func)(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        self.inputs
            .iter()
            .map(Iterator::size_hint)
            .fold((usize::MAX, None), |(low, high), (l, h)| {
                let high = match (high, h) {
                    (Some(high), Some(h)) => Some(core::cmp::min(high, h)),
                    (high, h) => high.or(h),
                };
                (core::cmp::min(low, l), high)
            })
    }
}

impl<I, F, U> FusedIterator for ZipShortest<I, F>
where
    I: Iterator,
    F: FnMut(Vec<I::Item>) -> U,
{
}

impl<I: fmt::Debug, F> fmt::Debug for ZipShortest<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipShortest")
            .field("inputs", &self.inputs)
            .field("done", &self.done)
            .finish()
    }
}
