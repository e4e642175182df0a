use core::cmp::Ordering;

use crate::pipe::{Concat, Dedupe, DropFirst, Filter, Lookahead, PadTo, TakeFirst, Truthy};
use crate::sorted::{Difference, Intersection, Merge, SymmetricDifference, Union};
use crate::utils::Countdown;

use super::concat::tuple::Concat2;

/// An extension trait for the `Iterator` trait.
pub trait PipeExt: Iterator {
    /// Append `other` to the end of this sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use pipe_algorithms::prelude::*;
    ///
    /// let s: Vec<_> = [1, 2].into_iter().concat_with([3]).collect();
    /// assert_eq!(s, [1, 2, 3]);
    /// ```
    fn concat_with<S>(self, other: S) -> Concat2<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>;

    /// Wrap the sequence in a single-element lookahead buffer.
    fn lookahead(self) -> Lookahead<Self>
    where
        Self: Sized,
    {
        Lookahead::new(self)
    }

    /// Keep only the [`Truthy`] elements.
    ///
    /// # Example
    ///
    /// ```
    /// use pipe_algorithms::prelude::*;
    ///
    /// let s: Vec<_> = ["", "a", "", "b"].into_iter().filter_truthy().collect();
    /// assert_eq!(s, ["a", "b"]);
    /// ```
    fn filter_truthy(self) -> Filter<Self>
    where
        Self: Sized,
        Self::Item: Truthy,
    {
        Filter::new(self)
    }

    /// Keep only the elements for which `predicate` returns `true`.
    ///
    /// Unlike [`Iterator::filter`] the returned adapter is fused and can be
    /// named in type signatures when `P` is a function pointer.
    fn filter_with<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self).with_predicate(predicate)
    }

    /// Collapse runs of equal adjacent elements, keeping the first of each run.
    ///
    /// # Example
    ///
    /// ```
    /// use pipe_algorithms::prelude::*;
    ///
    /// let s: Vec<_> = "mississippi".chars().dedupe().collect();
    /// assert_eq!(s, ['m', 'i', 's', 'i', 's', 'i', 'p', 'i']);
    /// ```
    fn dedupe(self) -> Dedupe<Self>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        Dedupe::new(self)
    }

    /// Collapse runs of adjacent elements that `comparator` considers equal.
    fn dedupe_by<C>(self, comparator: C) -> Dedupe<Self, C>
    where
        Self: Sized,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Dedupe::new(self).by(comparator)
    }

    /// Produce at most the first `bound` elements.
    fn take_first<N>(self, bound: N) -> TakeFirst<Self, N>
    where
        Self: Sized,
        N: Countdown,
    {
        TakeFirst::new(self, bound)
    }

    /// Produce at least `bound` elements, appending copies of `fill` after the
    /// sequence is exhausted. Longer sequences are not truncated.
    ///
    /// # Example
    ///
    /// ```
    /// use pipe_algorithms::prelude::*;
    ///
    /// let s: String = "ab".chars().pad_to(4, '.').collect();
    /// assert_eq!(s, "ab..");
    ///
    /// let s: String = "abcdef".chars().pad_to(4, '.').collect();
    /// assert_eq!(s, "abcdef");
    /// ```
    fn pad_to<N>(self, bound: N, fill: Self::Item) -> PadTo<Self, N>
    where
        Self: Sized,
        Self::Item: Clone,
        N: Countdown,
    {
        PadTo::new(self, bound, fill)
    }

    /// Skip the first `bound` elements.
    fn drop_first<N>(self, bound: N) -> DropFirst<Self, N>
    where
        Self: Sized,
        N: Countdown,
    {
        DropFirst::new(self, bound)
    }

    /// Merge this sorted sequence with another sorted sequence.
    ///
    /// Equal elements from `self` come before those from `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use pipe_algorithms::prelude::*;
    ///
    /// let s: Vec<_> = [1, 4, 9].into_iter().merge_sorted([2, 4, 8]).collect();
    /// assert_eq!(s, [1, 2, 4, 4, 8, 9]);
    /// ```
    fn merge_sorted<S>(self, other: S) -> Merge<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
    {
        Merge::new(self, other)
    }

    /// Merge two sequences sorted by `comparator`.
    fn merge_sorted_by<S, C>(self, other: S, comparator: C) -> Merge<Self, S::IntoIter, C>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Merge::new(self, other).by(comparator)
    }

    /// The elements in either this sorted set or `other`.
    fn union<S>(self, other: S) -> Union<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
    {
        Union::new(self, other)
    }

    /// The elements in either of two sets sorted by `comparator`.
    fn union_by<S, C>(self, other: S, comparator: C) -> Union<Self, S::IntoIter, C>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Union::new(self, other).by(comparator)
    }

    /// The elements in both this sorted set and `other`.
    fn intersection<S>(self, other: S) -> Intersection<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
    {
        Intersection::new(self, other)
    }

    /// The elements in both of two sets sorted by `comparator`.
    fn intersection_by<S, C>(self, other: S, comparator: C) -> Intersection<Self, S::IntoIter, C>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Intersection::new(self, other).by(comparator)
    }

    /// The elements of this sorted sequence that are not in `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use pipe_algorithms::prelude::*;
    ///
    /// let s: Vec<_> = (1..=6).difference([2, 3, 5]).collect();
    /// assert_eq!(s, [1, 4, 6]);
    /// ```
    fn difference<S>(self, other: S) -> Difference<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
    {
        Difference::new(self, other)
    }

    /// The elements of this sequence that are not in `other`, both sorted by
    /// `comparator`.
    fn difference_by<S, C>(self, other: S, comparator: C) -> Difference<Self, S::IntoIter, C>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        Difference::new(self, other).by(comparator)
    }

    /// The elements in exactly one of this sorted set and `other`.
    fn symmetric_difference<S>(self, other: S) -> SymmetricDifference<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
    {
        SymmetricDifference::new(self, other)
    }

    /// The elements in exactly one of two sets sorted by `comparator`.
    fn symmetric_difference_by<S, C>(
        self,
        other: S,
        comparator: C,
    ) -> SymmetricDifference<Self, S::IntoIter, C>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        SymmetricDifference::new(self, other).by(comparator)
    }
}

impl<I> PipeExt for I
where
    I: Iterator,
{
    fn concat_with<S>(self, other: S) -> Concat2<Self, S::IntoIter>
    where
        Self: Sized,
        S: IntoIterator<Item = Self::Item>,
    {
        Concat::concat((self, other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_chain() {
        let s = [3, 3, 0, 1, 1, 2]
            .into_iter()
            .filter_truthy()
            .dedupe()
            .concat_with([7, 7])
            .take_first(4)
            .drop_first(1u8)
            .pad_to(5, 9);
        assert!(s.eq([1, 2, 7, 9, 9]));
    }

    #[test]
    fn comparator_variants() {
        let desc = |a: &i32, b: &i32| b.cmp(a);
        assert!([5, 3, 1].into_iter().merge_sorted_by([4, 2], desc).eq([5, 4, 3, 2, 1]));
        assert!([5, 3, 1].into_iter().union_by([3, 2], desc).eq([5, 3, 2, 1]));
        assert!([5, 3, 1].into_iter().intersection_by([3, 2, 1], desc).eq([3, 1]));
        assert!([5, 3, 1].into_iter().difference_by([3], desc).eq([5, 1]));
        assert!([5, 3, 1]
            .into_iter()
            .symmetric_difference_by([4, 3], desc)
            .eq([5, 4, 1]));
        assert!([1, 11, 2].into_iter().dedupe_by(|a: &i32, b: &i32| (a % 10).cmp(&(b % 10))).eq([1, 2]));
    }

    #[test]
    fn filter_with_predicate() {
        let s = (1..10).filter_with(|x: &i32| x % 3 == 0);
        assert!(s.eq([3, 6, 9]));
    }

    #[test]
    fn lookahead_peeks() {
        let mut s = "ab".chars().lookahead();
        assert_eq!(s.get(), Some(&'a'));
        assert!(s.eq(['a', 'b']));
    }
}
