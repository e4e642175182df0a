pub(crate) mod array;
pub(crate) mod tuple;
#[cfg(feature = "alloc")]
pub(crate) mod vec;

/// Takes multiple sequences and creates a new sequence over all in order.
///
/// Each input is exhausted before the next one is pulled from. Concatenating
/// zero sequences yields an empty sequence.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::prelude::*;
///
/// let s: Vec<_> = ([1, 3, 5], vec![2, 4], 6..7).concat().collect();
/// assert_eq!(s, [1, 3, 5, 2, 4, 6]);
///
/// let s: Vec<i32> = [vec![1, 2], vec![], vec![7]].concat().collect();
/// assert_eq!(s, [1, 2, 7]);
/// ```
pub trait Concat {
    /// What's the element type of our sequence?
    type Item;

    /// What sequence do we return?
    type Iter: Iterator<Item = Self::Item>;

    /// Combine multiple sequences into a single sequence.
    fn concat(self) -> Self::Iter;
}
