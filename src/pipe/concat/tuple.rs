use core::fmt;
use core::iter::FusedIterator;

use super::Concat;

/// A sequence that concatenates zero sequences: it is always empty.
///
/// This `struct` is created by the [`concat`] method on the [`Concat`] trait,
/// which yields `Concat0<()>`. An empty sequence of any other element type
/// comes from [`Concat0::new`].
///
/// # Examples
///
/// ```
/// use pipe_algorithms::tuple::Concat0;
///
/// let mut s = Concat0::<i32>::new();
/// assert_eq!(s.next(), None);
/// ```
///
/// [`concat`]: crate::pipe::Concat::concat
pub struct Concat0<T> {
    _marker: core::marker::PhantomData<fn() -> T>,
}

impl<T> Concat0<T> {
    /// An empty sequence of `T`.
    pub const fn new() -> Self {
        Self {
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T> Default for Concat0<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Concat0<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Concat0<T> {}

impl<T> fmt::Debug for Concat0<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Concat").finish()
    }
}

impl<T> Iterator for Concat0<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> FusedIterator for Concat0<T> {}

impl Concat for () {
    type Item = ();
    type Iter = Concat0<()>;

    fn concat(self) -> Self::Iter {
        Concat0::new()
    }
}

macro_rules! impl_concat_for_tuple {
    ($mod_name: ident $StructName:ident $($F:ident)+) => {
        mod $mod_name {
            #[repr(usize)]
            enum Indexes {
                $($F,)+
            }

            $(
                pub(super) const $F: usize = Indexes::$F as usize;
            )+

            pub(super) const LEN: usize = [$(Indexes::$F,)+].len();
        }

        /// A sequence that appends sequences of different types end-to-end.
        ///
        /// This `struct` is created by the [`concat`] method on the [`Concat`]
        /// trait. See its documentation for more.
        ///
        /// [`concat`]: crate::pipe::Concat::concat
        /// [`Concat`]: crate::pipe::Concat
        pub struct $StructName<$($F,)+> {
            index: usize,
            $( $F: $F,)+
        }

        impl<T, $($F,)+> Iterator for $StructName<$($F,)+>
        where
            $($F: Iterator<Item = T>,)+
        {
            type Item = T;

            fn next(&mut self) -> Option<Self::Item> {
                loop {
                    match self.index {
                        $(
                            $mod_name::$F => match self.$F.next() {
                                Some(item) => return Some(item),
                                None => self.index += 1,
                            },
                        )+
                        _ => {
                            debug_assert_eq!(self.index, $mod_name::LEN);
                            return None;
                        }
                    }
                }
            }
        }

        impl<T, $($F,)+> FusedIterator for $StructName<$($F,)+>
        where
            $($F: Iterator<Item = T>,)+
        {}

        impl<$($F,)+> fmt::Debug for $StructName<$($F,)+>
        where
            $($F: fmt::Debug,)+
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple("Concat")
                    $(.field(&self.$F))+
                    .finish()
            }
        }

        impl<T, $($F,)+> Concat for ($($F,)+)
        where
            $($F: IntoIterator<Item = T>,)+
        {
            type Item = T;
            type Iter = $StructName<$($F::IntoIter,)+>;

            fn concat(self) -> Self::Iter {
                let ($($F,)*): ($($F,)*) = self;
                $StructName {
                    index: 0,
                    $($F: $F.into_iter(),)+
                }
            }
        }
    }
}

impl_concat_for_tuple! { concat_1 Concat1 A }
impl_concat_for_tuple! { concat_2 Concat2 A B }
impl_concat_for_tuple! { concat_3 Concat3 A B C }
impl_concat_for_tuple! { concat_4 Concat4 A B C D }
impl_concat_for_tuple! { concat_5 Concat5 A B C D E }
impl_concat_for_tuple! { concat_6 Concat6 A B C D E F }
impl_concat_for_tuple! { concat_7 Concat7 A B C D E F G }
impl_concat_for_tuple! { concat_8 Concat8 A B C D E F G H }
impl_concat_for_tuple! { concat_9 Concat9 A B C D E F G H I }
impl_concat_for_tuple! { concat_10 Concat10 A B C D E F G H I J }
impl_concat_for_tuple! { concat_11 Concat11 A B C D E F G H I J K }
impl_concat_for_tuple! { concat_12 Concat12 A B C D E F G H I J K L }
