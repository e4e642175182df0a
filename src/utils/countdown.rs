/// A numeric bound that counts down towards zero.
///
/// [`TakeFirst`], [`PadTo`] and [`DropFirst`] accept any `Countdown` as
/// their bound, so a bound may be a `u8`, an `i64` or even an `f64`. The bound
/// is decremented by one per element until it is no longer positive.
///
/// [`TakeFirst`]: crate::pipe::TakeFirst
/// [`PadTo`]: crate::pipe::PadTo
/// [`DropFirst`]: crate::pipe::DropFirst
pub trait Countdown {
    /// Is the bound strictly greater than zero?
    fn is_positive(&self) -> bool;

    /// Subtract one from the bound.
    fn decrement(&mut self);

    /// How many times the bound can be decremented before it is no longer
    /// positive, or `None` if that count does not fit in a `usize`.
    fn steps(&self) -> Option<usize>;
}

macro_rules! impl_countdown_int {
    ($($T:ident)+) => {$(
        impl Countdown for $T {
            #[inline]
            fn is_positive(&self) -> bool {
                *self > 0
            }

            #[inline]
            fn decrement(&mut self) {
                *self -= 1;
            }

            fn steps(&self) -> Option<usize> {
                if *self > 0 {
                    usize::try_from(*self).ok()
                } else {
                    Some(0)
                }
            }
        }
    )+};
}

macro_rules! impl_countdown_float {
    ($($T:ident)+) => {$(
        impl Countdown for $T {
            #[inline]
            fn is_positive(&self) -> bool {
                *self > 0.0
            }

            #[inline]
            fn decrement(&mut self) {
                *self -= 1.0;
            }

            fn steps(&self) -> Option<usize> {
                if self.is_nan() || *self <= 0.0 {
                    return Some(0);
                }
                if *self >= usize::MAX as $T {
                    return None;
                }
                let whole = *self as usize;
                Some(if (whole as $T) < *self { whole + 1 } else { whole })
            }
        }
    )+};
}

impl_countdown_int! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }
impl_countdown_float! { f32 f64 }
