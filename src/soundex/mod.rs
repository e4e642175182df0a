//! Soundex, a phonetic encoding of names.
//!
//! Similar sounding names map to the same code: a letter, a dash and three
//! digits. Both encoders here are plain adapters over a sequence of `char`s,
//! so they run lazily and never allocate.
//!
//! # Examples
//!
//! ```
//! use pipe_algorithms::soundex::soundex;
//!
//! let smith: String = soundex("Smith".chars()).collect();
//! let smythe: String = soundex("Smythe".chars()).collect();
//! assert_eq!(smith, "S-530");
//! assert_eq!(smith, smythe);
//! ```

mod phonetic_code;

pub use phonetic_code::PhoneticCode;

use core::fmt;
use core::iter::{self, FusedIterator, Once};
use core::mem;

use crate::pipe::{Concat, DropFirst, PadTo, TakeFirst};
use crate::tuple::Concat2;

use phonetic_code::{classify, Class};

const CODE_LEN: usize = 5;
const FILL: char = '0';

type Pipeline<I> = TakeFirst<
    PadTo<Concat2<core::array::IntoIter<char, 2>, DropFirst<PhoneticCode<Concat2<Once<char>, I>>>>>,
>;

enum State<I: Iterator<Item = char>> {
    Pending(I),
    Running(Pipeline<I>),
    Empty,
}

/// The soundex code of a name, one `char` at a time.
///
/// Produces nothing for an empty name, and exactly five characters otherwise:
/// the upper-cased first character, `-`, and three digits.
///
/// This `struct` is created by the [`soundex`] function. See its
/// documentation for more.
pub struct Soundex<I: Iterator<Item = char>> {
    state: State<I>,
}

impl<I: Iterator<Item = char>> Soundex<I> {
    /// Encode `name`.
    pub fn new<S>(name: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            state: State::Pending(name.into_iter()),
        }
    }

    // Reads the first character and builds the rest of the pipeline around it.
    fn start(mut input: I) -> State<I> {
        let Some(first) = input.next() else {
            return State::Empty;
        };
        // The phonetic code repeats the first letter's digit, unless the
        // letter has none.
        let repeated = usize::from(matches!(classify(first), Class::Digit(_)));
        let code = PhoneticCode::new((iter::once(first), input).concat());
        let prefix = [first.to_ascii_uppercase(), '-'];
        let padded = PadTo::new((prefix, DropFirst::new(code, repeated)).concat(), CODE_LEN, FILL);
        State::Running(TakeFirst::new(padded, CODE_LEN))
    }
}

impl<I: Iterator<Item = char>> Iterator for Soundex<I> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        if let State::Pending(_) = self.state {
            self.state = match mem::replace(&mut self.state, State::Empty) {
                State::Pending(input) => Self::start(input),
                state => state,
            };
        }
        match &mut self.state {
            State::Running(pipeline) => pipeline.next(),
            State::Pending(_) | State::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Empty => (0, Some(0)),
            State::Pending(_) | State::Running(_) => (0, Some(CODE_LEN)),
        }
    }
}

impl<I: Iterator<Item = char>> FusedIterator for Soundex<I> {}

impl<I: Iterator<Item = char>> fmt::Debug for Soundex<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Pending(_) => "Pending",
            State::Running(_) => "Running",
            State::Empty => "Empty",
        };
        f.debug_struct("Soundex").field("state", &state).finish()
    }
}

/// Encode a name as its soundex code.
///
/// Letters are compared without regard to case; anything that is not an
/// ASCII letter separates the name into parts. The first character is kept
/// as is, upper-cased.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::soundex::soundex;
///
/// let code: String = soundex("O'Brien".chars()).collect();
/// assert_eq!(code, "O-165");
///
/// assert_eq!(soundex("".chars()).next(), None);
/// ```
pub fn soundex<S>(name: S) -> Soundex<S::IntoIter>
where
    S: IntoIterator<Item = char>,
{
    Soundex::new(name)
}

/// Encode a name into an owned `String`.
///
/// # Examples
///
/// ```
/// assert_eq!(pipe_algorithms::soundex::encode("Van Deusen"), "V-532");
/// ```
#[cfg(feature = "alloc")]
pub fn encode(name: &str) -> alloc::string::String {
    soundex(name.chars()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(name: &str) -> [Option<char>; 6] {
        let mut s = soundex(name.chars());
        core::array::from_fn(|_| s.next())
    }

    fn some(code: &str) -> [Option<char>; 6] {
        let mut chars = code.chars();
        core::array::from_fn(|_| chars.next())
    }

    #[test]
    fn first_letter_digit_is_not_repeated() {
        assert_eq!(code("Pfister"), some("P-236"));
        assert_eq!(code("Tymczak"), some("T-522"));
        assert_eq!(code("Lee"), some("L-000"));
    }

    #[test]
    fn first_letter_without_digit() {
        assert_eq!(code("Ashcraft"), some("A-261"));
        assert_eq!(code("Hildebrand"), some("H-431"));
        assert_eq!(code("Washington"), some("W-252"));
    }

    #[test]
    fn separators_split_the_name() {
        assert_eq!(code("O'Brien"), code("OBrien"));
        assert_eq!(code("Van Deusen"), code("VanDeusen"));
    }

    #[test]
    fn lower_case_first_letter() {
        assert_eq!(code("smith"), some("S-530"));
    }

    #[test]
    fn empty_name() {
        let mut s = soundex("".chars());
        assert_eq!(s.size_hint(), (0, Some(5)));
        assert_eq!(s.next(), None);
        assert_eq!(s.size_hint(), (0, Some(0)));
        assert_eq!(s.next(), None);
    }

    #[test]
    fn pulls_input_lazily() {
        let pulls = core::cell::Cell::new(0);
        let name = "Smith".chars().inspect(|_| pulls.set(pulls.get() + 1));
        let mut s = soundex(name);
        assert_eq!(pulls.get(), 0);
        assert_eq!(s.next(), Some('S'));
        assert_eq!(pulls.get(), 1);
        assert_eq!(s.next(), Some('-'));
        assert_eq!(pulls.get(), 1);
    }
}
