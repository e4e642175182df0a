use core::fmt;
use core::iter::{Fuse, FusedIterator};

/// How a character takes part in a phonetic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Class {
    /// Ignored entirely; does not separate repeated digits.
    Skip,
    /// Maps to a consonant digit.
    Digit(char),
    /// Vowels, spaces, punctuation and every non-ASCII character.
    Separator,
}

pub(crate) fn classify(c: char) -> Class {
    match c.to_ascii_uppercase() {
        'H' | 'W' => Class::Skip,
        'B' | 'F' | 'P' | 'V' => Class::Digit('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Class::Digit('2'),
        'D' | 'T' => Class::Digit('3'),
        'L' => Class::Digit('4'),
        'M' | 'N' => Class::Digit('5'),
        'R' => Class::Digit('6'),
        _ => Class::Separator,
    }
}

/// The raw digit sequence of a name, before any formatting.
///
/// Every consonant maps to a digit. A digit is produced only if it differs
/// from the last digit produced since the previous separator, so `"Pfister"`
/// yields `1`, `2`, `3`, `6`. `H` and `W` are ignored, while vowels and any
/// other character act as separators. Unlike [`Soundex`], the output is
/// unbounded and includes the digit of the first letter.
///
/// # Examples
///
/// ```
/// use pipe_algorithms::soundex::PhoneticCode;
///
/// let s: String = PhoneticCode::new("Ashcraft".chars()).collect();
/// assert_eq!(s, "2613");
/// ```
///
/// [`Soundex`]: crate::soundex::Soundex
pub struct PhoneticCode<I> {
    input: Fuse<I>,
    last: Option<char>,
}

impl<I: Iterator<Item = char>> PhoneticCode<I> {
    /// Reduce `input` to its phonetic digits.
    pub fn new<S>(input: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            input: input.into_iter().fuse(),
            last: None,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for PhoneticCode<I> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match classify(self.input.next()?) {
                Class::Skip => {}
                Class::Separator => self.last = None,
                Class::Digit(digit) if self.last == Some(digit) => {}
                Class::Digit(digit) => {
                    self.last = Some(digit);
                    return Some(digit);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.input.size_hint().1)
    }
}

impl<I: Iterator<Item = char>> FusedIterator for PhoneticCode<I> {}

impl<I: fmt::Debug> fmt::Debug for PhoneticCode<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhoneticCode")
            .field("input", &self.input)
            .field("last", &self.last)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits<const N: usize>(name: &str) -> [Option<char>; N] {
        let mut s = PhoneticCode::new(name.chars());
        core::array::from_fn(|_| s.next())
    }

    #[test]
    fn classify_table() {
        assert_eq!(classify('h'), Class::Skip);
        assert_eq!(classify('W'), Class::Skip);
        assert_eq!(classify('v'), Class::Digit('1'));
        assert_eq!(classify('X'), Class::Digit('2'));
        assert_eq!(classify('t'), Class::Digit('3'));
        assert_eq!(classify('L'), Class::Digit('4'));
        assert_eq!(classify('m'), Class::Digit('5'));
        assert_eq!(classify('R'), Class::Digit('6'));
        assert_eq!(classify('a'), Class::Separator);
        assert_eq!(classify('\''), Class::Separator);
        assert_eq!(classify('ß'), Class::Separator);
    }

    #[test]
    fn repeats_collapse() {
        assert_eq!(digits::<3>("Pfister"), [Some('1'), Some('2'), Some('3')]);
        assert_eq!(digits::<2>("ckq"), [Some('2'), None]);
    }

    #[test]
    fn skip_does_not_reset() {
        assert_eq!(digits::<2>("shc"), [Some('2'), None]);
    }

    #[test]
    fn separator_resets() {
        assert_eq!(digits::<3>("sas"), [Some('2'), Some('2'), None]);
        assert_eq!(digits::<3>("s s"), [Some('2'), Some('2'), None]);
    }

    #[test]
    fn exhaustion_is_stable() {
        let mut s = PhoneticCode::new("aeiou".chars());
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }
}
