use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use tinyvec::ArrayVec;

/// Maximum number of letters in a rack.
pub const DIM: usize = 16;

/// A list of up to [`DIM`] letters. Copied on every search branch.
pub type Letters = ArrayVec<[Letter; DIM]>;

/// A letter tile: an uppercase ASCII letter, possibly played from a wildcard.
///
/// Letters order by character first; for the same character the regular letter comes
/// before the wildcard. Two letters are equal only if both the character and the wildcard
/// flag match.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Letter {
    ch: char,
    is_wildcard: bool,
}

impl Default for Letter {
    fn default() -> Self {
        Letter::new('A')
    }
}

impl Letter {
    /// Create a regular letter. `ch` is converted to uppercase.
    /// ## Panics
    /// If `ch` is not an ASCII letter. Use [`Letter::try_from`] for unchecked input.
    pub fn new(ch: char) -> Letter {
        assert!(ch.is_ascii_alphabetic(), "not a letter: {:?}", ch);
        Letter {
            ch: ch.to_ascii_uppercase(),
            is_wildcard: false,
        }
    }

    /// Create a letter played from a wildcard.
    /// ## Panics
    /// If `ch` is not an ASCII letter.
    pub fn wildcard(ch: char) -> Letter {
        Letter {
            is_wildcard: true,
            ..Letter::new(ch)
        }
    }

    /// The uppercase character.
    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn is_wildcard(&self) -> bool {
        self.is_wildcard
    }

    /// Index 0..26 of the character in the alphabet.
    pub fn index(&self) -> usize {
        (self.ch as u8 - b'A') as usize
    }

    /// Persisted form: uppercase for a regular letter, lowercase for a wildcard.
    pub fn serialize(&self) -> char {
        if self.is_wildcard {
            self.ch.to_ascii_lowercase()
        } else {
            self.ch
        }
    }

    /// Parse the persisted form, see [`serialize`](Letter::serialize).
    pub fn deserialize(ch: char) -> Option<Letter> {
        if ch.is_ascii_uppercase() {
            Some(Letter::new(ch))
        } else if ch.is_ascii_lowercase() {
            Some(Letter::wildcard(ch))
        } else {
            None
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    /// Parse the persisted form of a letter
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::deserialize(ch).ok_or_else(|| Error::InvalidToken(ch.to_string()))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_wildcard {
            write!(f, "{}*", self.ch)
        } else {
            write!(f, "{}", self.ch)
        }
    }
}

/// Return the word spelled by `letters`, ignoring wildcard flags.
pub fn spell<'a, I: IntoIterator<Item = &'a Letter>>(letters: I) -> String {
    letters.into_iter().map(Letter::ch).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let mut letters = vec![
            Letter::wildcard('b'),
            Letter::new('B'),
            Letter::wildcard('a'),
            Letter::new('C'),
        ];
        letters.sort();
        assert_eq!(
            letters,
            vec![
                Letter::wildcard('A'),
                Letter::new('B'),
                Letter::wildcard('B'),
                Letter::new('C')
            ]
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(Letter::new('q'), Letter::new('Q'));
        assert_ne!(Letter::new('Q'), Letter::wildcard('Q'));
    }

    #[test]
    fn test_serialize() -> Result<(), Error> {
        let letter = Letter::try_from('x')?;
        assert!(letter.is_wildcard());
        assert_eq!(letter.ch(), 'X');
        assert_eq!(letter.serialize(), 'x');
        assert_eq!(Letter::try_from('X')?.serialize(), 'X');
        assert!(Letter::try_from('-').is_err());
        assert_eq!(letter.to_string(), "X*");
        Ok(())
    }

    #[test]
    fn test_spell() {
        let letters = [Letter::new('D'), Letter::wildcard('O'), Letter::new('G')];
        assert_eq!(spell(&letters), "DOG");
        assert_eq!(Letter::new('D').index(), 3);
    }
}
