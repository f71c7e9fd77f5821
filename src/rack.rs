use crate::letter::{Letter, Letters, DIM};
use crate::letterset::LetterSet;
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Most wildcards a rack may hold. Every wildcard multiplies the search by 26.
pub const MAX_WILDCARDS: usize = 2;

/// The tiles a player holds: concrete letters, kept sorted, plus a number of wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    letters: Letters,
    wildcards: usize,
}

impl Rack {
    /// Create a rack from concrete `letters` and a number of wildcards.
    /// ## Errors
    /// If a letter is flagged as wildcard, the rack holds more than [`DIM`] tiles or
    /// more than [`MAX_WILDCARDS`] wildcards.
    pub fn new(letters: &[Letter], wildcards: usize) -> Result<Rack, Error> {
        let describe = || {
            let mut s: String = letters.iter().map(|l| l.serialize()).collect();
            s.extend(std::iter::repeat('*').take(wildcards));
            s
        };
        if letters.len() + wildcards > DIM
            || wildcards > MAX_WILDCARDS
            || letters.iter().any(|l| l.is_wildcard())
        {
            return Err(Error::InvalidRack(describe()));
        }
        let mut sorted: Letters = letters.iter().copied().collect();
        sorted.sort();
        Ok(Rack {
            letters: sorted,
            wildcards,
        })
    }

    /// The concrete letters, in sorted order.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn wildcards(&self) -> usize {
        self.wildcards
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.letters.len() + self.wildcards
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate every way to resolve the wildcards, see [`WildcardAssignments`].
    pub fn assignments(&self) -> WildcardAssignments {
        WildcardAssignments::new(self.wildcards)
    }

    /// The concrete letters followed by the wildcard letters of `assignment`.
    pub fn with_assignment(&self, assignment: &Letters) -> Letters {
        let mut letters = self.letters.clone();
        letters.extend(assignment.iter().copied());
        letters
    }
}

impl FromStr for Rack {
    type Err = Error;

    /// Parse a rack such as `"CA T*"`. Letters are converted to uppercase, spaces are
    /// ignored and `*` is a wildcard.
    /// ## Errors
    /// If the rack is empty, too long or contains any other character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidRack(String::from(s));
        let mut letters = Vec::new();
        let mut wildcards = 0;
        for ch in s.chars().filter(|&ch| ch != ' ') {
            match ch {
                '*' => wildcards += 1,
                ch if ch.is_ascii_alphabetic() => letters.push(Letter::new(ch)),
                _ => return Err(invalid()),
            }
        }
        if letters.is_empty() && wildcards == 0 {
            return Err(invalid());
        }
        Rack::new(&letters, wildcards).map_err(|_| invalid())
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter.ch())?;
        }
        for _ in 0..self.wildcards {
            write!(f, "*")?;
        }
        Ok(())
    }
}

/// Iterate the distinct letters of a list, each with the rest of the list.
///
/// Letters are distinct by character: once a character has been chosen, later copies
/// of it (concrete or wildcard) are skipped. The rest of the list is the list without
/// the chosen occurrence, so a repeated letter stays available to later choices.
#[derive(Debug, Clone)]
pub struct DistinctChoices {
    letters: Letters,
    i: usize,
    seen: LetterSet,
}

impl DistinctChoices {
    pub fn new(letters: Letters) -> DistinctChoices {
        DistinctChoices {
            letters,
            i: 0,
            seen: LetterSet::new(),
        }
    }
}

impl Iterator for DistinctChoices {
    type Item = (Letter, Letters);

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.letters.len() {
            let i = self.i;
            self.i += 1;
            let letter = self.letters[i];
            if self.seen.insert(letter) {
                continue;
            }
            let mut rest = self.letters.clone();
            rest.remove(i);
            return Some((letter, rest));
        }
        None
    }
}

/// Iterate all `26^n` ways to assign letters to `n` wildcards.
///
/// Assignments are counted like an odometer, `AA`, `AB` .. `AZ`, `BA` .. `ZZ`, with the
/// first wildcard changing slowest. With no wildcards a single empty assignment is given.
#[derive(Debug, Clone)]
pub struct WildcardAssignments {
    digits: Vec<u8>,
    done: bool,
}

impl WildcardAssignments {
    pub fn new(n: usize) -> WildcardAssignments {
        WildcardAssignments {
            digits: vec![0; n],
            done: false,
        }
    }
}

impl Iterator for WildcardAssignments {
    type Item = Letters;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self
            .digits
            .iter()
            .map(|&d| Letter::wildcard((b'A' + d) as char))
            .collect();
        // advance, carrying from the last digit
        self.done = true;
        for digit in self.digits.iter_mut().rev() {
            if *digit < 25 {
                *digit += 1;
                self.done = false;
                break;
            }
            *digit = 0;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::spell;

    #[test]
    fn test_parse_rack() -> Result<(), Error> {
        let rack: Rack = "to c*at".parse()?;
        assert_eq!(spell(rack.letters()), "ACOTT");
        assert_eq!(rack.wildcards(), 1);
        assert_eq!(rack.len(), 6);
        assert_eq!(rack.to_string(), "ACOTT*");
        assert!(matches!("".parse::<Rack>(), Err(Error::InvalidRack(_))));
        assert!(matches!("  ".parse::<Rack>(), Err(Error::InvalidRack(_))));
        assert!(matches!("AB1".parse::<Rack>(), Err(Error::InvalidRack(_))));
        assert!(matches!(
            "ABCDEFGHIJKLMNOPQ".parse::<Rack>(),
            Err(Error::InvalidRack(_))
        ));
        Ok(())
    }

    #[test]
    fn test_wildcard_limit() -> Result<(), Error> {
        let rack: Rack = "ab**".parse()?;
        assert_eq!(rack.wildcards(), MAX_WILDCARDS);
        assert_eq!(rack.assignments().count(), 26 * 26);
        assert!(matches!("***".parse::<Rack>(), Err(Error::InvalidRack(s)) if s == "***"));
        assert!(matches!(
            Rack::new(&[Letter::new('A')], MAX_WILDCARDS + 1),
            Err(Error::InvalidRack(s)) if s == "A***"
        ));
        Ok(())
    }

    #[test]
    fn test_distinct_choices() -> Result<(), Error> {
        let rack: Rack = "CATTO".parse()?;
        let choices: Vec<(char, String)> = DistinctChoices::new(rack.with_assignment(&Letters::new()))
            .map(|(letter, rest)| (letter.ch(), spell(&rest)))
            .collect();
        assert_eq!(
            choices,
            vec![
                ('A', String::from("COTT")),
                ('C', String::from("AOTT")),
                ('O', String::from("ACTT")),
                ('T', String::from("ACOT")),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_distinct_choices_wildcard() -> Result<(), Error> {
        let rack: Rack = "AB*".parse()?;
        let assignment: Letters = vec![Letter::wildcard('A')].into_iter().collect();
        let choices: Vec<(Letter, Letters)> =
            DistinctChoices::new(rack.with_assignment(&assignment)).collect();
        // the wildcard A is the same choice as the concrete A
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].0, Letter::new('A'));
        assert_eq!(&choices[0].1[..], &[Letter::new('B'), Letter::wildcard('A')]);
        assert_eq!(choices[1].0, Letter::new('B'));
        Ok(())
    }

    #[test]
    fn test_wildcard_assignments() {
        assert_eq!(WildcardAssignments::new(0).collect::<Vec<_>>(), vec![Letters::new()]);
        let one: Vec<String> = WildcardAssignments::new(1).map(|a| spell(&a)).collect();
        assert_eq!(one.len(), 26);
        assert_eq!(one[0], "A");
        assert_eq!(one[25], "Z");
        let two: Vec<Letters> = WildcardAssignments::new(2).collect();
        assert_eq!(two.len(), 26 * 26);
        assert_eq!(spell(&two[1]), "AB");
        assert_eq!(spell(&two[26]), "BA");
        assert_eq!(spell(&two[675]), "ZZ");
        assert!(two.iter().flatten().all(|l| l.is_wildcard()));
    }
}
