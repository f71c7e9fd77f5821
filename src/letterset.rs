use crate::letter::Letter;

/// A bitset of the characters `A..=Z`. Wildcard flags are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// Insert the character of `letter`. Returns true if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let r = (self.0 & bit) != 0;
        self.0 |= bit;
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterset() {
        let mut set = LetterSet::new();
        assert_eq!(set, LetterSet::default());
        assert!(!set.insert(Letter::new('C')));
        assert!(set.insert(Letter::wildcard('C')));
        assert!(!set.insert(Letter::new('A')));
        assert!(set.insert(Letter::new('A')));
        assert!(!set.insert(Letter::new('Z')));
    }
}
