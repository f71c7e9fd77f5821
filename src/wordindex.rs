use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// How a string relates to the words in a [`WordIndex`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WordEntry {
    /// Not a word, and not part of any word.
    Absent,
    /// Part of a word, but not a word itself: worth extending.
    Substring,
    /// A word that can not be extended to a longer word.
    Word,
    /// A word that is also part of a longer word.
    WordAndSubstring,
}

impl WordEntry {
    pub fn is_word(self) -> bool {
        matches!(self, WordEntry::Word | WordEntry::WordAndSubstring)
    }

    pub fn is_substring(self) -> bool {
        matches!(self, WordEntry::Substring | WordEntry::WordAndSubstring)
    }
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The set of playable words, and the set of all their contiguous substrings.
///
/// Every word is indexed as a substring of itself, and every slice of a word down to a
/// single letter is a substring.
pub struct WordIndex {
    words: HashSet<String>,
    substrings: HashSet<String>,
    /// Path of the word file used to build the index.
    /// Empty if the index is not built from a file.
    pub wordfile: String,
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<WordIndex: {} words, {} substrings from '{}'>",
            self.words.len(),
            self.substrings.len(),
            self.wordfile
        )
    }
}

impl WordIndex {
    /// Build the index from a list of words. Words are trimmed and converted to uppercase;
    /// empty entries are skipped.
    /// ## Errors
    /// If a word contains anything other than the letters `a..z`, `A..Z`.
    /// ## Examples
    /// ```
    /// use wordboard_solver::{WordEntry, WordIndex};
    /// let index = WordIndex::from_words(&["cat", "at"])?;
    /// assert_eq!(index.classify("CAT"), WordEntry::Word);
    /// assert_eq!(index.classify("AT"), WordEntry::WordAndSubstring);
    /// assert_eq!(index.classify("CA"), WordEntry::Substring);
    /// assert_eq!(index.classify("TA"), WordEntry::Absent);
    /// # Ok::<(), wordboard_solver::Error>(())
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<WordIndex, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            if let Some(word) = normalize(word.as_ref())? {
                set.insert(word);
            }
        }
        Ok(WordIndex::from_word_set(set))
    }

    /// Build the index from an already normalized set of uppercase words.
    fn from_word_set(words: HashSet<String>) -> WordIndex {
        let mut substrings = HashSet::new();
        for word in &words {
            substrings.extend(all_substrings(word));
        }
        WordIndex {
            words,
            substrings,
            wordfile: String::new(),
        }
    }

    /// Use precomputed `words` and `substrings` sets as they are.
    pub fn from_sets(words: HashSet<String>, substrings: HashSet<String>) -> WordIndex {
        WordIndex {
            words,
            substrings,
            wordfile: String::new(),
        }
    }

    /// Read the words from `wordfile`, one word per line, leaving out the words listed
    /// in `omitfile` (same format) if given.
    /// ## Errors
    /// Fails if a file can not be read, or contains an invalid word.
    pub fn from_file(wordfile: &str, omitfile: Option<&str>) -> Result<WordIndex, Error> {
        let omitted = match omitfile {
            Some(path) => read_words(path)?,
            None => HashSet::new(),
        };
        let words: HashSet<String> = read_words(wordfile)?
            .difference(&omitted)
            .cloned()
            .collect();
        let mut index = WordIndex::from_word_set(words);
        index.wordfile = String::from(wordfile);
        log::info!(
            "Loaded {} dictionary words and {} substrings.",
            index.words.len(),
            index.substrings.len()
        );
        Ok(index)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the index from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(path: &str) -> Result<WordIndex, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let reader = BufReader::new(file);
        bincode::deserialize_from(reader)
            .map_err(|_| Error::WordIndexSerializeError(String::from(path)))
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Write the index to a bincoded file.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordIndexSerializeError(String::from(path)))
    }

    /// Classify `s` against the index.
    pub fn classify(&self, s: &str) -> WordEntry {
        match (self.words.contains(s), self.substrings.contains(s)) {
            (false, false) => WordEntry::Absent,
            (false, true) => WordEntry::Substring,
            (true, false) => WordEntry::Word,
            (true, true) => WordEntry::WordAndSubstring,
        }
    }

    /// Returns true if `s` is a playable word.
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    /// Returns true if `s` is part of some word.
    pub fn is_substring(&self, s: &str) -> bool {
        self.substrings.contains(s)
    }

    /// The number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The number of distinct substrings.
    pub fn substring_count(&self) -> usize {
        self.substrings.len()
    }
}

/// Trim and uppercase `word`. Returns None for an empty line.
fn normalize(word: &str) -> Result<Option<String>, Error> {
    let word = word.trim();
    if word.is_empty() {
        return Ok(None);
    }
    if !word.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(Error::InvalidWord(String::from(word)));
    }
    Ok(Some(word.to_ascii_uppercase()))
}

fn read_words(path: &str) -> Result<HashSet<String>, Error> {
    let text = read_to_string(path).map_err(|source| Error::ReadError {
        path: String::from(path),
        source,
    })?;
    let mut words = HashSet::new();
    for line in text.lines() {
        if let Some(word) = normalize(line)? {
            words.insert(word);
        }
    }
    Ok(words)
}

/// All contiguous slices of `word`, including single letters and `word` itself.
fn all_substrings(word: &str) -> impl Iterator<Item = String> + '_ {
    let n = word.len();
    (0..n).flat_map(move |i| (i + 1..=n).map(move |j| String::from(&word[i..j])))
}
