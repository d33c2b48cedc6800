//! Canonical word representation.

use std::{
    borrow::Borrow,
    fmt::{self, Display},
};

use serde::{Deserialize, Serialize};

/// A word in canonical uppercase form.
///
/// Normalizing once at construction makes every comparison between [`Word`]s
/// case-insensitive with respect to the original input, and lets a
/// `HashSet<Word>` be queried with an already-uppercase `&str`.
///
/// # Examples
///
/// ```
/// use wordtrace_core::Word;
///
/// let word = Word::new("Flow");
/// assert_eq!(word.as_str(), "FLOW");
/// assert_eq!(word, Word::new("fLoW"));
/// assert_eq!(word.letter_count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Creates a word, converting it to uppercase.
    #[must_use]
    pub fn new(word: impl AsRef<str>) -> Self {
        Self(word.as_ref().to_uppercase())
    }

    /// Returns the uppercase text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of letters (characters), not bytes.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<&str> for Word {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

impl From<String> for Word {
    fn from(word: String) -> Self {
        Self::new(word)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}
