//! Word membership and prefix queries backed by a static word list.

use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use wordtrace_core::Word;

use crate::{Trie, TrieCursor};

/// Errors raised while loading a [`Lexicon`].
///
/// Every variant is fatal to a session: nothing downstream works without a dictionary.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LexiconError {
    /// The dictionary file could not be opened or read.
    #[display("dictionary {} is unavailable", path.display())]
    Unavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Reading from a dictionary stream failed.
    #[display("failed to read dictionary")]
    Read {
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The word list contained no usable words.
    #[display("dictionary contains no words")]
    Empty,
}

/// A read-only dictionary with O(1) membership and trie-based prefix lookups.
///
/// All words are stored in uppercase; queries accept any case.
///
/// # Examples
///
/// ```
/// use wordtrace_lexicon::Lexicon;
///
/// let lexicon = Lexicon::parse("cat\ndog\n\n# comment\nflow\n")?;
/// assert_eq!(lexicon.len(), 3);
/// assert!(lexicon.is_word("Dog"));
/// assert!(!lexicon.is_word("do"));
/// assert!(lexicon.has_prefix("do"));
/// # Ok::<(), wordtrace_lexicon::LexiconError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashSet<Word>,
    trie: Trie,
}

impl Lexicon {
    /// Builds a lexicon from an iterator of words.
    ///
    /// Words are trimmed and uppercased. Empty entries and entries containing
    /// non-alphabetic characters are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Empty`] if no usable word remains.
    pub fn from_words<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        let mut trie = Trie::new();
        let mut skipped = 0usize;

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if !word.chars().all(char::is_alphabetic) {
                skipped += 1;
                continue;
            }
            let word = Word::new(word);
            trie.insert(word.as_str());
            set.insert(word);
        }

        if skipped > 0 {
            log::debug!("skipped {skipped} dictionary entries with non-alphabetic characters");
        }
        if set.is_empty() {
            return Err(LexiconError::Empty);
        }

        Ok(Self { words: set, trie })
    }

    /// Parses a newline-delimited word list. Lines starting with `#` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Empty`] if no usable word remains.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        Self::from_words(text.lines())
    }

    /// Reads a newline-delimited word list from a stream.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Read`] on I/O failure and [`LexiconError::Empty`]
    /// if no usable word remains.
    pub fn from_reader<R>(reader: R) -> Result<Self, LexiconError>
    where
        R: BufRead,
    {
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| LexiconError::Read { source })?;
        Self::from_words(lines)
    }

    /// Loads a newline-delimited word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Unavailable`] if the file cannot be opened or
    /// read, and [`LexiconError::Empty`] if it holds no usable word.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let unavailable = |source| LexiconError::Unavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let lexicon = Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            LexiconError::Read { source } => unavailable(source),
            err => err,
        })?;
        log::info!(
            "loaded {} words from dictionary {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the lexicon holds no words. Never true for a loaded lexicon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is in the dictionary and has at least
    /// `min_length` letters.
    #[must_use]
    pub fn contains(&self, word: &str, min_length: usize) -> bool {
        word.chars().count() >= min_length && self.is_word(word)
    }

    /// Returns `true` if `word` is in the dictionary, regardless of length.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(Word::new(word).as_str())
    }

    /// Returns `true` if some dictionary word starts with `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.trie.has_prefix(&prefix.to_uppercase())
    }

    /// Returns a trie cursor at the empty prefix.
    ///
    /// Cursor steps expect uppercase letters, which is what grid cells hold.
    #[must_use]
    pub fn cursor(&self) -> TrieCursor<'_> {
        self.trie.cursor()
    }

    /// Returns the underlying trie.
    #[must_use]
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Iterates over every word in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
