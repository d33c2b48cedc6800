//! Dictionary support for word-connection puzzles.
//!
//! A [`Lexicon`] answers two questions: "is this a word?" through a hashed
//! membership set, and "can any word start like this?" through a [`Trie`].
//! Word discovery walks the trie with a [`TrieCursor`] so that every grid step
//! costs a single child lookup.
//!
//! The lexicon is loaded once and is read-only afterwards, so a shared
//! reference (or an `Arc`) can be handed to any number of readers.
//!
//! # Examples
//!
//! ```
//! use wordtrace_lexicon::Lexicon;
//!
//! let lexicon = Lexicon::from_words(["cat", "cats", "flow"])?;
//! assert!(lexicon.is_word("CAT"));
//! assert!(lexicon.has_prefix("FL"));
//! assert!(!lexicon.contains("cat", 4));
//! assert!(lexicon.contains("cats", 4));
//! # Ok::<(), wordtrace_lexicon::LexiconError>(())
//! ```

pub mod lexicon;
pub mod trie;

pub use self::{
    lexicon::{Lexicon, LexiconError},
    trie::{Trie, TrieCursor},
};
