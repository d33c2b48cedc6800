//! Prefix tree over uppercase words.

/// Index of a node in the trie arena.
type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Default, Clone)]
struct Node {
    // Sorted by letter for binary search.
    children: Vec<(char, NodeId)>,
    is_word: bool,
}

impl Node {
    fn child(&self, letter: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&letter, |&(ch, _)| ch)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// An arena-allocated prefix tree.
///
/// Nodes live in a single vector and refer to their children by index, which
/// keeps the structure compact and trivially `Send + Sync`.
///
/// # Examples
///
/// ```
/// use wordtrace_lexicon::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("CAT");
/// trie.insert("CATS");
///
/// assert!(trie.is_word("CAT"));
/// assert!(trie.has_prefix("CA"));
/// assert!(!trie.is_word("CA"));
///
/// let cursor = trie.cursor().step('C').and_then(|c| c.step('A'));
/// assert!(cursor.is_some_and(|c| !c.is_word()));
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }

    /// Inserts a word. Returns `true` if it was not present before.
    ///
    /// # Panics
    ///
    /// Panics if the trie outgrows `u32::MAX` nodes.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = ROOT;
        for letter in word.chars() {
            node = match self.nodes[node as usize].child(letter) {
                Some(child) => child,
                None => {
                    let child = NodeId::try_from(self.nodes.len())
                        .expect("trie node count exceeds u32::MAX");
                    self.nodes.push(Node::default());
                    let children = &mut self.nodes[node as usize].children;
                    let at = children.partition_point(|&(ch, _)| ch < letter);
                    children.insert(at, (letter, child));
                    child
                }
            };
        }
        let node = &mut self.nodes[node as usize];
        let inserted = !node.is_word;
        node.is_word = true;
        if inserted {
            self.word_count += 1;
        }
        inserted
    }

    /// Returns the number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if no word has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns a cursor positioned at the root (the empty prefix).
    #[must_use]
    pub fn cursor(&self) -> TrieCursor<'_> {
        TrieCursor {
            trie: self,
            node: ROOT,
        }
    }

    /// Returns a cursor positioned after `prefix`, or `None` if no word starts with it.
    #[must_use]
    pub fn walk(&self, prefix: &str) -> Option<TrieCursor<'_>> {
        prefix
            .chars()
            .try_fold(self.cursor(), |cursor, letter| cursor.step(letter))
    }

    /// Returns `true` if some word starts with `prefix`. The empty prefix always matches.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Returns `true` if `word` was inserted.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|cursor| cursor.is_word())
    }
}

/// A position inside a [`Trie`], advanced one letter at a time.
///
/// Cursors are `Copy`; a depth-first search keeps one per stack frame and
/// discards it on backtrack.
#[derive(Debug, Clone, Copy)]
pub struct TrieCursor<'a> {
    trie: &'a Trie,
    node: NodeId,
}

impl<'a> TrieCursor<'a> {
    /// Advances by one letter, or returns `None` if no word continues that way.
    #[must_use]
    pub fn step(self, letter: char) -> Option<TrieCursor<'a>> {
        self.trie.nodes[self.node as usize]
            .child(letter)
            .map(|node| TrieCursor {
                trie: self.trie,
                node,
            })
    }

    /// Returns `true` if the letters consumed so far form a complete word.
    #[must_use]
    pub fn is_word(self) -> bool {
        self.trie.nodes[self.node as usize].is_word
    }

    /// Returns `true` if at least one longer word continues from here.
    #[must_use]
    pub fn has_children(self) -> bool {
        !self.trie.nodes[self.node as usize].children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_insert_and_query() {
        let mut trie = Trie::new();
        assert!(trie.is_empty());
        assert!(trie.insert("TEA"));
        assert!(trie.insert("TEN"));
        assert!(trie.insert("TO"));
        assert!(!trie.insert("TEN"));
        assert_eq!(trie.len(), 3);

        assert!(trie.has_prefix(""));
        assert!(trie.has_prefix("TE"));
        assert!(!trie.has_prefix("TA"));
        assert!(trie.is_word("TO"));
        assert!(!trie.is_word("TE"));
        assert!(!trie.is_word("TEAS"));
    }

    #[test]
    fn test_cursor_children() {
        let mut trie = Trie::new();
        trie.insert("AB");
        let a = trie.cursor().step('A').unwrap();
        assert!(a.has_children());
        assert!(!a.is_word());
        let ab = a.step('B').unwrap();
        assert!(ab.is_word());
        assert!(!ab.has_children());
        assert!(ab.step('C').is_none());
    }

    proptest! {
        #[test]
        fn prop_inserted_words_and_prefixes_are_found(
            words in proptest::collection::vec("[A-E]{1,6}", 1..40)
        ) {
            let mut trie = Trie::new();
            for word in &words {
                trie.insert(word);
            }
            for word in &words {
                prop_assert!(trie.is_word(word));
                for end in 0..=word.len() {
                    prop_assert!(trie.has_prefix(&word[..end]));
                }
            }
        }
    }
}
