//! Exhaustive word discovery over a grid.

use std::collections::{BTreeSet, HashSet};

use wordtrace_core::{Coordinate, Grid, TracePath, Word};
use wordtrace_game::Puzzle;
use wordtrace_lexicon::{Lexicon, TrieCursor};

use crate::CancelToken;

/// Number of search nodes visited between cancellation checks.
const CANCEL_CHECK_INTERVAL: u32 = 1024;

/// A dictionary word together with one path that spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveredWord {
    word: Word,
    path: TracePath,
}

impl DiscoveredWord {
    /// Returns the word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &TracePath {
        &self.path
    }
}

/// Everything a [`WordFinder`] found in one grid.
///
/// Every distinct path is kept, so a word reachable along several paths
/// appears several times. Entries are ordered by starting cell (row-major),
/// then by depth-first visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    words: Vec<DiscoveredWord>,
}

impl Discovery {
    /// Returns every `(word, path)` pair.
    #[must_use]
    pub fn words(&self) -> &[DiscoveredWord] {
        &self.words
    }

    /// Returns the number of `(word, path)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the distinct words, sorted.
    #[must_use]
    pub fn distinct_words(&self) -> BTreeSet<&Word> {
        self.words.iter().map(DiscoveredWord::word).collect()
    }

    /// Returns `true` if `word` was found along any path.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = Word::new(word);
        self.words.iter().any(|found| found.word == word)
    }

    /// Iterates over every path found for `word`.
    pub fn paths_for(&self, word: &str) -> impl Iterator<Item = &TracePath> {
        let word = Word::new(word);
        self.words
            .iter()
            .filter(move |found| found.word == word)
            .map(DiscoveredWord::path)
    }

    /// Returns the cells crossed by at least one discovered path.
    #[must_use]
    pub fn covered_cells(&self) -> HashSet<Coordinate> {
        self.words
            .iter()
            .flat_map(|found| found.path.iter().copied())
            .collect()
    }

    /// Returns the letter cells no discovered path crosses, in row-major order.
    #[must_use]
    pub fn uncovered_cells(&self, grid: &Grid) -> Vec<Coordinate> {
        let covered = self.covered_cells();
        grid.letter_cells()
            .map(wordtrace_core::Cell::coordinate)
            .filter(|coordinate| !covered.contains(coordinate))
            .collect()
    }
}

/// Finds every dictionary word that can be traced in a grid.
///
/// The search runs depth-first from every letter cell, extending the current
/// path by one unused neighbor at a time. A branch is dropped as soon as the
/// letters so far stop being a dictionary prefix.
///
/// # Examples
///
/// ```
/// use wordtrace_game::testing;
/// use wordtrace_solver::WordFinder;
///
/// let lexicon = testing::sample_lexicon();
/// let grid = testing::cat_grid();
///
/// let discovery = WordFinder::new(&lexicon)
///     .with_minimum_word_length(4)
///     .find_all(&grid);
/// let words: Vec<_> = discovery.distinct_words().into_iter().map(|w| w.as_str()).collect();
/// assert_eq!(words, ["GOAT", "TOAD"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WordFinder<'a> {
    lexicon: &'a Lexicon,
    minimum_word_length: usize,
}

impl<'a> WordFinder<'a> {
    /// Creates a finder using [`Puzzle::DEFAULT_MINIMUM_WORD_LENGTH`].
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            minimum_word_length: Puzzle::DEFAULT_MINIMUM_WORD_LENGTH,
        }
    }

    /// Sets the shortest word length to report.
    #[must_use]
    pub fn with_minimum_word_length(mut self, minimum_word_length: usize) -> Self {
        self.minimum_word_length = minimum_word_length;
        self
    }

    /// Returns the shortest word length reported.
    #[must_use]
    pub fn minimum_word_length(&self) -> usize {
        self.minimum_word_length
    }

    /// Runs a full search.
    #[must_use]
    pub fn find_all(&self, grid: &Grid) -> Discovery {
        self.find_all_cancellable(grid, &CancelToken::never())
            .unwrap_or_default()
    }

    /// Runs a search that stops early once `cancel` fires.
    ///
    /// Returns `None` when cancelled; partial results are discarded.
    #[must_use]
    pub fn find_all_cancellable(&self, grid: &Grid, cancel: &CancelToken) -> Option<Discovery> {
        let mut search = Search {
            grid,
            cancel,
            minimum_word_length: self.minimum_word_length,
            visited: vec![false; grid.len()],
            path: Vec::new(),
            letters: String::new(),
            found: Vec::new(),
            budget: CANCEL_CHECK_INTERVAL,
        };

        for cell in grid.letter_cells() {
            if cancel.is_cancelled()
                || search
                    .extend(cell.coordinate(), self.lexicon.cursor())
                    .is_err()
            {
                log::debug!("word discovery cancelled (generation {})", cancel.generation());
                return None;
            }
        }

        Some(Discovery {
            words: search.found,
        })
    }
}

struct Cancelled;

struct Search<'g, 'c> {
    grid: &'g Grid,
    cancel: &'c CancelToken,
    minimum_word_length: usize,
    visited: Vec<bool>,
    path: Vec<Coordinate>,
    letters: String,
    found: Vec<DiscoveredWord>,
    budget: u32,
}

impl Search<'_, '_> {
    fn check_cancelled(&mut self) -> Result<(), Cancelled> {
        self.budget -= 1;
        if self.budget == 0 {
            self.budget = CANCEL_CHECK_INTERVAL;
            if self.cancel.is_cancelled() {
                return Err(Cancelled);
            }
        }
        Ok(())
    }

    fn extend(&mut self, at: Coordinate, cursor: TrieCursor<'_>) -> Result<(), Cancelled> {
        let (Some(letter), Some(index)) = (self.grid.letter_at(at), self.grid.index_of(at)) else {
            return Ok(());
        };
        let Some(cursor) = cursor.step(letter) else {
            return Ok(());
        };
        self.check_cancelled()?;

        self.visited[index] = true;
        self.path.push(at);
        self.letters.push(letter);

        if cursor.is_word() && self.path.len() >= self.minimum_word_length {
            self.found.push(DiscoveredWord {
                word: Word::new(&self.letters),
                path: TracePath::from(self.path.clone()),
            });
        }
        if cursor.has_children() {
            for neighbor in self.grid.neighbors(at) {
                if self
                    .grid
                    .index_of(neighbor)
                    .is_some_and(|index| !self.visited[index])
                {
                    self.extend(neighbor, cursor)?;
                }
            }
        }

        self.letters.pop();
        self.path.pop();
        self.visited[index] = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wordtrace_core::path;
    use wordtrace_game::testing;

    use super::*;
    use crate::CancelSource;

    fn distinct(discovery: &Discovery) -> Vec<&str> {
        discovery
            .distinct_words()
            .into_iter()
            .map(Word::as_str)
            .collect()
    }

    #[test]
    fn test_finds_every_traceable_word() {
        let lexicon = testing::sample_lexicon();
        let grid = testing::cat_grid();
        let discovery = WordFinder::new(&lexicon)
            .with_minimum_word_length(3)
            .find_all(&grid);

        assert_eq!(
            distinct(&discovery),
            ["CAD", "CAT", "DOG", "DOT", "GOAT", "GOD", "GOT", "TAD", "TOAD", "TOG"]
        );
        assert_eq!(discovery.len(), 10);
        assert_eq!(
            discovery.paths_for("toad").collect::<Vec<_>>(),
            [&testing::path(&[(2, 0), (2, 1), (1, 0), (1, 1)])]
        );
        // COAT, TACO and TOGA are in the dictionary but not traceable here.
        assert!(!discovery.contains("TACO"));
    }

    #[test]
    fn test_retains_every_path() {
        let lexicon = Lexicon::from_words(["dog"]).unwrap();
        let grid: Grid = "
            ...
            .DO
            GOG
        "
        .parse()
        .unwrap();
        let discovery = WordFinder::new(&lexicon)
            .with_minimum_word_length(3)
            .find_all(&grid);

        let paths: HashSet<_> = discovery.paths_for("DOG").cloned().collect();
        let expected: HashSet<_> = [
            testing::path(&[(1, 1), (2, 1), (2, 2)]),
            testing::path(&[(1, 1), (1, 2), (0, 2)]),
            testing::path(&[(1, 1), (1, 2), (2, 2)]),
        ]
        .into_iter()
        .collect();
        assert_eq!(paths, expected);
        assert_eq!(discovery.len(), 3);
    }

    #[test]
    fn test_minimum_length_filters_but_does_not_prune() {
        let lexicon = testing::sample_lexicon();
        let grid = testing::cat_grid();
        let discovery = WordFinder::new(&lexicon).find_all(&grid);
        // TOAD passes through TO, which is not itself reported.
        assert_eq!(distinct(&discovery), ["GOAT", "TOAD"]);
    }

    #[test]
    fn test_uncovered_cells() {
        let lexicon = testing::sample_lexicon();
        let grid = testing::cat_grid();

        let short = WordFinder::new(&lexicon)
            .with_minimum_word_length(3)
            .find_all(&grid);
        assert_eq!(short.uncovered_cells(&grid), [Coordinate::new(0, 2)]);

        let long = WordFinder::new(&lexicon).find_all(&grid);
        assert_eq!(
            long.uncovered_cells(&grid),
            [Coordinate::new(0, 0), Coordinate::new(0, 2)]
        );
    }

    #[test]
    fn test_finds_every_solution_of_a_fixture() {
        let lexicon = testing::sample_lexicon();
        let puzzle = testing::dog_puzzle();
        let discovery = WordFinder::new(&lexicon)
            .with_minimum_word_length(puzzle.minimum_word_length())
            .find_all(puzzle.grid());
        for solution in puzzle.solution_words() {
            assert!(
                discovery
                    .paths_for(solution.word().as_str())
                    .any(|path| path == solution.canonical_path()),
                "{} not found along its canonical path",
                solution.word()
            );
        }
        assert!(discovery.uncovered_cells(puzzle.grid()).is_empty());
    }

    #[test]
    fn test_cancelled_search_returns_nothing() {
        let lexicon = testing::sample_lexicon();
        let grid = testing::cat_grid();
        let source = CancelSource::new();
        let token = source.token();
        source.cancel();

        let finder = WordFinder::new(&lexicon).with_minimum_word_length(3);
        assert_eq!(finder.find_all_cancellable(&grid, &token), None);
        assert!(finder.find_all_cancellable(&grid, &source.token()).is_some());
    }

    #[test]
    fn test_empty_and_blank_grids() {
        let lexicon = testing::sample_lexicon();
        let grid: Grid = "..\n..".parse().unwrap();
        assert!(WordFinder::new(&lexicon).find_all(&grid).is_empty());
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(width, height)| {
            prop::collection::vec(
                prop::collection::vec(
                    prop_oneof![
                        1 => Just(None),
                        6 => prop::sample::select(vec!['A', 'C', 'D', 'G', 'O', 'T']).prop_map(Some),
                    ],
                    width,
                ),
                height,
            )
            .prop_map(|rows| Grid::from_rows(rows).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_discovery_is_sound(grid in arb_grid(), minimum in 1usize..=4) {
            let lexicon = testing::sample_lexicon();
            let discovery = WordFinder::new(&lexicon)
                .with_minimum_word_length(minimum)
                .find_all(&grid);

            let mut seen = HashSet::new();
            for found in discovery.words() {
                let coordinates = found.path().as_slice();
                prop_assert!(path::is_well_formed(coordinates));
                prop_assert_eq!(grid.spell(coordinates).unwrap(), found.word().as_str());
                prop_assert!(lexicon.is_word(found.word().as_str()));
                prop_assert!(found.word().letter_count() >= minimum);
                prop_assert!(seen.insert(found.clone()));
            }
        }
    }
}
