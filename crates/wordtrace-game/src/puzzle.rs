use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use wordtrace_core::{Coordinate, Grid, GridError, TracePath, Word};

/// A designer-intended way to spell one solution word.
///
/// The canonical path documents the intended route; during play any
/// adjacency-valid path spelling the same word is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionWord {
    word: Word,
    canonical_path: TracePath,
}

impl SolutionWord {
    /// Creates a solution word.
    #[must_use]
    pub fn new(word: impl Into<Word>, canonical_path: impl Into<TracePath>) -> Self {
        Self {
            word: word.into(),
            canonical_path: canonical_path.into(),
        }
    }

    /// Returns the word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the designer-authored path.
    #[must_use]
    pub fn canonical_path(&self) -> &TracePath {
        &self.canonical_path
    }
}

/// A playable puzzle: a grid plus its set of solution words.
///
/// Structural soundness (coverage, contiguous paths, matching spelling) is not
/// assumed; run [`PuzzleValidator`](crate::PuzzleValidator) before offering a
/// puzzle for play.
#[derive(Debug, Clone)]
pub struct Puzzle {
    id: String,
    title: String,
    grid: Grid,
    solution_words: Vec<SolutionWord>,
    solution_index: HashSet<Word>,
    minimum_word_length: usize,
}

impl Puzzle {
    /// Minimum word length used when a puzzle does not specify one.
    pub const DEFAULT_MINIMUM_WORD_LENGTH: usize = 4;

    /// Creates a puzzle with [`Self::DEFAULT_MINIMUM_WORD_LENGTH`].
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        grid: Grid,
        solution_words: Vec<SolutionWord>,
    ) -> Self {
        let solution_index = solution_words.iter().map(|s| s.word.clone()).collect();
        Self {
            id: id.into(),
            title: title.into(),
            grid,
            solution_words,
            solution_index,
            minimum_word_length: Self::DEFAULT_MINIMUM_WORD_LENGTH,
        }
    }

    /// Overrides the minimum word length.
    #[must_use]
    pub fn with_minimum_word_length(mut self, minimum_word_length: usize) -> Self {
        self.minimum_word_length = minimum_word_length;
        self
    }

    /// Returns the puzzle identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the letter grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the solution words in authoring order.
    #[must_use]
    pub fn solution_words(&self) -> &[SolutionWord] {
        &self.solution_words
    }

    /// Returns the minimum number of letters a submitted word must have.
    #[must_use]
    pub fn minimum_word_length(&self) -> usize {
        self.minimum_word_length
    }

    /// Returns `true` if `word` (already uppercase) is one of the solution words.
    #[must_use]
    pub fn is_solution(&self, word: &str) -> bool {
        self.solution_index.contains(word)
    }

    /// Returns the number of distinct solution words.
    #[must_use]
    pub fn distinct_solution_count(&self) -> usize {
        self.solution_index.len()
    }
}

/// Errors produced when decoding a [`PuzzleDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The letter grid is malformed.
    #[display("invalid grid: {source}")]
    Grid {
        /// Underlying grid error.
        source: GridError,
    },
    /// A solution entry has an empty word.
    #[display("solution word #{index} is empty")]
    EmptyWord {
        /// Zero-based index in the definition's word list.
        index: usize,
    },
    /// The minimum word length must be at least one.
    #[display("minimum word length must be at least 1")]
    InvalidMinimumWordLength,
}

impl From<GridError> for PuzzleError {
    fn from(source: GridError) -> Self {
        Self::Grid { source }
    }
}

/// The serialized form of a puzzle, as produced by authoring tools.
///
/// Grid width and height are inferred from the row arrays; `null` marks a blank.
///
/// # Examples
///
/// ```
/// use wordtrace_game::{Puzzle, PuzzleDefinition};
///
/// let definition = PuzzleDefinition {
///     id: "p1".into(),
///     title: "Pets".into(),
///     grid: vec![vec![Some('c'), Some('a'), Some('t')]],
///     words: vec![wordtrace_game::SolutionWordDefinition {
///         word: "cat".into(),
///         path: vec![(0, 0).into(), (1, 0).into(), (2, 0).into()],
///     }],
///     minimum_word_length: Some(3),
/// };
/// let puzzle = Puzzle::try_from(definition)?;
/// assert!(puzzle.is_solution("CAT"));
/// assert_eq!(puzzle.minimum_word_length(), 3);
/// # Ok::<(), wordtrace_game::PuzzleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDefinition {
    /// Puzzle identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Rows of single letters or `null` for blanks.
    pub grid: Vec<Vec<Option<char>>>,
    /// Solution words with their canonical paths.
    pub words: Vec<SolutionWordDefinition>,
    /// Minimum word length; defaults to [`Puzzle::DEFAULT_MINIMUM_WORD_LENGTH`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_word_length: Option<usize>,
}

/// The serialized form of a [`SolutionWord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionWordDefinition {
    /// The word, in any case.
    pub word: String,
    /// Canonical path as `{x, y}` objects.
    pub path: Vec<Coordinate>,
}

impl TryFrom<PuzzleDefinition> for Puzzle {
    type Error = PuzzleError;

    fn try_from(definition: PuzzleDefinition) -> Result<Self, Self::Error> {
        let PuzzleDefinition {
            id,
            title,
            grid,
            words,
            minimum_word_length,
        } = definition;

        let grid = Grid::from_rows(grid)?;
        let solution_words = words
            .into_iter()
            .enumerate()
            .map(|(index, SolutionWordDefinition { word, path })| {
                let word = word.trim();
                if word.is_empty() {
                    return Err(PuzzleError::EmptyWord { index });
                }
                Ok(SolutionWord::new(word, path))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let minimum_word_length =
            minimum_word_length.unwrap_or(Puzzle::DEFAULT_MINIMUM_WORD_LENGTH);
        if minimum_word_length == 0 {
            return Err(PuzzleError::InvalidMinimumWordLength);
        }

        Ok(Puzzle::new(id, title, grid, solution_words).with_minimum_word_length(minimum_word_length))
    }
}

impl From<&Puzzle> for PuzzleDefinition {
    fn from(puzzle: &Puzzle) -> Self {
        let grid = (0..puzzle.grid.height())
            .map(|y| {
                (0..puzzle.grid.width())
                    .map(|x| puzzle.grid.letter_at(Coordinate::new(x, y)))
                    .collect()
            })
            .collect();
        let words = puzzle
            .solution_words
            .iter()
            .map(|solution| SolutionWordDefinition {
                word: solution.word.to_string(),
                path: solution.canonical_path.as_slice().to_vec(),
            })
            .collect();
        Self {
            id: puzzle.id.clone(),
            title: puzzle.title.clone(),
            grid,
            words,
            minimum_word_length: Some(puzzle.minimum_word_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT_JSON: &str = r#"{
        "id": "cat-3x3",
        "title": "Cat",
        "grid": [["C", "A", "T"], [null, "D", "O"], ["G", null, "G"]],
        "words": [
            {"word": "cat", "path": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 2, "y": 0}]}
        ],
        "minimumWordLength": 3
    }"#;

    #[test]
    fn test_decode_definition_from_json() {
        let definition: PuzzleDefinition = serde_json::from_str(CAT_JSON).unwrap();
        let puzzle = Puzzle::try_from(definition).unwrap();

        assert_eq!(puzzle.id(), "cat-3x3");
        assert_eq!(puzzle.title(), "Cat");
        assert_eq!(puzzle.grid().to_string(), "CAT\n.DO\nG.G");
        assert_eq!(puzzle.minimum_word_length(), 3);
        assert_eq!(puzzle.solution_words().len(), 1);
        assert_eq!(puzzle.solution_words()[0].word().as_str(), "CAT");
        assert!(puzzle.is_solution("CAT"));
        assert!(!puzzle.is_solution("cat"));
    }

    #[test]
    fn test_default_minimum_word_length() {
        let json = r#"{"id": "x", "title": "x", "grid": [["A"]], "words": []}"#;
        let definition: PuzzleDefinition = serde_json::from_str(json).unwrap();
        let puzzle = Puzzle::try_from(definition).unwrap();
        assert_eq!(
            puzzle.minimum_word_length(),
            Puzzle::DEFAULT_MINIMUM_WORD_LENGTH
        );
    }

    #[test]
    fn test_decode_errors() {
        let mut definition: PuzzleDefinition = serde_json::from_str(CAT_JSON).unwrap();
        definition.grid[1].pop();
        assert!(matches!(
            Puzzle::try_from(definition),
            Err(PuzzleError::Grid {
                source: GridError::RaggedRows { row: 1, .. }
            })
        ));

        let mut definition: PuzzleDefinition = serde_json::from_str(CAT_JSON).unwrap();
        definition.words[0].word = "  ".into();
        assert_eq!(
            Puzzle::try_from(definition).unwrap_err(),
            PuzzleError::EmptyWord { index: 0 }
        );

        let mut definition: PuzzleDefinition = serde_json::from_str(CAT_JSON).unwrap();
        definition.minimum_word_length = Some(0);
        assert_eq!(
            Puzzle::try_from(definition).unwrap_err(),
            PuzzleError::InvalidMinimumWordLength
        );
    }

    #[test]
    fn test_definition_export_matches_input() {
        let definition: PuzzleDefinition = serde_json::from_str(CAT_JSON).unwrap();
        let puzzle = Puzzle::try_from(definition.clone()).unwrap();
        let exported = PuzzleDefinition::from(&puzzle);
        assert_eq!(exported.grid, definition.grid);
        assert_eq!(exported.words[0].word, "CAT");
        assert_eq!(exported.words[0].path, definition.words[0].path);
    }
}
