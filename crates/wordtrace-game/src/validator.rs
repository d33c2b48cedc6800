use std::collections::HashSet;

use wordtrace_core::{Coordinate, GridError, Word, path};
use wordtrace_lexicon::Lexicon;

use crate::{Puzzle, SolutionWord};

/// A structural problem found in a puzzle definition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Violation {
    /// The solution word is not in the dictionary.
    #[display("{word} is not in the dictionary")]
    WordNotInDictionary {
        /// Offending word.
        word: Word,
    },
    /// The solution word is shorter than the puzzle minimum and could never be accepted.
    #[display("{word} has {length} letters, fewer than the minimum {minimum}")]
    WordTooShort {
        /// Offending word.
        word: Word,
        /// Letter count of the word.
        length: usize,
        /// Puzzle minimum word length.
        minimum: usize,
    },
    /// The same word is listed more than once.
    #[display("{word} is listed more than once")]
    DuplicateSolutionWord {
        /// Offending word.
        word: Word,
    },
    /// The canonical path has no coordinates.
    #[display("{word} has an empty path")]
    EmptyPath {
        /// Offending word.
        word: Word,
    },
    /// The canonical path leaves the grid.
    #[display("path of {word} leaves the grid at {coordinate}")]
    CoordinateOutOfBounds {
        /// Offending word.
        word: Word,
        /// Coordinate outside the grid.
        coordinate: Coordinate,
    },
    /// The canonical path crosses a blank cell.
    #[display("path of {word} crosses blank cell {coordinate}")]
    BlankCellInPath {
        /// Offending word.
        word: Word,
        /// Blank coordinate.
        coordinate: Coordinate,
    },
    /// Two consecutive path coordinates are not adjacent.
    #[display("path of {word} jumps from {from} to {to}")]
    PathNotContiguous {
        /// Offending word.
        word: Word,
        /// Start of the gap.
        from: Coordinate,
        /// End of the gap.
        to: Coordinate,
    },
    /// A coordinate is used twice in the path.
    #[display("path of {word} visits {coordinate} twice")]
    DuplicateCoordinateInPath {
        /// Offending word.
        word: Word,
        /// Repeated coordinate.
        coordinate: Coordinate,
    },
    /// The path spells something other than the word.
    #[display("path of {word} spells {spelled}")]
    PathSpellingMismatch {
        /// Offending word.
        word: Word,
        /// What the path actually spells.
        spelled: String,
    },
    /// A letter cell is not on any solution path.
    #[display("letter at {coordinate} is not used by any word")]
    UnusedLetter {
        /// Uncovered coordinate.
        coordinate: Coordinate,
    },
}

/// Every violation found in one puzzle, in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if the puzzle has no violations.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns all violations.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` if there are no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the coordinates reported as unused letters.
    pub fn unused_letters(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.violations.iter().filter_map(|violation| match violation {
            Violation::UnusedLetter { coordinate } => Some(*coordinate),
            _ => None,
        })
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// Checks a puzzle's static structure against a dictionary.
///
/// Runs at load or authoring time, never per gesture. All problems are
/// collected rather than stopping at the first, so an author sees everything
/// in one pass.
///
/// # Examples
///
/// ```
/// use wordtrace_game::{PuzzleValidator, Violation, testing};
///
/// let lexicon = testing::sample_lexicon();
/// let validator = PuzzleValidator::new(&lexicon);
///
/// assert!(validator.validate(&testing::dog_puzzle()).is_valid());
///
/// let report = validator.validate(&testing::cat_puzzle());
/// assert_eq!(report.unused_letters().count(), 4);
/// assert!(report.violations().iter().all(Violation::is_unused_letter));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleValidator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> PuzzleValidator<'a> {
    /// Creates a validator using the given dictionary.
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Validates a puzzle and returns every violation found.
    #[must_use]
    pub fn validate(&self, puzzle: &Puzzle) -> ValidationReport {
        let mut violations = Vec::new();
        let mut seen_words = HashSet::new();
        let mut covered = HashSet::new();

        for solution in puzzle.solution_words() {
            if !seen_words.insert(solution.word()) {
                violations.push(Violation::DuplicateSolutionWord {
                    word: solution.word().clone(),
                });
            }
            self.check_word(puzzle, solution, &mut violations);
            check_path(puzzle, solution, &mut violations);
            covered.extend(solution.canonical_path().iter().copied());
        }

        violations.extend(
            puzzle
                .grid()
                .letter_cells()
                .map(wordtrace_core::Cell::coordinate)
                .filter(|coordinate| !covered.contains(coordinate))
                .map(|coordinate| Violation::UnusedLetter { coordinate }),
        );

        if violations.is_empty() {
            log::debug!("puzzle {} passed validation", puzzle.id());
        } else {
            log::debug!(
                "puzzle {} has {} violation(s)",
                puzzle.id(),
                violations.len()
            );
        }
        ValidationReport { violations }
    }

    fn check_word(&self, puzzle: &Puzzle, solution: &SolutionWord, out: &mut Vec<Violation>) {
        let word = solution.word();
        if !self.lexicon.is_word(word.as_str()) {
            out.push(Violation::WordNotInDictionary { word: word.clone() });
        }
        let length = word.letter_count();
        let minimum = puzzle.minimum_word_length();
        if length < minimum {
            out.push(Violation::WordTooShort {
                word: word.clone(),
                length,
                minimum,
            });
        }
    }
}

fn check_path(puzzle: &Puzzle, solution: &SolutionWord, out: &mut Vec<Violation>) {
    let word = solution.word();
    let coordinates = solution.canonical_path().as_slice();
    if coordinates.is_empty() {
        out.push(Violation::EmptyPath { word: word.clone() });
        return;
    }

    if let Some(coordinate) = path::find_duplicate(coordinates) {
        out.push(Violation::DuplicateCoordinateInPath {
            word: word.clone(),
            coordinate,
        });
    }
    if let Some((from, to)) = path::find_gap(coordinates) {
        out.push(Violation::PathNotContiguous {
            word: word.clone(),
            from,
            to,
        });
    }

    match puzzle.grid().spell(coordinates) {
        Ok(spelled) => {
            if spelled != word.as_str() {
                out.push(Violation::PathSpellingMismatch {
                    word: word.clone(),
                    spelled,
                });
            }
        }
        Err(GridError::OutOfBounds { coordinate, .. }) => {
            out.push(Violation::CoordinateOutOfBounds {
                word: word.clone(),
                coordinate,
            });
        }
        Err(GridError::BlankCell { coordinate }) => {
            out.push(Violation::BlankCellInPath {
                word: word.clone(),
                coordinate,
            });
        }
        Err(err) => unreachable!("spell only reports addressing errors: {err}"),
    }
}
