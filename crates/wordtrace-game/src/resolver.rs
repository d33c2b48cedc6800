use std::collections::HashSet;

use wordtrace_core::{TracePath, Word};

use crate::{Puzzle, score};

/// The classification of a committed path.
///
/// Rejections are ordinary outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum ValidationOutcome {
    /// The path spells a solution word that has not been found yet.
    Success {
        /// The spelled word.
        word: Word,
        /// Points awarded.
        score: u64,
        /// The path that spelled it.
        path: TracePath,
    },
    /// The word is a solution but was already found.
    AlreadyFound {
        /// The spelled word.
        word: Word,
    },
    /// The path spells fewer letters than the puzzle minimum.
    TooShort,
    /// The spelled string is not one of the puzzle's solution words.
    InvalidWord,
}

/// Classifies a committed path against a puzzle.
///
/// Matching is by spelled string only: any path that spells a solution word is
/// accepted even when it differs from that word's canonical path. Checks run in
/// order: length, already found, solution membership.
///
/// This function has no side effects; recording the find is the caller's job
/// (see [`Session`](crate::Session)).
#[must_use]
pub fn resolve(
    path: &TracePath,
    puzzle: &Puzzle,
    already_found: &HashSet<Word>,
) -> ValidationOutcome {
    let spelled = match puzzle.grid().spell(path.as_slice()) {
        Ok(spelled) => spelled,
        Err(err) => {
            log::warn!("cannot spell traced path: {err}");
            return ValidationOutcome::InvalidWord;
        }
    };
    let word = Word::new(spelled);

    if word.letter_count() < puzzle.minimum_word_length() {
        return ValidationOutcome::TooShort;
    }
    if already_found.contains(&word) {
        return ValidationOutcome::AlreadyFound { word };
    }
    if !puzzle.is_solution(word.as_str()) {
        return ValidationOutcome::InvalidWord;
    }

    ValidationOutcome::Success {
        score: score(word.as_str()),
        word,
        path: path.clone(),
    }
}

#[cfg(test)]
mod tests {
    use wordtrace_core::Coordinate;

    use super::*;
    use crate::testing;

    fn path(coordinates: &[(u8, u8)]) -> TracePath {
        coordinates.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_success_then_already_found() {
        let puzzle = testing::cat_puzzle();
        let cat = path(&[(0, 0), (1, 0), (2, 0)]);
        let mut found = HashSet::new();

        let outcome = resolve(&cat, &puzzle, &found);
        assert_eq!(
            outcome,
            ValidationOutcome::Success {
                word: Word::new("CAT"),
                score: 100,
                path: cat.clone(),
            }
        );

        found.insert(Word::new("cat"));
        assert_eq!(
            resolve(&cat, &puzzle, &found),
            ValidationOutcome::AlreadyFound {
                word: Word::new("CAT")
            }
        );
    }

    #[test]
    fn test_too_short_takes_precedence() {
        let puzzle = testing::cat_puzzle();
        let mut found = HashSet::new();
        found.insert(Word::new("CA"));
        assert!(resolve(&path(&[(0, 0), (1, 0)]), &puzzle, &found).is_too_short());
        assert!(resolve(&TracePath::new(), &puzzle, &found).is_too_short());
    }

    #[test]
    fn test_invalid_word() {
        let puzzle = testing::cat_puzzle();
        let cad = path(&[(0, 0), (1, 0), (1, 1)]);
        assert!(resolve(&cad, &puzzle, &HashSet::new()).is_invalid_word());
    }

    #[test]
    fn test_non_canonical_path_is_accepted() {
        let puzzle = testing::dog_puzzle();
        // DOG via the lower-right G instead of the canonical lower-left one.
        let alternative = path(&[(1, 1), (2, 1), (2, 2)]);
        let canonical = puzzle
            .solution_words()
            .iter()
            .find(|solution| solution.word().as_str() == "DOG")
            .unwrap()
            .canonical_path();
        assert_ne!(canonical, &alternative);

        let outcome = resolve(&alternative, &puzzle, &HashSet::new());
        assert!(matches!(
            outcome,
            ValidationOutcome::Success { ref word, .. } if word.as_str() == "DOG"
        ));
    }

    #[test]
    fn test_unspellable_path_is_invalid() {
        let puzzle = testing::cat_puzzle();
        let through_blank = path(&[(0, 0), (0, 1), (0, 2)]);
        assert!(resolve(&through_blank, &puzzle, &HashSet::new()).is_invalid_word());
        let out_of_bounds = path(&[(2, 0), (3, 0), (4, 0)]);
        assert!(resolve(&out_of_bounds, &puzzle, &HashSet::new()).is_invalid_word());
    }
}
