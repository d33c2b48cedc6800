use std::{collections::HashSet, time::SystemTime};

use wordtrace_core::{TracePath, Word};

use crate::{Puzzle, ValidationOutcome, resolve};

/// A word the player has found. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    word: Word,
    path: TracePath,
    score: u64,
    found_at: SystemTime,
}

impl FoundWord {
    /// Returns the word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the path that spelled it.
    #[must_use]
    pub fn path(&self) -> &TracePath {
        &self.path
    }

    /// Returns the points awarded.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns when it was found.
    #[must_use]
    pub fn found_at(&self) -> SystemTime {
        self.found_at
    }
}

/// Progress through one puzzle: found words and running score.
///
/// # Examples
///
/// ```
/// use std::time::SystemTime;
///
/// use wordtrace_game::{Session, testing};
///
/// let puzzle = testing::dog_puzzle();
/// let mut session = Session::new(&puzzle);
///
/// let outcome = session.submit(&testing::path(&[(0, 0), (1, 0), (2, 0)]), SystemTime::now());
/// assert!(outcome.is_success());
/// assert_eq!(session.score(), 100);
/// assert_eq!(session.remaining(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Session<'p> {
    puzzle: &'p Puzzle,
    found: Vec<FoundWord>,
    found_words: HashSet<Word>,
    score: u64,
}

impl<'p> Session<'p> {
    /// Starts a session with nothing found.
    #[must_use]
    pub fn new(puzzle: &'p Puzzle) -> Self {
        Self {
            puzzle,
            found: Vec::new(),
            found_words: HashSet::new(),
            score: 0,
        }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &'p Puzzle {
        self.puzzle
    }

    /// Resolves a finished path and records it on success.
    pub fn submit(&mut self, path: &TracePath, now: SystemTime) -> ValidationOutcome {
        let outcome = resolve(path, self.puzzle, &self.found_words);
        if let ValidationOutcome::Success { word, score, path } = &outcome {
            self.found_words.insert(word.clone());
            self.score = self.score.saturating_add(*score);
            self.found.push(FoundWord {
                word: word.clone(),
                path: path.clone(),
                score: *score,
                found_at: now,
            });
        }
        outcome
    }

    /// Returns found words in the order they were found.
    #[must_use]
    pub fn found(&self) -> &[FoundWord] {
        &self.found
    }

    /// Returns the set of found words.
    #[must_use]
    pub fn found_words(&self) -> &HashSet<Word> {
        &self.found_words
    }

    /// Returns the running score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns the number of distinct solution words not found yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.puzzle.distinct_solution_count() - self.found_words.len()
    }

    /// Returns `true` once every solution word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, TraceDriver};

    fn play(session: &mut Session<'_>, cells: &[(u8, u8)]) -> ValidationOutcome {
        let path = TraceDriver::new(session.puzzle().grid())
            .trace(cells)
            .into_finished()
            .expect("gesture finished");
        session.submit(&path, SystemTime::now())
    }

    #[test]
    fn test_end_to_end_cat_scenario() {
        let puzzle = testing::cat_puzzle();
        let mut session = Session::new(&puzzle);

        let outcome = play(&mut session, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(
            outcome,
            ValidationOutcome::Success {
                word: Word::new("CAT"),
                score: 100,
                path: testing::path(&[(0, 0), (1, 0), (2, 0)]),
            }
        );

        let outcome = play(&mut session, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(
            outcome,
            ValidationOutcome::AlreadyFound {
                word: Word::new("CAT")
            }
        );

        assert_eq!(
            play(&mut session, &[(0, 0), (1, 0)]),
            ValidationOutcome::TooShort
        );
        assert_eq!(
            play(&mut session, &[(0, 0), (1, 0), (1, 1)]),
            ValidationOutcome::InvalidWord
        );

        assert_eq!(session.score(), 100);
        assert_eq!(session.found().len(), 1);
        assert!(session.is_complete());
    }

    #[test]
    fn test_completion_and_running_score() {
        let puzzle = testing::dog_puzzle();
        let mut session = Session::new(&puzzle);

        assert!(play(&mut session, &[(1, 1), (2, 1), (2, 2)]).is_success());
        assert!(!session.is_complete());
        assert!(play(&mut session, &[(2, 2), (2, 1), (1, 0), (2, 0)]).is_success());
        assert!(play(&mut session, &[(0, 0), (1, 0), (2, 0)]).is_success());

        assert!(session.is_complete());
        assert_eq!(session.score(), 100 + 200 + 100);
        let words: Vec<_> = session.found().iter().map(|f| f.word().as_str()).collect();
        assert_eq!(words, ["DOG", "GOAT", "CAT"]);
        assert_eq!(session.found()[1].score(), 200);
    }

    #[test]
    fn test_rejections_do_not_record() {
        let puzzle = testing::dog_puzzle();
        let mut session = Session::new(&puzzle);
        assert!(play(&mut session, &[(2, 0), (2, 1), (1, 2)]).is_invalid_word());
        assert!(session.found().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining(), 3);
    }
}
