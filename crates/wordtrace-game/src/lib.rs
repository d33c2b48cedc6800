//! Gameplay logic for word-connection puzzles.
//!
//! This crate turns pointer gestures into scored words:
//!
//! 1. [`TraceMachine`] consumes `(coordinate, down/move/up)` samples and
//!    produces a committed [`TracePath`](wordtrace_core::TracePath).
//! 2. [`resolve`] classifies the path against a [`Puzzle`] as a
//!    [`ValidationOutcome`].
//! 3. [`score`] maps word length to points.
//!
//! [`Session`] ties the last two together for a single play-through, and
//! [`PuzzleValidator`] checks a puzzle definition before it is offered for play.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashSet;
//!
//! use wordtrace_core::{Coordinate, TracePath};
//! use wordtrace_game::{ValidationOutcome, resolve, testing};
//!
//! let puzzle = testing::cat_puzzle();
//! let path: TracePath = [(0, 0), (1, 0), (2, 0)]
//!     .into_iter()
//!     .map(Coordinate::from)
//!     .collect();
//!
//! let outcome = resolve(&path, &puzzle, &HashSet::new());
//! assert!(matches!(outcome, ValidationOutcome::Success { score: 100, .. }));
//! ```

pub use self::{
    puzzle::{Puzzle, PuzzleDefinition, PuzzleError, SolutionWord, SolutionWordDefinition},
    resolver::{ValidationOutcome, resolve},
    score::{BASE_POINTS, score, score_for_length},
    session::{FoundWord, Session},
    trace::{
        PendingCandidate, PointerEvent, PointerKind, TraceEffect, TraceMachine, TraceSettings,
        TraceState, Transition,
    },
    validator::{PuzzleValidator, ValidationReport, Violation},
};

mod puzzle;
mod resolver;
mod score;
mod session;
pub mod testing;
mod trace;
mod validator;
