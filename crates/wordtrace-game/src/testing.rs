//! Fixtures and a gesture driver for tests.
//!
//! [`TraceDriver`] feeds pointer samples to a [`TraceMachine`] on a synthetic
//! clock, so debounce behavior can be exercised without real delays.
//!
//! # Example
//!
//! ```
//! use wordtrace_game::testing::{self, TraceDriver};
//!
//! let grid = testing::cat_grid();
//! TraceDriver::new(&grid)
//!     .down((0, 0))
//!     .move_to((1, 0))
//!     .dwell()
//!     .move_to((2, 0))
//!     .up()
//!     .assert_finished(&[(0, 0), (1, 0), (2, 0)]);
//! ```

use std::time::{Duration, Instant};

use wordtrace_core::{Coordinate, Grid, TracePath};
use wordtrace_lexicon::Lexicon;

use crate::{
    PointerEvent, Puzzle, SolutionWord, TraceEffect, TraceMachine, TraceSettings, Transition,
};

/// The 3×3 grid `CAT / .DO / G.G`.
///
/// # Panics
///
/// Never; the literal is well-formed.
#[must_use]
pub fn cat_grid() -> Grid {
    "
    CAT
    .DO
    G.G
    "
    .parse()
    .unwrap()
}

/// A puzzle on [`cat_grid`] whose only solution is `CAT`, with a minimum
/// length of three.
///
/// Deliberately leaves `D`, `O` and both `G`s uncovered.
#[must_use]
pub fn cat_puzzle() -> Puzzle {
    Puzzle::new(
        "cat",
        "Cat",
        cat_grid(),
        vec![SolutionWord::new("CAT", path(&[(0, 0), (1, 0), (2, 0)]))],
    )
    .with_minimum_word_length(3)
}

/// A fully covered 3×3 puzzle on `CAT / .DO / GOG` with solutions
/// `CAT`, `DOG` and `GOAT`, minimum length three.
///
/// # Panics
///
/// Never; the literal is well-formed.
#[must_use]
pub fn dog_puzzle() -> Puzzle {
    let grid = "
    CAT
    .DO
    GOG
    "
    .parse()
    .unwrap();
    Puzzle::new(
        "dog",
        "Dog",
        grid,
        vec![
            SolutionWord::new("CAT", path(&[(0, 0), (1, 0), (2, 0)])),
            SolutionWord::new("DOG", path(&[(1, 1), (1, 2), (0, 2)])),
            SolutionWord::new("GOAT", path(&[(2, 2), (2, 1), (1, 0), (2, 0)])),
        ],
    )
    .with_minimum_word_length(3)
}

/// A small dictionary covering the fixture puzzles.
///
/// # Panics
///
/// Never; the word list is not empty.
#[must_use]
pub fn sample_lexicon() -> Lexicon {
    Lexicon::from_words([
        "cat", "cad", "cog", "cot", "dog", "dot", "god", "goat", "got", "tad", "toad", "tog",
        "toga", "act", "taco", "coat",
    ])
    .unwrap()
}

/// Builds a path from `(x, y)` pairs.
#[must_use]
pub fn path(coordinates: &[(u8, u8)]) -> TracePath {
    coordinates.iter().copied().map(Coordinate::from).collect()
}

/// A fluent gesture driver with a synthetic clock.
///
/// Events are delivered at the driver's current time; [`advance`](Self::advance)
/// and [`wait`](Self::wait) move the clock forward.
///
/// # Panics
///
/// All assertion methods panic with descriptive messages on failure, using
/// `#[track_caller]` to report the caller's location.
#[derive(Debug)]
pub struct TraceDriver<'a> {
    grid: &'a Grid,
    machine: TraceMachine,
    now: Instant,
    effects: Vec<TraceEffect>,
    finished: Option<TracePath>,
}

impl<'a> TraceDriver<'a> {
    /// Creates a driver with default settings.
    #[must_use]
    pub fn new(grid: &'a Grid) -> Self {
        Self::with_settings(grid, TraceSettings::default())
    }

    /// Creates a driver with custom settings.
    #[must_use]
    pub fn with_settings(grid: &'a Grid, settings: TraceSettings) -> Self {
        Self {
            grid,
            machine: TraceMachine::new(settings),
            now: Instant::now(),
            effects: Vec::new(),
            finished: None,
        }
    }

    fn apply(mut self, f: impl FnOnce(TraceMachine, &Grid, Instant) -> Transition) -> Self {
        let machine = std::mem::take(&mut self.machine);
        let Transition { machine, effects } = f(machine, self.grid, self.now);
        self.machine = machine;
        if let Some(path) = effects.iter().find_map(|effect| match effect {
            TraceEffect::Finished(path) => Some(path.clone()),
            _ => None,
        }) {
            self.finished = Some(path);
        }
        self.effects = effects;
        self
    }

    /// Sends a `Down` sample.
    #[must_use]
    pub fn down(self, (x, y): (u8, u8)) -> Self {
        let event = PointerEvent::down(Coordinate::new(x, y));
        self.apply(|machine, grid, now| machine.handle(grid, event, now))
    }

    /// Sends a `Move` sample.
    #[must_use]
    pub fn move_to(self, (x, y): (u8, u8)) -> Self {
        let event = PointerEvent::move_to(Coordinate::new(x, y));
        self.apply(|machine, grid, now| machine.handle(grid, event, now))
    }

    /// Sends an `Up` sample at the last committed cell (or the origin when idle).
    #[must_use]
    pub fn up(self) -> Self {
        let at = self
            .machine
            .path()
            .and_then(TracePath::last)
            .unwrap_or_default();
        self.apply(|machine, grid, now| machine.handle(grid, PointerEvent::up(at), now))
    }

    /// Moves the clock forward without delivering a tick.
    #[must_use]
    pub fn advance(mut self, duration: Duration) -> Self {
        self.now += duration;
        self
    }

    /// Moves the clock forward and delivers a tick.
    #[must_use]
    pub fn wait(self, duration: Duration) -> Self {
        self.advance(duration)
            .apply(|machine, _grid, now| machine.tick(now))
    }

    /// Waits exactly one debounce interval.
    #[must_use]
    pub fn dwell(self) -> Self {
        let debounce = self.machine.settings().debounce;
        self.wait(debounce)
    }

    /// Traces the cells, resting on each, without lifting the pointer.
    ///
    /// Starts a gesture on the first cell when idle; otherwise every cell is a move.
    #[must_use]
    pub fn trace_without_up(mut self, cells: &[(u8, u8)]) -> Self {
        let mut cells = cells.iter().copied();
        if self.machine.is_idle()
            && let Some(first) = cells.next()
        {
            self = self.down(first);
        }
        for cell in cells {
            self = self.move_to(cell).dwell();
        }
        self
    }

    /// Traces the cells and lifts the pointer.
    #[must_use]
    pub fn trace(self, cells: &[(u8, u8)]) -> Self {
        self.trace_without_up(cells).up()
    }

    /// Returns the last finished path, if a gesture has ended.
    #[must_use]
    pub fn finished(&self) -> Option<&TracePath> {
        self.finished.as_ref()
    }

    /// Consumes the driver and returns the last finished path.
    #[must_use]
    pub fn into_finished(self) -> Option<TracePath> {
        self.finished
    }

    /// Returns the underlying machine.
    #[must_use]
    pub fn machine(&self) -> &TraceMachine {
        &self.machine
    }

    /// Asserts the committed path.
    #[track_caller]
    pub fn assert_path(self, expected: &[(u8, u8)]) -> Self {
        let actual = self.machine.path().map(TracePath::as_slice);
        assert_eq!(
            actual,
            Some(path(expected).as_slice()),
            "unexpected committed path"
        );
        self
    }

    /// Asserts the pending candidate.
    #[track_caller]
    pub fn assert_pending(self, expected: Option<(u8, u8)>) -> Self {
        let actual = self.machine.pending().map(|pending| pending.coordinate);
        assert_eq!(
            actual,
            expected.map(Coordinate::from),
            "unexpected pending candidate"
        );
        self
    }

    /// Asserts that the machine is idle.
    #[track_caller]
    pub fn assert_idle(self) -> Self {
        assert!(
            self.machine.is_idle(),
            "expected idle, got {:?}",
            self.machine.state()
        );
        self
    }

    /// Asserts that the most recent step produced `effect`.
    #[track_caller]
    pub fn assert_effect(self, effect: &TraceEffect) -> Self {
        assert!(
            self.effects.contains(effect),
            "expected {effect:?} in {:?}",
            self.effects
        );
        self
    }

    /// Asserts the path reported by the last finished gesture.
    #[track_caller]
    pub fn assert_finished(self, expected: &[(u8, u8)]) -> Self {
        assert_eq!(
            self.finished.as_ref().map(TracePath::as_slice),
            Some(path(expected).as_slice()),
            "unexpected finished path"
        );
        self
    }

    /// Asserts that no gesture has finished.
    #[track_caller]
    pub fn assert_not_finished(self) -> Self {
        assert!(
            self.finished.is_none(),
            "unexpected finished path {:?}",
            self.finished
        );
        self
    }
}
