//! Gesture-to-path state machine.
//!
//! Pointer samples arrive already translated into grid coordinates. The machine
//! is a pure function of `(state, event, now)`: time is passed in by the caller
//! and a pending selection carries an explicit deadline, so no timer API is
//! involved and tests can advance time synthetically.
//!
//! A move onto a fresh adjacent cell does not extend the path at once. The
//! cell becomes a *pending candidate* and is committed only after the pointer
//! rests on it for [`TraceSettings::debounce`]. Sliding through a cell on the
//! way to a diagonal neighbor therefore does not select it. Backtracking onto
//! the previous cell and lifting the pointer act immediately.

use std::time::{Duration, Instant};

use wordtrace_core::{Coordinate, Grid, TracePath};

/// Tunables for [`TraceMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceSettings {
    /// How long the pointer must rest on a candidate cell before it is committed.
    pub debounce: Duration,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(50),
        }
    }
}

/// Kind of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// The pointer touched the grid.
    Down,
    /// The pointer moved while touching.
    Move,
    /// The pointer was lifted.
    Up,
}

/// A pointer sample in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    /// Cell under the pointer.
    pub coordinate: Coordinate,
    /// Sample kind.
    pub kind: PointerKind,
}

impl PointerEvent {
    /// Creates a `Down` sample.
    #[must_use]
    pub fn down(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            kind: PointerKind::Down,
        }
    }

    /// Creates a `Move` sample.
    #[must_use]
    pub fn move_to(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            kind: PointerKind::Move,
        }
    }

    /// Creates an `Up` sample.
    #[must_use]
    pub fn up(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            kind: PointerKind::Up,
        }
    }
}

/// A cell waiting for its debounce deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCandidate {
    /// The candidate cell.
    pub coordinate: Coordinate,
    /// Instant at which the candidate is committed if the pointer stays.
    pub deadline: Instant,
}

/// State of the trace machine.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum TraceState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is in progress.
    Tracing {
        /// Committed cells, never empty.
        path: TracePath,
        /// Candidate awaiting its debounce deadline.
        pending: Option<PendingCandidate>,
    },
}

/// Something observable that happened during a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEffect {
    /// A gesture started on this cell.
    Started(Coordinate),
    /// This cell was appended to the path.
    Extended(Coordinate),
    /// This cell was removed from the end of the path.
    Backtracked(Coordinate),
    /// This cell became the pending candidate.
    CandidatePending(Coordinate),
    /// The pointer left this candidate before it was committed.
    CandidateAbandoned(Coordinate),
    /// The gesture ended with this path.
    Finished(TracePath),
}

/// Result of feeding one event to a [`TraceMachine`].
#[derive(Debug, Clone)]
#[must_use]
pub struct Transition {
    /// The machine after the event.
    pub machine: TraceMachine,
    /// What happened, in order.
    pub effects: Vec<TraceEffect>,
}

impl Transition {
    /// Returns the finished path if this transition ended a gesture.
    #[must_use]
    pub fn finished_path(&self) -> Option<&TracePath> {
        self.effects.iter().find_map(|effect| match effect {
            TraceEffect::Finished(path) => Some(path),
            _ => None,
        })
    }
}

/// Turns a stream of pointer samples into committed paths.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use wordtrace_core::{Coordinate, Grid};
/// use wordtrace_game::{PointerEvent, TraceMachine};
///
/// let grid: Grid = "CAT\n.DO".parse()?;
/// let t0 = Instant::now();
/// let later = |ms| t0 + Duration::from_millis(ms);
///
/// let machine = TraceMachine::default();
/// let machine = machine.handle(&grid, PointerEvent::down(Coordinate::new(0, 0)), t0).machine;
/// let machine = machine.handle(&grid, PointerEvent::move_to(Coordinate::new(1, 0)), later(10)).machine;
/// // Still pending: the pointer has not rested long enough.
/// assert_eq!(machine.path().map(|p| p.len()), Some(1));
///
/// let machine = machine.tick(later(60)).machine;
/// assert_eq!(machine.path().map(|p| p.len()), Some(2));
///
/// let transition = machine.handle(&grid, PointerEvent::up(Coordinate::new(1, 0)), later(70));
/// assert_eq!(transition.finished_path().map(|p| p.len()), Some(2));
/// assert!(transition.machine.is_idle());
/// # Ok::<(), wordtrace_core::GridError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TraceMachine {
    settings: TraceSettings,
    state: TraceState,
}

impl TraceMachine {
    /// Creates an idle machine.
    #[must_use]
    pub fn new(settings: TraceSettings) -> Self {
        Self {
            settings,
            state: TraceState::Idle,
        }
    }

    /// Returns the settings.
    #[must_use]
    pub fn settings(&self) -> &TraceSettings {
        &self.settings
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &TraceState {
        &self.state
    }

    /// Returns `true` if no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, TraceState::Idle)
    }

    /// Returns the committed path of the gesture in progress.
    #[must_use]
    pub fn path(&self) -> Option<&TracePath> {
        match &self.state {
            TraceState::Idle => None,
            TraceState::Tracing { path, .. } => Some(path),
        }
    }

    /// Returns the pending candidate, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingCandidate> {
        match &self.state {
            TraceState::Idle => None,
            TraceState::Tracing { pending, .. } => *pending,
        }
    }

    /// Returns when the caller should next call [`tick`](Self::tick), if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending().map(|pending| pending.deadline)
    }

    /// Feeds one pointer sample.
    ///
    /// A pending candidate whose deadline has already passed is committed
    /// before the sample is processed, exactly as if its timer had fired first.
    pub fn handle(mut self, grid: &Grid, event: PointerEvent, now: Instant) -> Transition {
        let mut effects = Vec::new();
        self.commit_elapsed(now, &mut effects);
        match event.kind {
            PointerKind::Down => self.pointer_down(grid, event.coordinate, &mut effects),
            PointerKind::Move => self.pointer_move(grid, event.coordinate, now, &mut effects),
            PointerKind::Up => self.pointer_up(&mut effects),
        }
        log::trace!("{:?} at {} -> {:?}", event.kind, event.coordinate, effects);
        Transition {
            machine: self,
            effects,
        }
    }

    /// Advances time without a pointer sample.
    ///
    /// Commits the pending candidate if its deadline has passed. A tick that
    /// arrives after the candidate was replaced or abandoned is a no-op.
    pub fn tick(mut self, now: Instant) -> Transition {
        let mut effects = Vec::new();
        self.commit_elapsed(now, &mut effects);
        Transition {
            machine: self,
            effects,
        }
    }

    fn commit_elapsed(&mut self, now: Instant, effects: &mut Vec<TraceEffect>) {
        if let TraceState::Tracing { path, pending } = &mut self.state
            && let Some(candidate) = pending.take_if(|candidate| candidate.deadline <= now)
        {
            path.push(candidate.coordinate);
            effects.push(TraceEffect::Extended(candidate.coordinate));
        }
    }

    fn pointer_down(
        &mut self,
        grid: &Grid,
        coordinate: Coordinate,
        effects: &mut Vec<TraceEffect>,
    ) {
        if !self.is_idle() {
            log::debug!("pointer down during a gesture; restarting at {coordinate}");
        }
        if grid.letter_at(coordinate).is_none() {
            self.state = TraceState::Idle;
            return;
        }
        self.state = TraceState::Tracing {
            path: TracePath::starting_at(coordinate),
            pending: None,
        };
        effects.push(TraceEffect::Started(coordinate));
    }

    fn pointer_move(
        &mut self,
        grid: &Grid,
        coordinate: Coordinate,
        now: Instant,
        effects: &mut Vec<TraceEffect>,
    ) {
        let TraceState::Tracing { path, pending } = &mut self.state else {
            return;
        };
        let Some(last) = path.last() else {
            return;
        };

        // Resting on the current candidate keeps its original deadline.
        if pending.is_some_and(|candidate| candidate.coordinate == coordinate) {
            return;
        }

        if let Some(abandoned) = pending.take() {
            effects.push(TraceEffect::CandidateAbandoned(abandoned.coordinate));
        }

        if coordinate == last || grid.letter_at(coordinate).is_none() {
            return;
        }

        if path.second_to_last() == Some(coordinate) {
            path.pop();
            effects.push(TraceEffect::Backtracked(last));
            return;
        }

        if !last.is_adjacent(coordinate) || path.contains(coordinate) {
            return;
        }

        if self.settings.debounce.is_zero() {
            path.push(coordinate);
            effects.push(TraceEffect::Extended(coordinate));
            return;
        }

        *pending = Some(PendingCandidate {
            coordinate,
            deadline: now + self.settings.debounce,
        });
        effects.push(TraceEffect::CandidatePending(coordinate));
    }

    fn pointer_up(&mut self, effects: &mut Vec<TraceEffect>) {
        let TraceState::Tracing { mut path, pending } = std::mem::take(&mut self.state) else {
            return;
        };
        if let Some(candidate) = pending {
            path.push(candidate.coordinate);
            effects.push(TraceEffect::Extended(candidate.coordinate));
        }
        effects.push(TraceEffect::Finished(path));
    }
}
