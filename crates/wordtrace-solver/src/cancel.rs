//! Generation-based cooperative cancellation.

use std::sync::Arc;

use portable_atomic::{AtomicU64, Ordering};

/// Issues [`CancelToken`]s and cancels all of them at once.
///
/// The source holds a shared generation counter. A token remembers the
/// generation it was issued in and counts as cancelled as soon as the counter
/// moves on.
#[derive(Debug, Clone, Default)]
pub struct CancelSource {
    generation: Arc<AtomicU64>,
}

impl CancelSource {
    /// Creates a source at generation zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a token tied to the current generation.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            shared: Some(Arc::clone(&self.generation)),
            generation: self.generation(),
        }
    }

    /// Cancels every outstanding token and returns the new generation.
    pub fn cancel(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Returns the current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// A cheap, cloneable cancellation flag polled by long-running searches.
#[derive(Debug, Clone)]
pub struct CancelToken {
    shared: Option<Arc<AtomicU64>>,
    generation: u64,
}

impl CancelToken {
    /// Returns a token that is never cancelled.
    #[must_use]
    pub fn never() -> Self {
        Self {
            shared: None,
            generation: 0,
        }
    }

    /// Returns the generation this token was issued in.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` once the issuing source has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.shared
            .as_ref()
            .is_some_and(|shared| shared.load(Ordering::Acquire) != self.generation)
    }
}
