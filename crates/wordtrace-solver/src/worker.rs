//! Background grid analysis on a dedicated thread.
//!
//! An editor calls [`AnalysisWorker::request`] every time the grid changes.
//! Each request cancels the one before it, so only the most recent grid is
//! ever reported.

use std::{
    fmt,
    sync::{Arc, mpsc},
    thread,
    time::{Duration, Instant},
};

use wordtrace_core::Grid;
use wordtrace_lexicon::Lexicon;

use crate::{CancelSource, CancelToken, Discovery, DiscoveryMetrics, WordFinder};

/// Errors that can occur while scheduling or receiving analysis work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    /// The worker thread is gone.
    #[display("analysis worker disconnected")]
    WorkerDisconnected,
}

/// The result of one completed analysis.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// The request generation this report answers.
    pub generation: u64,
    /// Every discovered `(word, path)` pair.
    pub discovery: Discovery,
    /// Aggregates over `discovery`.
    pub metrics: DiscoveryMetrics,
    /// Time spent searching.
    pub elapsed: Duration,
}

/// The state of an [`AnalysisHandle`].
#[derive(Debug, derive_more::IsVariant)]
pub enum AnalysisPoll {
    /// Still running or queued.
    Pending,
    /// Finished.
    Ready(AnalysisReport),
    /// A newer request replaced this one; no result will arrive.
    Superseded,
}

struct Job {
    grid: Grid,
    minimum_word_length: usize,
    cancel: CancelToken,
    response_tx: mpsc::Sender<Option<AnalysisReport>>,
}

impl Job {
    fn run(self, lexicon: &Lexicon) {
        let generation = self.cancel.generation();
        let start = Instant::now();
        let discovery = WordFinder::new(lexicon)
            .with_minimum_word_length(self.minimum_word_length)
            .find_all_cancellable(&self.grid, &self.cancel);

        let report = discovery
            .filter(|_| !self.cancel.is_cancelled())
            .map(|discovery| AnalysisReport {
                generation,
                metrics: DiscoveryMetrics::new(&self.grid, &discovery),
                discovery,
                elapsed: start.elapsed(),
            });
        match &report {
            Some(report) => log::debug!(
                "analysis {generation} found {} words in {:?}",
                report.metrics.distinct_word_count,
                report.elapsed
            ),
            None => log::debug!("analysis {generation} superseded"),
        }
        let _ = self.response_tx.send(report);
    }
}

/// A pending analysis.
pub struct AnalysisHandle {
    cancel: CancelToken,
    receiver: mpsc::Receiver<Option<AnalysisReport>>,
}

impl fmt::Debug for AnalysisHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisHandle")
            .field("generation", &self.cancel.generation())
            .finish_non_exhaustive()
    }
}

impl AnalysisHandle {
    /// Returns the request generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.cancel.generation()
    }

    /// Checks for a result without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::WorkerDisconnected`] if the worker thread died.
    pub fn poll(&mut self) -> Result<AnalysisPoll, AnalysisError> {
        use mpsc::TryRecvError;

        if self.cancel.is_cancelled() {
            return Ok(AnalysisPoll::Superseded);
        }
        match self.receiver.try_recv() {
            Ok(Some(report)) => Ok(AnalysisPoll::Ready(report)),
            Ok(None) => Ok(AnalysisPoll::Superseded),
            Err(TryRecvError::Empty) => Ok(AnalysisPoll::Pending),
            Err(TryRecvError::Disconnected) => Err(AnalysisError::WorkerDisconnected),
        }
    }

    /// Blocks until the analysis finishes. Returns `None` if it was superseded.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::WorkerDisconnected`] if the worker thread died.
    pub fn wait(self) -> Result<Option<AnalysisReport>, AnalysisError> {
        let report = self
            .receiver
            .recv()
            .map_err(|_| AnalysisError::WorkerDisconnected)?;
        Ok(report.filter(|_| !self.cancel.is_cancelled()))
    }
}

/// Runs word discovery on a background thread, one grid at a time.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use wordtrace_game::testing;
/// use wordtrace_solver::AnalysisWorker;
///
/// let worker = AnalysisWorker::new(Arc::new(testing::sample_lexicon()));
/// let stale = worker.request(testing::cat_grid(), 3).unwrap();
/// let fresh = worker.request(testing::cat_grid(), 4).unwrap();
///
/// assert!(stale.wait().unwrap().is_none());
/// let report = fresh.wait().unwrap().unwrap();
/// assert_eq!(report.metrics.distinct_word_count, 2);
/// ```
pub struct AnalysisWorker {
    sender: Option<mpsc::Sender<Job>>,
    thread: Option<thread::JoinHandle<()>>,
    cancel: CancelSource,
}

impl fmt::Debug for AnalysisWorker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisWorker")
            .field("generation", &self.cancel.generation())
            .finish_non_exhaustive()
    }
}

impl AnalysisWorker {
    /// Starts the worker thread.
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let (tx, rx) = mpsc::channel::<Job>();
        let thread = thread::spawn(move || {
            while let Ok(job) = rx.recv() {
                job.run(&lexicon);
            }
        });
        Self {
            sender: Some(tx),
            thread: Some(thread),
            cancel: CancelSource::new(),
        }
    }

    /// Queues an analysis of `grid`, cancelling every earlier request.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::WorkerDisconnected`] if the worker thread died.
    pub fn request(
        &self,
        grid: Grid,
        minimum_word_length: usize,
    ) -> Result<AnalysisHandle, AnalysisError> {
        let generation = self.cancel.cancel();
        let cancel = self.cancel.token();
        log::debug!(
            "analysis {generation} requested for {}x{} grid",
            grid.width(),
            grid.height()
        );

        let (response_tx, receiver) = mpsc::channel();
        self.sender
            .as_ref()
            .ok_or(AnalysisError::WorkerDisconnected)?
            .send(Job {
                grid,
                minimum_word_length,
                cancel: cancel.clone(),
                response_tx,
            })
            .map_err(|_| AnalysisError::WorkerDisconnected)?;

        Ok(AnalysisHandle { cancel, receiver })
    }

    /// Cancels the in-flight request, if any.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for AnalysisWorker {
    fn drop(&mut self) {
        self.cancel.cancel();
        drop(self.sender.take());
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::warn!("analysis worker panicked");
        }
    }
}
