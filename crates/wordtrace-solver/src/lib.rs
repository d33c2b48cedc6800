//! Exhaustive word discovery and grid analysis.
//!
//! [`WordFinder`] walks every adjacency-valid, duplicate-free path in a grid
//! while stepping a trie cursor in lockstep, so a branch is abandoned as soon
//! as its letters stop being a dictionary prefix. [`DiscoveryMetrics`] turns
//! the result into authoring statistics, and [`AnalysisWorker`] runs the search
//! off the interactive thread with newest-request-wins cancellation.
//!
//! # Examples
//!
//! ```
//! use wordtrace_game::testing;
//! use wordtrace_solver::{Difficulty, DiscoveryMetrics, WordFinder};
//!
//! let lexicon = testing::sample_lexicon();
//! let grid = testing::cat_grid();
//!
//! let discovery = WordFinder::new(&lexicon)
//!     .with_minimum_word_length(3)
//!     .find_all(&grid);
//! assert!(discovery.contains("toad"));
//!
//! let metrics = DiscoveryMetrics::new(&grid, &discovery);
//! assert_eq!(metrics.distinct_word_count, 10);
//! assert_eq!(metrics.difficulty(), Difficulty::Easy);
//! ```

pub use self::{
    cancel::{CancelSource, CancelToken},
    discovery::{DiscoveredWord, Discovery, WordFinder},
    metrics::{Difficulty, DiscoveryMetrics, UNCOMMON_LETTERS},
    worker::{AnalysisError, AnalysisHandle, AnalysisPoll, AnalysisReport, AnalysisWorker},
};

mod cancel;
mod discovery;
mod metrics;
mod worker;
