//! Core data structures for word-connection puzzles.
//!
//! This crate provides the grid model shared by tracing, validation, and word
//! discovery components.
//!
//! # Overview
//!
//! - [`coordinate`]: zero-based `(x, y)` grid addresses and 8-directional adjacency
//! - [`grid`]: rectangular letter grid with blank-cell support
//! - [`path`]: ordered coordinate sequences and their structural checks
//! - [`word`]: canonical (uppercase) word representation
//!
//! # Examples
//!
//! ```
//! use wordtrace_core::{Coordinate, Grid};
//!
//! let grid: Grid = "
//!     CAT
//!     .DO
//!     G.G
//! "
//! .parse()?;
//!
//! let path = [Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(2, 0)];
//! assert_eq!(grid.spell(&path)?, "CAT");
//! assert!(grid.cell_at(Coordinate::new(0, 1))?.is_blank());
//! # Ok::<(), wordtrace_core::GridError>(())
//! ```

pub mod coordinate;
pub mod grid;
pub mod path;
pub mod word;

pub use self::{
    coordinate::Coordinate,
    grid::{Cell, Grid, GridError, Neighbors},
    path::TracePath,
    word::Word,
};
