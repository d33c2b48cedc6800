//! Rectangular letter grid with blank-cell support.
//!
//! A [`Grid`] holds exactly one [`Cell`] per coordinate in
//! `[0, width) × [0, height)`. Cells without a letter are *blank*: they shape
//! the grid but never participate in a path.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use tinyvec::ArrayVec;

use crate::coordinate::{Coordinate, DIRECTIONS};

/// Up to eight neighboring coordinates, returned without heap allocation.
pub type Neighbors = ArrayVec<[Coordinate; 8]>;

/// A single grid position and its optional letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    coordinate: Coordinate,
    letter: Option<char>,
}

impl Cell {
    /// Returns the coordinate of this cell.
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the uppercase letter of this cell, or `None` for a blank.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Returns `true` if the cell has no letter.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.letter.is_none()
    }
}

/// Errors produced when building or addressing a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The coordinate lies outside the grid.
    #[display("coordinate {coordinate} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Requested coordinate.
        coordinate: Coordinate,
        /// Grid width.
        width: u8,
        /// Grid height.
        height: u8,
    },
    /// The coordinate addresses a blank cell where a letter is required.
    #[display("cell {coordinate} is blank")]
    BlankCell {
        /// Blank coordinate.
        coordinate: Coordinate,
    },
    /// The grid has no rows or no columns.
    #[display("grid has no cells")]
    EmptyGrid,
    /// A row's length differs from the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Zero-based row index.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell holds something other than a single alphabetic character.
    #[display("invalid letter {letter:?}")]
    InvalidLetter {
        /// Offending character.
        letter: char,
    },
    /// The grid does not fit in the coordinate range.
    #[display("grid of {width}x{height} exceeds the maximum dimension {}", Grid::MAX_DIMENSION)]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

/// An addressable 2D letter grid.
///
/// # Examples
///
/// ```
/// use wordtrace_core::{Coordinate, Grid};
///
/// let grid = Grid::from_rows(vec![
///     vec![Some('c'), Some('a'), Some('t')],
///     vec![None, Some('d'), Some('o')],
/// ])?;
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.cell_at(Coordinate::new(0, 0))?.letter(), Some('C'));
/// assert!(grid.cell_at(Coordinate::new(3, 0)).is_err());
/// # Ok::<(), wordtrace_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Largest supported width or height.
    pub const MAX_DIMENSION: usize = u8::MAX as usize;

    /// Builds a grid from rows of optional letters.
    ///
    /// Letters are normalized to uppercase. `None` marks a blank cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if there are no cells,
    /// [`GridError::RaggedRows`] if rows differ in length,
    /// [`GridError::InvalidLetter`] if a letter is not a single alphabetic
    /// character, and [`GridError::TooLarge`] if a dimension exceeds
    /// [`Grid::MAX_DIMENSION`].
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = Option<char>>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIMENSION || height > Self::MAX_DIMENSION {
            return Err(GridError::TooLarge { width, height });
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::RaggedRows {
                row,
                expected: width,
                found,
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in (0..=u8::MAX).zip(rows) {
            for (x, letter) in (0..=u8::MAX).zip(row) {
                let letter = letter.map(normalize_letter).transpose()?;
                cells.push(Cell {
                    coordinate: Coordinate::new(x, y),
                    letter,
                });
            }
        }

        #[expect(clippy::cast_possible_truncation)]
        let (width, height) = (width as u8, height as u8);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns the total number of cells, blanks included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells. Never true for a constructed grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if the coordinate lies inside the grid.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }

    /// Returns the row-major index of a coordinate, or `None` if it is out of bounds.
    ///
    /// Useful for dense per-cell bookkeeping such as visited sets.
    #[must_use]
    pub fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        self.contains(coordinate).then(|| {
            usize::from(coordinate.y) * usize::from(self.width) + usize::from(coordinate.x)
        })
    }

    /// Returns the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the coordinate is outside the grid.
    pub fn cell_at(&self, coordinate: Coordinate) -> Result<&Cell, GridError> {
        self.index_of(coordinate)
            .map(|index| &self.cells[index])
            .ok_or(GridError::OutOfBounds {
                coordinate,
                width: self.width,
                height: self.height,
            })
    }

    /// Returns the letter at the given coordinate, or `None` if the coordinate is
    /// out of bounds or blank.
    #[must_use]
    pub fn letter_at(&self, coordinate: Coordinate) -> Option<char> {
        self.cell_at(coordinate).ok().and_then(Cell::letter)
    }

    /// Returns `true` if `a` and `b` are 8-directionally adjacent.
    ///
    /// This is pure coordinate arithmetic; bounds and blanks are not considered.
    #[must_use]
    pub fn is_adjacent(&self, a: Coordinate, b: Coordinate) -> bool {
        a.is_adjacent(b)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterates over every non-blank cell in row-major order.
    pub fn letter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| !cell.is_blank())
    }

    /// Returns the number of non-blank cells.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letter_cells().count()
    }

    /// Returns the in-bounds, non-blank neighbors of a coordinate, clockwise from north.
    #[must_use]
    pub fn neighbors(&self, coordinate: Coordinate) -> Neighbors {
        DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| coordinate.offset(dx, dy))
            .filter(|&neighbor| self.letter_at(neighbor).is_some())
            .collect()
    }

    /// Concatenates the letters along `path`.
    ///
    /// Adjacency is not checked here; see [`crate::path`] for structural checks.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] or [`GridError::BlankCell`] for the first
    /// coordinate that has no letter.
    pub fn spell(&self, path: &[Coordinate]) -> Result<String, GridError> {
        path.iter()
            .map(|&coordinate| {
                self.cell_at(coordinate)?
                    .letter()
                    .ok_or(GridError::BlankCell { coordinate })
            })
            .collect()
    }
}

fn normalize_letter(letter: char) -> Result<char, GridError> {
    if !letter.is_alphabetic() {
        return Err(GridError::InvalidLetter { letter });
    }
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(upper), None) => Ok(upper),
        _ => Err(GridError::InvalidLetter { letter }),
    }
}

/// Parses a grid from text.
///
/// Each non-empty line is a row. Letters are cells, `.` or `_` are blanks, and
/// whitespace is ignored.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(|ch| match ch {
                        '.' | '_' => Ok(None),
                        ch => normalize_letter(ch).map(Some),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .filter(|row| !matches!(row, Ok(row) if row.is_empty()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(usize::from(self.width)).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.letter.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        "
        CAT
        .DO
        G.G
        "
        .parse()
        .unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let grid = sample();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 9);
        assert_eq!(grid.letter_count(), 7);
        assert_eq!(grid.to_string(), "CAT\n.DO\nG.G");
    }

    #[test]
    fn test_parse_lowercase_and_spaced() {
        let grid: Grid = "c a t\nd _ o".parse().unwrap();
        assert_eq!(grid.to_string(), "CAT\nD.O");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(GridError::EmptyGrid));
        assert_eq!(
            "AB\nC".parse::<Grid>(),
            Err(GridError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "A1".parse::<Grid>(),
            Err(GridError::InvalidLetter { letter: '1' })
        );
    }

    #[test]
    fn test_from_rows_too_large() {
        let rows = vec![vec![Some('A'); 256]];
        assert!(matches!(
            Grid::from_rows(rows),
            Err(GridError::TooLarge { width: 256, .. })
        ));
    }

    #[test]
    fn test_cell_at_bounds() {
        let grid = sample();
        assert_eq!(
            grid.cell_at(Coordinate::new(2, 2)).unwrap().letter(),
            Some('G')
        );
        assert_eq!(
            grid.cell_at(Coordinate::new(3, 0)),
            Err(GridError::OutOfBounds {
                coordinate: Coordinate::new(3, 0),
                width: 3,
                height: 3
            })
        );
        assert!(grid.cell_at(Coordinate::new(0, 1)).unwrap().is_blank());
    }

    #[test]
    fn test_neighbors_skip_blanks_and_edges() {
        let grid = sample();
        let neighbors = grid.neighbors(Coordinate::new(0, 0));
        assert_eq!(
            neighbors.as_slice(),
            &[Coordinate::new(1, 0), Coordinate::new(1, 1)]
        );

        let neighbors = grid.neighbors(Coordinate::new(1, 1));
        assert_eq!(neighbors.len(), 6);
        assert!(!neighbors.contains(&Coordinate::new(0, 1)));
        assert!(!neighbors.contains(&Coordinate::new(1, 2)));
    }

    #[test]
    fn test_spell() {
        let grid = sample();
        let path = [
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
        ];
        assert_eq!(grid.spell(&path).unwrap(), "CAD");
        assert_eq!(grid.spell(&[]).unwrap(), "");
        assert_eq!(
            grid.spell(&[Coordinate::new(0, 0), Coordinate::new(0, 1)]),
            Err(GridError::BlankCell {
                coordinate: Coordinate::new(0, 1)
            })
        );
    }
}
