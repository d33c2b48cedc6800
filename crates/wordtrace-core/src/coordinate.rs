//! Grid coordinates and 8-directional adjacency.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A zero-based `(x, y)` grid address.
///
/// `x` is the column and `y` is the row. Coordinates are plain values: equality
/// and hashing are structural, so they can key maps and sets directly.
///
/// # Examples
///
/// ```
/// use wordtrace_core::Coordinate;
///
/// let a = Coordinate::new(1, 1);
/// assert!(a.is_adjacent(Coordinate::new(2, 2)));
/// assert!(a.is_adjacent(Coordinate::new(1, 0)));
/// assert!(!a.is_adjacent(a));
/// assert!(!a.is_adjacent(Coordinate::new(3, 1)));
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coordinate {
    /// Column index.
    pub x: u8,
    /// Row index.
    pub y: u8,
}

/// Offsets to the eight neighbors, clockwise starting from north.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Coordinate {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the Chebyshev distance (king-move distance) between two coordinates.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> u8 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy { dx } else { dy }
    }

    /// Returns `true` if `other` is one of the eight cells surrounding `self`.
    ///
    /// Irreflexive and symmetric: a coordinate is never adjacent to itself.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// Returns the coordinate shifted by `(dx, dy)`, or `None` if either axis
    /// would leave the `u8` range.
    #[must_use]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let Some(x) = self.x.checked_add_signed(dx) else {
            return None;
        };
        let Some(y) = self.y.checked_add_signed(dy) else {
            return None;
        };
        Some(Self { x, y })
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u8, u8)> for Coordinate {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}
