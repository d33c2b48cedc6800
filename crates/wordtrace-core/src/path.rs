//! Ordered coordinate sequences.
//!
//! A path is *well-formed* when every consecutive pair is adjacent and no
//! coordinate repeats. The free functions here check those properties on any
//! slice; [`TracePath`] is the owned sequence built during one gesture.

use std::collections::HashSet;

use crate::Coordinate;

/// Returns the first consecutive pair in `path` that is not adjacent.
///
/// # Examples
///
/// ```
/// use wordtrace_core::{Coordinate, path};
///
/// let a = Coordinate::new(0, 0);
/// let b = Coordinate::new(1, 1);
/// let c = Coordinate::new(3, 1);
/// assert_eq!(path::find_gap(&[a, b]), None);
/// assert_eq!(path::find_gap(&[a, b, c]), Some((b, c)));
/// ```
#[must_use]
pub fn find_gap(path: &[Coordinate]) -> Option<(Coordinate, Coordinate)> {
    path.windows(2)
        .map(|pair| (pair[0], pair[1]))
        .find(|&(from, to)| !from.is_adjacent(to))
}

/// Returns the first coordinate that appears more than once in `path`.
#[must_use]
pub fn find_duplicate(path: &[Coordinate]) -> Option<Coordinate> {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().copied().find(|&coordinate| !seen.insert(coordinate))
}

/// Returns `true` if `path` is contiguous and free of repeated coordinates.
#[must_use]
pub fn is_well_formed(path: &[Coordinate]) -> bool {
    find_gap(path).is_none() && find_duplicate(path).is_none()
}

/// An ordered sequence of distinct coordinates built during one gesture.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct TracePath {
    coordinates: Vec<Coordinate>,
}

impl TracePath {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path holding a single coordinate.
    #[must_use]
    pub fn starting_at(coordinate: Coordinate) -> Self {
        Self {
            coordinates: vec![coordinate],
        }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns `true` if the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns the most recently committed coordinate.
    #[must_use]
    pub fn last(&self) -> Option<Coordinate> {
        self.coordinates.last().copied()
    }

    /// Returns the coordinate committed just before the last one.
    #[must_use]
    pub fn second_to_last(&self) -> Option<Coordinate> {
        self.coordinates
            .len()
            .checked_sub(2)
            .map(|i| self.coordinates[i])
    }

    /// Returns `true` if the coordinate is already part of the path.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.coordinates.contains(&coordinate)
    }

    /// Appends a coordinate.
    pub fn push(&mut self, coordinate: Coordinate) {
        debug_assert!(!self.contains(coordinate));
        self.coordinates.push(coordinate);
    }

    /// Removes and returns the last coordinate.
    pub fn pop(&mut self) -> Option<Coordinate> {
        self.coordinates.pop()
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Iterates over the coordinates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    /// Returns `true` if the path is contiguous and free of repeats.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        is_well_formed(&self.coordinates)
    }
}

impl From<Vec<Coordinate>> for TracePath {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }
}

impl From<TracePath> for Vec<Coordinate> {
    fn from(path: TracePath) -> Self {
        path.coordinates
    }
}

impl FromIterator<Coordinate> for TracePath {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self {
            coordinates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TracePath {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[Coordinate]> for TracePath {
    fn as_ref(&self) -> &[Coordinate] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Coordinate = Coordinate::new(0, 0);
    const B: Coordinate = Coordinate::new(1, 0);
    const C: Coordinate = Coordinate::new(2, 0);

    #[test]
    fn test_find_duplicate() {
        assert_eq!(find_duplicate(&[A, B, C]), None);
        assert_eq!(find_duplicate(&[A, B, A]), Some(A));
        assert_eq!(find_duplicate(&[]), None);
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed(&[]));
        assert!(is_well_formed(&[A]));
        assert!(is_well_formed(&[A, B, C]));
        assert!(!is_well_formed(&[A, C]));
        assert!(!is_well_formed(&[A, B, A]));
    }

    #[test]
    fn test_trace_path_accessors() {
        let mut path = TracePath::starting_at(A);
        assert_eq!(path.last(), Some(A));
        assert_eq!(path.second_to_last(), None);

        path.push(B);
        path.push(C);
        assert_eq!(path.len(), 3);
        assert_eq!(path.last(), Some(C));
        assert_eq!(path.second_to_last(), Some(B));
        assert!(path.contains(A));
        assert!(path.is_well_formed());

        assert_eq!(path.pop(), Some(C));
        assert_eq!(path.as_slice(), &[A, B]);
    }
}
