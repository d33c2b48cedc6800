//! Aggregate statistics over a [`Discovery`] and a coarse difficulty rating.

use std::collections::BTreeMap;

use wordtrace_core::{Coordinate, Grid, Word};

use crate::Discovery;

/// Letters that make a grid noticeably harder to read.
pub const UNCOMMON_LETTERS: [char; 6] = ['J', 'K', 'Q', 'V', 'X', 'Z'];

/// A coarse difficulty rating derived from [`DiscoveryMetrics`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
pub enum Difficulty {
    /// Many short words spread over the grid.
    #[display("easy")]
    Easy,
    /// Fewer or longer words.
    #[display("medium")]
    Medium,
    /// Sparse, long words and awkward letters.
    #[display("hard")]
    Hard,
}

/// Statistics about the words discoverable in a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryMetrics {
    /// Number of distinct words.
    pub distinct_word_count: usize,
    /// Number of `(word, path)` pairs.
    pub path_count: usize,
    /// Distinct words keyed by letter count.
    pub count_by_length: BTreeMap<usize, usize>,
    /// Mean letter count of the distinct words, or zero when there are none.
    pub average_length: f64,
    /// The longest distinct word; ties go to the alphabetically first.
    pub longest_word: Option<Word>,
    /// Number of letter cells in the grid.
    pub letter_cell_count: usize,
    /// Letter cells crossed by no discovered path, in row-major order.
    pub uncovered_cells: Vec<Coordinate>,
    /// Letter cells holding one of [`UNCOMMON_LETTERS`].
    pub uncommon_letter_count: usize,
}

impl DiscoveryMetrics {
    /// Computes metrics for `discovery`, which must have been run on `grid`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn new(grid: &Grid, discovery: &Discovery) -> Self {
        let distinct = discovery.distinct_words();

        let mut count_by_length = BTreeMap::new();
        for word in &distinct {
            *count_by_length.entry(word.letter_count()).or_insert(0) += 1;
        }
        let total_letters: usize = distinct.iter().map(|word| word.letter_count()).sum();
        let average_length = if distinct.is_empty() {
            0.0
        } else {
            total_letters as f64 / distinct.len() as f64
        };
        let longest_word = distinct
            .iter()
            .max_by(|a, b| {
                a.letter_count()
                    .cmp(&b.letter_count())
                    .then_with(|| b.cmp(a))
            })
            .map(|&word| word.clone());

        let uncommon_letter_count = grid
            .letter_cells()
            .filter_map(wordtrace_core::Cell::letter)
            .filter(|letter| UNCOMMON_LETTERS.contains(letter))
            .count();

        Self {
            distinct_word_count: distinct.len(),
            path_count: discovery.len(),
            count_by_length,
            average_length,
            longest_word,
            letter_cell_count: grid.letter_count(),
            uncovered_cells: discovery.uncovered_cells(grid),
            uncommon_letter_count,
        }
    }

    /// Returns the share of letter cells crossed by some discovered path, in `0.0..=1.0`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn utilization(&self) -> f64 {
        if self.letter_cell_count == 0 {
            return 0.0;
        }
        let covered = self.letter_cell_count - self.uncovered_cells.len();
        covered as f64 / self.letter_cell_count as f64
    }

    /// Returns distinct words per letter cell.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn word_density(&self) -> f64 {
        if self.letter_cell_count == 0 {
            return 0.0;
        }
        self.distinct_word_count as f64 / self.letter_cell_count as f64
    }

    /// Rates the grid.
    ///
    /// Sparse grids, long average words and uncommon letters each push the
    /// rating up.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        let density = self.word_density();
        let mut points = match density {
            d if d >= 2.0 => 0,
            d if d >= 1.0 => 1,
            d if d >= 0.5 => 2,
            _ => 3,
        };
        if self.average_length >= 6.0 {
            points += 2;
        } else if self.average_length >= 5.0 {
            points += 1;
        }
        if self.uncommon_letter_count >= 2 {
            points += 1;
        }
        match points {
            0..=1 => Difficulty::Easy,
            2..=3 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use wordtrace_game::testing;
    use wordtrace_lexicon::Lexicon;

    use super::*;
    use crate::WordFinder;

    fn cat_metrics(minimum: usize) -> DiscoveryMetrics {
        let lexicon = testing::sample_lexicon();
        let grid = testing::cat_grid();
        let discovery = WordFinder::new(&lexicon)
            .with_minimum_word_length(minimum)
            .find_all(&grid);
        DiscoveryMetrics::new(&grid, &discovery)
    }

    #[test]
    fn test_cat_grid_metrics() {
        let metrics = cat_metrics(3);
        assert_eq!(metrics.distinct_word_count, 10);
        assert_eq!(metrics.path_count, 10);
        assert_eq!(
            metrics.count_by_length,
            BTreeMap::from([(3, 8), (4, 2)])
        );
        assert!((metrics.average_length - 3.2).abs() < 1e-9);
        assert_eq!(metrics.longest_word, Some(Word::new("GOAT")));
        assert_eq!(metrics.letter_cell_count, 7);
        assert_eq!(metrics.uncovered_cells, [Coordinate::new(0, 2)]);
        assert!((metrics.utilization() - 6.0 / 7.0).abs() < 1e-9);
        assert_eq!(metrics.uncommon_letter_count, 0);
        assert_eq!(metrics.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_no_words() {
        let lexicon = Lexicon::from_words(["zebra"]).unwrap();
        let grid = testing::cat_grid();
        let discovery = WordFinder::new(&lexicon).find_all(&grid);
        let metrics = DiscoveryMetrics::new(&grid, &discovery);
        assert_eq!(metrics.distinct_word_count, 0);
        assert!(metrics.count_by_length.is_empty());
        assert!(metrics.average_length.abs() < f64::EPSILON);
        assert_eq!(metrics.longest_word, None);
        assert_eq!(metrics.uncovered_cells.len(), 7);
        assert!(metrics.utilization().abs() < f64::EPSILON);
        assert_eq!(metrics.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_uncommon_letters_raise_difficulty() {
        let lexicon = Lexicon::from_words(["jazz", "quiz"]).unwrap();
        let grid: Grid = "
            JA
            ZZ
        "
        .parse()
        .unwrap();
        let discovery = WordFinder::new(&lexicon).find_all(&grid);
        let metrics = DiscoveryMetrics::new(&grid, &discovery);
        assert_eq!(metrics.distinct_word_count, 1);
        assert_eq!(metrics.uncommon_letter_count, 3);
        // density 0.25 => 3, uncommon => 1
        assert_eq!(metrics.difficulty(), Difficulty::Hard);
    }
}
