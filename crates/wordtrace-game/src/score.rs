/// Points awarded for a word of three letters or fewer.
pub const BASE_POINTS: u64 = 100;

/// Returns the points for a word with `length` letters.
///
/// The value doubles with every letter beyond three. Lengths below three are
/// treated as three, and the result saturates at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use wordtrace_game::score_for_length;
///
/// assert_eq!(score_for_length(3), 100);
/// assert_eq!(score_for_length(4), 200);
/// assert_eq!(score_for_length(1), 100);
/// ```
#[must_use]
pub const fn score_for_length(length: usize) -> u64 {
    let exponent = if length > 3 { length - 3 } else { 0 };
    if exponent >= u64::BITS as usize {
        return u64::MAX;
    }
    BASE_POINTS.saturating_mul(1 << exponent)
}

/// Returns the points for `word`, counting letters rather than bytes.
///
/// # Examples
///
/// ```
/// use wordtrace_game::score;
///
/// assert_eq!(score("cat"), 100);
/// assert_eq!(score("flow"), 200);
/// assert_eq!(score("words"), 400);
/// assert_eq!(score("puzzle"), 800);
/// ```
#[must_use]
pub fn score(word: &str) -> u64 {
    score_for_length(word.chars().count())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(score("cat"), 100);
        assert_eq!(score("flow"), 200);
        assert_eq!(score("words"), 400);
        assert_eq!(score("puzzle"), 800);
        assert_eq!(score(""), 100);
        assert_eq!(score("ÉTÉS"), 200);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(score_for_length(66), u64::MAX);
        assert_eq!(score_for_length(500), u64::MAX);
    }

    proptest! {
        #[test]
        fn prop_strictly_increasing_until_saturation(length in 3usize..60) {
            prop_assert!(score_for_length(length + 1) > score_for_length(length));
        }

        #[test]
        fn prop_doubles_per_letter(length in 3usize..55) {
            prop_assert_eq!(score_for_length(length + 1), 2 * score_for_length(length));
        }
    }
}
