//! Fuzzy partial matching between ingredients and catalogue descriptions.
//!
//! The shorter string is slid across the longer one and every alignment is
//! scored with the normalised Indel similarity, `2 * lcs / (|a| + |b|)`.
//! Alignments include windows overhanging either end of the longer string,
//! so `"chicken"` scores `1.0` against `"Chicken Salad"` and partial words
//! or small misspellings still score highly.
#![forbid(unsafe_code)]

use rapidfuzz::distance::indel;
use supplymatch_core::{Signal, sanitise};

/// Case-insensitive partial-match ratio in `0.0..=1.0`.
///
/// Returns `0.0` when either string is empty.
///
/// # Examples
/// ```
/// use supplymatch_scorer::fuzzy_match_score;
///
/// assert_eq!(fuzzy_match_score("chicken", "Chicken Salad"), 1.0);
/// assert!(fuzzy_match_score("beef", "Chicken Salad") < 0.5);
/// ```
#[must_use]
pub fn fuzzy_match_score(ingredient: &str, description: &str) -> f64 {
    let lhs: Vec<char> = ingredient.to_lowercase().chars().collect();
    let rhs: Vec<char> = description.to_lowercase().chars().collect();
    partial_ratio(&lhs, &rhs)
}

fn partial_ratio(lhs: &[char], rhs: &[char]) -> f64 {
    if lhs.is_empty() || rhs.is_empty() {
        return 0.0;
    }
    if lhs.len() < rhs.len() {
        best_alignment(lhs, rhs)
    } else if lhs.len() > rhs.len() {
        best_alignment(rhs, lhs)
    } else {
        best_alignment(lhs, rhs).max(best_alignment(rhs, lhs))
    }
}

/// Best Indel similarity of `needle` against every window of `haystack`.
///
/// `needle` must not be longer than `haystack`.
fn best_alignment(needle: &[char], haystack: &[char]) -> f64 {
    let width = needle.len();
    let span = haystack.len();
    let last_start = span.saturating_sub(width);
    let leading = (1..width).filter_map(|end| haystack.get(..end));
    let full = (0..=last_start).filter_map(|start| haystack.get(start..start + width));
    let trailing = (last_start + 1..span).filter_map(|start| haystack.get(start..));

    let mut best = 0.0_f64;
    for window in leading.chain(full).chain(trailing) {
        let ratio = indel_similarity(needle, window);
        if ratio > best {
            best = ratio;
            if best >= 1.0 {
                break;
            }
        }
    }
    best
}

/// Normalised Indel similarity of two character windows.
fn indel_similarity(lhs: &[char], rhs: &[char]) -> f64 {
    indel::normalized_similarity(lhs.iter().copied(), rhs.iter().copied())
}

/// Mean partial-match ratio of every ingredient against an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuzzySignal;

impl Signal for FuzzySignal {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the signal is an arithmetic mean of per-ingredient ratios"
    )]
    fn score(&self, ingredients: &[String], item: &str) -> f64 {
        if ingredients.is_empty() {
            return 0.0;
        }
        let total: f64 = ingredients
            .iter()
            .map(|ingredient| fuzzy_match_score(ingredient, item))
            .sum();
        sanitise(total / ingredients.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[rstest]
    #[case("abcde", "ace", 0.75)]
    #[case("chicken", "kitchen", 0.571_428_571_428_571_4)]
    #[case("beef", "chic", 0.0)]
    #[case("same", "same", 1.0)]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn window_similarity_is_twice_common_over_total(
        #[case] lhs: &str,
        #[case] rhs: &str,
        #[case] expected: f64,
    ) {
        let score = indel_similarity(&chars(lhs), &chars(rhs));
        assert!(
            (score - expected).abs() < TOLERANCE,
            "{lhs:?} vs {rhs:?}: expected {expected}, got {score}"
        );
    }

    #[rstest]
    #[case("chicken", "Chicken Salad", 1.0)]
    #[case("CHICKEN", "chicken breast", 1.0)]
    #[case("salad", "Chicken Salad", 1.0)]
    #[case("Chicken Salad", "salad", 1.0)]
    #[case("tomato", "tomato", 1.0)]
    #[case("", "Tomato Soup", 0.0)]
    #[case("tomato", "", 0.0)]
    // "tomatoes" against the window "tomato s" shares seven characters.
    #[case("tomatoes", "Tomato Soup", 0.875)]
    // The prefix window "so" overhangs the start of "Soup".
    #[case("soy", "Soup", 0.8)]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn partial_ratios(#[case] lhs: &str, #[case] rhs: &str, #[case] expected: f64) {
        let score = fuzzy_match_score(lhs, rhs);
        assert!(
            (score - expected).abs() < TOLERANCE,
            "{lhs:?} vs {rhs:?}: expected {expected}, got {score}"
        );
    }

    #[rstest]
    fn dissimilar_strings_score_low() {
        assert!(fuzzy_match_score("beef", "Chicken Salad") < 0.5);
        assert!(fuzzy_match_score("lettuce", "Beef Burger") < 0.8);
    }

    #[rstest]
    fn matching_is_case_insensitive() {
        assert_eq!(
            fuzzy_match_score("Chicken", "chicken breast").to_bits(),
            fuzzy_match_score("chicken", "CHICKEN BREAST").to_bits()
        );
    }

    #[rstest]
    fn equal_length_inputs_are_symmetric() {
        let forward = fuzzy_match_score("abcd", "bcda");
        let backward = fuzzy_match_score("bcda", "abcd");
        assert_eq!(forward.to_bits(), backward.to_bits());
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn signal_averages_over_ingredients() {
        let ingredients = ["chicken".to_owned(), String::new()];
        let score = FuzzySignal.score(&ingredients, "Chicken Salad");
        assert!((score - 0.5).abs() < TOLERANCE);
    }

    #[rstest]
    fn signal_is_zero_without_ingredients() {
        assert_eq!(FuzzySignal.score(&[], "Chicken Salad"), 0.0);
    }
}
