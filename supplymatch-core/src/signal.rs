//! Similarity signals scored for each restaurant and catalogue item.
//!
//! A [`Signal`] compares one restaurant's ingredient list with one catalogue
//! description. The engine builds a score table per signal and blends the
//! tables with configurable weights.

use crate::ProductCatalogue;

/// Calculate a similarity score between a restaurant and a catalogue item.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so score tables
/// can be built across threads. Scoring is infallible; implementers return
/// `0.0` when there is nothing to compare, for example an empty ingredient
/// list.
///
/// Implementations must:
/// - Produce finite scores.
/// - Return values in the range `0.0..=1.0`.
///
/// Use [`sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use supplymatch_core::{ProductCatalogue, Signal};
///
/// struct ContainsSignal;
///
/// impl Signal for ContainsSignal {
///     fn name(&self) -> &'static str {
///         "contains"
///     }
///
///     fn score(&self, ingredients: &[String], item: &str) -> f64 {
///         let item = item.to_lowercase();
///         let hit = ingredients.iter().any(|i| item.contains(&i.to_lowercase()));
///         if hit { 1.0 } else { 0.0 }
///     }
/// }
///
/// let catalogue = ProductCatalogue::new(["Chicken Salad", "Beef Burger"]).unwrap();
/// let row = ContainsSignal.score_row(&["chicken".to_owned()], &catalogue);
/// assert_eq!(row, vec![1.0, 0.0]);
/// ```
pub trait Signal: Send + Sync {
    /// Short identifier used in logs and table lookups.
    fn name(&self) -> &'static str;

    /// Return a score for `item` according to `ingredients`.
    fn score(&self, ingredients: &[String], item: &str) -> f64;

    /// Score every catalogue item for one restaurant, in catalogue order.
    ///
    /// Signals that can reuse work across a row, such as embedding the
    /// restaurant once, override this.
    fn score_row(&self, ingredients: &[String], catalogue: &ProductCatalogue) -> Vec<f64> {
        catalogue
            .iter()
            .map(|item| sanitise(self.score(ingredients, item)))
            .collect()
    }
}

/// Clamp and validate a raw score.
///
/// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
#[must_use]
pub fn sanitise(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const TOLERANCE: f64 = 1e-12;

    struct FixedSignal(f64);

    impl Signal for FixedSignal {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn score(&self, _ingredients: &[String], _item: &str) -> f64 {
            self.0
        }
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(f64::NEG_INFINITY, 0.0)]
    #[case(-0.1, 0.0)]
    #[case(1.2, 1.0)]
    #[case(0.4, 0.4)]
    fn sanitise_clamps_and_filters(#[case] input: f64, #[case] expected: f64) {
        let result = sanitise(input);
        assert!(result.is_finite(), "result must be finite");
        assert!((result - expected).abs() <= TOLERANCE);
    }

    #[rstest]
    fn default_row_sanitises_each_item() {
        let catalogue = ProductCatalogue::new(["Tomato Soup", "Lettuce Wrap"]).expect("catalogue");
        let row = FixedSignal(3.5).score_row(&[], &catalogue);
        assert_eq!(row, vec![1.0, 1.0]);
    }

    #[rstest]
    fn default_row_is_empty_for_empty_catalogue() {
        let catalogue = ProductCatalogue::default();
        assert!(FixedSignal(0.5).score_row(&[], &catalogue).is_empty());
    }
}
