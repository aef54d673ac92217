//! Ingredient frequency signal.
//!
//! The default [`FrequencyMode::ExactPhrase`] counts how many recorded
//! ingredients are exactly the full catalogue description. Descriptions are
//! usually multi-word phrases and ingredients single words, so this signal
//! is zero for almost every pair. That is the established behaviour and is
//! kept as the default; [`FrequencyMode::TokenOverlap`] is an opt-in
//! alternative that matches ingredients against individual words of the
//! description.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use supplymatch_core::{Signal, sanitise};

use crate::text::tokenize;

/// How ingredient occurrences are matched against a catalogue item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FrequencyMode {
    /// An ingredient counts when it equals the whole description.
    #[default]
    ExactPhrase,
    /// An ingredient counts when, lower-cased and trimmed, it equals one of
    /// the description's words.
    TokenOverlap,
}

/// Share of a restaurant's ingredients, repeats included, that match an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencySignal {
    mode: FrequencyMode,
}

impl FrequencySignal {
    /// Build a frequency signal using `mode`.
    #[must_use]
    pub const fn new(mode: FrequencyMode) -> Self {
        Self { mode }
    }

    /// Matching mode in use.
    #[must_use]
    pub const fn mode(&self) -> FrequencyMode {
        self.mode
    }

    fn occurrences(&self, ingredients: &[String], item: &str) -> usize {
        match self.mode {
            FrequencyMode::ExactPhrase => ingredients
                .iter()
                .filter(|ingredient| ingredient.as_str() == item)
                .count(),
            FrequencyMode::TokenOverlap => {
                let words: BTreeSet<String> = tokenize(item).collect();
                ingredients
                    .iter()
                    .filter(|ingredient| words.contains(&ingredient.trim().to_lowercase()))
                    .count()
            }
        }
    }
}

impl Signal for FrequencySignal {
    fn name(&self) -> &'static str {
        "frequency"
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "frequency is a count normalised by the ingredient total"
    )]
    fn score(&self, ingredients: &[String], item: &str) -> f64 {
        if ingredients.is_empty() {
            return 0.0;
        }
        let hits = self.occurrences(ingredients, item);
        sanitise(hits as f64 / ingredients.len() as f64)
    }
}
