//! Per-restaurant score tables.
//!
//! A table holds one row per restaurant with one score per catalogue item,
//! in catalogue order. Tables are built once and only read afterwards.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use supplymatch_core::{ProductCatalogue, RestaurantIngredients, Signal, sanitise};

/// Scores keyed by restaurant, then by catalogue position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreTable {
    rows: BTreeMap<String, Vec<f64>>,
}

impl ScoreTable {
    /// Score every restaurant against every catalogue item with `signal`.
    #[must_use]
    pub fn build(
        signal: &dyn Signal,
        restaurants: &RestaurantIngredients,
        catalogue: &ProductCatalogue,
    ) -> Self {
        let pairs: Vec<(&str, &[String])> = restaurants.iter().collect();

        #[cfg(feature = "parallel")]
        let iter = pairs.into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = pairs.into_iter();

        let rows = iter
            .map(|(name, ingredients)| (name.to_owned(), signal.score_row(ingredients, catalogue)))
            .collect();
        Self { rows }
    }

    /// Weighted sum of several tables sharing the same restaurants and
    /// catalogue.
    ///
    /// A restaurant missing from one of the parts contributes zero for that
    /// part.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "blending is a weighted sum of signal scores"
    )]
    pub fn blend(parts: &[(&Self, f64)], restaurants: &RestaurantIngredients, width: usize) -> Self {
        let rows = restaurants
            .names()
            .map(|name| {
                let mut combined = vec![0.0_f64; width];
                for (table, weight) in parts {
                    let Some(row) = table.row(name) else {
                        continue;
                    };
                    for (cell, score) in combined.iter_mut().zip(row) {
                        *cell += weight * score;
                    }
                }
                for cell in &mut combined {
                    *cell = sanitise(*cell);
                }
                (name.to_owned(), combined)
            })
            .collect();
        Self { rows }
    }

    /// Scores for `restaurant`, in catalogue order.
    #[must_use]
    pub fn row(&self, restaurant: &str) -> Option<&[f64]> {
        self.rows.get(restaurant).map(Vec::as_slice)
    }

    /// Score for `restaurant` at catalogue `position`.
    #[must_use]
    pub fn get(&self, restaurant: &str, position: usize) -> Option<f64> {
        self.row(restaurant)
            .and_then(|row| row.get(position).copied())
    }

    /// Iterate over `(restaurant, row)` pairs in name order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[f64])> {
        self.rows
            .iter()
            .map(|(name, row)| (name.as_str(), row.as_slice()))
    }

    /// Number of restaurant rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
