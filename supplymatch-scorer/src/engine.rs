//! The built recommendation engine.
//!
//! [`RecommendationEngine::build`] fits every signal, materialises one
//! [`ScoreTable`] per signal and blends them into the combined table. The
//! resulting value is immutable; queries only read the pre-computed rows.
#![forbid(unsafe_code)]

use log::{debug, info, warn};
use supplymatch_core::{ProductCatalogue, Recommendation, RestaurantIngredients, Signal};

use crate::table::ScoreTable;
use crate::types::validate_weights;
use crate::{
    BuildError, CosineSignal, EngineConfig, FrequencySignal, FuzzySignal, RecommendError,
    fuzzy_match_score,
};

/// A signal paired with its blending weight.
pub struct WeightedSignal {
    signal: Box<dyn Signal>,
    weight: f64,
}

impl WeightedSignal {
    /// Pair `signal` with `weight`.
    #[must_use]
    pub fn new(signal: impl Signal + 'static, weight: f64) -> Self {
        Self {
            signal: Box::new(signal),
            weight,
        }
    }

    /// Pair an already boxed signal with `weight`.
    #[must_use]
    pub const fn boxed(signal: Box<dyn Signal>, weight: f64) -> Self {
        Self { signal, weight }
    }

    /// Blending weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Identifier of the wrapped signal.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.signal.name()
    }
}

impl std::fmt::Debug for WeightedSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedSignal")
            .field("signal", &self.signal.name())
            .field("weight", &self.weight)
            .finish()
    }
}

/// Pre-computed restaurant to product recommendations.
///
/// The engine owns the snapshots it was built from, one score table per
/// signal and the blended table. It is `Send + Sync` and never mutated, so
/// it may be shared across threads without locking.
///
/// # Examples
/// ```
/// use supplymatch_core::{ProductCatalogue, RestaurantIngredients};
/// use supplymatch_scorer::{EngineConfig, RecommendationEngine};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let restaurants =
///     RestaurantIngredients::new().with_restaurant("A", ["chicken", "lettuce"]);
/// let catalogue = ProductCatalogue::new(["Chicken Salad", "Beef Burger"])?;
/// let engine = RecommendationEngine::build(restaurants, catalogue, EngineConfig::default())?;
///
/// let top = engine.top_recommendations("A", 1)?;
/// assert_eq!(top[0].item, "Chicken Salad");
/// assert_eq!(top[0].connections, vec!["chicken".to_owned()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    restaurants: RestaurantIngredients,
    catalogue: ProductCatalogue,
    config: EngineConfig,
    signal_tables: Vec<(&'static str, ScoreTable)>,
    combined: ScoreTable,
}

impl RecommendationEngine {
    /// Build the engine with the frequency, cosine and fuzzy signals.
    ///
    /// # Errors
    /// Returns [`BuildError::InvalidWeights`] or
    /// [`BuildError::InvalidThreshold`] when `config` is unusable, and
    /// [`BuildError::EmptyCorpus`] when there is no text to fit.
    pub fn build(
        restaurants: RestaurantIngredients,
        catalogue: ProductCatalogue,
        config: EngineConfig,
    ) -> Result<Self, BuildError> {
        config.validate()?;
        let cosine = CosineSignal::fit(&restaurants, &catalogue)?;
        let weights = config.weights;
        let signals = vec![
            WeightedSignal::new(
                FrequencySignal::new(config.frequency_mode),
                weights.frequency,
            ),
            WeightedSignal::new(cosine, weights.cosine),
            WeightedSignal::new(FuzzySignal, weights.fuzzy),
        ];
        Ok(Self::assemble(restaurants, catalogue, &signals, config))
    }

    /// Build the engine from caller-supplied signals.
    ///
    /// `config.weights` is ignored; each signal carries its own weight.
    ///
    /// # Errors
    /// Returns [`BuildError::NoSignals`] for an empty signal list,
    /// [`BuildError::InvalidWeights`] when the weights are unusable, and
    /// [`BuildError::InvalidThreshold`] for a bad connection threshold.
    pub fn build_with_signals(
        restaurants: RestaurantIngredients,
        catalogue: ProductCatalogue,
        signals: Vec<WeightedSignal>,
        config: EngineConfig,
    ) -> Result<Self, BuildError> {
        if signals.is_empty() {
            return Err(BuildError::NoSignals);
        }
        let weights: Vec<f64> = signals.iter().map(WeightedSignal::weight).collect();
        validate_weights(&weights)?;
        config.validate_threshold()?;
        Ok(Self::assemble(restaurants, catalogue, &signals, config))
    }

    fn assemble(
        restaurants: RestaurantIngredients,
        catalogue: ProductCatalogue,
        signals: &[WeightedSignal],
        config: EngineConfig,
    ) -> Self {
        for (name, ingredients) in restaurants.iter() {
            if ingredients.is_empty() {
                warn!("restaurant {name} has no ingredients; all of its scores are zero");
            }
        }

        let signal_tables: Vec<(&'static str, ScoreTable)> = signals
            .iter()
            .map(|weighted| {
                let table = ScoreTable::build(weighted.signal.as_ref(), &restaurants, &catalogue);
                debug!(
                    "built {} table with {} rows",
                    weighted.name(),
                    table.len()
                );
                (weighted.name(), table)
            })
            .collect();

        let parts: Vec<(&ScoreTable, f64)> = signal_tables
            .iter()
            .zip(signals)
            .map(|((_, table), weighted)| (table, weighted.weight))
            .collect();
        let combined = ScoreTable::blend(&parts, &restaurants, catalogue.len());

        info!(
            "recommendation engine built for {} restaurants and {} catalogue items",
            restaurants.len(),
            catalogue.len()
        );
        Self {
            restaurants,
            catalogue,
            config,
            signal_tables,
            combined,
        }
    }

    /// Up to `top_n` recommendations for `restaurant`, best first.
    ///
    /// Items with equal scores keep their catalogue order. The result has
    /// `min(top_n, catalogue size)` entries.
    ///
    /// # Errors
    /// Returns [`RecommendError::UnknownRestaurant`] when `restaurant` is not
    /// part of the ingredient snapshot.
    pub fn top_recommendations(
        &self,
        restaurant: &str,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let (Some(ingredients), Some(row)) = (
            self.restaurants.ingredients(restaurant),
            self.combined.row(restaurant),
        ) else {
            return Err(RecommendError::UnknownRestaurant {
                name: restaurant.to_owned(),
            });
        };

        let mut ranked: Vec<(&str, f64)> = self.catalogue.iter().zip(row.iter().copied()).collect();
        // `sort_by` is stable, so equal scores stay in catalogue order.
        ranked.sort_by(|lhs, rhs| rhs.1.total_cmp(&lhs.1));
        ranked.truncate(top_n);

        Ok(ranked
            .into_iter()
            .map(|(item, score)| Recommendation {
                item: item.to_owned(),
                score,
                connections: self.connections_for(ingredients, item),
            })
            .collect())
    }

    /// Recommendations for `restaurant` using the configured default count.
    ///
    /// # Errors
    /// Returns [`RecommendError::UnknownRestaurant`] when `restaurant` is not
    /// part of the ingredient snapshot.
    pub fn recommend(&self, restaurant: &str) -> Result<Vec<Recommendation>, RecommendError> {
        self.top_recommendations(restaurant, self.config.top_n)
    }

    /// Ingredients of `restaurant` whose fuzzy ratio against `item` exceeds
    /// the connection threshold, in ingredient order.
    ///
    /// # Errors
    /// Returns [`RecommendError::UnknownRestaurant`] when `restaurant` is not
    /// part of the ingredient snapshot.
    pub fn connections(&self, restaurant: &str, item: &str) -> Result<Vec<String>, RecommendError> {
        self.restaurants
            .ingredients(restaurant)
            .map(|ingredients| self.connections_for(ingredients, item))
            .ok_or_else(|| RecommendError::UnknownRestaurant {
                name: restaurant.to_owned(),
            })
    }

    fn connections_for(&self, ingredients: &[String], item: &str) -> Vec<String> {
        let threshold = self.config.connection_threshold;
        ingredients
            .iter()
            .filter(|ingredient| fuzzy_match_score(ingredient, item) > threshold)
            .cloned()
            .collect()
    }

    /// Blended score of `item` for `restaurant`.
    #[must_use]
    pub fn combined_score(&self, restaurant: &str, item: &str) -> Option<f64> {
        let position = self.catalogue.position(item)?;
        self.combined.get(restaurant, position)
    }

    /// The blended table.
    #[must_use]
    pub const fn combined_scores(&self) -> &ScoreTable {
        &self.combined
    }

    /// Table produced by the signal called `name`, such as `"cosine"`,
    /// `"fuzzy"` or `"frequency"`.
    #[must_use]
    pub fn signal_scores(&self, name: &str) -> Option<&ScoreTable> {
        self.signal_tables
            .iter()
            .find(|(signal, _)| *signal == name)
            .map(|(_, table)| table)
    }

    /// Names of the signals in blending order.
    pub fn signal_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.signal_tables.iter().map(|(name, _)| *name)
    }

    /// Catalogue the engine was built from.
    #[must_use]
    pub const fn catalogue(&self) -> &ProductCatalogue {
        &self.catalogue
    }

    /// Ingredient snapshot the engine was built from.
    #[must_use]
    pub const fn restaurants(&self) -> &RestaurantIngredients {
        &self.restaurants
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}
