//! Facade crate for the supplymatch recommendation engine.
//!
//! This crate re-exports the domain types from `supplymatch-core` and the
//! signals, configuration and engine from `supplymatch-scorer`. The `serde`
//! feature (on by default) makes snapshots and recommendations serialisable;
//! `parallel` builds score tables on a `rayon` thread pool.
//!
//! # Examples
//!
//! ```
//! use supplymatch::{EngineConfig, ProductCatalogue, RecommendationEngine, RestaurantIngredients};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let restaurants = RestaurantIngredients::new().with_restaurant("A", ["chicken", "lettuce"]);
//! let catalogue = ProductCatalogue::new(["Chicken Salad", "Beef Burger"])?;
//! let engine = RecommendationEngine::build(restaurants, catalogue, EngineConfig::default())?;
//! let best = engine.top_recommendations("A", 1)?;
//! assert_eq!(best.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use supplymatch_core::{
    CatalogueError, ProductCatalogue, Recommendation, RestaurantIngredients, Signal, sanitise,
};

pub use supplymatch_scorer::{
    BuildError, CosineSignal, DEFAULT_CONNECTION_THRESHOLD, DEFAULT_TOP_N, EngineConfig,
    FrequencyMode, FrequencySignal, FuzzySignal, RecommendError, RecommendationEngine, ScoreTable,
    SignalWeights, SparseVector, VectorSpace, WeightedSignal, fuzzy_match_score,
};
