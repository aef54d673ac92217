//! Scoring and ranking for supplymatch.
//!
//! The crate turns a restaurant ingredient snapshot and a product catalogue
//! into ranked product recommendations. Three signals are blended:
//! - **Frequency**: the share of a restaurant's ingredients that match an
//!   item, see [`FrequencySignal`] and [`FrequencyMode`].
//! - **Cosine**: TF-IDF cosine similarity between the joined ingredient list
//!   and each description, fitted over both inputs by [`VectorSpace`].
//! - **Fuzzy**: the mean case-insensitive partial-match ratio of each
//!   ingredient against the description, see [`fuzzy_match_score`].
//!
//! Every table is computed once by [`RecommendationEngine::build`]; queries
//! only sort a pre-computed row and collect the ingredients that explain
//! each item.
//!
//! # Examples
//!
//! ```
//! use supplymatch_core::{ProductCatalogue, RestaurantIngredients};
//! use supplymatch_scorer::{EngineConfig, RecommendError, RecommendationEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let restaurants = RestaurantIngredients::new()
//!     .with_restaurant("Trattoria", ["tomato", "basil", "mozzarella"]);
//! let catalogue = ProductCatalogue::new(["Tomato Soup", "Beef Burger", "Basil Pesto"])?;
//! let engine = RecommendationEngine::build(restaurants, catalogue, EngineConfig::default())?;
//!
//! let recommendations = engine.recommend("Trattoria")?;
//! assert_eq!(recommendations.len(), 3);
//! assert!(matches!(
//!     engine.recommend("Nowhere"),
//!     Err(RecommendError::UnknownRestaurant { .. })
//! ));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cosine;
mod engine;
mod error;
mod frequency;
mod fuzzy;
mod table;
mod text;
mod types;
mod vector_space;

pub use cosine::CosineSignal;
pub use engine::{RecommendationEngine, WeightedSignal};
pub use error::{BuildError, RecommendError};
pub use frequency::{FrequencyMode, FrequencySignal};
pub use fuzzy::{FuzzySignal, fuzzy_match_score};
pub use table::ScoreTable;
pub use types::{DEFAULT_CONNECTION_THRESHOLD, DEFAULT_TOP_N, EngineConfig, SignalWeights};
pub use vector_space::{SparseVector, VectorSpace};
