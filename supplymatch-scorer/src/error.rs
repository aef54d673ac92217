//! Error types raised while building the engine or querying it.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors that abort engine construction.
///
/// No partially built engine is ever returned alongside these.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    /// Neither the catalogue nor any ingredient list produced a term to fit.
    #[error("no catalogue or ingredient text is available to fit a vector space")]
    EmptyCorpus,
    /// Signal weights were unusable.
    #[error("signal weights must be finite, non-negative and sum to 1 (got a total of {total})")]
    InvalidWeights {
        /// Sum of the rejected weights.
        total: f64,
    },
    /// The connection threshold was outside `0.0..=1.0`.
    #[error("connection threshold {threshold} must lie within 0.0..=1.0")]
    InvalidThreshold {
        /// Rejected threshold.
        threshold: f64,
    },
    /// No signals were supplied to blend.
    #[error("at least one signal is required")]
    NoSignals,
}

/// Errors raised when querying a built engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The restaurant is absent from the ingredient snapshot.
    #[error("No data available for restaurant: {name}")]
    UnknownRestaurant {
        /// Requested restaurant name.
        name: String,
    },
}
