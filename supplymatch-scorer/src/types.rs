//! Public configuration types for blending and ranking.
#![forbid(unsafe_code)]

use crate::{BuildError, FrequencyMode};

/// Tolerance used when checking that weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Number of recommendations returned when callers do not specify one.
pub const DEFAULT_TOP_N: usize = 10;

/// Fuzzy ratio an ingredient must exceed to explain a recommendation.
pub const DEFAULT_CONNECTION_THRESHOLD: f64 = 0.8;

/// Relative weighting of the three built-in signals.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SignalWeights {
    /// Multiplier applied to the ingredient frequency signal.
    pub frequency: f64,
    /// Multiplier applied to the TF-IDF cosine signal.
    pub cosine: f64,
    /// Multiplier applied to the fuzzy partial-match signal.
    pub fuzzy: f64,
}

impl SignalWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`BuildError::InvalidWeights`] when a value is negative or not
    /// finite, or when the weights do not sum to one.
    pub fn validate(self) -> Result<Self, BuildError> {
        validate_weights(&[self.frequency, self.cosine, self.fuzzy])?;
        Ok(self)
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            frequency: 0.4,
            cosine: 0.4,
            fuzzy: 0.2,
        }
    }
}

/// Check that `weights` are finite, non-negative and sum to one.
///
/// # Errors
/// Returns [`BuildError::InvalidWeights`] carrying the observed total.
#[expect(
    clippy::float_arithmetic,
    reason = "validation sums weights and compares against one"
)]
pub(crate) fn validate_weights(weights: &[f64]) -> Result<(), BuildError> {
    let total: f64 = weights.iter().sum();
    let usable = weights
        .iter()
        .all(|weight| weight.is_finite() && *weight >= 0.0);
    if usable && (total - 1.0).abs() <= WEIGHT_SUM_TOLERANCE {
        Ok(())
    } else {
        Err(BuildError::InvalidWeights { total })
    }
}

/// Everything that shapes how the engine blends and ranks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Weights of the built-in signals.
    pub weights: SignalWeights,
    /// Fuzzy ratio an ingredient must strictly exceed to be listed as a
    /// connection.
    pub connection_threshold: f64,
    /// Number of results returned by
    /// [`RecommendationEngine::recommend`](crate::RecommendationEngine::recommend).
    pub top_n: usize,
    /// Matching mode of the frequency signal.
    pub frequency_mode: FrequencyMode,
}

impl EngineConfig {
    /// Validate the configuration and return a copy.
    ///
    /// # Errors
    /// Returns [`BuildError::InvalidWeights`] or
    /// [`BuildError::InvalidThreshold`].
    pub fn validate(self) -> Result<Self, BuildError> {
        self.weights.validate()?;
        self.validate_threshold()?;
        Ok(self)
    }

    pub(crate) fn validate_threshold(self) -> Result<(), BuildError> {
        if (0.0..=1.0).contains(&self.connection_threshold) {
            Ok(())
        } else {
            Err(BuildError::InvalidThreshold {
                threshold: self.connection_threshold,
            })
        }
    }

    /// Replace the weights while returning `self` for chaining.
    #[must_use]
    pub const fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the connection threshold while returning `self`.
    #[must_use]
    pub const fn with_connection_threshold(mut self, threshold: f64) -> Self {
        self.connection_threshold = threshold;
        self
    }

    /// Replace the default result count while returning `self`.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Replace the frequency mode while returning `self`.
    #[must_use]
    pub const fn with_frequency_mode(mut self, mode: FrequencyMode) -> Self {
        self.frequency_mode = mode;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            connection_threshold: DEFAULT_CONNECTION_THRESHOLD,
            top_n: DEFAULT_TOP_N,
            frequency_mode: FrequencyMode::default(),
        }
    }
}
