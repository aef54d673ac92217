//! Ranked output returned to presentation layers.

/// A catalogue item recommended to a restaurant.
///
/// `connections` lists the restaurant ingredients that explain the match,
/// in the order the restaurant recorded them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Catalogue description of the recommended product.
    pub item: String,
    /// Combined score in `0.0..=1.0`.
    pub score: f64,
    /// Ingredients whose fuzzy match against the item clears the
    /// connection threshold.
    pub connections: Vec<String>,
}
