//! Restaurant ingredient lists: the per-restaurant side of every score.
//!
//! Ingredient order is kept and repeated ingredients are never collapsed,
//! because repetition drives frequency weighting.

use std::collections::BTreeMap;

/// Ingredient sequences keyed by restaurant name.
///
/// Restaurants iterate in name order so that everything derived from the
/// mapping is deterministic.
///
/// # Examples
/// ```
/// use supplymatch_core::RestaurantIngredients;
///
/// let restaurants = RestaurantIngredients::new()
///     .with_restaurant("Trattoria", ["tomato", "basil", "tomato"]);
/// let ingredients = restaurants.ingredients("Trattoria").unwrap_or_default();
/// assert_eq!(ingredients, ["tomato", "basil", "tomato"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RestaurantIngredients {
    restaurants: BTreeMap<String, Vec<String>>,
}

impl RestaurantIngredients {
    /// Construct an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the ingredient list for a restaurant.
    ///
    /// Returns the previous list when the restaurant was already present.
    pub fn insert<N, I, S>(&mut self, name: N, ingredients: I) -> Option<Vec<String>>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = ingredients.into_iter().map(Into::into).collect();
        self.restaurants.insert(name.into(), list)
    }

    /// Add a restaurant while returning `self` for chaining.
    #[must_use]
    pub fn with_restaurant<N, I, S>(mut self, name: N, ingredients: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(name, ingredients);
        self
    }

    /// Ingredients recorded for `name`, if the restaurant is known.
    #[must_use]
    pub fn ingredients(&self, name: &str) -> Option<&[String]> {
        self.restaurants.get(name).map(Vec::as_slice)
    }

    /// Report whether `name` is a known restaurant.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.restaurants.contains_key(name)
    }

    /// Iterate over `(name, ingredients)` pairs in name order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[String])> {
        self.restaurants
            .iter()
            .map(|(name, ingredients)| (name.as_str(), ingredients.as_slice()))
    }

    /// Restaurant names in order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.restaurants.keys().map(String::as_str)
    }

    /// Number of restaurants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Report whether no restaurants are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

impl<N, I, S> FromIterator<(N, I)> for RestaurantIngredients
where
    N: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut restaurants = Self::new();
        for (name, ingredients) in iter {
            restaurants.insert(name, ingredients);
        }
        restaurants
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn duplicates_are_preserved() {
        let restaurants =
            RestaurantIngredients::new().with_restaurant("Diner", ["beef", "beef", "cheese"]);
        assert_eq!(
            restaurants.ingredients("Diner"),
            Some(["beef", "beef", "cheese"].map(str::to_owned).as_slice())
        );
    }

    #[rstest]
    fn insert_replaces_existing_list() {
        let mut restaurants = RestaurantIngredients::new();
        assert!(restaurants.insert("Diner", ["beef"]).is_none());
        let previous = restaurants.insert("Diner", ["bread"]);
        assert_eq!(previous, Some(vec!["beef".to_owned()]));
        assert_eq!(restaurants.len(), 1);
    }

    #[rstest]
    fn names_iterate_in_order() {
        let restaurants: RestaurantIngredients = [
            ("Zest", vec!["lime"]),
            ("Atrium", vec!["olive"]),
            ("Mezze", Vec::new()),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = restaurants.names().collect();
        assert_eq!(names, ["Atrium", "Mezze", "Zest"]);
        assert_eq!(restaurants.ingredients("Mezze"), Some([].as_slice()));
    }

    #[rstest]
    fn unknown_restaurant_has_no_ingredients() {
        let restaurants = RestaurantIngredients::new();
        assert!(restaurants.ingredients("Nowhere").is_none());
        assert!(!restaurants.contains("Nowhere"));
        assert!(restaurants.is_empty());
    }
}
