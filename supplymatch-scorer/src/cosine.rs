//! Cosine similarity between a restaurant's ingredient text and each item.
#![forbid(unsafe_code)]

use std::borrow::Cow;
use std::collections::HashMap;

use supplymatch_core::{ProductCatalogue, RestaurantIngredients, Signal, sanitise};

use crate::BuildError;
use crate::text::join_ingredients;
use crate::vector_space::{SparseVector, VectorSpace};

/// TF-IDF cosine signal with pre-computed catalogue embeddings.
#[derive(Debug, Clone)]
pub struct CosineSignal {
    space: VectorSpace,
    item_vectors: Vec<SparseVector>,
    positions: HashMap<String, usize>,
}

impl CosineSignal {
    /// Fit the shared vector space and embed every catalogue item.
    ///
    /// # Errors
    /// Returns [`BuildError::EmptyCorpus`] when there is no text to fit.
    pub fn fit(
        restaurants: &RestaurantIngredients,
        catalogue: &ProductCatalogue,
    ) -> Result<Self, BuildError> {
        let space = VectorSpace::from_corpus(restaurants, catalogue)?;
        Ok(Self::with_space(space, catalogue))
    }

    /// Embed the catalogue in an already fitted space.
    #[must_use]
    pub fn with_space(space: VectorSpace, catalogue: &ProductCatalogue) -> Self {
        let item_vectors = catalogue.iter().map(|item| space.embed(item)).collect();
        let positions = catalogue
            .iter()
            .enumerate()
            .map(|(position, item)| (item.to_owned(), position))
            .collect();
        Self {
            space,
            item_vectors,
            positions,
        }
    }

    /// The fitted vector space.
    #[must_use]
    pub const fn space(&self) -> &VectorSpace {
        &self.space
    }

    /// Embedding for a catalogue item, pre-computed when the item was part
    /// of the fitted catalogue.
    fn item_vector(&self, item: &str) -> Cow<'_, SparseVector> {
        self.positions
            .get(item)
            .and_then(|&position| self.item_vectors.get(position))
            .map_or_else(|| Cow::Owned(self.space.embed(item)), Cow::Borrowed)
    }

    fn restaurant_vector(&self, ingredients: &[String]) -> SparseVector {
        self.space.embed(&join_ingredients(ingredients))
    }
}

impl Signal for CosineSignal {
    fn name(&self) -> &'static str {
        "cosine"
    }

    fn score(&self, ingredients: &[String], item: &str) -> f64 {
        let restaurant = self.restaurant_vector(ingredients);
        sanitise(restaurant.cosine(&self.item_vector(item)))
    }

    fn score_row(&self, ingredients: &[String], catalogue: &ProductCatalogue) -> Vec<f64> {
        let restaurant = self.restaurant_vector(ingredients);
        catalogue
            .iter()
            .map(|item| sanitise(restaurant.cosine(&self.item_vector(item))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[fixture]
    fn catalogue() -> ProductCatalogue {
        ProductCatalogue::new([
            "Chicken Salad",
            "Beef Burger",
            "Lettuce Wrap",
            "Tomato Soup",
            "Cheese Sandwich",
        ])
        .expect("valid catalogue")
    }

    #[fixture]
    fn restaurants() -> RestaurantIngredients {
        RestaurantIngredients::new()
            .with_restaurant("Restaurant A", ["chicken", "lettuce", "tomato"])
            .with_restaurant("Restaurant B", ["beef", "cheese", "bread"])
            .with_restaurant("Empty", Vec::<String>::new())
    }

    #[rstest]
    fn row_covers_catalogue_in_order(
        restaurants: RestaurantIngredients,
        catalogue: ProductCatalogue,
    ) {
        let signal = CosineSignal::fit(&restaurants, &catalogue).expect("fit cosine");
        let ingredients = restaurants.ingredients("Restaurant A").unwrap_or_default();
        let row = signal.score_row(ingredients, &catalogue);
        assert_eq!(row.len(), catalogue.len());
        for (item, score) in catalogue.iter().zip(&row) {
            let single = signal.score(ingredients, item);
            assert!((single - score).abs() < TOLERANCE, "{item} row mismatch");
        }
    }

    #[rstest]
    fn shared_terms_score_above_disjoint_terms(
        restaurants: RestaurantIngredients,
        catalogue: ProductCatalogue,
    ) {
        let signal = CosineSignal::fit(&restaurants, &catalogue).expect("fit cosine");
        let ingredients = restaurants.ingredients("Restaurant B").unwrap_or_default();
        let burger = signal.score(ingredients, "Beef Burger");
        let soup = signal.score(ingredients, "Tomato Soup");
        assert!(burger > 0.0);
        assert!(soup.abs() < TOLERANCE);
    }

    #[rstest]
    fn empty_ingredients_score_zero(
        restaurants: RestaurantIngredients,
        catalogue: ProductCatalogue,
    ) {
        let signal = CosineSignal::fit(&restaurants, &catalogue).expect("fit cosine");
        let row = signal.score_row(&[], &catalogue);
        assert!(row.iter().all(|score| score.abs() < TOLERANCE));
    }

    #[rstest]
    fn items_outside_the_catalogue_are_embedded_on_demand(
        restaurants: RestaurantIngredients,
        catalogue: ProductCatalogue,
    ) {
        let signal = CosineSignal::fit(&restaurants, &catalogue).expect("fit cosine");
        let score = signal.score(&["chicken".to_owned()], "Grilled Chicken");
        assert!(score > 0.0);
        assert!(score <= 1.0);
    }

    #[rstest]
    fn shares_the_engine_vector_space(
        restaurants: RestaurantIngredients,
        catalogue: ProductCatalogue,
    ) {
        let signal = CosineSignal::fit(&restaurants, &catalogue).expect("fit cosine");
        let space = VectorSpace::from_corpus(&restaurants, &catalogue).expect("fit space");
        assert_eq!(signal.space(), &space);

        let refitted = CosineSignal::with_space(space, &catalogue);
        let ingredients = restaurants.ingredients("Restaurant A").unwrap_or_default();
        assert_eq!(
            refitted.score_row(ingredients, &catalogue),
            signal.score_row(ingredients, &catalogue)
        );
    }

    #[rstest]
    fn empty_inputs_cannot_be_fitted() {
        let err = CosineSignal::fit(&RestaurantIngredients::new(), &ProductCatalogue::default())
            .expect_err("empty corpus");
        assert_eq!(err, BuildError::EmptyCorpus);
    }
}
