//! TF-IDF vector space shared by catalogue items and restaurants.
//!
//! The space is fitted once over every catalogue description plus one
//! document per restaurant (its ingredients joined with spaces). Inverse
//! document frequency is smoothed, `ln((1 + n) / (1 + df)) + 1`, and every
//! embedding is L2-normalised, so cosine similarity reduces to a sparse dot
//! product.
#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use supplymatch_core::{ProductCatalogue, RestaurantIngredients};

use crate::BuildError;
use crate::text::{join_ingredients, tokenize};

/// Fitted vocabulary and inverse document frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSpace {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl VectorSpace {
    /// Fit a space over raw documents.
    ///
    /// Every document counts once towards document frequency, including
    /// documents that contribute no tokens.
    ///
    /// # Errors
    /// Returns [`BuildError::EmptyCorpus`] when no document yields a token.
    pub fn fit<'doc, I>(documents: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = &'doc str>,
    {
        let mut document_count = 0_usize;
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            document_count += 1;
            let terms: BTreeSet<String> = tokenize(document).collect();
            for term in terms {
                *document_frequency.entry(term).or_default() += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(BuildError::EmptyCorpus);
        }

        let idf = document_frequency
            .values()
            .map(|&df| smoothed_idf(document_count, df))
            .collect();
        let vocabulary = document_frequency
            .into_keys()
            .enumerate()
            .map(|(index, term)| (term, index))
            .collect();

        Ok(Self { vocabulary, idf })
    }

    /// Fit the space used by the engine: every catalogue description plus
    /// one joined document per restaurant.
    ///
    /// A restaurant counts towards document frequency even when its
    /// ingredients yield no tokens, matching [`VectorSpace::fit`].
    ///
    /// # Errors
    /// Returns [`BuildError::EmptyCorpus`] when neither input provides text.
    pub fn from_corpus(
        restaurants: &RestaurantIngredients,
        catalogue: &ProductCatalogue,
    ) -> Result<Self, BuildError> {
        let restaurant_documents: Vec<String> = restaurants
            .iter()
            .map(|(_, ingredients)| join_ingredients(ingredients))
            .collect();
        let documents = catalogue
            .iter()
            .chain(restaurant_documents.iter().map(String::as_str));
        let space = Self::fit(documents)?;
        debug!(
            "fitted vector space with {} terms over {} catalogue items and {} restaurant documents",
            space.len(),
            catalogue.len(),
            restaurant_documents.len()
        );
        Ok(space)
    }

    /// Embed `text` as an L2-normalised TF-IDF vector.
    ///
    /// Terms outside the vocabulary are ignored; text without known terms
    /// embeds to the zero vector.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "term weights multiply counts by inverse document frequency"
    )]
    pub fn embed(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_default() += 1.0;
            }
        }
        let weights = counts
            .into_iter()
            .filter_map(|(index, count)| self.idf.get(index).map(|idf| (index, count * idf)))
            .collect();
        SparseVector::normalised(weights)
    }

    /// Index assigned to `term`, if it is part of the vocabulary.
    #[must_use]
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Inverse document frequency of `term`, if it is part of the vocabulary.
    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term)
            .and_then(|index| self.idf.get(index).copied())
    }

    /// Number of terms in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Report whether the vocabulary is empty. Fitted spaces never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "smoothed idf is a logarithm of document count ratios"
)]
fn smoothed_idf(document_count: usize, document_frequency: usize) -> f64 {
    let numerator = 1.0 + document_count as f64;
    let denominator = 1.0 + document_frequency as f64;
    (numerator / denominator).ln() + 1.0
}

/// Sparse vector with entries sorted by term index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    #[expect(
        clippy::float_arithmetic,
        reason = "L2 normalisation divides each weight by the vector norm"
    )]
    fn normalised(weights: Vec<(usize, f64)>) -> Self {
        let norm = weights
            .iter()
            .map(|(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt();
        if norm <= f64::EPSILON {
            return Self::default();
        }
        let entries = weights
            .into_iter()
            .map(|(index, weight)| (index, weight / norm))
            .collect();
        Self { entries }
    }

    /// Report whether every component is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of non-zero components.
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Euclidean norm: `1.0` for embedded text, `0.0` for the zero vector.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "norm is the square root of summed squares"
    )]
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, weight)| weight * weight)
            .sum::<f64>()
            .sqrt()
    }

    /// Cosine similarity between two embeddings.
    ///
    /// Both vectors are unit length or zero, so this is their dot product;
    /// a zero vector on either side yields `0.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "dot product of matching sparse components"
    )]
    pub fn cosine(&self, other: &Self) -> f64 {
        let (mut lhs, mut rhs) = (0_usize, 0_usize);
        let mut dot = 0.0_f64;
        while let (Some(&(li, lw)), Some(&(ri, rw))) =
            (self.entries.get(lhs), other.entries.get(rhs))
        {
            match li.cmp(&ri) {
                Ordering::Less => lhs += 1,
                Ordering::Greater => rhs += 1,
                Ordering::Equal => {
                    dot += lw * rw;
                    lhs += 1;
                    rhs += 1;
                }
            }
        }
        dot
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[rstest]
    fn empty_corpus_is_rejected() {
        let err = VectorSpace::fit(Vec::<&str>::new()).expect_err("empty corpus");
        assert_eq!(err, BuildError::EmptyCorpus);
    }

    #[rstest]
    fn tokenless_corpus_is_rejected() {
        let err = VectorSpace::fit(["a", "", "- !"]).expect_err("no tokens");
        assert_eq!(err, BuildError::EmptyCorpus);
    }

    #[rstest]
    fn vocabulary_is_sorted() {
        let space = VectorSpace::fit(["Tomato Soup", "Beef Burger"]).expect("fit space");
        assert_eq!(space.len(), 4);
        assert!(!space.is_empty());
        assert_eq!(space.term_index("beef"), Some(0));
        assert_eq!(space.term_index("burger"), Some(1));
        assert_eq!(space.term_index("soup"), Some(2));
        assert_eq!(space.term_index("tomato"), Some(3));
        assert_eq!(space.term_index("Tomato"), None);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn idf_is_smoothed() {
        let space =
            VectorSpace::fit(["chicken salad", "chicken wrap", "beef burger"]).expect("fit space");
        let common = space.idf("chicken").expect("chicken idf");
        let rare = space.idf("beef").expect("beef idf");
        assert!((common - ((4.0_f64 / 3.0).ln() + 1.0)).abs() < TOLERANCE);
        assert!((rare - ((4.0_f64 / 2.0).ln() + 1.0)).abs() < TOLERANCE);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn embeddings_are_unit_length() {
        let space = VectorSpace::fit(["chicken salad", "beef burger"]).expect("fit space");
        let vector = space.embed("chicken chicken salad");
        assert_eq!(vector.nnz(), 2);
        assert!((vector.norm() - 1.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn unknown_terms_embed_to_zero() {
        let space = VectorSpace::fit(["chicken salad"]).expect("fit space");
        let vector = space.embed("quinoa");
        assert!(vector.is_zero());
        assert!(vector.cosine(&space.embed("chicken")).abs() < TOLERANCE);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn cosine_of_identical_text_is_one() {
        let space = VectorSpace::fit(["chicken salad", "beef burger"]).expect("fit space");
        let lhs = space.embed("Chicken Salad");
        let rhs = space.embed("salad chicken");
        assert!((lhs.cosine(&rhs) - 1.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn cosine_of_disjoint_text_is_zero() {
        let space = VectorSpace::fit(["chicken salad", "beef burger"]).expect("fit space");
        let lhs = space.embed("chicken");
        let rhs = space.embed("burger");
        assert!(lhs.cosine(&rhs).abs() < TOLERANCE);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn corpus_counts_one_document_per_restaurant() {
        let restaurants = RestaurantIngredients::new()
            .with_restaurant("A", ["chicken", "lettuce"])
            .with_restaurant("B", ["beef"]);
        let catalogue = ProductCatalogue::new(["Chicken Salad"]).expect("catalogue");
        let space = VectorSpace::from_corpus(&restaurants, &catalogue).expect("fit space");
        // Three documents, two of which mention chicken.
        let idf = space.idf("chicken").expect("chicken idf");
        assert!((idf - ((4.0_f64 / 3.0).ln() + 1.0)).abs() < TOLERANCE);
        assert_eq!(space.len(), 4);
    }

    #[rstest]
    #[case::empty_list(Vec::new())]
    #[case::single_letters(vec!["a".to_owned(), "b".to_owned()])]
    fn tokenless_restaurants_count_as_documents(#[case] ingredients: Vec<String>) {
        let restaurants = RestaurantIngredients::new()
            .with_restaurant("A", ["chicken"])
            .with_restaurant("Quiet", ingredients.clone());
        let catalogue = ProductCatalogue::new(["Chicken Salad"]).expect("catalogue");
        let from_corpus = VectorSpace::from_corpus(&restaurants, &catalogue).expect("fit space");
        let joined = ingredients.join(" ");
        let direct =
            VectorSpace::fit(["Chicken Salad", "chicken", joined.as_str()]).expect("fit space");
        assert_eq!(from_corpus, direct);
        assert_ne!(
            from_corpus.idf("chicken"),
            VectorSpace::fit(["Chicken Salad", "chicken"])
                .expect("fit space")
                .idf("chicken")
        );
    }
}
