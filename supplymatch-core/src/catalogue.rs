//! The ordered product catalogue scored against every restaurant.
//!
//! A catalogue item is identified by its description, so descriptions must
//! be unique: score tables are keyed by them.

use std::collections::HashMap;

use thiserror::Error;

/// Errors returned by [`ProductCatalogue::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// The same description appeared more than once.
    #[error("catalogue item {item:?} appears more than once")]
    DuplicateItem {
        /// The repeated description.
        item: String,
    },
    /// A description was empty or only whitespace.
    #[error("catalogue item at position {position} is blank")]
    BlankItem {
        /// Zero-based position of the blank entry.
        position: usize,
    },
}

/// Ordered sequence of unique product descriptions.
///
/// # Examples
///
/// ```
/// use supplymatch_core::{CatalogueError, ProductCatalogue};
///
/// # fn main() -> Result<(), CatalogueError> {
/// let catalogue = ProductCatalogue::new(["Tomato Soup", "Lettuce Wrap"])?;
/// assert_eq!(catalogue.position("Lettuce Wrap"), Some(1));
///
/// let duplicate = ProductCatalogue::new(["Tomato Soup", "Tomato Soup"]);
/// assert!(matches!(duplicate, Err(CatalogueError::DuplicateItem { .. })));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct ProductCatalogue {
    items: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ProductCatalogue {
    /// Validate and construct a catalogue, preserving input order.
    ///
    /// # Errors
    /// Returns [`CatalogueError::DuplicateItem`] when a description repeats
    /// and [`CatalogueError::BlankItem`] when one is blank.
    pub fn new<I, S>(items: I) -> Result<Self, CatalogueError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalogue = Self::default();
        for (position, raw) in items.into_iter().enumerate() {
            let item = raw.into();
            if item.trim().is_empty() {
                return Err(CatalogueError::BlankItem { position });
            }
            if catalogue.positions.contains_key(&item) {
                return Err(CatalogueError::DuplicateItem { item });
            }
            catalogue.positions.insert(item.clone(), position);
            catalogue.items.push(item);
        }
        Ok(catalogue)
    }

    /// Descriptions in catalogue order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Iterate over descriptions in catalogue order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Position of a description within the catalogue.
    #[must_use]
    pub fn position(&self, item: &str) -> Option<usize> {
        self.positions.get(item).copied()
    }

    /// Return the description stored at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.items.get(position).map(String::as_str)
    }

    /// Number of catalogue items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Report whether the catalogue has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TryFrom<Vec<String>> for ProductCatalogue {
    type Error = CatalogueError;

    fn try_from(items: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<ProductCatalogue> for Vec<String> {
    fn from(catalogue: ProductCatalogue) -> Self {
        catalogue.items
    }
}
