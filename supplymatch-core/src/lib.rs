//! Core domain types for the supplymatch recommendation engine.
//!
//! The crate models the two input snapshots the engine consumes, a
//! [`RestaurantIngredients`] mapping and a [`ProductCatalogue`], together
//! with the [`Recommendation`] values it produces. It also defines the
//! [`Signal`] trait that every similarity signal implements so the engine
//! can blend an arbitrary set of scorers.
//!
//! # Examples
//!
//! ```
//! use supplymatch_core::{ProductCatalogue, RestaurantIngredients};
//!
//! # fn main() -> Result<(), supplymatch_core::CatalogueError> {
//! let catalogue = ProductCatalogue::new(["Chicken Salad", "Beef Burger"])?;
//! let restaurants = RestaurantIngredients::new()
//!     .with_restaurant("Bistro", ["chicken", "lettuce"]);
//! assert_eq!(catalogue.len(), 2);
//! assert_eq!(restaurants.ingredients("Bistro").map(<[String]>::len), Some(2));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalogue;
mod ingredients;
mod recommendation;
pub mod signal;

pub use catalogue::{CatalogueError, ProductCatalogue};
pub use ingredients::RestaurantIngredients;
pub use recommendation::Recommendation;
pub use signal::{Signal, sanitise};
