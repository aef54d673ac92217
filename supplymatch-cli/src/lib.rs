//! Command-line interface for the supplymatch recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod logging;
mod recommend;
mod restaurants;
mod snapshot;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use restaurants::{RestaurantsArgs, run_restaurants};

const ARG_RESTAURANT: &str = "restaurant";
const ARG_DATA_DIR: &str = "data-dir";
const ARG_INGREDIENTS: &str = "ingredients";
const ARG_CATALOGUE: &str = "catalogue";
const ARG_TOP_N: &str = "top-n";
const ARG_CONNECTION_THRESHOLD: &str = "connection-threshold";
const ENV_RECOMMEND_RESTAURANT: &str = "SUPPLYMATCH_CMDS_RECOMMEND_RESTAURANT";

const INGREDIENTS_FILE: &str = "restaurant_ingredients.json";
const CATALOGUE_FILE: &str = "product_catalogue.json";

/// Run the supplymatch CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or snapshots are
/// invalid, or when the engine rejects the query.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init();
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Restaurants(args) => run_restaurants(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "supplymatch",
    about = "Recommend catalogue products to restaurants from their ingredients",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalogue products for a restaurant.
    Recommend(RecommendArgs),
    /// List restaurants in the ingredient snapshot.
    Restaurants(RestaurantsArgs),
}

#[cfg(test)]
mod tests;
