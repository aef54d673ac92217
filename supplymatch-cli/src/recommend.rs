//! Recommend command implementation for the supplymatch CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use supplymatch_core::Recommendation;
use supplymatch_scorer::{EngineConfig, RecommendationEngine};

use crate::snapshot::{load_catalogue, load_ingredients, require_existing};
use crate::{
    ARG_CATALOGUE, ARG_CONNECTION_THRESHOLD, ARG_DATA_DIR, ARG_INGREDIENTS, ARG_RESTAURANT,
    ARG_TOP_N, CATALOGUE_FILE, CliError, ENV_RECOMMEND_RESTAURANT, INGREDIENTS_FILE,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank catalogue products for one restaurant by blending \
                 ingredient frequency, TF-IDF cosine similarity and fuzzy \
                 partial matching. Snapshots are read from JSON files: an \
                 object of restaurant name to ingredient array, and an array \
                 of product descriptions.",
    about = "Recommend catalogue products for a restaurant"
)]
#[ortho_config(prefix = "SUPPLYMATCH")]
pub(crate) struct RecommendArgs {
    /// Restaurant to recommend products for.
    #[arg(long = ARG_RESTAURANT, value_name = "name")]
    #[serde(default)]
    pub(crate) restaurant: Option<String>,
    /// Directory containing the default snapshot filenames.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the restaurant ingredient snapshot.
    #[arg(long = ARG_INGREDIENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) ingredients: Option<Utf8PathBuf>,
    /// Override the path to the product catalogue snapshot.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Number of recommendations to print (defaults to 10).
    #[arg(long = ARG_TOP_N, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Fuzzy ratio an ingredient must exceed to be listed as a connection.
    #[arg(long = ARG_CONNECTION_THRESHOLD, value_name = "ratio")]
    #[serde(default)]
    pub(crate) connection_threshold: Option<f64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Restaurant being queried.
    pub(crate) restaurant: String,
    /// Path to the ingredient snapshot.
    pub(crate) ingredients: Utf8PathBuf,
    /// Path to the catalogue snapshot.
    pub(crate) catalogue: Utf8PathBuf,
    /// Engine settings after applying overrides.
    pub(crate) engine: EngineConfig,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.ingredients, ARG_INGREDIENTS)?;
        require_existing(&self.catalogue, ARG_CATALOGUE)?;
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let restaurant = args.restaurant.ok_or(CliError::MissingArgument {
            field: ARG_RESTAURANT,
            env: ENV_RECOMMEND_RESTAURANT,
        })?;

        let data_dir = args.data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        let ingredients = args
            .ingredients
            .unwrap_or_else(|| data_dir.join(INGREDIENTS_FILE));
        let catalogue = args
            .catalogue
            .unwrap_or_else(|| data_dir.join(CATALOGUE_FILE));

        let mut engine = EngineConfig::default();
        if let Some(top_n) = args.top_n {
            engine = engine.with_top_n(top_n);
        }
        if let Some(threshold) = args.connection_threshold {
            engine = engine.with_connection_threshold(threshold);
        }

        Ok(Self {
            restaurant,
            ingredients,
            catalogue,
            engine,
        })
    }
}

/// JSON document printed by the `recommend` command.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub(crate) struct RecommendOutput {
    pub(crate) restaurant: String,
    pub(crate) recommendations: Vec<Recommendation>,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let output = execute_recommend(args)?;
    write_json(writer, &output)
}

fn execute_recommend(args: RecommendArgs) -> Result<RecommendOutput, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let restaurants = load_ingredients(&config.ingredients)?;
    let catalogue = load_catalogue(&config.catalogue)?;
    info!(
        "loaded {} restaurants and {} catalogue items",
        restaurants.len(),
        catalogue.len()
    );
    let engine = RecommendationEngine::build(restaurants, catalogue, config.engine)?;
    let recommendations = engine.recommend(&config.restaurant)?;
    Ok(RecommendOutput {
        restaurant: config.restaurant,
        recommendations,
    })
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
