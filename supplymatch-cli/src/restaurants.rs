//! Restaurants command: list the names in an ingredient snapshot.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::recommend::write_json;
use crate::snapshot::{load_ingredients, require_existing};
use crate::{ARG_DATA_DIR, ARG_INGREDIENTS, CliError, INGREDIENTS_FILE};

/// CLI arguments for the `restaurants` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the restaurants known to an ingredient snapshot")]
#[ortho_config(prefix = "SUPPLYMATCH")]
pub(crate) struct RestaurantsArgs {
    /// Directory containing the default snapshot filenames.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the restaurant ingredient snapshot.
    #[arg(long = ARG_INGREDIENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) ingredients: Option<Utf8PathBuf>,
}

impl RestaurantsArgs {
    fn snapshot_path(self) -> Utf8PathBuf {
        let data_dir = self.data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        self.ingredients
            .unwrap_or_else(|| data_dir.join(INGREDIENTS_FILE))
    }
}

pub(super) fn run_restaurants(args: RestaurantsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_restaurants_with(args, &mut stdout)
}

pub(super) fn run_restaurants_with(
    args: RestaurantsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let path = merged.snapshot_path();
    require_existing(&path, ARG_INGREDIENTS)?;
    let restaurants = load_ingredients(&path)?;
    let names: Vec<&str> = restaurants.names().collect();
    write_json(writer, &names)
}
