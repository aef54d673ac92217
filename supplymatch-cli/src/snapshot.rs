//! Loading the JSON snapshots the engine is built from.
//!
//! Files are opened through `cap-std` with ambient authority so every path
//! is handled as UTF-8 via `camino`.

use std::io::{self, BufReader};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use serde::de::DeserializeOwned;
use supplymatch_core::{ProductCatalogue, RestaurantIngredients};

use crate::{ARG_CATALOGUE, ARG_INGREDIENTS, CliError};

/// Open a UTF-8 file path using ambient authority.
fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether a path exists and is a regular file.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSnapshot {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseSnapshot {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON object mapping restaurant names to ingredient arrays.
pub(crate) fn load_ingredients(path: &Utf8Path) -> Result<RestaurantIngredients, CliError> {
    load_json(path, ARG_INGREDIENTS)
}

/// Loads a JSON array of unique product descriptions.
pub(crate) fn load_catalogue(path: &Utf8Path) -> Result<ProductCatalogue, CliError> {
    load_json(path, ARG_CATALOGUE)
}
