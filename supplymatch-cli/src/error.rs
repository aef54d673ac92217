//! Error types emitted by the supplymatch CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use supplymatch_scorer::{BuildError, RecommendError};
use thiserror::Error;

/// Errors emitted by the supplymatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name of the offending input.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option name of the offending input.
        field: &'static str,
        /// Path as resolved from configuration.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option name of the offending input.
        field: &'static str,
        /// Path as resolved from configuration.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option name of the offending input.
        field: &'static str,
        /// Path as resolved from configuration.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening a JSON snapshot failed.
    #[error("failed to open {field} snapshot at {path:?}: {source}")]
    OpenSnapshot {
        /// Option name of the offending input.
        field: &'static str,
        /// Path as resolved from configuration.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A JSON snapshot could not be decoded.
    #[error("failed to parse {field} snapshot at {path:?}: {source}")]
    ParseSnapshot {
        /// Option name of the offending input.
        field: &'static str,
        /// Path as resolved from configuration.
        path: Utf8PathBuf,
        /// Decoder failure with line and column.
        #[source]
        source: serde_json::Error,
    },
    /// The engine could not be built from the snapshots.
    #[error("failed to build recommendation engine: {0}")]
    BuildEngine(#[from] BuildError),
    /// The engine rejected the query.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
