//! Error types for the settings documentation exporter
//!
//! This module provides structured error types using thiserror for better
//! error handling and actionable error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Schema errors
    #[error("Failed to parse schema file '{path}': {reason}")]
    SchemaParse { path: PathBuf, reason: String },

    #[error(
        "Unsupported schema format '{extension}' for file '{path}'. Supported formats: .json, .toml"
    )]
    UnsupportedSchemaFormat { path: PathBuf, extension: String },

    #[error(
        "No schema files given. Pass schema paths on the command line or set `schemas` in confdoc.toml."
    )]
    NoSchemas,

    /// Region injection errors
    #[error("Begin marker '{marker}' not found in '{path}'")]
    RegionBeginMissing { path: PathBuf, marker: String },

    #[error("End marker '{marker}' not found in '{path}'")]
    RegionEndMissing { path: PathBuf, marker: String },

    #[error("End marker '{marker}' appears before the begin marker in '{path}'")]
    RegionMarkersReversed { path: PathBuf, marker: String },

    /// Generator selection errors
    #[error("Unknown generator '{name}'. Available generators: {available}")]
    UnknownGenerator { name: String, available: String },
}

impl ExportError {
    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::SchemaParse { .. } => vec![
                "Check the schema file against the format shown by 'confdoc init'",
                "Field types must be one of: string, integer, number, boolean, array, object, null, path, secret",
            ],
            Self::RegionBeginMissing { .. } | Self::RegionEndMissing { .. } => vec![
                "Add a marker pair to the target file, e.g. '<!-- confdoc:begin -->' and '<!-- confdoc:end -->'",
                "Or unset the generator's `region` option to overwrite the whole file",
            ],
            Self::RegionMarkersReversed { .. } => {
                vec!["Move the end marker below the begin marker in the target file"]
            }
            Self::FileRead { .. } => {
                vec!["Check that the file exists and you have read permissions"]
            }
            Self::UnknownGenerator { .. } => {
                vec!["Run 'confdoc generate --help' to see the builtin generator names"]
            }
            _ => vec![],
        }
    }
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
