//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - operation completed, documentation is up to date
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::ExportError;

/// Standard exit codes for CLI operations.
///
/// These codes follow Unix conventions where 0 indicates success,
/// and non-zero values indicate various error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Generated files are out of date (code 3)
    /// Returned by `check` so CI can fail on stale documentation
    Stale = 3,

    /// Failed to parse a schema file (code 4)
    SchemaError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,

    /// Region markers missing or malformed in a target file (code 7)
    RegionError = 7,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Determine the exit code for a check run from the stale file list.
    pub fn from_check_result<T>(stale: &[T]) -> Self {
        if stale.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::Stale
        }
    }

    /// Convert an `ExportError` to the appropriate exit code.
    ///
    /// Maps specific error types to semantic exit codes that scripts
    /// can use to determine appropriate recovery actions.
    pub fn from_error(error: &ExportError) -> Self {
        match error {
            ExportError::SchemaParse { .. } | ExportError::UnsupportedSchemaFormat { .. } => {
                ExitCode::SchemaError
            }

            ExportError::FileRead { .. } | ExportError::FileWrite { .. } => ExitCode::IoError,

            ExportError::NoSchemas => ExitCode::ConfigError,

            ExportError::RegionBeginMissing { .. }
            | ExportError::RegionEndMissing { .. }
            | ExportError::RegionMarkersReversed { .. } => ExitCode::RegionError,

            ExportError::UnknownGenerator { .. } => ExitCode::GeneralError,
        }
    }

    /// Check if this exit code indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }

    /// Get a human-readable description of the exit code.
    pub fn description(&self) -> &str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::GeneralError => "General error",
            ExitCode::Stale => "Generated files are out of date",
            ExitCode::SchemaError => "Schema parse error",
            ExitCode::IoError => "I/O error",
            ExitCode::ConfigError => "Configuration error",
            ExitCode::RegionError => "Region marker error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success as u8, 0);
        assert_eq!(ExitCode::GeneralError as u8, 1);
        assert_eq!(ExitCode::Stale as u8, 3);
        assert_eq!(ExitCode::RegionError as u8, 7);
    }

    #[test]
    fn test_from_check_result() {
        let stale = vec![PathBuf::from("Configuration.md")];
        assert_eq!(ExitCode::from_check_result(&stale), ExitCode::Stale);

        let fresh: Vec<PathBuf> = Vec::new();
        assert_eq!(ExitCode::from_check_result(&fresh), ExitCode::Success);
    }

    #[test]
    fn test_from_error_mapping() {
        let err = ExportError::RegionBeginMissing {
            path: PathBuf::from("README.md"),
            marker: "<!-- cfg:begin -->".to_string(),
        };
        assert_eq!(ExitCode::from_error(&err), ExitCode::RegionError);

        let err = ExportError::NoSchemas;
        assert_eq!(ExitCode::from_error(&err), ExitCode::ConfigError);

        let err = ExportError::UnknownGenerator {
            name: "yaml".to_string(),
            available: "markdown, dotenv, simple".to_string(),
        };
        assert_eq!(ExitCode::from_error(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_is_success() {
        assert!(ExitCode::Success.is_success());
        assert!(!ExitCode::Stale.is_success());
        assert!(!ExitCode::GeneralError.is_success());
    }
}
