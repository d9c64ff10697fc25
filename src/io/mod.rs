//! Input/Output handling for CLI integration.
//!
//! Provides consistent exit codes so scripts and CI can react to outcomes
//! (stale docs, bad schema, missing markers) without parsing stderr.

pub mod exit_code;

pub use exit_code::ExitCode;
