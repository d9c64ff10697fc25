//! Format renderers over walked settings models.
//!
//! Each generator consumes the flat [`SettingsInfo`] descriptors produced by
//! the walker and renders one text format. Generators are addressable by
//! name from config and the CLI.

pub mod dotenv;
pub mod markdown;
pub mod simple;

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{ExportError, ExportResult};
use crate::walker::SettingsInfo;

pub use dotenv::DotenvGenerator;
pub use markdown::MarkdownGenerator;
pub use simple::SimpleGenerator;

/// Names of the builtin generators, in default run order.
pub const BUILTIN_GENERATORS: &[&str] = &["markdown", "dotenv", "simple"];

/// A documentation renderer for walked settings models.
pub trait Generator: std::fmt::Debug {
    /// Stable name used for selection from config and CLI.
    fn name(&self) -> &'static str;

    /// Whether this generator is enabled in the active settings.
    fn enabled(&self) -> bool;

    /// Render one settings model at the given nesting level.
    fn generate_single(&self, info: &SettingsInfo, level: usize) -> String;

    /// Render all models into the final document.
    fn generate(&self, infos: &[SettingsInfo]) -> String {
        let body = infos
            .iter()
            .map(|info| self.generate_single(info, 1).trim().to_string())
            .collect::<Vec<_>>()
            .join("\n\n");
        format!("{}\n", body.trim_end())
    }

    /// Target files this generator writes, resolved against the project root.
    fn file_paths(&self) -> Vec<PathBuf>;

    /// Region name for marker-based injection, if configured.
    fn region(&self) -> Option<&str> {
        None
    }
}

/// All builtin generators for the given settings.
pub fn builtin(settings: &Settings) -> Vec<Box<dyn Generator + '_>> {
    vec![
        Box::new(MarkdownGenerator::new(settings)),
        Box::new(DotenvGenerator::new(settings)),
        Box::new(SimpleGenerator::new(settings)),
    ]
}

/// Resolve generator names to instances. An empty list selects all builtins.
pub fn select<'a>(
    settings: &'a Settings,
    names: &[String],
) -> ExportResult<Vec<Box<dyn Generator + 'a>>> {
    if names.is_empty() {
        return Ok(builtin(settings));
    }

    let mut selected: Vec<Box<dyn Generator + 'a>> = Vec::with_capacity(names.len());
    for name in names {
        let generator: Box<dyn Generator + 'a> = match name.as_str() {
            "markdown" => Box::new(MarkdownGenerator::new(settings)),
            "dotenv" => Box::new(DotenvGenerator::new(settings)),
            "simple" => Box::new(SimpleGenerator::new(settings)),
            other => {
                return Err(ExportError::UnknownGenerator {
                    name: other.to_string(),
                    available: BUILTIN_GENERATORS.join(", "),
                });
            }
        };
        selected.push(generator);
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_by_default() {
        let settings = Settings::default();
        let generators = select(&settings, &[]).unwrap();
        let names: Vec<_> = generators.iter().map(|g| g.name()).collect();
        assert_eq!(names, BUILTIN_GENERATORS);
    }

    #[test]
    fn test_select_by_name() {
        let settings = Settings::default();
        let generators = select(&settings, &["dotenv".to_string()]).unwrap();
        assert_eq!(generators.len(), 1);
        assert_eq!(generators[0].name(), "dotenv");
    }

    #[test]
    fn test_select_unknown_name() {
        let settings = Settings::default();
        let err = select(&settings, &["yaml".to_string()]).unwrap_err();
        assert!(matches!(err, ExportError::UnknownGenerator { .. }));
        assert!(err.to_string().contains("markdown, dotenv, simple"));
    }
}
