//! Dotenv example generator.
//!
//! Renders a `.env.example`-style file: one `KEY=value` line per field,
//! grouped under a comment header per settings model. Optional fields are
//! commented out with their default; required fields are left bare so a
//! missing value is obvious.

use std::path::PathBuf;

use crate::config::Settings;
use crate::walker::SettingsInfo;

use super::Generator;

/// The dotenv example generator.
#[derive(Debug)]
pub struct DotenvGenerator<'a> {
    settings: &'a Settings,
}

impl<'a> DotenvGenerator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

impl Generator for DotenvGenerator<'_> {
    fn name(&self) -> &'static str {
        "dotenv"
    }

    fn enabled(&self) -> bool {
        self.settings.dotenv.enabled
    }

    fn generate_single(&self, info: &SettingsInfo, _level: usize) -> String {
        let mut result = format!("### {}\n\n", info.name);

        for field in &info.fields {
            let mut line = match &field.default {
                Some(default) => format!("# {}={default}", field.env_name),
                None => format!("{}=", field.env_name),
            };

            if field.has_examples() {
                line.push_str("  # ");
                line.push_str(&field.examples.join(", "));
            }

            result.push_str(&line);
            result.push('\n');
        }

        result = format!("{}\n\n", result.trim_end());

        for child in &info.children {
            result.push_str(&self.generate_single(child, 1));
        }

        result
    }

    fn file_paths(&self) -> Vec<PathBuf> {
        if !self.settings.dotenv.enabled {
            return Vec::new();
        }
        vec![self.settings.root_dir().join(&self.settings.dotenv.path)]
    }
}
