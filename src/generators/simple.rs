//! Plain-text reference generator.
//!
//! Renders an underlined section per settings model, then one underlined
//! heading per field with its description, default, and examples. Useful
//! where Markdown is not wanted, e.g. man-page-adjacent docs.

use std::path::PathBuf;

use crate::config::Settings;
use crate::walker::SettingsInfo;

use super::Generator;

/// The plain-text reference generator.
#[derive(Debug)]
pub struct SimpleGenerator<'a> {
    settings: &'a Settings,
}

impl<'a> SimpleGenerator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

impl Generator for SimpleGenerator<'_> {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn enabled(&self) -> bool {
        self.settings.simple.enabled
    }

    fn generate_single(&self, info: &SettingsInfo, level: usize) -> String {
        let mut result = format!("{}\n{}\n", info.name, "#".repeat(info.name.chars().count()));
        if !info.docs.is_empty() {
            result.push_str(&format!("\n{}\n", info.docs));
        }

        for field in &info.fields {
            let mut name = format!("`{}`", field.env_name);
            if field.deprecated {
                name.push_str(" (deprecated)");
            }

            let heading = format!("{name}: {}", field.type_label());
            result.push_str(&format!(
                "\n{heading}\n{}\n",
                "-".repeat(heading.chars().count())
            ));

            if let Some(description) = &field.description {
                result.push_str(&format!("\n{description}\n\n"));
            }

            if let Some(default) = &field.default {
                result.push_str(&format!("Default: {default}\n"));
            }

            if field.has_examples() {
                result.push_str(&format!("Examples: {}\n", field.examples.join(", ")));
            }
        }

        for child in &info.children {
            result.push('\n');
            result.push_str(&self.generate_single(child, level + 1));
        }

        result
    }

    fn file_paths(&self) -> Vec<PathBuf> {
        if !self.settings.simple.enabled {
            return Vec::new();
        }
        vec![self.settings.root_dir().join(&self.settings.simple.path)]
    }

    fn region(&self) -> Option<&str> {
        self.settings.simple.region.as_deref()
    }
}
