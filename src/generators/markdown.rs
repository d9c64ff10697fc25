//! Markdown reference generator.
//!
//! Renders one `# Configuration` document with a section per settings model
//! and an aligned pipe table listing every field: resolved environment name,
//! type, default (or `*required*`), description, and examples.

use std::path::PathBuf;

use crate::config::Settings;
use crate::walker::{FieldInfo, SettingsInfo};

use super::Generator;

const TABLE_HEADERS: [&str; 5] = ["Name", "Type", "Default", "Description", "Example"];

/// Wrap a value in backticks.
fn q(s: impl std::fmt::Display) -> String {
    format!("`{s}`")
}

/// Escape unescaped pipes so cell content cannot break the table.
fn escape_pipes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_backslash = false;
    for c in s.chars() {
        if c == '|' && !prev_backslash {
            out.push('\\');
        }
        prev_backslash = c == '\\';
        out.push(c);
    }
    out
}

/// Build a Markdown pipe table with columns padded to equal width.
pub fn make_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| escape_pipes(cell)).collect())
        .collect();

    let mut col_sizes: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            col_sizes[i] = col_sizes[i].max(cell.chars().count());
        }
    }

    let mut result = String::from("|");
    for (i, header) in headers.iter().enumerate() {
        let pad = col_sizes[i] - header.chars().count();
        result.push_str(&format!(" {header}{} |", " ".repeat(pad)));
    }
    result.push_str("\n|");
    for size in &col_sizes {
        result.push_str(&format!("{}|", "-".repeat(size + 2)));
    }
    for row in &rows {
        result.push_str("\n|");
        for (i, cell) in row.iter().enumerate() {
            let pad = col_sizes[i] - cell.chars().count();
            result.push_str(&format!(" {cell}{} |", " ".repeat(pad)));
        }
    }
    result
}

fn make_row(field: &FieldInfo) -> Vec<String> {
    let mut name = q(&field.env_name);
    if field.deprecated {
        name.push_str(" (deprecated)");
    }

    let default = match &field.default {
        Some(default) => q(default),
        None => "*required*".to_string(),
    };

    // Unlike dotenv, the table shows examples even when they just echo the
    // default, so every optional field has a copy-pasteable value.
    let example = field
        .examples
        .iter()
        .map(q)
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        name,
        q(field.type_label()),
        default,
        field.description.clone().unwrap_or_default(),
        example,
    ]
}

/// The Markdown configuration reference generator.
#[derive(Debug)]
pub struct MarkdownGenerator<'a> {
    settings: &'a Settings,
}

impl<'a> MarkdownGenerator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }
}

impl Generator for MarkdownGenerator<'_> {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn enabled(&self) -> bool {
        self.settings.markdown.enabled
    }

    fn generate_single(&self, info: &SettingsInfo, level: usize) -> String {
        let mut result = format!("{} {}", "#".repeat(level), info.name);
        if !info.docs.is_empty() {
            result.push_str("\n\n");
            result.push_str(&info.docs);
        }
        result.push_str("\n\n");

        if !info.env_prefix.is_empty() {
            result.push_str(&format!(
                "**Environment Prefix**: `{}`\n\n",
                info.env_prefix
            ));
        }

        if !info.fields.is_empty() {
            let rows: Vec<Vec<String>> = info.fields.iter().map(make_row).collect();
            result.push_str(&make_table(&TABLE_HEADERS, &rows));
            result.push_str("\n\n");
        }

        let children = info
            .children
            .iter()
            .map(|child| self.generate_single(child, level + 1).trim().to_string())
            .collect::<Vec<_>>()
            .join("\n\n");
        result.push_str(&children);

        result
    }

    fn generate(&self, infos: &[SettingsInfo]) -> String {
        let body = infos
            .iter()
            .map(|info| self.generate_single(info, 2).trim().to_string())
            .collect::<Vec<_>>()
            .join("\n\n");
        format!(
            "# Configuration\n\n\
             Here you can find all available configuration options, set via environment variables.\n\n\
             {}\n",
            body.trim_end()
        )
    }

    fn file_paths(&self) -> Vec<PathBuf> {
        if !self.settings.markdown.enabled {
            return Vec::new();
        }
        vec![self.settings.root_dir().join(&self.settings.markdown.path)]
    }

    fn region(&self) -> Option<&str> {
        self.settings.markdown.region.as_deref()
    }
}
