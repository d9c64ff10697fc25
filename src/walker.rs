//! Model walker: turns a [`SettingsModel`] schema into flat field descriptors.
//!
//! The walker resolves the effective environment-variable name for every
//! field (prefix + field name, uppercased, with nested models extending the
//! prefix through the configured delimiter), renders defaults and examples to
//! strings, and classifies fields as required or optional.

use std::path::Path;

use crate::config::Settings;
use crate::model::{FieldDef, SettingsModel};
use serde_json::Value;

/// Flattened descriptor of one settings field, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    /// The field name as written in the model
    pub name: String,

    /// The resolved environment-variable name
    pub env_name: String,

    /// Human-readable type labels
    pub types: Vec<String>,

    /// The default value rendered as a string, or None for required fields
    pub default: Option<String>,

    /// Field description
    pub description: Option<String>,

    /// Example values rendered as strings
    pub examples: Vec<String>,

    /// Environment-variable aliases
    pub aliases: Vec<String>,

    /// Whether the field is deprecated
    pub deprecated: bool,
}

impl FieldInfo {
    /// A field without a default must be set by the user.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Examples worth showing: present and not just a repeat of the default.
    pub fn has_examples(&self) -> bool {
        !self.examples.is_empty() && self.examples != self.default.iter().cloned().collect::<Vec<_>>()
    }

    /// The type labels joined for display, e.g. `integer | string`.
    pub fn type_label(&self) -> String {
        self.types.join(" | ")
    }

    fn from_field(field: &FieldDef, prefix: &str, settings: &Settings) -> Self {
        let env_name = field
            .aliases
            .first()
            .map(|alias| alias.to_uppercase())
            .unwrap_or_else(|| format!("{prefix}{}", field.name).to_uppercase());

        let is_path = field.field_type.is_path();
        let default = field
            .default
            .as_ref()
            .map(|value| render_value(value, is_path, settings));

        let mut examples: Vec<String> = field
            .examples
            .iter()
            .map(|value| render_value(value, is_path, settings))
            .collect();
        if examples.is_empty()
            && let Some(default) = &default
        {
            examples = vec![default.clone()];
        }

        Self {
            name: field.name.clone(),
            env_name,
            types: field.field_type.labels(),
            default,
            description: field.description.clone(),
            examples,
            aliases: field.aliases.iter().map(|a| a.to_uppercase()).collect(),
            deprecated: field.deprecated,
        }
    }
}

/// Walked settings model: resolved prefix, flat fields, recursive children.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsInfo {
    /// Display name of the model
    pub name: String,

    /// Model documentation
    pub docs: String,

    /// The effective environment-variable prefix for this model's fields
    pub env_prefix: String,

    /// The walked fields of this model
    pub fields: Vec<FieldInfo>,

    /// Nested child models
    pub children: Vec<SettingsInfo>,
}

impl SettingsInfo {
    /// Walk a settings model, resolving environment names against its own
    /// prefix and delimiter.
    pub fn from_model(model: &SettingsModel, settings: &Settings) -> Self {
        Self::walk(model, settings, &model.env_prefix)
    }

    fn walk(model: &SettingsModel, settings: &Settings, prefix: &str) -> Self {
        let mut fields = Vec::new();
        let mut children = Vec::new();

        for field in &model.fields {
            if settings.respect_exclude && field.exclude {
                continue;
            }

            if let Some(nested) = &field.nested {
                // Nested models extend the prefix: APP_ + database + _ => APP_DATABASE_
                let child_prefix =
                    format!("{prefix}{}{}", field.name, model.nested_delimiter).to_uppercase();
                children.push(Self::walk(nested, settings, &child_prefix));
                continue;
            }

            fields.push(FieldInfo::from_field(field, prefix, settings));
        }

        Self {
            name: model.name.clone(),
            docs: model.docs.trim().to_string(),
            env_prefix: prefix.to_uppercase(),
            fields,
            children,
        }
    }
}

/// Render a schema value as the string shown in documentation.
///
/// Structured values keep their JSON form (strings stay quoted), matching
/// what a user would put in an environment variable or config file. Path
/// defaults are shortened first.
fn render_value(value: &Value, is_path: bool, settings: &Settings) -> String {
    if is_path && let Value::String(raw) = value {
        return Value::String(shorten_path(raw, settings)).to_string();
    }
    value.to_string()
}

/// Shorten an absolute path default for display.
///
/// Paths under the project root are rewritten against the configured alias;
/// paths under the home directory are rewritten against `~`. Everything else
/// is left alone.
fn shorten_path(raw: &str, settings: &Settings) -> String {
    let path = Path::new(raw);
    if !path.is_absolute() {
        return raw.to_string();
    }

    if settings.relative_to.replace_abs_paths {
        let root = settings.root_dir();
        if let Ok(rel) = path.strip_prefix(&root) {
            return Path::new(&settings.relative_to.alias)
                .join(rel)
                .display()
                .to_string();
        }
    }

    if let Some(home) = dirs::home_dir()
        && let Ok(rel) = path.strip_prefix(&home)
    {
        return Path::new("~").join(rel).display().to_string();
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDef, FieldType};
    use serde_json::json;

    fn sample_model() -> SettingsModel {
        SettingsModel::new("AppSettings")
            .docs("Application settings.")
            .env_prefix("APP_")
            .field(
                FieldDef::new("host", FieldType::String)
                    .default_value("127.0.0.1")
                    .description("Bind host."),
            )
            .field(FieldDef::new("port", FieldType::Integer).example(8080))
            .field(FieldDef::new("secret", FieldType::Secret).alias("app_token"))
            .field(FieldDef::new("hidden", FieldType::String).exclude())
            .field(FieldDef::model(
                "database",
                SettingsModel::new("DatabaseSettings")
                    .field(FieldDef::new("url", FieldType::String)),
            ))
    }

    #[test]
    fn test_env_name_derivation() {
        let settings = Settings::default();
        let info = SettingsInfo::from_model(&sample_model(), &settings);

        assert_eq!(info.env_prefix, "APP_");
        assert_eq!(info.fields[0].env_name, "APP_HOST");
        assert_eq!(info.fields[1].env_name, "APP_PORT");
        // The first alias overrides the derived name, uppercased
        assert_eq!(info.fields[2].env_name, "APP_TOKEN");
    }

    #[test]
    fn test_nested_prefix_extension() {
        let settings = Settings::default();
        let info = SettingsInfo::from_model(&sample_model(), &settings);

        assert_eq!(info.children.len(), 1);
        let child = &info.children[0];
        assert_eq!(child.name, "DatabaseSettings");
        assert_eq!(child.env_prefix, "APP_DATABASE_");
        assert_eq!(child.fields[0].env_name, "APP_DATABASE_URL");
    }

    #[test]
    fn test_custom_nested_delimiter() {
        let model = SettingsModel::new("Root")
            .env_prefix("CI_")
            .nested_delimiter("__")
            .field(FieldDef::model(
                "mcp",
                SettingsModel::new("McpConfig").field(FieldDef::new("debug", FieldType::Boolean)),
            ));

        let settings = Settings::default();
        let info = SettingsInfo::from_model(&model, &settings);
        assert_eq!(info.children[0].env_prefix, "CI_MCP__");
        assert_eq!(info.children[0].fields[0].env_name, "CI_MCP__DEBUG");
    }

    #[test]
    fn test_required_classification_and_defaults() {
        let settings = Settings::default();
        let info = SettingsInfo::from_model(&sample_model(), &settings);

        // host has a default, port does not
        assert!(!info.fields[0].is_required());
        assert_eq!(info.fields[0].default.as_deref(), Some("\"127.0.0.1\""));
        assert!(info.fields[1].is_required());
        // nested child url is required
        assert!(info.children[0].fields[0].is_required());
    }

    #[test]
    fn test_examples_fall_back_to_default() {
        let settings = Settings::default();
        let info = SettingsInfo::from_model(&sample_model(), &settings);

        // host: no explicit examples, so the default is echoed but not "worth showing"
        assert_eq!(info.fields[0].examples, vec!["\"127.0.0.1\""]);
        assert!(!info.fields[0].has_examples());
        // port: explicit example
        assert_eq!(info.fields[1].examples, vec!["8080"]);
        assert!(info.fields[1].has_examples());
    }

    #[test]
    fn test_exclude_respected() {
        let mut settings = Settings::default();
        let info = SettingsInfo::from_model(&sample_model(), &settings);
        assert!(!info.fields.iter().any(|f| f.name == "hidden"));

        settings.respect_exclude = false;
        let info = SettingsInfo::from_model(&sample_model(), &settings);
        assert!(info.fields.iter().any(|f| f.name == "hidden"));
    }

    #[test]
    fn test_type_label_join() {
        let field = FieldDef::new(
            "level",
            FieldType::Union(vec![FieldType::Integer, FieldType::String]),
        );
        let model = SettingsModel::new("M").field(field);
        let info = SettingsInfo::from_model(&model, &Settings::default());
        assert_eq!(info.fields[0].type_label(), "integer | string");
    }

    #[test]
    fn test_path_default_shortened_to_project_alias() {
        let mut settings = Settings::default();
        settings.project_root = Some(std::path::PathBuf::from("/srv/app"));

        let model = SettingsModel::new("M").field(
            FieldDef::new("cache_dir", FieldType::Path).default_value(json!("/srv/app/.cache")),
        );

        let info = SettingsInfo::from_model(&model, &settings);
        assert_eq!(
            info.fields[0].default.as_deref(),
            Some("\"<project-dir>/.cache\"")
        );
    }

    #[test]
    fn test_relative_path_default_untouched() {
        let model = SettingsModel::new("M")
            .field(FieldDef::new("out", FieldType::Path).default_value(json!("build/out")));
        let info = SettingsInfo::from_model(&model, &Settings::default());
        assert_eq!(info.fields[0].default.as_deref(), Some("\"build/out\""));
    }
}
