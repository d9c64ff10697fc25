//! Settings-model schema definitions.
//!
//! A [`SettingsModel`] describes one configuration struct: its fields, their
//! types and defaults, the environment-variable prefix, and any nested child
//! models. Models can be built in code with the builder methods or loaded
//! from a JSON/TOML schema file with [`load_schemas`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{ExportError, ExportResult};

/// Type descriptor for a settings field.
///
/// Plain scalars are written as bare strings in schema files (`"integer"`),
/// literal choices as `{ literal = [...] }`, and unions as an array of types.
/// Any other string is kept verbatim as a named type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
    Path,
    Secret,
    #[serde(untagged)]
    Literal { literal: Vec<Value> },
    #[serde(untagged)]
    Union(Vec<FieldType>),
    #[serde(untagged)]
    Named(String),
}

impl FieldType {
    /// Human-readable labels for this type.
    ///
    /// Unions flatten into one label per member (`integer | string`); literal
    /// choices render each value in its JSON form (`1 | "fast"`).
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::String | Self::Secret => vec!["string".to_string()],
            Self::Integer => vec!["integer".to_string()],
            Self::Number => vec!["number".to_string()],
            Self::Boolean => vec!["boolean".to_string()],
            Self::Array => vec!["array".to_string()],
            Self::Object => vec!["object".to_string()],
            Self::Null => vec!["null".to_string()],
            Self::Path => vec!["path".to_string()],
            Self::Literal { literal } => literal.iter().map(|v| v.to_string()).collect(),
            Self::Union(types) => {
                let mut labels = Vec::new();
                for label in types.iter().flat_map(|t| t.labels()) {
                    if !labels.contains(&label) {
                        labels.push(label);
                    }
                }
                labels
            }
            Self::Named(name) => vec![name.clone()],
        }
    }

    /// Whether defaults of this type are filesystem paths, making them
    /// subject to path shortening.
    pub fn is_path(&self) -> bool {
        match self {
            Self::Path => true,
            Self::Union(types) => types.iter().any(|t| t.is_path()),
            _ => false,
        }
    }
}

/// One field of a settings model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    /// The field name as written in the model
    pub name: String,

    /// The type descriptor
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: FieldType,

    /// Default value; a field without one is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Example values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,

    /// Environment-variable aliases; the first one overrides the derived name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Mark this field as deprecated
    #[serde(default)]
    pub deprecated: bool,

    /// Omit this field from generated documentation
    #[serde(default)]
    pub exclude: bool,

    /// Nested child model; the walker descends into it with an extended
    /// environment prefix instead of emitting a field row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<Box<SettingsModel>>,
}

fn default_field_type() -> FieldType {
    FieldType::String
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default: None,
            description: None,
            examples: Vec::new(),
            aliases: Vec::new(),
            deprecated: false,
            exclude: false,
            nested: None,
        }
    }

    /// A field holding a nested settings model.
    pub fn model(name: impl Into<String>, nested: SettingsModel) -> Self {
        let mut field = Self::new(name, FieldType::Object);
        field.nested = Some(Box::new(nested));
        field
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn example(mut self, example: impl Into<Value>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    pub fn exclude(mut self) -> Self {
        self.exclude = true;
        self
    }
}

/// A settings model: a named group of fields with an environment prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsModel {
    /// Display name of the model
    pub name: String,

    /// Documentation shown above the field table
    #[serde(default)]
    pub docs: String,

    /// Environment-variable prefix for fields of this model
    #[serde(default)]
    pub env_prefix: String,

    /// Delimiter inserted between a parent field name and nested field names
    #[serde(default = "default_nested_delimiter")]
    pub nested_delimiter: String,

    /// The fields of this model
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

fn default_nested_delimiter() -> String {
    "_".to_string()
}

impl SettingsModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: String::new(),
            env_prefix: String::new(),
            nested_delimiter: default_nested_delimiter(),
            fields: Vec::new(),
        }
    }

    pub fn docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = docs.into();
        self
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn nested_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.nested_delimiter = delimiter.into();
        self
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// On-disk schema file: one or more settings models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(rename = "model", alias = "models", default)]
    pub models: Vec<SettingsModel>,
}

/// Load all settings models from a schema file, dispatching on the extension.
pub fn load_schemas(path: &Path) -> ExportResult<Vec<SettingsModel>> {
    let content = std::fs::read_to_string(path).map_err(|source| ExportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let schema: SchemaFile = match extension.as_str() {
        "json" => serde_json::from_str(&content).map_err(|e| ExportError::SchemaParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?,
        "toml" => toml::from_str(&content).map_err(|e| ExportError::SchemaParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?,
        _ => {
            return Err(ExportError::UnsupportedSchemaFormat {
                path: path.to_path_buf(),
                extension,
            });
        }
    };

    Ok(schema.models)
}
