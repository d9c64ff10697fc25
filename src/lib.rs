//! Settings-model documentation exporter.
//!
//! Walks a nested settings-model schema and renders its metadata into
//! human-readable artifacts: a Markdown reference, a `.env.example`-style
//! dotenv file, and a plain-text reference. Rendered content can overwrite
//! a target file or be injected between marker comments in an existing one.

pub mod config;
pub mod error;
pub mod exporter;
pub mod generators;
pub mod inject;
pub mod io;
pub mod model;
pub mod walker;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{ExportError, ExportResult};
pub use exporter::Exporter;
pub use generators::Generator;
pub use inject::{InjectError, Region};
pub use model::{FieldDef, FieldType, SchemaFile, SettingsModel, load_schemas};
pub use walker::{FieldInfo, SettingsInfo};
