//! Exporter: runs the configured generators over walked settings models.
//!
//! Files are only written when their rendered content actually differs from
//! what is on disk, so repeated runs are no-ops and `check` can report stale
//! files without touching anything.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Settings;
use crate::error::{ExportError, ExportResult};
use crate::generators::{self, Generator};
use crate::inject::{InjectError, Region};
use crate::model::SettingsModel;
use crate::walker::SettingsInfo;

pub struct Exporter<'a> {
    settings: &'a Settings,
    generators: Vec<Box<dyn Generator + 'a>>,
}

impl<'a> Exporter<'a> {
    /// An exporter running all builtin generators.
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            generators: generators::builtin(settings),
        }
    }

    /// An exporter running an explicit generator list.
    pub fn with_generators(
        settings: &'a Settings,
        generators: Vec<Box<dyn Generator + 'a>>,
    ) -> Self {
        Self {
            settings,
            generators,
        }
    }

    /// Run all generators, writing changed files. Returns the updated paths.
    pub fn run_all(&self, models: &[SettingsModel]) -> ExportResult<Vec<PathBuf>> {
        self.apply(models, true)
    }

    /// Dry run: returns the paths whose content would change.
    pub fn check_all(&self, models: &[SettingsModel]) -> ExportResult<Vec<PathBuf>> {
        self.apply(models, false)
    }

    fn apply(&self, models: &[SettingsModel], write: bool) -> ExportResult<Vec<PathBuf>> {
        let infos: Vec<SettingsInfo> = models
            .iter()
            .map(|model| SettingsInfo::from_model(model, self.settings))
            .collect();

        let mut updated = Vec::new();
        for generator in &self.generators {
            if !generator.enabled() {
                debug!(generator = generator.name(), "generator disabled, skipping");
                continue;
            }

            let rendered = generator.generate(&infos);
            for path in generator.file_paths() {
                let existing = read_existing(&path)?;

                let new_content = match generator.region() {
                    Some(region_name) => {
                        // Injection needs a file to inject into
                        let original = existing.clone().ok_or_else(|| ExportError::FileRead {
                            path: path.clone(),
                            source: std::io::Error::from(std::io::ErrorKind::NotFound),
                        })?;
                        let region = Region::new(region_name);
                        region.inject(&original, &rendered).map_err(|e| {
                            region_error(e, &path, &region)
                        })?
                    }
                    None => rendered.clone(),
                };

                if existing.as_deref() == Some(new_content.as_str()) {
                    debug!(path = %path.display(), "up to date");
                    continue;
                }

                if write {
                    if let Some(parent) = path.parent()
                        && !parent.as_os_str().is_empty()
                    {
                        fs::create_dir_all(parent).map_err(|source| ExportError::FileWrite {
                            path: path.clone(),
                            source,
                        })?;
                    }
                    fs::write(&path, &new_content).map_err(|source| ExportError::FileWrite {
                        path: path.clone(),
                        source,
                    })?;
                    debug!(path = %path.display(), generator = generator.name(), "wrote file");
                }

                updated.push(path);
            }
        }

        Ok(updated)
    }
}

fn read_existing(path: &Path) -> ExportResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ExportError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn region_error(error: InjectError, path: &Path, region: &Region) -> ExportError {
    match error {
        InjectError::BeginMissing => ExportError::RegionBeginMissing {
            path: path.to_path_buf(),
            marker: region.begin_marker(),
        },
        InjectError::EndMissing => ExportError::RegionEndMissing {
            path: path.to_path_buf(),
            marker: region.end_marker(),
        },
        InjectError::MarkersReversed => ExportError::RegionMarkersReversed {
            path: path.to_path_buf(),
            marker: region.end_marker(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDef, FieldType};
    use tempfile::TempDir;

    fn sample_models() -> Vec<SettingsModel> {
        vec![
            SettingsModel::new("AppSettings")
                .env_prefix("APP_")
                .field(FieldDef::new("host", FieldType::String).default_value("127.0.0.1"))
                .field(FieldDef::new("port", FieldType::Integer)),
        ]
    }

    fn settings_in(dir: &TempDir) -> Settings {
        let mut settings = Settings::default();
        settings.project_root = Some(dir.path().to_path_buf());
        settings
    }

    #[test]
    fn test_run_all_writes_enabled_targets() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);

        let exporter = Exporter::new(&settings);
        let updated = exporter.run_all(&sample_models()).unwrap();

        // markdown + dotenv enabled by default, simple disabled
        assert_eq!(updated.len(), 2);
        assert!(dir.path().join("Configuration.md").is_file());
        assert!(dir.path().join(".env.example").is_file());
        assert!(!dir.path().join("Configuration.txt").exists());
    }

    #[test]
    fn test_second_run_is_noop() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);

        let exporter = Exporter::new(&settings);
        exporter.run_all(&sample_models()).unwrap();
        let updated = exporter.run_all(&sample_models()).unwrap();
        assert!(updated.is_empty());
    }

    #[test]
    fn test_check_reports_stale_without_writing() {
        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir);

        let exporter = Exporter::new(&settings);
        let stale = exporter.check_all(&sample_models()).unwrap();
        assert_eq!(stale.len(), 2);
        assert!(!dir.path().join("Configuration.md").exists());

        exporter.run_all(&sample_models()).unwrap();
        let stale = exporter.check_all(&sample_models()).unwrap();
        assert!(stale.is_empty());
    }

    #[test]
    fn test_region_injection_preserves_surrounding_content() {
        let dir = TempDir::new().unwrap();
        let mut settings = settings_in(&dir);
        settings.markdown.path = PathBuf::from("README.md");
        settings.markdown.region = Some("configuration".to_string());
        settings.dotenv.enabled = false;

        let readme = "\
# My Project

Intro.

<!-- configuration:begin -->
<!-- configuration:end -->

Footer.
";
        fs::write(dir.path().join("README.md"), readme).unwrap();

        let exporter = Exporter::new(&settings);
        let updated = exporter.run_all(&sample_models()).unwrap();
        assert_eq!(updated, vec![dir.path().join("README.md")]);

        let content = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(content.starts_with("# My Project\n\nIntro.\n\n<!-- configuration:begin -->\n"));
        assert!(content.ends_with("<!-- configuration:end -->\n\nFooter.\n"));
        assert!(content.contains("| `APP_HOST`"));

        // Idempotent: a second run changes nothing
        let updated = exporter.run_all(&sample_models()).unwrap();
        assert!(updated.is_empty());
    }

    #[test]
    fn test_region_injection_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let mut settings = settings_in(&dir);
        settings.markdown.region = Some("configuration".to_string());
        settings.dotenv.enabled = false;

        let exporter = Exporter::new(&settings);
        let err = exporter.run_all(&sample_models()).unwrap_err();
        assert!(matches!(err, ExportError::FileRead { .. }));
    }

    #[test]
    fn test_region_injection_missing_markers_fails() {
        let dir = TempDir::new().unwrap();
        let mut settings = settings_in(&dir);
        settings.markdown.path = PathBuf::from("README.md");
        settings.markdown.region = Some("configuration".to_string());
        settings.dotenv.enabled = false;

        fs::write(dir.path().join("README.md"), "no markers\n").unwrap();

        let exporter = Exporter::new(&settings);
        let err = exporter.run_all(&sample_models()).unwrap_err();
        assert!(matches!(err, ExportError::RegionBeginMissing { .. }));
    }
}
