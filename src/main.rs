//! CLI entry point for the settings documentation exporter.
//!
//! Provides commands for initializing configuration, generating artifacts,
//! and checking that generated files are up to date.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use confdoc::io::ExitCode;
use confdoc::{ExportError, ExportResult, Exporter, Settings, SettingsModel, generators};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Settings documentation exporter
#[derive(Parser)]
#[command(
    name = "confdoc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Settings documentation exporter",
    long_about = "Render settings-model schemas into Markdown references and .env examples.",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to a custom confdoc.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Write a commented default confdoc.toml")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Generate documentation artifacts
    #[command(
        about = "Render schemas into the configured documentation files",
        after_help = "Examples:\n  confdoc generate\n  confdoc generate schemas/app.toml\n  confdoc generate --generator markdown --generator dotenv"
    )]
    Generate {
        /// Schema files to export (overrides `schemas` from confdoc.toml)
        #[arg(num_args = 0..)]
        schemas: Vec<PathBuf>,

        /// Generator to run; may be given multiple times (default: all)
        #[arg(short, long = "generator")]
        generators: Vec<String>,
    },

    /// Verify documentation is up to date
    #[command(
        about = "Report files that would change, without writing",
        after_help = "Exits with code 3 when any generated file is stale,\nmaking it suitable as a CI step."
    )]
    Check {
        /// Schema files to check (overrides `schemas` from confdoc.toml)
        #[arg(num_args = 0..)]
        schemas: Vec<PathBuf>,

        /// Generator to check; may be given multiple times (default: all)
        #[arg(short, long = "generator")]
        generators: Vec<String>,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from confdoc.toml")]
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let settings = if let Some(config_path) = &cli.config {
        match Settings::load_from(config_path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!(
                    "Configuration error loading from {}: {}",
                    config_path.display(),
                    e
                );
                std::process::exit(ExitCode::ConfigError.into());
            }
        }
    } else {
        Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            eprintln!("Using default configuration.");
            Settings::default()
        })
    };

    let code = match &cli.command {
        Commands::Init { force } => match Settings::init_config_file(*force) {
            Ok(path) => {
                println!("Edit {} to customize your settings.", path.display());
                ExitCode::Success
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::GeneralError
            }
        },

        Commands::Generate {
            schemas,
            generators,
        } => report(run_pipeline(&settings, schemas, generators, true)),

        Commands::Check {
            schemas,
            generators,
        } => match run_pipeline(&settings, schemas, generators, false) {
            Ok(stale) => {
                if stale.is_empty() {
                    println!("All generated files are up to date.");
                } else {
                    println!("Stale files ({}):", stale.len());
                    for path in &stale {
                        println!("- {}", path.display());
                    }
                }
                ExitCode::from_check_result(&stale)
            }
            Err(e) => print_error(&e),
        },

        Commands::Config => match toml::to_string_pretty(&settings) {
            Ok(rendered) => {
                println!("{rendered}");
                ExitCode::Success
            }
            Err(e) => {
                eprintln!("Error serializing configuration: {e}");
                ExitCode::GeneralError
            }
        },
    };

    std::process::exit(code.into());
}

/// Load schemas and run (or check) the configured generators.
fn run_pipeline(
    settings: &Settings,
    schema_args: &[PathBuf],
    generator_names: &[String],
    write: bool,
) -> ExportResult<Vec<PathBuf>> {
    let schema_paths: Vec<PathBuf> = if schema_args.is_empty() {
        let root = settings.root_dir();
        settings.schemas.iter().map(|p| root.join(p)).collect()
    } else {
        schema_args.to_vec()
    };

    if schema_paths.is_empty() {
        return Err(ExportError::NoSchemas);
    }

    let mut models: Vec<SettingsModel> = Vec::new();
    for path in &schema_paths {
        models.extend(confdoc::load_schemas(path)?);
    }

    let selected = generators::select(settings, generator_names)?;
    let exporter = Exporter::with_generators(settings, selected);
    if write {
        exporter.run_all(&models)
    } else {
        exporter.check_all(&models)
    }
}

fn report(result: ExportResult<Vec<PathBuf>>) -> ExitCode {
    match result {
        Ok(updated) => {
            if updated.is_empty() {
                println!("No files generated (everything up to date).");
            } else {
                println!("Generated files ({}):", updated.len());
                for path in &updated {
                    println!("- {}", path.display());
                }
            }
            ExitCode::Success
        }
        Err(e) => print_error(&e),
    }
}

fn print_error(error: &ExportError) -> ExitCode {
    eprintln!("Error: {error}");
    for suggestion in error.recovery_suggestions() {
        eprintln!("  hint: {suggestion}");
    }
    ExitCode::from_error(error)
}
