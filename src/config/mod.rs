//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{path::PathBuf, str::FromStr, time::Duration};

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "capitolato";
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_PRINT_LOAD_DELAY_MS: u64 = 500;
const DEFAULT_PRINT_DISMISS_DELAY_MS: u64 = 1000;

/// Command-line arguments for the capitolato binary.
#[derive(Debug, Parser)]
#[command(
    name = "capitolato",
    version,
    about = "Project requirements report generator"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "CAPITOLATO_CONFIG_FILE",
        value_name = "PATH"
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render the report markup to stdout.
    Render(RenderArgs),
    /// Render the report and save it as an HTML file.
    Export(ExportArgs),
    /// Render the report and hand it to the host's print facility.
    Print(PrintArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub overrides: CommonOverrides,

    /// JSON intake file holding the client and requirements records.
    #[arg(value_name = "INTAKE", value_hint = ValueHint::FilePath)]
    pub intake: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub overrides: CommonOverrides,

    /// Override the directory the report file is written into.
    #[arg(long = "export-output-dir", value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// JSON intake file holding the client and requirements records.
    #[arg(value_name = "INTAKE", value_hint = ValueHint::FilePath)]
    pub intake: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct PrintArgs {
    #[command(flatten)]
    pub overrides: CommonOverrides,

    /// Override the viewer command used to open the rendered document.
    #[arg(long = "print-viewer-command", value_name = "PATH")]
    pub viewer_command: Option<PathBuf>,

    /// Override the fallback delay before printing, in milliseconds.
    #[arg(long = "print-load-delay-ms", value_name = "MILLIS")]
    pub load_delay_ms: Option<u64>,

    /// Override the fallback delay before the surface is closed, in milliseconds.
    #[arg(long = "print-dismiss-delay-ms", value_name = "MILLIS")]
    pub dismiss_delay_ms: Option<u64>,

    /// JSON intake file holding the client and requirements records.
    #[arg(value_name = "INTAKE", value_hint = ValueHint::FilePath)]
    pub intake: PathBuf,
}

#[derive(Debug, Args, Default, Clone)]
pub struct CommonOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub load_delay: Duration,
    pub dismiss_delay: Duration,
    pub viewer_command: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("CAPITOLATO").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match &cli.command {
        Command::Render(args) => raw.apply_common_overrides(&args.overrides),
        Command::Export(args) => raw.apply_export_overrides(args),
        Command::Print(args) => raw.apply_print_overrides(args),
    }

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    export: RawExportSettings,
}

impl RawSettings {
    fn apply_common_overrides(&mut self, overrides: &CommonOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }

    fn apply_export_overrides(&mut self, args: &ExportArgs) {
        self.apply_common_overrides(&args.overrides);
        if let Some(directory) = args.output_dir.as_ref() {
            self.export.output_dir = Some(directory.clone());
        }
    }

    fn apply_print_overrides(&mut self, args: &PrintArgs) {
        self.apply_common_overrides(&args.overrides);
        if let Some(command) = args.viewer_command.as_ref() {
            self.export.viewer_command = Some(command.clone());
        }
        if let Some(millis) = args.load_delay_ms {
            self.export.load_delay_ms = Some(millis);
        }
        if let Some(millis) = args.dismiss_delay_ms {
            self.export.dismiss_delay_ms = Some(millis);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings { logging, export } = raw;

        let logging = build_logging_settings(logging)?;
        let export = build_export_settings(export)?;

        Ok(Self { logging, export })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_export_settings(export: RawExportSettings) -> Result<ExportSettings, LoadError> {
    let output_dir = export
        .output_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    if output_dir.as_os_str().is_empty() {
        return Err(LoadError::invalid(
            "export.output_dir",
            "path must not be empty",
        ));
    }

    let load_delay_ms = export.load_delay_ms.unwrap_or(DEFAULT_PRINT_LOAD_DELAY_MS);
    if load_delay_ms == 0 {
        return Err(LoadError::invalid(
            "export.load_delay_ms",
            "must be greater than zero",
        ));
    }

    let dismiss_delay_ms = export
        .dismiss_delay_ms
        .unwrap_or(DEFAULT_PRINT_DISMISS_DELAY_MS);
    if dismiss_delay_ms == 0 {
        return Err(LoadError::invalid(
            "export.dismiss_delay_ms",
            "must be greater than zero",
        ));
    }

    let viewer_command = export.viewer_command.and_then(|path| {
        (!path.as_os_str().is_empty()).then_some(path)
    });

    Ok(ExportSettings {
        output_dir,
        load_delay: Duration::from_millis(load_delay_ms),
        dismiss_delay: Duration::from_millis(dismiss_delay_ms),
        viewer_command,
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawExportSettings {
    output_dir: Option<PathBuf>,
    load_delay_ms: Option<u64>,
    dismiss_delay_ms: Option<u64>,
    viewer_command: Option<PathBuf>,
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}
