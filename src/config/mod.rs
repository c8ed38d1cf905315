#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "diabetes-check")]
#[command(about = "Predict diabetes risk from eight clinical measurements")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model artifact to load; overrides the configuration file
    #[arg(short, long, global = true)]
    pub model: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format: compact or json
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fill in the form and submit it for a prediction
    Predict(cli::PredictArgs),
    /// Screen every row of a CSV file
    Batch(cli::BatchArgs),
    /// Show background information about diabetes and the input fields
    About,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file when one was given and applies command line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(model) = &self.model {
            config.model.path = model.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
            validation::validate_file_extension("config", path, &["toml"])?;
        }
        if let Some(path) = &self.model {
            validation::validate_path("model", path)?;
        }
        if let Some(format) = &self.log_format {
            validation::validate_one_of("log_format", format, &["compact", "json"])?;
        }
        if let Command::Batch(args) = &self.command {
            validation::validate_path("input", &args.input)?;
            validation::validate_file_extension("input", &args.input, &["csv"])?;
        }
        Ok(())
    }
}
