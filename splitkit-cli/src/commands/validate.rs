//! Validate command implementation

use anyhow::Result;
use clap::Args;
use splitkit_api::Strategy;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Strategy: {}", describe(&config.split.strategy));
                println!("  Output format: {}", config.output.default_format);
                println!(
                    "  Parallel: {}",
                    if config.performance.parallel { "yes" } else { "no" }
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

/// One-line summary of a strategy
fn describe(strategy: &Strategy) -> String {
    match strategy {
        Strategy::Delimited {
            delimiter,
            disposition,
            runs,
            ..
        } => format!(
            "delimited ({:?}, delimiters {}, runs {})",
            delimiter,
            disposition.as_str(),
            runs.as_str()
        ),
        Strategy::Every { size } => format!("every {size}"),
        Strategy::Sizes { sizes } => format!("sizes {sizes:?}"),
        Strategy::Places { sizes, blanks } => format!("places {sizes:?} (blanks: {blanks})"),
        Strategy::PowersOfTwo => "powers_of_two".to_string(),
        Strategy::Windows { size, step } => format!("windows of {size}, step {step}"),
    }
}
