//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use splitkit_api::Config;
use std::path::Path;

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Split configuration
    #[serde(default)]
    pub split: Config,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for invalid settings
    pub fn validate(&self) -> Result<()> {
        self.split.validate()?;

        if !["text", "json", "markdown"].contains(&self.output.default_format.as_str()) {
            return Err(CliError::ConfigError(format!(
                "unknown output format: {}",
                self.output.default_format
            ))
            .into());
        }
        Ok(())
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Include metadata in output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Split multiple inputs in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitkit_api::{CharClass, DelimiterSpec, RunPolicy, Strategy};

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output.default_format, "text");
        assert!(!config.performance.parallel);
    }

    #[test]
    fn test_delimited_section() {
        let config = CliConfig::from_toml(
            r#"
[split.strategy]
type = "delimited"
runs = "condense"

[split.strategy.delimiter]
type = "class"
class = "whitespace"
"#,
        )
        .unwrap();

        let Strategy::Delimited {
            delimiter, runs, ..
        } = config.split.strategy
        else {
            panic!("expected delimited strategy");
        };
        assert_eq!(
            delimiter,
            DelimiterSpec::Class {
                class: CharClass::Whitespace
            }
        );
        assert_eq!(runs, RunPolicy::Condense);
    }

    #[test]
    fn test_chunking_section() {
        let config = CliConfig::from_toml(
            r#"
[split.strategy]
type = "windows"
size = 4
step = 2

[performance]
parallel = true
worker_threads = 2
"#,
        )
        .unwrap();

        assert_eq!(config.split.strategy, Strategy::Windows { size: 4, step: 2 });
        assert_eq!(config.performance.worker_threads, 2);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = CliConfig::from_toml("[split.strategy]\ntype = \"every\"\nsize = 0\n")
            .unwrap_err();
        assert!(err.to_string().contains("greater than 0"));

        assert!(CliConfig::from_toml("[output]\ndefault_format = \"yaml\"\n").is_err());
        assert!(CliConfig::from_toml("[split.strategy]\ntype = \"nope\"\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/splitkit.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
