//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into pieces
    Split(split::SplitArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available split strategies
    Strategies,

    /// List character classes usable as delimiters
    Classes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        match self {
            ListCommands::Formats => list::formats(&mut stdout),
            ListCommands::Strategies => list::strategies(&mut stdout),
            ListCommands::Classes => list::classes(&mut stdout),
        }
    }
}
