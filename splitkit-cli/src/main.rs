//! splitkit command-line entry point

use clap::Parser;
use splitkit_cli::commands::Commands;

/// Split text by delimiters or by size
#[derive(Debug, Parser)]
#[command(name = "splitkit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
