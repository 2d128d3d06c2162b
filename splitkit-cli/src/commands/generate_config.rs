//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Starting points for a generated configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Template {
    /// Whitespace separated words
    Words,
    /// Newline terminated lines
    Lines,
    /// Comma separated fields
    Fields,
    /// Fixed-size pieces
    Chunks,
}

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Which split to start from
    #[arg(short, long, value_enum, default_value = "fields")]
    pub template: Template,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Template: {:?}", self.template);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   splitkit validate -c {}", self.output.display());
        println!("3. Use it for splitting:");
        println!(
            "   splitkit split -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let strategy = match self.template {
            Template::Words => {
                r#"type = "delimited"
disposition = "drop"
runs = "condense"
leading_blank = "drop_blank"
trailing_blank = "drop_blank"

[split.strategy.delimiter]
type = "class"
class = "whitespace""#
            }
            Template::Lines => {
                r#"type = "delimited"
disposition = "drop"
runs = "keep_blank_fields"
leading_blank = "keep_blank"
trailing_blank = "drop_blank"

[split.strategy.delimiter]
type = "one_of"
chars = "\n""#
            }
            Template::Fields => {
                r#"type = "delimited"
disposition = "drop"
runs = "keep_blank_fields"
leading_blank = "keep_blank"
trailing_blank = "keep_blank"

[split.strategy.delimiter]
type = "one_of"
chars = ",""#
            }
            Template::Chunks => {
                r#"type = "every"
size = 80"#
            }
        };

        format!(
            r#"# splitkit configuration

# How the text is cut.
#
# type: delimited | every | sizes | places | powers_of_two | windows
#
# delimited:
#   disposition    = drop | keep | keep_with_following | keep_with_preceding
#   runs           = keep_blank_fields | condense | drop_blank_fields
#   leading_blank  = keep_blank | drop_blank
#   trailing_blank = keep_blank | drop_blank
#   [split.strategy.delimiter]
#     type = never | one_of (chars) | on (text) | class (class)
#     class = whitespace | newline | punctuation | numeric | alphabetic
#             | alphanumeric | control
#
# every:   size = N
# sizes:   sizes = [N, ...]            complete pieces only
# places:  sizes = [N, ...], blanks    short tail kept
# windows: size = N, step = N
[split.strategy]
{strategy}

[output]
# text | json | markdown
default_format = "text"
# Add split statistics to JSON output
include_metadata = false
pretty_json = true

[performance]
# Split several inputs at once
parallel = false
# 0 = one thread per CPU
worker_threads = 0
"#
        )
    }
}
