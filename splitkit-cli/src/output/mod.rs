//! Output formatting module

use anyhow::Result;
use splitkit_api::Output;
use std::io::Write;

use crate::config::OutputConfig;
use crate::error::CliError;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the pieces split from one input
    fn format_output(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one piece per line
    Text,
    /// JSON array of inputs with positioned pieces
    Json,
    /// Markdown numbered list per input
    Markdown,
}

impl OutputFormat {
    /// Every format, in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one piece per line, control characters escaped",
            OutputFormat::Json => "pieces with byte and character offsets",
            OutputFormat::Markdown => "numbered list of pieces per input",
        }
    }

    /// Create the formatter for this format
    pub fn formatter<'a, W: Write + 'a>(
        &self,
        writer: W,
        options: &OutputConfig,
    ) -> Box<dyn OutputFormatter + 'a> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .include_metadata(options.include_metadata)
                    .pretty(options.pretty_json),
            ),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| CliError::ConfigError(format!("unknown output format: {s}")))
    }
}

/// Render control characters as escapes so a piece stays on one line
///
/// Backslashes are doubled, so a literal `\n` in the text stays distinct
/// from an escaped newline.
pub fn escape_control(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.extend(c.escape_unicode()),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_escape_control() {
        assert_eq!(escape_control("a\tb\r\n"), "a\\tb\\r\\n");
        assert_eq!(escape_control("日本"), "日本");
        assert_eq!(escape_control("\u{7}"), "\\u{7}");
    }

    #[test]
    fn test_escape_control_backslash() {
        assert_eq!(escape_control("a\\nb"), "a\\\\nb");
        assert_eq!(escape_control("a\nb"), "a\\nb");
        assert_ne!(escape_control("a\\nb\nc"), escape_control("a\nb\nc"));
    }
}
