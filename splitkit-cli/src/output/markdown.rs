//! Markdown output formatter

use super::{escape_control, OutputFormatter};
use anyhow::Result;
use splitkit_api::Output;
use std::io::Write;

/// Markdown formatter - outputs each input as a heading and numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    piece_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            piece_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_output(&mut self, source: &str, output: &Output) -> Result<()> {
        writeln!(self.writer, "## {}", source)?;
        writeln!(self.writer)?;
        for (i, piece) in output.pieces.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, code_span(&escape_control(&piece.text)))?;
        }
        writeln!(self.writer)?;

        self.piece_count += output.pieces.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total pieces: {}*", self.piece_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Inline code span whose fence is longer than any backtick run in `text`
fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);

    // One space on each side is stripped again by the renderer
    let padded = text.starts_with(['`', ' ']) || text.ends_with(['`', ' ']);
    if padded {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}
