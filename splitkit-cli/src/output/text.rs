//! Plain text output formatter

use super::{escape_control, OutputFormatter};
use anyhow::Result;
use splitkit_api::Output;
use std::io::Write;

/// Plain text formatter - outputs one piece per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_output(&mut self, _source: &str, output: &Output) -> Result<()> {
        for piece in &output.pieces {
            writeln!(self.writer, "{}", escape_control(&piece.text))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitkit_api::{split_text, Config};

    #[test]
    fn test_one_line_per_piece() {
        let output = split_text("a\nb,,c", Config::fields(',')).unwrap();

        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter.format_output("test", &output).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "a\\nb\n\nc\n");
    }
}
