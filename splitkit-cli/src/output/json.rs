//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use splitkit_api::{Metadata, Output, Piece};
use std::io::Write;

/// JSON formatter - outputs one object per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sources: Vec<SourceData>,
    include_metadata: bool,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct SourceData {
    /// Input name
    pub source: String,
    /// Pieces with offsets
    pub pieces: Vec<Piece>,
    /// Split statistics, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sources: Vec::new(),
            include_metadata: false,
            pretty: true,
        }
    }

    /// Include split statistics for each input
    pub fn include_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Pretty print the array
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_output(&mut self, source: &str, output: &Output) -> Result<()> {
        self.sources.push(SourceData {
            source: source.to_string(),
            pieces: output.pieces.clone(),
            metadata: self.include_metadata.then(|| output.metadata.clone()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sources)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sources)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
