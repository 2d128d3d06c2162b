//! Text splitting API
//!
//! This crate applies `splitkit-core` to UTF-8 text. A [`Config`] describes
//! the split, a [`TextSplitter`] runs it over any [`Input`], and every piece
//! of the [`Output`] carries both byte and character offsets.
//!
//! ```rust
//! use splitkit_api::{Config, Input, TextSplitter};
//!
//! let splitter = TextSplitter::with_config(Config::fields(',')).unwrap();
//! let output = splitter.process(Input::from_text("a,,é")).unwrap();
//!
//! assert_eq!(output.texts(), vec!["a", "", "é"]);
//! assert_eq!(output.pieces[2].byte_offset, 3);
//! assert_eq!(output.pieces[2].byte_len, 2);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::ops::Range;
use std::path::Path;
use std::time::Instant;

use splitkit_core::application::chunking::{
    divvy_spans, every_spans, places_blanks_spans, places_spans, powers_of_two, sizes_spans,
};
use splitkit_core::{Span, SplitPolicy, Splitter, TextIndex};

// Re-export key types
pub use config::{CharClass, Config, ConfigBuilder, DelimiterSpec, Strategy};
pub use dto::{Input, Metadata, Output, Piece};
pub use error::{ApiError, Result};
pub use splitkit_core::{BlankPolicy, DelimiterDisposition, RunPolicy};

/// Main entry point for splitting text
///
/// Holds a validated configuration and, for delimited strategies, the core
/// splitter built from it. A `TextSplitter` is immutable and can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    config: Config,
    splitter: Option<Splitter<char>>,
}

impl TextSplitter {
    /// Create a splitter with the default configuration, which never splits
    pub fn new() -> Self {
        Self::from_validated(Config::default())
    }

    /// Create a splitter from a configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        log::trace!("created text splitter: {:?}", config.strategy);
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: Config) -> Self {
        let splitter = match &config.strategy {
            Strategy::Delimited {
                delimiter,
                disposition,
                runs,
                leading_blank,
                trailing_blank,
            } => Some(Splitter::new(delimiter.to_delimiter()).with_policy(SplitPolicy {
                disposition: *disposition,
                runs: *runs,
                leading_blank: *leading_blank,
                trailing_blank: *trailing_blank,
            })),
            _ => None,
        };

        Self { config, splitter }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Split input and return positioned pieces
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let source = input.describe();
        let text = input.read_text()?;

        let index = TextIndex::new(&text);
        let pieces: Vec<Piece> = self
            .spans(&index)
            .into_iter()
            .map(|span| {
                let bytes = index.byte_range(&span);
                Piece {
                    text: text[bytes.clone()].to_string(),
                    byte_offset: bytes.start,
                    byte_len: bytes.len(),
                    char_offset: span.start,
                    char_len: span.len(),
                }
            })
            .collect();

        let metadata = Metadata::new(
            text.len(),
            index.char_len(),
            pieces.len(),
            self.config.strategy.name(),
            start.elapsed(),
        );
        log::debug!(
            "split {} with {} strategy: {} chars into {} pieces",
            source,
            metadata.strategy,
            metadata.total_chars,
            metadata.piece_count
        );

        Ok(Output { pieces, metadata })
    }

    /// Split text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Split borrowed text without building an [`Output`]
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split_ranges(text)
            .into_iter()
            .map(|range| &text[range])
            .collect()
    }

    /// Byte range of every piece of `text`
    pub fn split_ranges(&self, text: &str) -> Vec<Range<usize>> {
        let index = TextIndex::new(text);
        self.spans(&index)
            .iter()
            .map(|span| index.byte_range(span))
            .collect()
    }

    /// Character spans of every piece
    fn spans(&self, index: &TextIndex) -> Vec<Span> {
        let len = index.char_len();

        match (&self.config.strategy, &self.splitter) {
            (Strategy::Delimited { .. }, Some(splitter)) => splitter.split_index(index),
            (Strategy::Delimited { .. }, None) => vec![0..len],
            (Strategy::Every { size }, _) => every_spans(*size, len),
            (Strategy::Sizes { sizes }, _) => sizes_spans(sizes.iter().copied(), len),
            (Strategy::Places { sizes, blanks: false }, _) => {
                places_spans(sizes.iter().copied(), len)
            }
            (Strategy::Places { sizes, blanks: true }, _) => {
                places_blanks_spans(sizes.iter().copied(), len)
            }
            (Strategy::PowersOfTwo, _) => sizes_spans(powers_of_two(), len),
            (Strategy::Windows { size, step }, _) => divvy_spans(*size, *step, len),
        }
    }
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Split text with a configuration
pub fn split_text(text: &str, config: Config) -> Result<Output> {
    TextSplitter::with_config(config)?.process_text(text)
}

/// Split a file with a configuration
pub fn split_file<P: AsRef<Path>>(path: P, config: Config) -> Result<Output> {
    TextSplitter::with_config(config)?.process(Input::from_file(path.as_ref()))
}

/// Split text into words separated by whitespace
pub fn words(text: &str) -> Vec<&str> {
    TextSplitter::from_validated(Config::words()).split(text)
}

/// Split text into lines
pub fn lines(text: &str) -> Vec<&str> {
    TextSplitter::from_validated(Config::lines()).split(text)
}
