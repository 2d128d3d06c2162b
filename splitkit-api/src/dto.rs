//! Data Transfer Objects for API

use crate::error::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for splitting
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Input::Bytes(bytes.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Short description for logs and error messages
    pub fn describe(&self) -> String {
        match self {
            Input::Text(text) => format!("text ({} bytes)", text.len()),
            Input::File(path) => path.display().to_string(),
            Input::Bytes(bytes) => format!("bytes ({} bytes)", bytes.len()),
            Input::Reader(_) => "reader".to_string(),
        }
    }

    /// Read the whole input as UTF-8 text
    ///
    /// Invalid UTF-8 from a file, byte buffer or reader is an error; no
    /// lossy replacement is done.
    pub fn read_text(self) -> Result<String> {
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::File(path) => fs::read(&path)?,
            Input::Bytes(bytes) => bytes,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                buffer
            }
        };
        Ok(String::from_utf8(bytes)?)
    }
}

/// One output piece with its position in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    /// Piece text
    pub text: String,
    /// Byte offset of the first byte in the source text
    pub byte_offset: usize,
    /// Length in bytes
    pub byte_len: usize,
    /// Character offset of the first character in the source text
    pub char_offset: usize,
    /// Length in characters
    pub char_len: usize,
}

impl Piece {
    /// Check if the piece has no text
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total bytes in the source text
    pub total_bytes: usize,
    /// Total characters in the source text
    pub total_chars: usize,
    /// Number of pieces produced
    pub piece_count: usize,
    /// Strategy used
    pub strategy: String,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in MB/s
    pub throughput_mbps: f64,
}

impl Metadata {
    /// Create new metadata
    pub fn new(
        total_bytes: usize,
        total_chars: usize,
        piece_count: usize,
        strategy: impl Into<String>,
        elapsed: std::time::Duration,
    ) -> Self {
        let secs = elapsed.as_secs_f64();
        let throughput_mbps = if secs > 0.0 {
            (total_bytes as f64 / 1_048_576.0) / secs
        } else {
            0.0
        };

        Self {
            total_bytes,
            total_chars,
            piece_count,
            strategy: strategy.into(),
            processing_time_ms: elapsed.as_millis() as u64,
            throughput_mbps,
        }
    }
}

/// Complete output with pieces and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Pieces in source order
    pub pieces: Vec<Piece>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Piece texts in order
    pub fn texts(&self) -> Vec<&str> {
        self.pieces.iter().map(|piece| piece.text.as_str()).collect()
    }

    /// Serialize to pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_read_text_variants() {
        assert_eq!(Input::from_text("abc").read_text().unwrap(), "abc");
        assert_eq!(Input::from_bytes(b"abc".to_vec()).read_text().unwrap(), "abc");
        assert_eq!(
            Input::from_reader(std::io::Cursor::new("日本語"))
                .read_text()
                .unwrap(),
            "日本語"
        );
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let err = Input::from_bytes(vec![0xff, 0xfe]).read_text().unwrap_err();
        assert!(matches!(err, ApiError::Utf8(_)));

        let err = Input::from_reader(std::io::Cursor::new(vec![b'a', 0xc3]))
            .read_text()
            .unwrap_err();
        assert!(matches!(err, ApiError::Utf8(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Input::from_file("/nonexistent/splitkit/input.txt")
            .read_text()
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }

    #[test]
    fn test_metadata_throughput() {
        let metadata = Metadata::new(1_048_576, 1_048_576, 3, "every", std::time::Duration::from_secs(2));
        assert_eq!(metadata.processing_time_ms, 2000);
        assert!((metadata.throughput_mbps - 0.5).abs() < f64::EPSILON);

        let instant = Metadata::new(10, 10, 1, "every", std::time::Duration::ZERO);
        assert_eq!(instant.throughput_mbps, 0.0);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Input::from_text("ab").describe(), "text (2 bytes)");
        assert_eq!(Input::from_file("a.txt").describe(), "a.txt");
    }
}
