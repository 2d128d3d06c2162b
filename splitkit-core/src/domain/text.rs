//! Character view of a string for splitting text with `char` delimiters

use std::ops::Range;

use super::segment::Span;

/// Decoded characters of a string with the byte offset of each one
///
/// Splitting runs over the character slice; the offset table maps the
/// resulting character spans back to byte ranges of the original string.
#[derive(Debug, Clone)]
pub struct TextIndex {
    chars: Vec<char>,
    /// Byte offset of every char, plus the total length as a sentinel
    byte_offsets: Vec<usize>,
}

impl TextIndex {
    /// Build the index for `text`
    pub fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);

        for (offset, ch) in text.char_indices() {
            chars.push(ch);
            byte_offsets.push(offset);
        }
        byte_offsets.push(text.len());

        Self {
            chars,
            byte_offsets,
        }
    }

    /// The decoded characters
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters
    pub fn char_len(&self) -> usize {
        self.chars.len()
    }

    /// Byte offset of the character at `char_offset`
    ///
    /// `char_offset == char_len()` yields the byte length of the text.
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        self.byte_offsets[char_offset]
    }

    /// Map a character span to the byte range it covers
    pub fn byte_range(&self, span: &Span) -> Range<usize> {
        self.byte_offset(span.start)..self.byte_offset(span.end)
    }
}
