//! Tagged segments and the tagging transform
//!
//! Tagging turns a flat sequence into an ordered list of chunk and delimiter
//! segments. The list is lossless: concatenating the contents of every
//! segment in order gives back the input.

use std::ops::Range;

use super::delimiter::Delimiter;

/// Half-open index range into the input sequence
pub type Span = Range<usize>;

/// A contiguous run of input tagged as chunk or delimiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<C> {
    /// Elements not matched by the delimiter
    Chunk(C),
    /// Elements matched by the delimiter
    Delim(C),
}

impl<C> Segment<C> {
    /// Check if this is a chunk segment
    pub fn is_chunk(&self) -> bool {
        matches!(self, Segment::Chunk(_))
    }

    /// Check if this is a delimiter segment
    pub fn is_delim(&self) -> bool {
        matches!(self, Segment::Delim(_))
    }

    /// Borrow the wrapped content
    pub fn content(&self) -> &C {
        match self {
            Segment::Chunk(content) | Segment::Delim(content) => content,
        }
    }

    /// Discard the tag and return the wrapped content
    pub fn into_content(self) -> C {
        match self {
            Segment::Chunk(content) | Segment::Delim(content) => content,
        }
    }

    /// Transform the content, keeping the tag
    pub fn map<D, F: FnOnce(C) -> D>(self, f: F) -> Segment<D> {
        match self {
            Segment::Chunk(content) => Segment::Chunk(f(content)),
            Segment::Delim(content) => Segment::Delim(f(content)),
        }
    }
}

impl Segment<Span> {
    /// A chunk segment wrapping zero elements at `at`
    pub(crate) fn blank(at: usize) -> Self {
        Segment::Chunk(at..at)
    }

    /// Check if this is a chunk wrapping zero elements
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, Segment::Chunk(span) if span.is_empty())
    }

    pub(crate) fn start(&self) -> usize {
        self.content().start
    }

    pub(crate) fn end(&self) -> usize {
        self.content().end
    }
}

/// Tag `input` into chunk and delimiter segments
///
/// Segments borrow from `input`. See [`tag_spans`] for the index form.
pub fn tag<'a, T: PartialEq>(delimiter: &Delimiter<T>, input: &'a [T]) -> Vec<Segment<&'a [T]>> {
    tag_spans(delimiter, input)
        .into_iter()
        .map(|segment| segment.map(|span| &input[span]))
        .collect()
}

/// Tag `input` into chunk and delimiter segments expressed as spans
///
/// Scans left to right. A match emits a delimiter segment and scanning
/// resumes after it; otherwise the current element joins the open chunk.
/// A zero-length match (empty sublist) is followed by a one-element chunk
/// so the scan always advances.
pub fn tag_spans<T: PartialEq>(delimiter: &Delimiter<T>, input: &[T]) -> Vec<Segment<Span>> {
    let mut segments = Vec::new();
    let mut chunk_start: Option<usize> = None;
    let mut pos = 0;

    while pos < input.len() {
        match delimiter.match_len(&input[pos..]) {
            Some(len) => {
                if let Some(start) = chunk_start.take() {
                    segments.push(Segment::Chunk(start..pos));
                }
                segments.push(Segment::Delim(pos..pos + len));

                if len == 0 {
                    segments.push(Segment::Chunk(pos..pos + 1));
                    pos += 1;
                } else {
                    pos += len;
                }
            }
            None => {
                chunk_start.get_or_insert(pos);
                pos += 1;
            }
        }
    }

    if let Some(start) = chunk_start {
        segments.push(Segment::Chunk(start..pos));
    }

    segments
}

/// Borrow the sub-slice of `input` covered by each span
pub fn resolve_spans<'a, T>(input: &'a [T], spans: &[Span]) -> Vec<&'a [T]> {
    spans.iter().map(|span| &input[span.clone()]).collect()
}
