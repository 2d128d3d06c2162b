//! Size-based chunking
//!
//! These functions cut a sequence by length instead of by delimiter. Each
//! slice-returning function has a `*_spans` twin that works on a length
//! alone, which the text layer uses to keep byte and char offsets.

use crate::domain::{resolve_spans, Span};

/// Spans of consecutive groups of `size` elements over `len` elements
///
/// The last span may be shorter.
///
/// # Panics
///
/// Panics if `size` is 0.
pub fn every_spans(size: usize, len: usize) -> Vec<Span> {
    assert!(size > 0, "chunk size must be greater than 0");

    (0..len)
        .step_by(size)
        .map(|start| start..start.saturating_add(size).min(len))
        .collect()
}

/// Group every `size` consecutive elements into one chunk
///
/// The final chunk may be shorter. An empty input yields no chunks.
///
/// # Panics
///
/// Panics if `size` is 0.
///
/// # Example
///
/// ```rust
/// use splitkit_core::chunk_every;
///
/// let chunks = chunk_every(3, &[1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(chunks, vec![&[1, 2, 3][..], &[4, 5, 6], &[7]]);
/// ```
pub fn chunk_every<T>(size: usize, input: &[T]) -> Vec<&[T]> {
    resolve_spans(input, &every_spans(size, input.len()))
}

/// Spans of consecutive chunks with the requested lengths
///
/// Stops when `sizes` runs out, when the input is exhausted, or at the
/// first size the remaining input cannot fill.
pub fn sizes_spans<I>(sizes: I, len: usize) -> Vec<Span>
where
    I: IntoIterator<Item = usize>,
{
    let mut spans = Vec::new();
    let mut start = 0;

    for size in sizes {
        if start >= len {
            break;
        }
        let end = start.saturating_add(size);
        if end > len {
            break;
        }
        spans.push(start..end);
        start = end;
    }
    spans
}

/// Cut consecutive chunks of the requested lengths
///
/// Only complete chunks are produced; leftover input that cannot fill the
/// next size is dropped. `sizes` may be infinite as long as it does not
/// end in an endless run of zeros.
///
/// # Example
///
/// ```rust
/// use splitkit_core::chunk_by_sizes;
///
/// let chunks = chunk_by_sizes([2, 3, 10], &[1, 2, 3, 4, 5, 6]);
/// assert_eq!(chunks, vec![&[1, 2][..], &[3, 4, 5]]);
/// ```
pub fn chunk_by_sizes<T, I>(sizes: I, input: &[T]) -> Vec<&[T]>
where
    I: IntoIterator<Item = usize>,
{
    resolve_spans(input, &sizes_spans(sizes, input.len()))
}

/// The sizes 1, 2, 4, 8, ... up to the largest power of two in `usize`
pub fn powers_of_two() -> impl Iterator<Item = usize> {
    std::iter::successors(Some(1usize), |n| n.checked_mul(2))
}

/// Cut chunks of lengths 1, 2, 4, 8, ...
pub fn chunk_by_powers_of_two<T>(input: &[T]) -> Vec<&[T]> {
    chunk_by_sizes(powers_of_two(), input)
}

/// Spans for [`split_places`]
pub fn places_spans<I>(sizes: I, len: usize) -> Vec<Span>
where
    I: IntoIterator<Item = usize>,
{
    let mut spans = Vec::new();
    let mut start = 0;

    for size in sizes {
        if start >= len {
            break;
        }
        let end = start.saturating_add(size).min(len);
        spans.push(start..end);
        start = end;
    }
    spans
}

/// Cut consecutive chunks of the requested lengths, keeping a short tail
///
/// Stops when `sizes` runs out or the input is exhausted. Unlike
/// [`chunk_by_sizes`], a final chunk shorter than its size is kept.
pub fn split_places<T, I>(sizes: I, input: &[T]) -> Vec<&[T]>
where
    I: IntoIterator<Item = usize>,
{
    resolve_spans(input, &places_spans(sizes, input.len()))
}

/// Spans for [`split_places_blanks`]
pub fn places_blanks_spans<I>(sizes: I, len: usize) -> Vec<Span>
where
    I: IntoIterator<Item = usize>,
{
    let mut start: usize = 0;
    sizes
        .into_iter()
        .map(|size| {
            let end = start.saturating_add(size).min(len);
            let span = start..end;
            start = end;
            span
        })
        .collect()
}

/// Cut one chunk per requested size, padding with empty chunks
///
/// Once the input is exhausted every remaining size yields an empty chunk,
/// so the output always has one chunk per size. `sizes` must be finite.
pub fn split_places_blanks<T, I>(sizes: I, input: &[T]) -> Vec<&[T]>
where
    I: IntoIterator<Item = usize>,
{
    resolve_spans(input, &places_blanks_spans(sizes, input.len()))
}

/// Spans for [`divvy`]
///
/// # Panics
///
/// Panics if `step` is 0.
pub fn divvy_spans(size: usize, step: usize, len: usize) -> Vec<Span> {
    assert!(step > 0, "window step must be greater than 0");

    (0..len)
        .step_by(step)
        .map_while(|start| {
            let end = start.checked_add(size)?;
            (end <= len).then_some(start..end)
        })
        .collect()
}

/// Sliding windows of `size` elements, one starting every `step` elements
///
/// Windows that would run past the end of the input are dropped.
///
/// # Panics
///
/// Panics if `step` is 0.
///
/// # Example
///
/// ```rust
/// use splitkit_core::divvy;
///
/// let windows = divvy(3, 2, &[1, 2, 3, 4, 5, 6]);
/// assert_eq!(windows, vec![&[1, 2, 3][..], &[3, 4, 5]]);
/// ```
pub fn divvy<T>(size: usize, step: usize, input: &[T]) -> Vec<&[T]> {
    resolve_spans(input, &divvy_spans(size, step, input.len()))
}

/// Repeatedly apply `f` to the remaining input until it is empty
///
/// `f` returns one output value and the input left over. It must consume at
/// least one element per call on non-empty input, or `chop` never returns.
///
/// # Example
///
/// ```rust
/// use splitkit_core::chop;
///
/// // Run-length encode
/// let runs = chop(
///     |rest| {
///         let len = rest.iter().take_while(|&&c| c == rest[0]).count();
///         ((rest[0], len), &rest[len..])
///     },
///     &['a', 'a', 'b', 'c', 'c', 'c'],
/// );
/// assert_eq!(runs, vec![('a', 2), ('b', 1), ('c', 3)]);
/// ```
pub fn chop<'a, T, B, F>(mut f: F, input: &'a [T]) -> Vec<B>
where
    F: FnMut(&'a [T]) -> (B, &'a [T]),
{
    let mut out = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        let (item, next) = f(rest);
        out.push(item);
        rest = next;
    }
    out
}
