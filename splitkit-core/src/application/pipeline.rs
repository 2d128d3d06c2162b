//! Post-processing pipeline over tagged segments
//!
//! Six stages run in a fixed order, each controlled by one policy setting:
//! condense runs, insert blanks, drop delimiters, merge delimiters, trim the
//! leading blank, trim the trailing blank. Segments are spans into the
//! input, so merged segments stay contiguous.

use crate::domain::{BlankPolicy, DelimiterDisposition, RunPolicy, Segment, Span, SplitPolicy};

type Segments = Vec<Segment<Span>>;

/// Run every stage and unwrap the surviving segments to spans
pub fn post_process(policy: &SplitPolicy, segments: Segments) -> Vec<Span> {
    let segments = condense_runs(policy.runs, segments);
    let segments = insert_blanks(policy.runs, segments);
    let segments = drop_delims(policy.disposition, segments);
    let segments = merge_delims(policy.disposition, segments);
    let segments = trim_leading_blank(policy.leading_blank, segments);
    let segments = trim_trailing_blank(policy.trailing_blank, segments);

    segments.into_iter().map(Segment::into_content).collect()
}

/// Collapse each run of consecutive delimiters into one delimiter
pub fn condense_runs(runs: RunPolicy, segments: Segments) -> Segments {
    if runs != RunPolicy::Condense {
        return segments;
    }

    let mut condensed: Segments = Vec::with_capacity(segments.len());
    for segment in segments {
        if let (Some(Segment::Delim(run)), Segment::Delim(next)) = (condensed.last_mut(), &segment) {
            run.end = next.end;
            continue;
        }
        condensed.push(segment);
    }
    condensed
}

/// Make every delimiter that touches another delimiter or an end of the
/// list border on an explicit chunk
///
/// Under [`RunPolicy::DropBlankFields`] adjacent delimiters stay adjacent;
/// the two ends are padded regardless.
pub fn insert_blanks(runs: RunPolicy, segments: Segments) -> Segments {
    let Some(first) = segments.first() else {
        return vec![Segment::blank(0)];
    };

    let mut padded: Segments = Vec::with_capacity(segments.len() + 2);
    if first.is_delim() {
        padded.push(Segment::blank(first.start()));
    }

    let mut iter = segments.into_iter().peekable();
    while let Some(segment) = iter.next() {
        let pad_after = segment.is_delim()
            && match iter.peek() {
                None => true,
                Some(next) => next.is_delim() && runs != RunPolicy::DropBlankFields,
            };
        let end = segment.end();

        padded.push(segment);
        if pad_after {
            padded.push(Segment::blank(end));
        }
    }
    padded
}

/// Remove delimiter segments when the disposition is [`DelimiterDisposition::Drop`]
pub fn drop_delims(disposition: DelimiterDisposition, segments: Segments) -> Segments {
    if disposition != DelimiterDisposition::Drop {
        return segments;
    }
    segments.into_iter().filter(Segment::is_chunk).collect()
}

/// Fold delimiters into a neighbouring chunk
///
/// A delimiter with no chunk on the merge side is left standalone.
pub fn merge_delims(disposition: DelimiterDisposition, segments: Segments) -> Segments {
    match disposition {
        DelimiterDisposition::KeepWithFollowing => merge_with_following(segments),
        DelimiterDisposition::KeepWithPreceding => merge_with_preceding(segments),
        DelimiterDisposition::Drop | DelimiterDisposition::Keep => segments,
    }
}

fn merge_with_following(segments: Segments) -> Segments {
    let mut merged = Vec::with_capacity(segments.len());
    let mut iter = segments.into_iter().peekable();

    while let Some(segment) = iter.next() {
        match segment {
            Segment::Delim(delim) if iter.peek().is_some_and(Segment::is_chunk) => {
                if let Some(Segment::Chunk(chunk)) = iter.next() {
                    merged.push(Segment::Chunk(delim.start..chunk.end));
                }
            }
            other => merged.push(other),
        }
    }
    merged
}

fn merge_with_preceding(segments: Segments) -> Segments {
    let mut merged = Vec::with_capacity(segments.len());
    let mut iter = segments.into_iter().peekable();

    while let Some(segment) = iter.next() {
        match segment {
            Segment::Chunk(chunk) if iter.peek().is_some_and(Segment::is_delim) => {
                if let Some(Segment::Delim(delim)) = iter.next() {
                    merged.push(Segment::Chunk(chunk.start..delim.end));
                }
            }
            other => merged.push(other),
        }
    }
    merged
}

/// Drop a blank chunk at the very start
pub fn trim_leading_blank(policy: BlankPolicy, mut segments: Segments) -> Segments {
    if policy == BlankPolicy::DropBlank && segments.first().is_some_and(Segment::is_blank) {
        segments.remove(0);
    }
    segments
}

/// Drop a blank chunk at the very end
pub fn trim_trailing_blank(policy: BlankPolicy, mut segments: Segments) -> Segments {
    if policy == BlankPolicy::DropBlank && segments.last().is_some_and(Segment::is_blank) {
        segments.pop();
    }
    segments
}
