//! Domain layer: delimiters, tagged segments and policy settings
//!
//! Everything here is pure and total. The application layer builds the
//! post-processing pipeline on top of these types.

pub mod delimiter;
pub mod policy;
pub mod segment;
pub mod text;

pub use delimiter::{Delimiter, Predicate};
pub use policy::{BlankPolicy, DelimiterDisposition, RunPolicy, SplitPolicy};
pub use segment::{resolve_spans, tag, tag_spans, Segment, Span};
pub use text::TextIndex;
