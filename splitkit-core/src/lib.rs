//! Generic list splitting
//!
//! This crate splits a slice of any element type into sub-slices. A split is
//! described by a delimiter and four policy settings; the engine tags the
//! input into chunk and delimiter segments, then runs a fixed post-processing
//! pipeline over them. Size-based chunking sits alongside for splits that do
//! not depend on element values.
//!
//! # Architecture
//!
//! - **Domain layer**: delimiters, segments, the tagging transform and policy
//!   types
//! - **Application layer**: the post-processing pipeline and chunking
//! - **API layer**: [`Splitter`] and its ready-made combinators
//!
//! Every output chunk is a contiguous sub-slice of the input, so the engine
//! never copies elements unless asked to.
//!
//! # Example
//!
//! ```rust
//! use splitkit_core::{one_of, split_on, Splitter};
//!
//! let input: Vec<char> = "aazbxyzcxd".chars().collect();
//!
//! // Split on any of x, y, z
//! let splitter: Splitter<char> = one_of(vec!['x', 'y', 'z']);
//! assert_eq!(splitter.split(&input).len(), 6);
//!
//! // Condense runs of delimiters
//! assert_eq!(splitter.condense().split(&input).len(), 4);
//!
//! // Split on the whole subsequence
//! assert_eq!(split_on(vec!['x', 'y', 'z'], &input).len(), 2);
//!
//! // Work on strings directly
//! let fields = one_of(vec![':']).split_str("a::b");
//! assert_eq!(fields, vec!["a", "", "b"]);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod application;
pub mod domain;

pub use api::*;
pub use application::{
    chop, chunk_by_powers_of_two, chunk_by_sizes, chunk_every, divvy, powers_of_two,
    split_places, split_places_blanks,
};
pub use domain::{
    BlankPolicy, Delimiter, DelimiterDisposition, Predicate, RunPolicy, Segment, Span,
    SplitPolicy, TextIndex,
};
