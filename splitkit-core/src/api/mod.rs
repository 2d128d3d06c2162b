//! Public splitting API
//!
//! [`Splitter`] holds a delimiter and the policy settings; the free
//! functions in this module build common splitters and run one-off splits.

mod combinators;
mod splitter;


pub use combinators::{
    end_by, end_by_one_of, ends_with, ends_with_one_of, lines_by, never, on, one_of,
    split_on, split_one_of, split_when, starts_with, starts_with_one_of, when, words_by,
};
pub use splitter::Splitter;
