//! Application layer: the post-processing pipeline and size-based chunking
//!
//! The pipeline turns a tagged segment list into output spans according to
//! a [`SplitPolicy`](crate::domain::SplitPolicy). Chunking cuts sequences by
//! length rather than by delimiter.

pub mod chunking;
pub mod pipeline;

pub use chunking::{
    chop, chunk_by_powers_of_two, chunk_by_sizes, chunk_every, divvy, powers_of_two,
    split_places, split_places_blanks,
};
pub use pipeline::post_process;
