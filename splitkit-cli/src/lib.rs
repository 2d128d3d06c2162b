//! splitkit CLI library
//!
//! This library provides the command-line interface for splitting text
//! files by delimiters or by size.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
