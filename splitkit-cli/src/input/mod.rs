//! Input handling module

use std::fmt;
use std::path::PathBuf;

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::{resolve_inputs, resolve_patterns};

/// Where a piece of input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
