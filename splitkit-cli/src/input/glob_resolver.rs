//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use super::InputSource;
use crate::error::CliError;

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// Resolve command-line inputs, where `-` stands for standard input
///
/// Standard input comes first when present; file patterns follow in sorted
/// order.
pub fn resolve_inputs(inputs: &[String]) -> Result<Vec<InputSource>> {
    let (stdin, patterns): (Vec<&String>, Vec<&String>) =
        inputs.iter().partition(|input| input.as_str() == "-");

    let mut sources = Vec::new();
    if !stdin.is_empty() {
        sources.push(InputSource::Stdin);
    }

    if !patterns.is_empty() {
        let patterns: Vec<String> = patterns.into_iter().cloned().collect();
        sources.extend(resolve_patterns(&patterns)?.into_iter().map(InputSource::File));
    }

    Ok(sources)
}
