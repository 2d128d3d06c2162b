//! List command implementation

use anyhow::Result;
use splitkit_api::{CharClass, Strategy};
use std::io::Write;

use crate::output::OutputFormat;

/// Write the available output formats
pub fn formats<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "Available output formats:")?;
    for format in OutputFormat::ALL {
        writeln!(writer, "  {:<10} - {}", format.as_str(), format.description())?;
    }
    Ok(())
}

/// Write the available split strategies
pub fn strategies<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "Available strategies:")?;
    for name in Strategy::names() {
        writeln!(writer, "  {:<14} - {}", name, strategy_description(name))?;
    }
    Ok(())
}

/// Write the character classes usable as delimiters
pub fn classes<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "Available character classes:")?;
    for class in CharClass::ALL {
        writeln!(writer, "  {}", class.as_str())?;
    }
    Ok(())
}

fn strategy_description(name: &str) -> &'static str {
    match name {
        "delimited" => "split on a delimiter (--one-of, --on, --class)",
        "every" => "pieces of a fixed size (--every)",
        "sizes" => "complete pieces of the given sizes (--sizes)",
        "places" => "pieces of the given sizes, short tail kept (--places)",
        "powers_of_two" => "pieces of 1, 2, 4, 8, ... (--powers-of-two)",
        "windows" => "full windows with a step (--window, --step)",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(list: fn(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        list(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_formats() {
        let text = render(formats);
        assert!(text.starts_with("Available output formats:"));
        assert!(text.contains("  text"));
        assert!(text.contains("  json"));
        assert!(text.contains("  markdown"));
    }

    #[test]
    fn test_strategies_all_described() {
        let text = render(strategies);
        for name in Strategy::names() {
            assert!(text.contains(name));
            assert!(!strategy_description(name).is_empty());
        }
    }

    #[test]
    fn test_classes() {
        let text = render(classes);
        assert_eq!(text.lines().count(), CharClass::ALL.len() + 1);
        assert!(text.contains("whitespace"));
        assert!(text.contains("punctuation"));
    }
}
