//! High-level configuration API

use crate::error::{ApiError, Result};
use splitkit_core::{BlankPolicy, Delimiter, DelimiterDisposition, RunPolicy, SplitPolicy};

/// A named set of characters usable as a delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharClass {
    /// Unicode whitespace
    Whitespace,
    /// Line feed and carriage return
    Newline,
    /// ASCII punctuation plus CJK and fullwidth punctuation
    Punctuation,
    /// Unicode numeric characters
    Numeric,
    /// Unicode alphabetic characters
    Alphabetic,
    /// Unicode alphanumeric characters
    Alphanumeric,
    /// Control characters
    Control,
}

impl CharClass {
    /// Every class, in listing order
    pub const ALL: [CharClass; 7] = [
        CharClass::Whitespace,
        CharClass::Newline,
        CharClass::Punctuation,
        CharClass::Numeric,
        CharClass::Alphabetic,
        CharClass::Alphanumeric,
        CharClass::Control,
    ];

    /// Check if `c` belongs to this class
    pub fn matches(&self, c: char) -> bool {
        match self {
            CharClass::Whitespace => c.is_whitespace(),
            CharClass::Newline => matches!(c, '\n' | '\r'),
            CharClass::Punctuation => {
                c.is_ascii_punctuation()
                    || ('\u{3001}'..='\u{303F}').contains(&c)
                    || ('\u{FF01}'..='\u{FF0F}').contains(&c)
                    || ('\u{FF1A}'..='\u{FF20}').contains(&c)
            }
            CharClass::Numeric => c.is_numeric(),
            CharClass::Alphabetic => c.is_alphabetic(),
            CharClass::Alphanumeric => c.is_alphanumeric(),
            CharClass::Control => c.is_control(),
        }
    }

    /// Name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::Whitespace => "whitespace",
            CharClass::Newline => "newline",
            CharClass::Punctuation => "punctuation",
            CharClass::Numeric => "numeric",
            CharClass::Alphabetic => "alphabetic",
            CharClass::Alphanumeric => "alphanumeric",
            CharClass::Control => "control",
        }
    }
}

impl std::str::FromStr for CharClass {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        CharClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| ApiError::Config(format!("unknown character class: {s}")))
    }
}

/// Serializable description of a character delimiter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum DelimiterSpec {
    /// Never split
    #[default]
    Never,
    /// Any one of these characters
    OneOf {
        /// Candidate characters
        chars: String,
    },
    /// This exact text
    On {
        /// Text to match; empty text splits between every character
        text: String,
    },
    /// Any character of a class
    Class {
        /// The class
        class: CharClass,
    },
}

impl DelimiterSpec {
    /// Build the matching core delimiter
    pub fn to_delimiter(&self) -> Delimiter<char> {
        match self {
            DelimiterSpec::Never => Delimiter::never(),
            DelimiterSpec::OneOf { chars } => Delimiter::one_of(chars.chars().collect::<Vec<_>>()),
            DelimiterSpec::On { text } => Delimiter::on(text.chars().collect::<Vec<_>>()),
            DelimiterSpec::Class { class } => {
                let class = *class;
                Delimiter::when(move |c: &char| class.matches(*c))
            }
        }
    }
}

/// How the text is cut into pieces
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Strategy {
    /// Split on a delimiter, then apply the policies
    Delimited {
        /// What to split on
        #[cfg_attr(feature = "serde", serde(default))]
        delimiter: DelimiterSpec,
        /// Treatment of matched delimiters
        #[cfg_attr(feature = "serde", serde(default))]
        disposition: DelimiterDisposition,
        /// Treatment of consecutive delimiters
        #[cfg_attr(feature = "serde", serde(default))]
        runs: RunPolicy,
        /// Blank piece at the start
        #[cfg_attr(feature = "serde", serde(default))]
        leading_blank: BlankPolicy,
        /// Blank piece at the end
        #[cfg_attr(feature = "serde", serde(default))]
        trailing_blank: BlankPolicy,
    },
    /// Pieces of `size` characters, the last possibly shorter
    Every {
        /// Characters per piece
        size: usize,
    },
    /// Complete pieces of the listed sizes
    Sizes {
        /// Characters per piece, in order
        sizes: Vec<usize>,
    },
    /// Pieces of the listed sizes, keeping a short tail
    Places {
        /// Characters per piece, in order
        sizes: Vec<usize>,
        /// Emit empty pieces for sizes left after the text runs out
        #[cfg_attr(feature = "serde", serde(default))]
        blanks: bool,
    },
    /// Pieces of 1, 2, 4, 8, ... characters
    PowersOfTwo,
    /// Overlapping windows of `size` characters every `step` characters
    Windows {
        /// Characters per window
        size: usize,
        /// Distance between window starts
        step: usize,
    },
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::delimited(DelimiterSpec::default(), SplitPolicy::default())
    }
}

impl Strategy {
    /// A delimited strategy from a delimiter and a core policy
    pub fn delimited(delimiter: DelimiterSpec, policy: SplitPolicy) -> Self {
        Strategy::Delimited {
            delimiter,
            disposition: policy.disposition,
            runs: policy.runs,
            leading_blank: policy.leading_blank,
            trailing_blank: policy.trailing_blank,
        }
    }

    /// Name used in configuration files and output metadata
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Delimited { .. } => "delimited",
            Strategy::Every { .. } => "every",
            Strategy::Sizes { .. } => "sizes",
            Strategy::Places { .. } => "places",
            Strategy::PowersOfTwo => "powers_of_two",
            Strategy::Windows { .. } => "windows",
        }
    }

    /// Names of every strategy
    pub fn names() -> &'static [&'static str] {
        &[
            "delimited",
            "every",
            "sizes",
            "places",
            "powers_of_two",
            "windows",
        ]
    }

    /// Reject settings the core treats as contract violations
    pub fn validate(&self) -> Result<()> {
        match self {
            Strategy::Every { size: 0 } => {
                Err(ApiError::Config("piece size must be greater than 0".to_string()))
            }
            Strategy::Sizes { sizes } | Strategy::Places { sizes, .. } if sizes.is_empty() => {
                Err(ApiError::Config("size list must not be empty".to_string()))
            }
            Strategy::Sizes { sizes } | Strategy::Places { sizes, .. }
                if sizes.contains(&0) =>
            {
                Err(ApiError::Config(
                    "sizes in the size list must be greater than 0".to_string(),
                ))
            }
            Strategy::Windows { size: 0, .. } => {
                Err(ApiError::Config("window size must be greater than 0".to_string()))
            }
            Strategy::Windows { step: 0, .. } => {
                Err(ApiError::Config("window step must be greater than 0".to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// High-level configuration for text splitting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// How the text is cut
    pub strategy: Strategy,
}

impl Config {
    /// Words: split on whitespace and drop every blank
    pub fn words() -> Self {
        Self::builder()
            .class(CharClass::Whitespace)
            .drop_blanks()
            .build_unchecked()
    }

    /// Lines: split on `\n`, no piece after a final newline
    pub fn lines() -> Self {
        Self::builder()
            .one_of("\n")
            .drop_final_blank()
            .build_unchecked()
    }

    /// Fields separated by `separator`, blanks kept
    pub fn fields(separator: char) -> Self {
        Self::builder()
            .one_of(separator.to_string())
            .build_unchecked()
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the configuration for invalid settings
    pub fn validate(&self) -> Result<()> {
        self.strategy.validate()
    }

    /// Parse a configuration from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Configuration builder
///
/// Delimiter and policy settings describe a delimited split; choosing a
/// size-based strategy replaces them.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    delimiter: DelimiterSpec,
    policy: SplitPolicy,
    chunking: Option<Strategy>,
}

impl ConfigBuilder {
    /// Set the delimiter
    pub fn delimiter(mut self, delimiter: DelimiterSpec) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Split on any one of `chars`
    pub fn one_of(self, chars: impl Into<String>) -> Self {
        self.delimiter(DelimiterSpec::OneOf {
            chars: chars.into(),
        })
    }

    /// Split on the exact text `text`
    pub fn on(self, text: impl Into<String>) -> Self {
        self.delimiter(DelimiterSpec::On { text: text.into() })
    }

    /// Split on any character of `class`
    pub fn class(self, class: CharClass) -> Self {
        self.delimiter(DelimiterSpec::Class { class })
    }

    /// Set the delimiter disposition
    pub fn disposition(mut self, disposition: DelimiterDisposition) -> Self {
        self.policy.disposition = disposition;
        self
    }

    /// Set the run policy
    pub fn runs(mut self, runs: RunPolicy) -> Self {
        self.policy.runs = runs;
        self
    }

    /// Set the leading blank policy
    pub fn leading_blank(mut self, policy: BlankPolicy) -> Self {
        self.policy.leading_blank = policy;
        self
    }

    /// Set the trailing blank policy
    pub fn trailing_blank(mut self, policy: BlankPolicy) -> Self {
        self.policy.trailing_blank = policy;
        self
    }

    /// Condense runs of delimiters
    pub fn condense(self) -> Self {
        self.runs(RunPolicy::Condense)
    }

    /// Drop the blank piece at the start
    pub fn drop_init_blank(self) -> Self {
        self.leading_blank(BlankPolicy::DropBlank)
    }

    /// Drop the blank piece at the end
    pub fn drop_final_blank(self) -> Self {
        self.trailing_blank(BlankPolicy::DropBlank)
    }

    /// Drop every blank piece
    pub fn drop_blanks(self) -> Self {
        self.condense().drop_init_blank().drop_final_blank()
    }

    /// Pieces of `size` characters
    pub fn every(mut self, size: usize) -> Self {
        self.chunking = Some(Strategy::Every { size });
        self
    }

    /// Complete pieces of the listed sizes
    pub fn sizes(mut self, sizes: Vec<usize>) -> Self {
        self.chunking = Some(Strategy::Sizes { sizes });
        self
    }

    /// Pieces of the listed sizes, keeping a short tail
    pub fn places(mut self, sizes: Vec<usize>, blanks: bool) -> Self {
        self.chunking = Some(Strategy::Places { sizes, blanks });
        self
    }

    /// Pieces of 1, 2, 4, 8, ... characters
    pub fn powers_of_two(mut self) -> Self {
        self.chunking = Some(Strategy::PowersOfTwo);
        self
    }

    /// Overlapping windows
    pub fn windows(mut self, size: usize, step: usize) -> Self {
        self.chunking = Some(Strategy::Windows { size, step });
        self
    }

    fn build_unchecked(self) -> Config {
        let strategy = self
            .chunking
            .unwrap_or_else(|| Strategy::delimited(self.delimiter, self.policy));
        Config { strategy }
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let config = self.build_unchecked();
        config.validate()?;

        log::trace!("built configuration: {:?}", config);
        Ok(config)
    }
}
