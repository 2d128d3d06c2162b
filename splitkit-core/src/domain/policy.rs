//! Policy settings controlling the post-processing pipeline

/// What happens to matched delimiter text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DelimiterDisposition {
    /// Remove delimiters from the output
    #[default]
    Drop,
    /// Keep delimiters as standalone output chunks
    Keep,
    /// Attach each delimiter to the front of the chunk after it
    KeepWithFollowing,
    /// Attach each delimiter to the end of the chunk before it
    KeepWithPreceding,
}

/// How consecutive delimiters are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RunPolicy {
    /// Merge a run of consecutive delimiters into a single delimiter
    Condense,
    /// Separate consecutive delimiters with a blank chunk
    #[default]
    KeepBlankFields,
    /// Leave consecutive delimiters adjacent, with no blank chunk between
    DropBlankFields,
}

/// Whether a blank chunk at one end of the output survives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlankPolicy {
    /// Remove the blank chunk
    DropBlank,
    /// Keep the blank chunk
    #[default]
    KeepBlank,
}

/// The four settings consumed by the post-processing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitPolicy {
    /// Delimiter handling
    pub disposition: DelimiterDisposition,
    /// Treatment of consecutive delimiters
    pub runs: RunPolicy,
    /// Blank chunk at the start of the output
    pub leading_blank: BlankPolicy,
    /// Blank chunk at the end of the output
    pub trailing_blank: BlankPolicy,
}

impl DelimiterDisposition {
    /// Stable name used in configuration files and output metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            DelimiterDisposition::Drop => "drop",
            DelimiterDisposition::Keep => "keep",
            DelimiterDisposition::KeepWithFollowing => "keep_with_following",
            DelimiterDisposition::KeepWithPreceding => "keep_with_preceding",
        }
    }
}

impl RunPolicy {
    /// Stable name used in configuration files and output metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPolicy::Condense => "condense",
            RunPolicy::KeepBlankFields => "keep_blank_fields",
            RunPolicy::DropBlankFields => "drop_blank_fields",
        }
    }
}

impl BlankPolicy {
    /// Stable name used in configuration files and output metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            BlankPolicy::DropBlank => "drop_blank",
            BlankPolicy::KeepBlank => "keep_blank",
        }
    }
}
