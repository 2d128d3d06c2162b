//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use splitkit_api::{
    BlankPolicy, CharClass, Config, DelimiterDisposition, DelimiterSpec, Output, RunPolicy,
    Strategy, TextSplitter,
};
use splitkit_core::SplitPolicy;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, FileReader, InputSource};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Split on any one of these characters
    #[arg(long, value_name = "CHARS", group = "delimiter", conflicts_with = "chunking")]
    pub one_of: Option<String>,

    /// Split on this exact text
    #[arg(long, value_name = "TEXT", group = "delimiter", conflicts_with = "chunking")]
    pub on: Option<String>,

    /// Split on any character of a class
    #[arg(long, value_enum, group = "delimiter", conflicts_with = "chunking")]
    pub class: Option<ClassArg>,

    /// What to do with matched delimiters
    #[arg(long, value_enum, value_name = "MODE", conflicts_with = "chunking")]
    pub delims: Option<DelimsArg>,

    /// Treat runs of delimiters as one delimiter
    #[arg(long, conflicts_with = "chunking")]
    pub condense: bool,

    /// Produce no blank pieces between consecutive delimiters
    #[arg(long, conflicts_with_all = ["condense", "chunking"])]
    pub drop_inner_blanks: bool,

    /// Drop a blank piece at the start
    #[arg(long, conflicts_with = "chunking")]
    pub drop_init_blank: bool,

    /// Drop a blank piece at the end
    #[arg(long, conflicts_with = "chunking")]
    pub drop_final_blank: bool,

    /// Drop every blank piece
    #[arg(long, conflicts_with_all = ["drop_inner_blanks", "chunking"])]
    pub drop_blanks: bool,

    /// Pieces of N characters
    #[arg(long, value_name = "N", group = "chunking")]
    pub every: Option<usize>,

    /// Complete pieces of these sizes (comma separated)
    #[arg(long, value_name = "N,..", value_delimiter = ',', group = "chunking")]
    pub sizes: Option<Vec<usize>>,

    /// Pieces of these sizes, keeping a short tail (comma separated)
    #[arg(long, value_name = "N,..", value_delimiter = ',', group = "chunking")]
    pub places: Option<Vec<usize>>,

    /// With --places, emit empty pieces for sizes left after the input ends
    #[arg(long, requires = "places")]
    pub blanks: bool,

    /// Pieces of 1, 2, 4, 8, ... characters
    #[arg(long, group = "chunking")]
    pub powers_of_two: bool,

    /// Overlapping windows of N characters
    #[arg(long, value_name = "N", group = "chunking")]
    pub window: Option<usize>,

    /// Distance between window starts
    #[arg(long, value_name = "N", requires = "window", default_value_t = 1)]
    pub step: usize,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Split multiple inputs in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel splitting
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Delimiter dispositions on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DelimsArg {
    /// Remove delimiters
    Drop,
    /// Keep delimiters as separate pieces
    Keep,
    /// Attach delimiters to the following piece
    Left,
    /// Attach delimiters to the preceding piece
    Right,
}

impl From<DelimsArg> for DelimiterDisposition {
    fn from(arg: DelimsArg) -> Self {
        match arg {
            DelimsArg::Drop => DelimiterDisposition::Drop,
            DelimsArg::Keep => DelimiterDisposition::Keep,
            DelimsArg::Left => DelimiterDisposition::KeepWithFollowing,
            DelimsArg::Right => DelimiterDisposition::KeepWithPreceding,
        }
    }
}

/// Character classes on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ClassArg {
    /// Unicode whitespace
    Whitespace,
    /// Line feed and carriage return
    Newline,
    /// ASCII, CJK and fullwidth punctuation
    Punctuation,
    /// Numeric characters
    Numeric,
    /// Alphabetic characters
    Alphabetic,
    /// Alphanumeric characters
    Alphanumeric,
    /// Control characters
    Control,
}

impl From<ClassArg> for CharClass {
    fn from(arg: ClassArg) -> Self {
        match arg {
            ClassArg::Whitespace => CharClass::Whitespace,
            ClassArg::Newline => CharClass::Newline,
            ClassArg::Punctuation => CharClass::Punctuation,
            ClassArg::Numeric => CharClass::Numeric,
            ClassArg::Alphabetic => CharClass::Alphabetic,
            ClassArg::Alphanumeric => CharClass::Alphanumeric,
            ClassArg::Control => CharClass::Control,
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();

        log::info!("Starting split");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let config = self.build_config(file_config.split.clone());
        let splitter = TextSplitter::with_config(config)?;
        log::info!("Using {} strategy", splitter.config().strategy.name());

        let sources = resolve_inputs(&self.input)?;
        log::info!("Found {} input(s) to split", sources.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_inputs(sources.len() as u64);

        let parallel = (self.parallel || file_config.performance.parallel) && sources.len() > 1;
        let outputs = if parallel {
            let threads = self
                .threads
                .unwrap_or(file_config.performance.worker_threads);
            self.split_parallel(&splitter, &sources, threads, &progress)?
        } else {
            sources
                .iter()
                .map(|source| -> Result<Output> {
                    let output = split_source(&splitter, source)?;
                    progress.input_completed(&source.to_string());
                    Ok(output)
                })
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let format = match self.format {
            Some(format) => format,
            None => file_config.output.default_format.parse()?,
        };
        self.write_outputs(format, &file_config, &sources, &outputs)?;

        let total: usize = outputs.iter().map(|o| o.metadata.piece_count).sum();
        log::info!("Split complete: {} pieces", total);
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    ///
    /// A chunking flag replaces the strategy outright. Delimiter and policy
    /// flags override the file's delimited settings, or start from the
    /// defaults when the file names a chunking strategy.
    pub fn build_config(&self, base: Config) -> Config {
        if let Some(strategy) = self.chunking_strategy() {
            return Config { strategy };
        }

        let (mut delimiter, mut policy) = match base.strategy {
            Strategy::Delimited {
                delimiter,
                disposition,
                runs,
                leading_blank,
                trailing_blank,
            } => (
                delimiter,
                SplitPolicy {
                    disposition,
                    runs,
                    leading_blank,
                    trailing_blank,
                },
            ),
            other if !self.has_delimited_flags() => return Config { strategy: other },
            _ => (DelimiterSpec::default(), SplitPolicy::default()),
        };

        if let Some(chars) = &self.one_of {
            delimiter = DelimiterSpec::OneOf {
                chars: unescape(chars),
            };
        }
        if let Some(text) = &self.on {
            delimiter = DelimiterSpec::On {
                text: unescape(text),
            };
        }
        if let Some(class) = self.class {
            delimiter = DelimiterSpec::Class {
                class: class.into(),
            };
        }

        if let Some(delims) = self.delims {
            policy.disposition = delims.into();
        }
        if self.condense || self.drop_blanks {
            policy.runs = RunPolicy::Condense;
        }
        if self.drop_inner_blanks {
            policy.runs = RunPolicy::DropBlankFields;
        }
        if self.drop_init_blank || self.drop_blanks {
            policy.leading_blank = BlankPolicy::DropBlank;
        }
        if self.drop_final_blank || self.drop_blanks {
            policy.trailing_blank = BlankPolicy::DropBlank;
        }

        Config {
            strategy: Strategy::delimited(delimiter, policy),
        }
    }

    fn chunking_strategy(&self) -> Option<Strategy> {
        if let Some(size) = self.every {
            Some(Strategy::Every { size })
        } else if let Some(sizes) = &self.sizes {
            Some(Strategy::Sizes {
                sizes: sizes.clone(),
            })
        } else if let Some(sizes) = &self.places {
            Some(Strategy::Places {
                sizes: sizes.clone(),
                blanks: self.blanks,
            })
        } else if self.powers_of_two {
            Some(Strategy::PowersOfTwo)
        } else {
            self.window.map(|size| Strategy::Windows {
                size,
                step: self.step,
            })
        }
    }

    fn has_delimited_flags(&self) -> bool {
        self.one_of.is_some()
            || self.on.is_some()
            || self.class.is_some()
            || self.delims.is_some()
            || self.condense
            || self.drop_inner_blanks
            || self.drop_init_blank
            || self.drop_final_blank
            || self.drop_blanks
    }

    fn split_parallel(
        &self,
        splitter: &TextSplitter,
        sources: &[InputSource],
        threads: usize,
        progress: &ProgressReporter,
    ) -> Result<Vec<Output>> {
        let threads = if threads == 0 {
            num_cpus::get()
        } else {
            threads
        };
        log::info!("Splitting in parallel with {} threads", threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;

        pool.install(|| {
            sources
                .par_iter()
                .map(|source| -> Result<Output> {
                    let output = split_source(splitter, source)?;
                    progress.input_completed(&source.to_string());
                    Ok(output)
                })
                .collect()
        })
    }

    fn write_outputs(
        &self,
        format: OutputFormat,
        file_config: &CliConfig,
        sources: &[InputSource],
        outputs: &[Output],
    ) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };

        let mut formatter = format.formatter(writer, &file_config.output);
        for (source, output) in sources.iter().zip(outputs) {
            formatter.format_output(&source.to_string(), output)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second initialization (e.g. in tests) keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn split_source(splitter: &TextSplitter, source: &InputSource) -> Result<Output> {
    let text = FileReader::read_source(source)?;
    splitter
        .process_text(&text)
        .map_err(|e| CliError::SplitError(format!("{source}: {e}")).into())
}

/// Expand `\n`, `\t`, `\r` and `\\` in delimiter arguments
fn unescape(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len());
    let mut chars = arg.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
