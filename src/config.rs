// src/config.rs
use crate::cli::Args;
use crate::options::OutputFormat;
use email_domains_domain::AggregationOptions;
use email_domains_infra::ReaderOptions;
use email_domains_shared_kernel::PresentationError;
use log::LevelFilter;
use std::path::PathBuf;

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub reader: ReaderOptions,
    pub aggregation: AggregationOptions,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub summary: bool,
    pub log_level: LevelFilter,
}

impl Config {
    /// Defaults for `input`, as if no flags were given.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            reader: ReaderOptions::default(),
            aggregation: AggregationOptions::default(),
            format: OutputFormat::default(),
            output: None,
            summary: false,
            log_level: LevelFilter::Warn,
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let input = args.path.or(args.file).ok_or(PresentationError::MissingInput)?;

        // 空ラベルは空のメール欄をヘッダ扱いしてしまう
        if args.parse.header_label.is_empty() {
            return Err(PresentationError::InvalidValue {
                flag: "--header-label".to_string(),
                value: String::new(),
                reason: "must not be empty".to_string(),
            });
        }

        let log_level = if args.logging.quiet {
            LevelFilter::Error
        } else {
            match args.logging.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        Ok(Self {
            input,
            reader: ReaderOptions { flexible: args.parse.flexible },
            aggregation: AggregationOptions::default()
                .with_email_column(args.parse.email_column)
                .with_header_label(args.parse.header_label),
            format: args.output.format,
            output: args.output.output,
            summary: args.output.summary,
            log_level,
        })
    }
}
