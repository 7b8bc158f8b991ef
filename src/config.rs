//! Configuration for the tabula binary.
//!
//! Command-line arguments take precedence over `TABULA_*` environment
//! variables, which take precedence over defaults. The node table comes from
//! exactly one source: a file, a sampled function, or stdin when neither is
//! given.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::data::{
    DataError, DataProvider, FileDataProvider, FunctionDataProvider, ReaderDataProvider,
    SampleFunction,
};
use crate::interpolation::{Algorithm, DataSet, InterpolationError};

/// Command-line arguments for tabula
#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File holding x values on the first line and y values on the second
    #[arg(short, long, env = "TABULA_FILE", conflicts_with = "function")]
    pub file: Option<PathBuf>,

    /// Sample a function instead: sin, cos, exp or x^2
    #[arg(long, env = "TABULA_FUNCTION", requires_all = ["from", "to"])]
    pub function: Option<String>,

    /// Start of the sampling interval
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<f64>,

    /// End of the sampling interval
    #[arg(long, allow_hyphen_values = true)]
    pub to: Option<f64>,

    /// Number of sampled nodes
    #[arg(long, env = "TABULA_POINTS", default_value_t = 5)]
    pub points: usize,

    /// Point to interpolate at
    #[arg(short, long, allow_hyphen_values = true)]
    pub x: f64,

    /// Only run these methods (comma separated, e.g. lagrange,stirling)
    #[arg(short, long, value_delimiter = ',')]
    pub method: Vec<String>,

    /// Print the forward-difference table
    #[arg(long)]
    pub table: bool,

    /// Also print every method sampled across the nodes (400 segments if no count is given)
    #[arg(long, num_args = 0..=1, default_missing_value = "400")]
    pub samples: Option<usize>,

    /// Output format
    #[arg(long, value_enum, env = "TABULA_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Shorthand for `--format json`
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TABULA_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where the node table comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Function { function: SampleFunction, a: f64, b: f64, points: usize },
    Stdin,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error("Configuration error: {message}")]
    Invalid { message: String },
}

/// Complete, resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub x: f64,
    pub methods: Vec<Algorithm>,
    pub show_table: bool,
    pub samples: Option<usize>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process arguments and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let source = match (args.file, args.function) {
            (Some(path), _) => Source::File(path),
            (None, Some(name)) => {
                let (Some(a), Some(b)) = (args.from, args.to) else {
                    return Err(ConfigError::Invalid {
                        message: "--function needs both --from and --to".to_string(),
                    });
                };
                Source::Function { function: name.parse()?, a, b, points: args.points }
            }
            (None, None) => Source::Stdin,
        };

        let methods = if args.method.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            args.method
                .iter()
                .map(|name| name.parse::<Algorithm>())
                .collect::<Result<Vec<_>, _>>()?
        };

        let config = Self {
            source,
            x: args.x,
            methods,
            show_table: args.table,
            samples: args.samples,
            format: if args.json { OutputFormat::Json } else { args.format },
            log_level: args.log_level,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.x.is_finite() {
            return Err(ConfigError::Invalid {
                message: format!("interpolation point must be finite, got {}", self.x),
            });
        }
        if self.samples == Some(0) {
            return Err(ConfigError::Invalid {
                message: "--samples must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Builds the data provider for the configured source.
    pub fn provider(&self) -> Box<dyn DataProvider> {
        match &self.source {
            Source::File(path) => Box::new(FileDataProvider::new(path.clone())),
            Source::Function { function, a, b, points } => {
                Box::new(FunctionDataProvider::new(*function, *a, *b, *points))
            }
            Source::Stdin => Box::new(ReaderDataProvider::new(std::io::stdin().lock())),
        }
    }

    /// Reads the node table, together with the function it was sampled
    /// from when the source is a [`Source::Function`].
    pub fn read_data(&self) -> Result<(DataSet, Option<SampleFunction>), DataError> {
        match &self.source {
            Source::Function { function, a, b, points } => {
                let mut provider = FunctionDataProvider::new(*function, *a, *b, *points);
                let data = provider.read()?;
                Ok((data, Some(provider.function())))
            }
            _ => Ok((self.provider().read()?, None)),
        }
    }
}
