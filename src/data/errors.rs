use thiserror::Error;

use crate::interpolation::errors::InterpolationError;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: `{token}` is not a number")]
    Parse { line: usize, token: String },

    #[error("expected {expected} lines of input, got {got}")]
    MissingLine { expected: usize, got: usize },

    #[error("invalid interval [{a}, {b}]: a must be finite and less than b")]
    InvalidInterval { a: f64, b: f64 },

    #[error("unknown function `{name}`, expected one of sin, cos, exp, x^2")]
    UnknownFunction { name: String },

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
