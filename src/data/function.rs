//! Node table sampled from a known function.
//!
//! Produces `points` uniformly spaced nodes over `[a, b]`, which makes the
//! result usable by every interpolation method, and keeps the function so a
//! renderer can draw the exact curve next to the interpolants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::errors::DataError;
use crate::data::DataProvider;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::DataSet;

/// Functions available for sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFunction {
    Sin,
    Cos,
    Exp,
    Square,
}

impl SampleFunction {
    pub const ALL: [SampleFunction; 4] = [
        SampleFunction::Sin,
        SampleFunction::Cos,
        SampleFunction::Exp,
        SampleFunction::Square,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SampleFunction::Sin    => "sin(x)",
            SampleFunction::Cos    => "cos(x)",
            SampleFunction::Exp    => "exp(x)",
            SampleFunction::Square => "x^2",
        }
    }

    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            SampleFunction::Sin    => x.sin(),
            SampleFunction::Cos    => x.cos(),
            SampleFunction::Exp    => x.exp(),
            SampleFunction::Square => x * x,
        }
    }
}

impl fmt::Display for SampleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFunction {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sin" | "sin(x)"                  => Ok(SampleFunction::Sin),
            "cos" | "cos(x)"                  => Ok(SampleFunction::Cos),
            "exp" | "exp(x)"                  => Ok(SampleFunction::Exp),
            "square" | "x^2" | "x2" | "sqr"   => Ok(SampleFunction::Square),
            _ => Err(DataError::UnknownFunction { name: s.to_string() }),
        }
    }
}


/// Samples `function` at `points` nodes `a + i·(b - a)/(points - 1)`.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDataProvider {
    function: SampleFunction,
    a: f64,
    b: f64,
    points: usize,
}

impl FunctionDataProvider {
    pub fn new(function: SampleFunction, a: f64, b: f64, points: usize) -> Self {
        Self { function, a, b, points }
    }

    /// The sampled function, for overlaying the exact curve.
    pub fn function(&self) -> SampleFunction {
        self.function
    }
}

impl DataProvider for FunctionDataProvider {
    /// # Errors
    /// - [`DataError::InvalidInterval`] unless `a < b`, both finite.
    /// - [`InterpolationError::InsufficientPoints`] if `points < 2`.
    /// - Node validation errors, e.g. a non-finite `exp` sample.
    fn read(&mut self) -> Result<DataSet, DataError> {
        let (a, b, n) = (self.a, self.b, self.points);

        if !(a.is_finite() && b.is_finite()) || a >= b {
            return Err(DataError::InvalidInterval { a, b });
        }
        if n < 2 {
            return Err(InterpolationError::InsufficientPoints { got: n }.into());
        }

        let step = (b - a) / (n - 1) as f64;
        let xs: Vec<f64> = (0..n).map(|i| a + i as f64 * step).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| self.function.apply(x)).collect();

        debug!(function = %self.function, a, b, points = n, "node table sampled");
        Ok(DataSet::new(xs, ys)?)
    }
}
