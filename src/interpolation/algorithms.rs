//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and dispatches a single query to the matching formula.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interpolation::difference::DifferenceTable;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::{bessel, gauss, lagrange, newton, stirling};

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]       Lagrange basis polynomials, any spacing
/// - [`Algorithm::NewtonForward`]  Newton forward differences, anchored at the first node
/// - [`Algorithm::NewtonBackward`] Newton backward differences, anchored at the last node
/// - [`Algorithm::GaussForward`]   Gauss first formula, anchored at the central node
/// - [`Algorithm::GaussBackward`]  Gauss second formula, anchored at the central node
/// - [`Algorithm::Stirling`]       mean of both Gauss formulas, needs 3 nodes
/// - [`Algorithm::Bessel`]         anchored between the two central nodes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Lagrange,
    NewtonForward,
    NewtonBackward,
    GaussForward,
    GaussBackward,
    Stirling,
    Bessel,
}

impl Algorithm {
    /// Every variant, in the order results are reported.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Lagrange,
        Algorithm::NewtonForward,
        Algorithm::NewtonBackward,
        Algorithm::GaussForward,
        Algorithm::GaussBackward,
        Algorithm::Stirling,
        Algorithm::Bessel,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange       => "lagrange",
            Algorithm::NewtonForward  => "newton_forward",
            Algorithm::NewtonBackward => "newton_backward",
            Algorithm::GaussForward   => "gauss_forward",
            Algorithm::GaussBackward  => "gauss_backward",
            Algorithm::Stirling       => "stirling",
            Algorithm::Bessel         => "bessel",
        }
    }

    /// Human-readable name for printed tables.
    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::Lagrange       => "Lagrange",
            Algorithm::NewtonForward  => "Newton forward",
            Algorithm::NewtonBackward => "Newton backward",
            Algorithm::GaussForward   => "Gauss forward",
            Algorithm::GaussBackward  => "Gauss backward",
            Algorithm::Stirling       => "Stirling",
            Algorithm::Bessel         => "Bessel",
        }
    }

    /// Every method except Lagrange reads `h = x[1] - x[0]` as the step
    /// and never checks it against the rest of the table.
    pub const fn requires_uniform_spacing(self) -> bool {
        !matches!(self, Algorithm::Lagrange)
    }

    pub const fn min_nodes(self) -> usize {
        match self {
            Algorithm::Stirling => stirling::MIN_NODES,
            _                   => 2,
        }
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// Trusts `xs`/`ys` to be a validated table; see
    /// [`crate::interpolation::DataSet`] for the checked path.
    pub fn value(self, xs: &[f64], ys: &[f64], x: f64) -> Result<f64, InterpolationError> {
        match self {
            Algorithm::Lagrange => Ok(lagrange::value(xs, ys, x)),
            _ => {
                let table = DifferenceTable::forward(ys);
                self.value_with_table(xs, ys, &table, x)
            }
        }
    }

    /// Same as [`Algorithm::value`], reusing a forward-difference table
    /// already built from `ys`.
    pub(crate) fn value_with_table(
        self,
        xs: &[f64],
        ys: &[f64],
        table: &DifferenceTable,
        x: f64,
    ) -> Result<f64, InterpolationError> {
        let y = match self {
            Algorithm::Lagrange       => lagrange::value(xs, ys, x),
            Algorithm::NewtonForward  => newton::forward_with_table(xs, table, x),
            Algorithm::NewtonBackward => newton::backward_with_table(xs, table, x),
            Algorithm::GaussForward   => gauss::forward_with_table(xs, table, x),
            Algorithm::GaussBackward  => gauss::backward_with_table(xs, table, x),
            Algorithm::Stirling       => stirling::value_with_table(xs, table, x)?,
            Algorithm::Bessel         => bessel::value_with_table(xs, table, x),
        };
        Ok(y)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

impl FromStr for Algorithm {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Algorithm::ALL
            .into_iter()
            .find(|a| a.algorithm_name() == wanted)
            .ok_or(InterpolationError::UnknownAlgorithm { name: s.to_string() })
    }
}
