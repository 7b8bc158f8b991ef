//! Defines the structs returned by batch evaluation.
//!
//! [`InterpolationReport`] summarizes one algorithm over every evaluation
//! point; [`ComparisonReport`] collects the same for all algorithms side by
//! side, keeping per-algorithm failures instead of aborting.

use serde::Serialize;

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"stirling"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone, Serialize)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            evaluated: Vec::new(),
        }
    }
}


/// Outcome of one algorithm inside a [`ComparisonReport`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodOutcome {
    Evaluated { values: Vec<f64> },
    Failed { error: String },
}

/// Every algorithm evaluated on the same nodes and points.
///
/// [`ComparisonReport`]
/// - `n_provided` : number of input data points `(x, y)`
/// - `x_eval`     : evaluation points, shared by every entry
/// - `methods`    : one entry per [`Algorithm::ALL`], in that order
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub n_provided: usize,
    pub x_eval: Vec<f64>,
    pub methods: Vec<(Algorithm, MethodOutcome)>,
}

impl ComparisonReport {
    /// Values produced by `algorithm`, `None` if it failed.
    pub fn values(&self, algorithm: Algorithm) -> Option<&[f64]> {
        self.methods.iter().find(|(a, _)| *a == algorithm).and_then(|(_, outcome)| {
            match outcome {
                MethodOutcome::Evaluated { values } => Some(values.as_slice()),
                MethodOutcome::Failed { .. }        => None,
            }
        })
    }
}
