//! Validated node tables.
//!
//! A [`DataSet`] is what every data source hands to the interpolation
//! methods: equal-length `x`/`y` vectors with at least two pairwise distinct,
//! finite `x` values. It is immutable once built.

use serde::Serialize;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{uniform_step, validate_nodes, DEFAULT_STEP_RTOL, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl DataSet {
    /// Validates and wraps a node table using [`DEFAULT_X_TOL`].
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`],
    ///   [`InterpolationError::InsufficientPoints`], [`InterpolationError::NonFiniteVec`]
    /// - [`InterpolationError::DuplicateX`] if two x values lie closer than the tolerance
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, InterpolationError> {
        Self::with_tolerance(xs, ys, DEFAULT_X_TOL)
    }

    pub fn with_tolerance(xs: Vec<f64>, ys: Vec<f64>, x_tol: f64) -> Result<Self, InterpolationError> {
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: x_tol });
        }
        validate_nodes(&xs, &ys, x_tol)?;
        Ok(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.xs.len() }

    /// Step between the first two nodes, the `h` every difference
    /// method works with.
    pub fn step(&self) -> f64 { self.xs[1] - self.xs[0] }

    /// Returns the step if every consecutive gap matches it within `rtol`
    /// relative to `|h|`.
    ///
    /// # Errors
    /// - [`InterpolationError::NonUniformSpacing`] naming the first offending node.
    pub fn check_uniform(&self, rtol: f64) -> Result<f64, InterpolationError> {
        uniform_step(&self.xs, rtol)
    }

    pub fn is_uniform(&self) -> bool {
        self.check_uniform(DEFAULT_STEP_RTOL).is_ok()
    }

    /// Validated single-point evaluation.
    ///
    /// Unlike [`crate::interpolation::interpolate`], rejects non-uniform
    /// tables for every algorithm that assumes a constant step.
    pub fn value(&self, algorithm: Algorithm, x: f64) -> Result<f64, InterpolationError> {
        if algorithm.requires_uniform_spacing() {
            self.check_uniform(DEFAULT_STEP_RTOL)?;
        }
        algorithm.value(&self.xs, &self.ys, x)
    }

    /// Smallest and largest x, whatever the node order.
    pub fn x_range(&self) -> (f64, f64) {
        self.xs.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
    }
}
