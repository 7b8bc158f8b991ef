//! Polynomial interpolation over tabulated nodes.
//!
//! Seven classical formulas share one forward-difference table:
//! [`lagrange`], [`newton`] forward/backward, [`gauss`] forward/backward,
//! [`stirling`] and [`bessel`]. Every method except Lagrange assumes the
//! nodes are uniformly spaced with step `h = x[1] - x[0]` and does NOT check
//! it; [`DataSet::value`], [`evaluate`] and [`compare`] are the checked
//! entry points.

// common helpers
pub mod algorithms;
pub mod config;
pub mod dataset;
pub mod difference;
pub mod errors;
pub mod report;
pub mod traits;
pub use algorithms::Algorithm;
pub use dataset::DataSet;
pub use difference::{DifferenceReport, DifferenceTable};
pub use errors::InterpolationError;
pub use traits::{Interpolant, Interpolator};

// algorithms
pub mod lagrange;
pub mod newton;
pub mod gauss;
pub mod stirling;
pub mod bessel;

// batch runs
pub mod evaluate;
pub mod compare;
pub use evaluate::{evaluate, InterpolationCfg};
pub use compare::{compare, ComparisonCfg};


/// Evaluates `algorithm` through the nodes `(xs, ys)` at `x`.
///
/// # Preconditions
/// `xs` and `ys` have equal length of at least 2 and the `xs` are pairwise
/// distinct. For every algorithm except [`Algorithm::Lagrange`] the nodes
/// must also be uniformly spaced: the step is read from the first two nodes
/// only, and a non-uniform table yields a silently wrong value rather than
/// an error.
///
/// # Errors
/// - [`InterpolationError::InsufficientNodes`] for [`Algorithm::Stirling`] with fewer than 3 nodes.
pub fn interpolate(algorithm: Algorithm, xs: &[f64], ys: &[f64], x: f64) -> Result<f64, InterpolationError> {
    algorithm.value(xs, ys, x)
}

/// Forward-difference table of `ys`; see [`DifferenceTable::forward`].
pub fn build_forward_differences(ys: &[f64]) -> DifferenceTable {
    DifferenceTable::forward(ys)
}

/// Divided-difference table of `(xs, ys)`; see [`DifferenceTable::divided`].
pub fn build_divided_differences(xs: &[f64], ys: &[f64]) -> DifferenceTable {
    DifferenceTable::divided(xs, ys)
}
