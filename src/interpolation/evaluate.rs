//! Batch evaluation of a single algorithm.
//!
//! Validates the node table once, then evaluates the chosen [`Algorithm`]
//! at every point of `x_eval`. Points outside the node range are allowed;
//! every formula here extrapolates.


use tracing::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, uniform_step, CommonCfg};
use crate::interpolation::difference::DifferenceTable;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;


/// Single-algorithm configuration
///
/// # Fields
/// - `common`    : [`CommonCfg`]
/// - `algorithm` : [`Algorithm`] to run
///
/// # Construction
/// - Use [`InterpolationCfg::new`] then the setters.
///
/// # Defaults
/// - Minimum allowed distance between any two `x` nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
/// - Relative step tolerance for the uniform-spacing check;
///   [`crate::interpolation::config::DEFAULT_STEP_RTOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct InterpolationCfg<'a> {
    common: CommonCfg<'a>,
    algorithm: Algorithm,
}
impl<'a> InterpolationCfg<'a> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { common: CommonCfg::new(), algorithm }
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }
}
impl_common_cfg!(InterpolationCfg<'a>);


/// Evaluates `cfg.algorithm()` at every point of `cfg.common().x_eval()`.
///
/// # Behavior
/// - Re-validates the node table (both `x` and `y` must have been set).
/// - Rejects non-uniform spacing unless the algorithm is
///   [`Algorithm::Lagrange`].
/// - Builds the forward-difference table once and reuses it for every point.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : e.g. `"gauss_forward"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - Any node-table error from [`CommonCfg::validate`].
/// - [`InterpolationError::NonUniformSpacing`] for difference methods.
/// - [`InterpolationError::InsufficientNodes`] for Stirling with `n < 3`.
pub fn evaluate(cfg: InterpolationCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let algorithm = cfg.algorithm;
    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    if algorithm.requires_uniform_spacing() {
        uniform_step(x, cfg.common.step_rtol())?;
    }
    if x.len() < algorithm.min_nodes() {
        return Err(InterpolationError::InsufficientNodes {
            algorithm: algorithm.algorithm_name(),
            got: x.len(),
            need: algorithm.min_nodes(),
        });
    }

    let n_provided  = x.len();
    let n_evaluated = evals.len();

    let mut report = InterpolationReport::new(algorithm, n_provided, n_evaluated);
    report.evaluated.reserve(n_evaluated);

    debug!(algorithm = %algorithm, n_provided, n_evaluated, "evaluating interpolant");

    let table = DifferenceTable::forward(y);
    for &xq in evals {
        let yq = algorithm.value_with_table(x, y, &table, xq)?;
        report.evaluated.push(yq);
    }

    Ok(report)
}
