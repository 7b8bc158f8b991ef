//! Side-by-side evaluation of every algorithm.
//!
//! For each query point the forward-difference table is built once and
//! shared by all seven formulas. A failure in one algorithm (a non-uniform
//! table, too few nodes for Stirling) is recorded in its
//! [`MethodOutcome::Failed`] entry; the others still run.


use tracing::debug;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, uniform_step, CommonCfg};
use crate::interpolation::difference::DifferenceTable;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::{ComparisonReport, MethodOutcome};


/// All-algorithm configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`ComparisonCfg::new`] then the setters.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> ComparisonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for ComparisonCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(ComparisonCfg<'a>);


/// Evaluates every [`Algorithm`] at every point of `cfg.common().x_eval()`.
///
/// # Errors
/// - Node-table errors from [`CommonCfg::validate`] only; per-algorithm
///   failures land in the report.
pub fn compare(cfg: ComparisonCfg) -> Result<ComparisonReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let spacing = uniform_step(x, cfg.common.step_rtol()).err();
    if let Some(err) = &spacing {
        debug!(error = %err, "node table is not uniform, difference methods skipped");
    }

    let table = DifferenceTable::forward(y);
    let mut columns: Vec<Result<Vec<f64>, String>> = Algorithm::ALL
        .iter()
        .map(|algorithm| precheck(*algorithm, x.len(), spacing.as_ref()))
        .map(|checked| checked.map(|()| Vec::with_capacity(evals.len())))
        .collect();

    for &xq in evals {
        for (algorithm, column) in Algorithm::ALL.iter().zip(columns.iter_mut()) {
            if column.is_err() {
                continue;
            }
            match algorithm.value_with_table(x, y, &table, xq) {
                Ok(v) => {
                    if let Ok(values) = column {
                        values.push(v);
                    }
                }
                Err(err) => *column = Err(err.to_string()),
            }
        }
    }

    let methods = Algorithm::ALL
        .into_iter()
        .zip(columns)
        .map(|(algorithm, column)| {
            let outcome = match column {
                Ok(values) => MethodOutcome::Evaluated { values },
                Err(error) => MethodOutcome::Failed { error },
            };
            (algorithm, outcome)
        })
        .collect();

    Ok(ComparisonReport {
        n_provided: x.len(),
        x_eval: evals.to_vec(),
        methods,
    })
}


/// Failures known before any point is evaluated.
fn precheck(
    algorithm: Algorithm,
    n: usize,
    spacing: Option<&InterpolationError>,
) -> Result<(), String> {
    if let Some(err) = spacing.filter(|_| algorithm.requires_uniform_spacing()) {
        return Err(err.to_string());
    }
    if n < algorithm.min_nodes() {
        let err = InterpolationError::InsufficientNodes {
            algorithm: algorithm.algorithm_name(),
            got: n,
            need: algorithm.min_nodes(),
        };
        return Err(err.to_string());
    }
    Ok(())
}
