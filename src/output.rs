//! Rendering of interpolation results for the tabula binary.
//!
//! Text output is produced as `String`s (or `Display` impls) so it can be
//! checked without a terminal; JSON output is a single [`JsonOutput`]
//! document.

use std::fmt::{self, Write};

use serde::Serialize;
use tracing::warn;

use crate::data::SampleFunction;
use crate::interpolation::report::{ComparisonReport, MethodOutcome};
use crate::interpolation::traits::DEFAULT_MARGIN;
use crate::interpolation::{Algorithm, DataSet, DifferenceTable, Interpolant};

/// Keeps only the entries for `methods`, in report order.
pub fn filter_methods(mut report: ComparisonReport, methods: &[Algorithm]) -> ComparisonReport {
    report.methods.retain(|(algorithm, _)| methods.contains(algorithm));
    report
}

/// One line per selected method, `"{label:<16}→ {value:.6}"`, under a
/// `Values at x = …` header. Failed methods print their error instead.
pub fn format_values(report: &ComparisonReport, methods: &[Algorithm]) -> String {
    let mut out = String::new();
    let x = report.x_eval.first().copied().unwrap_or(f64::NAN);
    let _ = writeln!(out, "Values at x = {x:.6}");

    for (algorithm, outcome) in &report.methods {
        if !methods.contains(algorithm) {
            continue;
        }
        let _ = match outcome {
            MethodOutcome::Evaluated { values } => match values.first() {
                Some(v) => writeln!(out, "{:<16}→ {:.6}", algorithm.label(), v),
                None    => writeln!(out, "{:<16}→ -", algorithm.label()),
            },
            MethodOutcome::Failed { error } => writeln!(out, "{:<16}→ {}", algorithm.label(), error),
        };
    }

    out
}


/// Exact values of the function a table was sampled from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactCurve {
    pub function: SampleFunction,
    pub values: Vec<f64>,
}

/// Every selected method sampled on a shared grid.
///
/// [`SampledCurves`]
/// - `x`      : grid, `points + 1` values over the node range widened by
///   [`DEFAULT_MARGIN`] on both sides
/// - `exact`  : the sampled function on the same grid, when known
/// - `curves` : one column per method that evaluated on every grid point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledCurves {
    pub x: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<ExactCurve>,
    pub curves: Vec<(Algorithm, Vec<f64>)>,
}

/// Samples `methods` over `[min x - 0.1, max x + 0.1]` in `points` segments.
///
/// Methods that fail (non-uniform nodes, Stirling on two nodes) are logged
/// and left out. Returns `None` when `points` is zero or nothing is left to
/// show.
pub fn sample_curves(
    data: &DataSet,
    methods: &[Algorithm],
    points: usize,
    exact: Option<SampleFunction>,
) -> Option<SampledCurves> {
    if points == 0 {
        return None;
    }
    let (lo, hi) = data.x_range();
    let (left, right) = (lo - DEFAULT_MARGIN, hi + DEFAULT_MARGIN);

    let mut x = Vec::new();
    let mut curves = Vec::with_capacity(methods.len());
    for &algorithm in methods {
        match Interpolant::new(algorithm, data).sample(left, right, points) {
            Ok(pairs) => {
                let (grid, values): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
                x = grid;
                curves.push((algorithm, values));
            }
            Err(err) => warn!(algorithm = %algorithm, error = %err, "curve skipped"),
        }
    }

    if curves.is_empty() {
        if exact.is_none() {
            return None;
        }
        let step = (right - left) / points as f64;
        x = (0..=points).map(|i| left + i as f64 * step).collect();
    }

    let exact = exact.map(|function| ExactCurve {
        function,
        values: x.iter().map(|&xi| function.apply(xi)).collect(),
    });

    Some(SampledCurves { x, exact, curves })
}

impl fmt::Display for SampledCurves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>12}", "x")?;
        if let Some(exact) = &self.exact {
            write!(f, " {:>16}", exact.function.name())?;
        }
        for (algorithm, _) in &self.curves {
            write!(f, " {:>16}", algorithm.algorithm_name())?;
        }
        writeln!(f)?;

        for (i, x) in self.x.iter().enumerate() {
            write!(f, "{x:>12.6}")?;
            if let Some(exact) = &self.exact {
                write!(f, " {:>16.6}", exact.values[i])?;
            }
            for (_, values) in &self.curves {
                write!(f, " {:>16.6}", values[i])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}


/// Everything the binary prints in JSON mode.
///
/// The comparison fields sit at the top level; `differences` and `samples`
/// appear only when requested.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    #[serde(flatten)]
    pub report: ComparisonReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differences: Option<&'a DifferenceTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<SampledCurves>,
}
