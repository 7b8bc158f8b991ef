//! Stirling Central-Difference Interpolation
//!
//! Implements [Stirling's formula](https://en.wikipedia.org/wiki/Stirling%27s_interpolation_formula),
//! the mean of Gauss's forward and backward formulas, truncated after the
//! fourth difference:
//!
//! ```text
//! t = (x - x[mid]) / h,   mid = n / 2
//!
//! P(x) = y[mid]
//!      + t           · (Δy[mid]    + Δy[mid-1])  / 2
//!      + t²          ·  Δ²y[mid-1]               / 2
//!      + t(t²-1)     · (Δ³y[mid-1] + Δ³y[mid-2]) / 12
//!      + t²(t²-1)    ·  Δ⁴y[mid-2]               / 24
//! ```
//!
//! A term whose rows fall outside the table is skipped. Once a computed term
//! drops below [`CONVERGED_TERM`] in magnitude the series is treated as
//! converged and the remaining terms are not evaluated; for an even function
//! sampled symmetrically about `x[mid]` the first term vanishes identically,
//! so callers needing the full series on such tables should use
//! [`crate::interpolation::gauss`] instead.

use tracing::trace;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::difference::DifferenceTable;
use crate::interpolation::errors::InterpolationError;

const ALGORITHM: &str = Algorithm::Stirling.algorithm_name();

/// Needs two difference orders around the center.
pub const MIN_NODES: usize = 3;

/// Terms smaller than this end the series.
pub const CONVERGED_TERM: f64 = 1e-12;


/// Stirling interpolation anchored at `x[mid]`.
///
/// # Errors
/// - [`InterpolationError::InsufficientNodes`] if fewer than [`MIN_NODES`] nodes are given.
pub fn value(xs: &[f64], ys: &[f64], x: f64) -> Result<f64, InterpolationError> {
    value_with_table(xs, &DifferenceTable::forward(ys), x)
}

pub(crate) fn value_with_table(
    xs: &[f64],
    table: &DifferenceTable,
    x: f64,
) -> Result<f64, InterpolationError> {
    let n = table.len();
    if n < MIN_NODES {
        return Err(InterpolationError::InsufficientNodes {
            algorithm: ALGORITHM,
            got: n,
            need: MIN_NODES,
        });
    }

    let mid = n as isize / 2;
    let h   = xs[1] - xs[0];
    let t   = (x - xs[mid as usize]) / h;
    let t2  = t * t;
    let d   = |row: isize, order: usize| table.at(row, order);

    let mut result = table.column(0)[mid as usize];

    let terms = [
        d(mid, 1)
            .zip(d(mid - 1, 1))
            .map(|(a, b)| t * (a + b) / 2.0),
        d(mid - 1, 2)
            .map(|a| t2 * a / 2.0),
        d(mid - 1, 3)
            .zip(d(mid - 2, 3))
            .map(|(a, b)| t * (t2 - 1.0) * (a + b) / 12.0),
        d(mid - 2, 4)
            .map(|a| t2 * (t2 - 1.0) * a / 24.0),
    ];

    for (order, term) in terms.into_iter().enumerate() {
        let Some(term) = term else { continue };
        result += term;
        if term.abs() < CONVERGED_TERM {
            trace!(order = order + 1, "stirling series converged");
            return Ok(result);
        }
    }

    Ok(result)
}
