//! Gauss Central-Difference Interpolation
//!
//! Implements Gauss's forward (first) and backward (second) interpolation
//! formulas on uniformly spaced nodes. Both are anchored at the central node
//! `mid = n / 2` and zig-zag through the difference pyramid around it:
//!
//! ```text
//! forward  : Δy[mid], Δ²y[mid-1], Δ³y[mid-1], Δ⁴y[mid-2], …   row = mid - ⌊k/2⌋
//! backward : Δy[mid-1], Δ²y[mid-1], Δ³y[mid-2], Δ⁴y[mid-2], … row = mid - ⌈k/2⌉
//! ```
//!
//! The zig-zag runs out of table before order `n - 1` whenever the central
//! node is not centered enough (e.g. the forward formula on an even table).
//! The series is then truncated at the last order that exists; this is the
//! normal stopping condition, not an error.

use tracing::trace;

use crate::interpolation::difference::DifferenceTable;


/// Gauss forward interpolation anchored at `x[mid]`.
///
/// ```text
/// τ = (x - x[mid]) / h
/// P(x) = y[mid] + τ Δy[mid] + τ(τ-1)/2! Δ²y[mid-1]
///      + (τ+1)τ(τ-1)/3! Δ³y[mid-1] + (τ+1)τ(τ-1)(τ-2)/4! Δ⁴y[mid-2] + …
/// ```
pub fn forward(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    forward_with_table(xs, &DifferenceTable::forward(ys), x)
}

pub(crate) fn forward_with_table(xs: &[f64], table: &DifferenceTable, x: f64) -> f64 {
    let n   = table.len();
    let mid = n / 2;
    let h   = xs[1] - xs[0];
    let tau = (x - xs[mid]) / h;

    let mut result = table.column(0)[mid];
    let mut factor = 1.0;

    for k in 1..n {
        let half = (k / 2) as f64;
        factor *= if k % 2 == 0 { tau - half } else { tau + half };
        factor /= k as f64;

        let row = mid as isize - (k / 2) as isize;
        let Some(delta) = table.at(row, k) else {
            trace!(order = k, row, "gauss forward series truncated");
            break;
        };
        result += factor * delta;
    }

    result
}


/// Gauss backward interpolation anchored at `x[mid]`.
///
/// ```text
/// τ = (x - x[mid]) / h
/// P(x) = y[mid] + τ Δy[mid-1] + (τ+1)τ/2! Δ²y[mid-1]
///      + (τ+1)τ(τ-1)/3! Δ³y[mid-2] + (τ+2)(τ+1)τ(τ-1)/4! Δ⁴y[mid-2] + …
/// ```
pub fn backward(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    backward_with_table(xs, &DifferenceTable::forward(ys), x)
}

pub(crate) fn backward_with_table(xs: &[f64], table: &DifferenceTable, x: f64) -> f64 {
    let n   = table.len();
    let mid = n / 2;
    let h   = xs[1] - xs[0];
    let tau = (x - xs[mid]) / h;

    let mut result = table.column(0)[mid];
    let mut factor = 1.0;

    for k in 1..n {
        let half = (k / 2) as f64;
        factor *= if k % 2 == 0 { tau + half } else { tau - half };
        factor /= k as f64;

        let row = mid as isize - ((k + 1) / 2) as isize;
        let Some(delta) = table.at(row, k) else {
            trace!(order = k, row, "gauss backward series truncated");
            break;
        };
        result += factor * delta;
    }

    result
}

