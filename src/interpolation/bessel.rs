//! Bessel Central-Difference Interpolation
//!
//! Implements Bessel's formula, anchored halfway between the two central
//! nodes `x[mid-1]` and `x[mid]` (`mid = n / 2`, the right one of the pair):
//!
//! ```text
//! τ = (x - (x[mid-1] + x[mid]) / 2) / h
//!
//! P(x) = (y[mid-1] + y[mid]) / 2
//!      + τ                       ·  Δy[mid-1]
//!      + (τ²-¼)                  · (Δ²y[mid-1] + Δ²y[mid-2]) / 4
//!      + τ(τ²-¼)                 ·  Δ³y[mid-2]               / 6
//!      + (τ²-¼)(τ²-9/4)          · (Δ⁴y[mid-2] + Δ⁴y[mid-3]) / 48
//! ```
//!
//! Every order is gated on its own rows existing in the table; unlike the
//! Gauss formulas a missing order does not stop the later ones.

use crate::interpolation::difference::DifferenceTable;


/// Bessel interpolation anchored at the midpoint of `x[mid-1]` and `x[mid]`.
pub fn value(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    value_with_table(xs, &DifferenceTable::forward(ys), x)
}

pub(crate) fn value_with_table(xs: &[f64], table: &DifferenceTable, x: f64) -> f64 {
    let n   = table.len();
    let mid = n as isize / 2;
    let h   = xs[1] - xs[0];

    let (left, right) = ((mid - 1) as usize, mid as usize);
    let tau  = (x - (xs[left] + xs[right]) / 2.0) / h;
    let tau2 = tau * tau;
    let d    = |row: isize, order: usize| table.at(row, order);

    let ys = table.column(0);
    let mut result = (ys[left] + ys[right]) / 2.0;

    if let Some(a) = d(mid - 1, 1) {
        result += tau * a;
    }

    if let (Some(a), Some(b)) = (d(mid - 1, 2), d(mid - 2, 2)) {
        result += (tau2 - 0.25) * (a + b) / 4.0;
    }

    if let Some(a) = d(mid - 2, 3) {
        result += tau * (tau2 - 0.25) * a / 6.0;
    }

    if let (Some(a), Some(b)) = (d(mid - 2, 4), d(mid - 3, 4)) {
        result += (tau2 - 0.25) * (tau2 - 2.25) * (a + b) / 48.0;
    }

    result
}
