//! Newton (Forward/Backward Difference) Interpolation
//!
//! Implements global polynomial interpolation on uniformly spaced nodes using
//! [Newton's forward and backward difference formulas](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Both formulas walk one edge of the difference pyramid: the forward
//! formula reads the top diagonal `table[0][k]`, the backward formula the
//! bottom diagonal `table[n-1-k][k]`. Neither terminates early.
//!
//! The step is taken as `h = x[1] - x[0]` and trusted for the whole table.


use crate::interpolation::difference::DifferenceTable;


/// Newton forward-difference interpolation anchored at `x[0]`.
///
/// ```text
/// τ = (x - x[0]) / h
/// P(x) = Σ_k  τ(τ-1)…(τ-k+1) / k! · Δᵏy[0]
/// ```
pub fn forward(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    forward_with_table(xs, &DifferenceTable::forward(ys), x)
}

pub(crate) fn forward_with_table(xs: &[f64], table: &DifferenceTable, x: f64) -> f64 {
    let h   = xs[1] - xs[0];
    let tau = (x - xs[0]) / h;

    let diagonal = table.diagonal(0);
    let mut result = diagonal[0];
    let mut factor = 1.0;

    for (k, &delta) in diagonal.iter().enumerate().skip(1) {
        factor *= (tau - (k - 1) as f64) / k as f64;
        result += factor * delta;
    }

    result
}


/// Newton backward-difference interpolation anchored at `x[n-1]`.
///
/// ```text
/// τ = (x - x[n-1]) / h
/// P(x) = Σ_k  τ(τ+1)…(τ+k-1) / k! · ∇ᵏy[n-1]
/// ```
/// where `∇ᵏy[n-1] = Δᵏy[n-1-k]`.
pub fn backward(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    backward_with_table(xs, &DifferenceTable::forward(ys), x)
}

pub(crate) fn backward_with_table(xs: &[f64], table: &DifferenceTable, x: f64) -> f64 {
    let n   = table.len();
    let h   = xs[1] - xs[0];
    let tau = (x - xs[n - 1]) / h;

    let mut result = table.column(0)[n - 1];
    let mut factor = 1.0;

    for k in 1..n {
        factor *= (tau + (k - 1) as f64) / k as f64;
        // row n-1-k always holds an order-k entry
        if let Some(delta) = table.get(n - 1 - k, k) {
            result += factor * delta;
        }
    }

    result
}
