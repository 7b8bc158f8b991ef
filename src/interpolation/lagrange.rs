//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation through the
//! [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! The only method in the crate that does not read the difference table
//! and does not assume uniformly spaced nodes.

/// Evaluates the Lagrange polynomial through `(xs, ys)` at `x`.
///
/// ```text
/// P(x) = Σ_i y[i] · Π_{j≠i} (x - x[j]) / (x[i] - x[j])
/// ```
///
/// `O(n²)` per call; nodes may come in any order but must be distinct.
pub fn value(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let mut sum = 0.0;

    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut basis = 1.0;
        for (j, &xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            basis *= (x - xj) / (xi - xj);
        }
        sum += yi * basis;
    }

    sum
}
