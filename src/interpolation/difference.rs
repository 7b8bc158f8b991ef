//! Finite-difference tables.
//!
//! A [`DifferenceTable`] stores the difference pyramid column by column:
//! column `k` holds the `n - k` differences of order `k`, so only the
//! triangular region `row + order < n` exists and anything past it reads
//! as `None` through [`DifferenceTable::get`].
//!
//! ```text
//! x0  y0
//!          Δy0
//! x1  y1          Δ²y0
//!          Δy1            Δ³y0
//! x2  y2          Δ²y1
//!          Δy2
//! x3  y3
//! ```

use std::fmt;

use serde::Serialize;

/// Forward (or divided) difference pyramid over `n` nodes.
///
/// Serializes as `{"columns": [[y…], [Δy…], …]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifferenceTable {
    columns: Vec<Vec<f64>>,
}

impl DifferenceTable {
    /// Builds forward differences,
    /// `table[i][k] = table[i + 1][k - 1] - table[i][k - 1]`.
    pub fn forward(ys: &[f64]) -> Self {
        let n = ys.len();
        let mut columns = Vec::with_capacity(n);
        columns.push(ys.to_vec());

        for order in 1..n {
            let prev = &columns[order - 1];
            let next: Vec<f64> = prev.windows(2).map(|w| w[1] - w[0]).collect();
            columns.push(next);
        }

        Self { columns }
    }

    /// Builds divided differences, each forward difference additionally
    /// divided by `xs[row + order] - xs[row]`.
    ///
    /// `xs` and `ys` must have equal length.
    pub fn divided(xs: &[f64], ys: &[f64]) -> Self {
        let n = ys.len();
        let mut columns = Vec::with_capacity(n);
        columns.push(ys.to_vec());

        for order in 1..n {
            let prev = &columns[order - 1];
            let next: Vec<f64> = (0..n - order)
                .map(|row| (prev[row + 1] - prev[row]) / (xs[row + order] - xs[row]))
                .collect();
            columns.push(next);
        }

        Self { columns }
    }

    /// Number of nodes the table was built from.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry at `(row, order)`, `None` outside `row + order < n`.
    #[inline]
    pub fn get(&self, row: usize, order: usize) -> Option<f64> {
        self.columns.get(order)?.get(row).copied()
    }

    /// Same as [`DifferenceTable::get`] for a possibly negative row,
    /// which central formulas produce when walking left of the table.
    #[inline]
    pub(crate) fn at(&self, row: isize, order: usize) -> Option<f64> {
        usize::try_from(row).ok().and_then(|r| self.get(r, order))
    }

    /// All differences of one order, top to bottom.
    pub fn column(&self, order: usize) -> &[f64] {
        self.columns.get(order).map_or(&[], Vec::as_slice)
    }

    /// Differences starting at one row, ordered by increasing order.
    pub fn diagonal(&self, row: usize) -> Vec<f64> {
        (0..self.len()).map_while(|order| self.get(row, order)).collect()
    }
}


/// Printable difference table with its node column.
///
/// ```text
///          x          y        D1y        D2y
///     0.0000     0.0000     1.0000     2.0000
///     1.0000     1.0000     3.0000
///     2.0000     4.0000
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DifferenceReport<'a> {
    pub xs: &'a [f64],
    pub table: &'a DifferenceTable,
}

impl<'a> DifferenceReport<'a> {
    pub fn new(xs: &'a [f64], table: &'a DifferenceTable) -> Self {
        Self { xs, table }
    }
}

impl fmt::Display for DifferenceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.table.len();

        write!(f, "{:>10} {:>10}", "x", "y")?;
        for order in 1..n {
            write!(f, " {:>10}", format!("D{order}y"))?;
        }
        writeln!(f)?;

        for (row, x) in self.xs.iter().enumerate().take(n) {
            write!(f, "{x:10.4}")?;
            for value in self.table.diagonal(row) {
                write!(f, " {value:10.4}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
