use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::dataset::DataSet;
use crate::interpolation::errors::InterpolationError;

/// Renderers sample this many segments across the plotted window.
pub const DEFAULT_SAMPLES: usize = 400;

/// Margin added on both sides of the node range by [`Interpolant::default_range`].
pub const DEFAULT_MARGIN: f64 = 0.1;

pub trait Interpolator {
    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}


/// One algorithm bound to one validated [`DataSet`].
///
/// Stateless apart from the borrow; every [`Interpolator::eval`] rebuilds its
/// own difference table, so a single `Interpolant` can be shared across
/// threads freely.
#[derive(Debug, Clone, Copy)]
pub struct Interpolant<'a> {
    algorithm: Algorithm,
    data: &'a DataSet,
}

impl<'a> Interpolant<'a> {
    pub fn new(algorithm: Algorithm, data: &'a DataSet) -> Self {
        Self { algorithm, data }
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }
    pub fn data(&self) -> &'a DataSet { self.data }

    /// `[min x - 0.1, max x + 0.1]`, the window a curve is usually drawn over.
    pub fn default_range(&self) -> (f64, f64) {
        let (lo, hi) = self.data.x_range();
        (lo - DEFAULT_MARGIN, hi + DEFAULT_MARGIN)
    }

    /// Samples `points + 1` evenly spaced `(x, y)` pairs over `[left, right]`,
    /// endpoints included.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidSampleRange`] unless `left < right`,
    ///   both finite, and `points >= 1`.
    /// - Whatever [`Interpolator::eval`] reports for the bound algorithm.
    pub fn sample(
        &self,
        left: f64,
        right: f64,
        points: usize,
    ) -> Result<Vec<(f64, f64)>, InterpolationError> {
        if !(left.is_finite() && right.is_finite()) || left >= right || points == 0 {
            return Err(InterpolationError::InvalidSampleRange { left, right, points });
        }

        let step = (right - left) / points as f64;
        (0..=points)
            .map(|i| {
                let x = left + i as f64 * step;
                self.eval(x).map(|y| (x, y))
            })
            .collect()
    }
}

impl Interpolator for Interpolant<'_> {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        self.data.value(self.algorithm, x)
    }
}
