//! Shared configuration for interpolation runs.
//!
//! Provides [`CommonCfg`] with default minimum allowed spacing between any two
//! `x` nodes, [`DEFAULT_X_TOL`], and the relative tolerance used when checking
//! that nodes are uniformly spaced, [`DEFAULT_STEP_RTOL`].
//!
//! [`CommonCfg`]: universal fields
//! - `x`         : x values provided
//! - `y`         : y values provided
//! - `x_eval`    : x values to evaluate
//! - `x_tol`     : minimum distance between any two x values
//! - `step_rtol` : allowed relative deviation from the first step
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.
//!
//! Per-run configurations ([`crate::interpolation::evaluate::InterpolationCfg`],
//! [`crate::interpolation::compare::ComparisonCfg`]) carry a [`CommonCfg`] and
//! share its setters via `impl_common_cfg!`.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;
pub const DEFAULT_STEP_RTOL: f64 = 1e-9;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
    pub(crate) step_rtol: f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
            step_rtol: DEFAULT_STEP_RTOL,
        }
    }

    pub fn validate(&self) -> Result<(), InterpolationError> {
        validate_nodes(self.x, self.y, self.x_min_spacing)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
    pub fn step_rtol(&self) -> f64 { self.step_rtol }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
    pub(crate) fn with_step_rtol(&mut self, v: f64) { self.step_rtol = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// First pair of x values closer than `tol`, in any order.
pub(crate) fn duplicate_pair(xs: &[f64], tol: f64) -> Option<(f64, f64)> {
    for (i, &a) in xs.iter().enumerate() {
        for &b in &xs[i + 1..] {
            if (a - b).abs() < tol {
                return Some((a, b));
            }
        }
    }
    None
}

/// Checks every step against `h = x[1] - x[0]`, returning `h`.
pub(crate) fn uniform_step(xs: &[f64], rtol: f64) -> Result<f64, InterpolationError> {
    if xs.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: xs.len() });
    }
    let h = xs[1] - xs[0];

    for (i, w) in xs.windows(2).enumerate().skip(1) {
        let step = w[1] - w[0];
        if (step - h).abs() > rtol * h.abs() {
            return Err(InterpolationError::NonUniformSpacing {
                idx: i + 1,
                expected: h,
                got: step,
            });
        }
    }

    Ok(h)
}

/// Full node-table checks shared by [`CommonCfg::validate`] and
/// [`crate::interpolation::DataSet::new`].
pub(crate) fn validate_nodes(x: &[f64], y: &[f64], x_tol: f64) -> Result<(), InterpolationError> {
    if x.is_empty() || y.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: x.len() });
    }
    if let Some(idx) = non_finite_idx(x).or_else(|| non_finite_idx(y)) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if let Some((x1, x2)) = duplicate_pair(x, x_tol) {
        return Err(InterpolationError::DuplicateX { x1, x2 });
    }
    Ok(())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                if v.len() < 2 {
                    return Err(InterpolationError::InsufficientPoints { got: v.len() });
                }
                if let Some((x1, x2)) =
                    $crate::interpolation::config::duplicate_pair(v, self.common.x_min_spacing)
                {
                    return Err(InterpolationError::DuplicateX { x1, x2 });
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            pub fn set_step_rtol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v < 0.0 {
                    return Err(InterpolationError::InvalidStepTol { got: v });
                }

                self.common.with_step_rtol(v);
                Ok(self)
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
