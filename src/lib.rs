//! # tabula
//!
//! Classical polynomial interpolation over tabulated `(x, y)` nodes.
//!
//! ## Methods
//!
//! - **Lagrange** – any node spacing
//! - **Newton forward / backward** – anchored at the first / last node
//! - **Gauss forward / backward** – anchored at the central node
//! - **Stirling** – central node, four difference orders
//! - **Bessel** – halfway between the two central nodes
//!
//! All difference-based methods share one forward-difference table and
//! assume uniformly spaced nodes.
//!
//! ## Layout
//!
//! - [`interpolation`] – difference tables, the seven formulas, validation,
//!   batch evaluation and curve sampling
//! - [`data`] – node-table sources (reader, file, sampled function)
//! - [`config`] / [`logging`] – command-line configuration and tracing setup
//! - [`output`] – text and JSON rendering of results and sampled curves

pub mod config;
pub mod data;
pub mod interpolation;
pub mod logging;
pub mod output;

pub use config::Config;
pub use data::{DataError, DataProvider};
pub use interpolation::{
    build_divided_differences, build_forward_differences, interpolate, Algorithm, DataSet,
    DifferenceTable, InterpolationError,
};
pub use logging::{init_tracing, log_error, log_timed_operation};
