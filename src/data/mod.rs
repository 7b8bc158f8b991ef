//! Data acquisition.
//!
//! Every source produces a validated [`DataSet`] through the
//! [`DataProvider`] capability; interpolation never performs I/O itself.

pub mod errors;
pub mod parse;

pub mod file;
pub mod function;
pub mod reader;

pub use errors::DataError;
pub use file::FileDataProvider;
pub use function::{FunctionDataProvider, SampleFunction};
pub use reader::ReaderDataProvider;

use crate::interpolation::DataSet;

pub trait DataProvider {
    /// Produces one validated node table.
    fn read(&mut self) -> Result<DataSet, DataError>;
}
