//! Node table stored in a text file.
//!
//! ```text
//! 0 1 2 3 4
//! 0 1 4 9 16
//! ```
//! First line x values, second line y values, whitespace separated.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::data::errors::DataError;
use crate::data::parse::parse_table;
use crate::data::DataProvider;
use crate::interpolation::DataSet;

#[derive(Debug, Clone)]
pub struct FileDataProvider {
    path: PathBuf,
}

impl FileDataProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for FileDataProvider {
    fn read(&mut self) -> Result<DataSet, DataError> {
        let content = std::fs::read_to_string(&self.path)?;
        let data = parse_table(content.lines())?;
        debug!(path = %self.path.display(), nodes = data.len(), "node table loaded");
        Ok(data)
    }
}
