//! Node table read from any line-oriented source, typically stdin.

use std::io::BufRead;

use tracing::debug;

use crate::data::errors::DataError;
use crate::data::parse::parse_table;
use crate::data::DataProvider;
use crate::interpolation::DataSet;

/// Reads two lines, x values then y values, from a [`BufRead`].
///
/// Each [`DataProvider::read`] consumes exactly the lines it needs, so a
/// caller can retry on the same reader after a validation error.
#[derive(Debug)]
pub struct ReaderDataProvider<R> {
    reader: R,
}

impl<R: BufRead> ReaderDataProvider<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_line(&mut self) -> Result<Option<String>, DataError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            if !buf.trim().is_empty() {
                return Ok(Some(buf));
            }
        }
    }
}

impl<R: BufRead> DataProvider for ReaderDataProvider<R> {
    fn read(&mut self) -> Result<DataSet, DataError> {
        let x_line = self.next_line()?.ok_or(DataError::MissingLine { expected: 2, got: 0 })?;
        let y_line = self.next_line()?.ok_or(DataError::MissingLine { expected: 2, got: 1 })?;

        let data = parse_table([x_line.as_str(), y_line.as_str()])?;
        debug!(nodes = data.len(), "node table read from input");
        Ok(data)
    }
}
