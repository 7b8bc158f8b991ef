//! Parsing of whitespace-separated number rows.

use crate::data::errors::DataError;
use crate::interpolation::DataSet;

/// Parses one row of whitespace-separated numbers.
///
/// `line` is the 1-based line number reported on failure.
pub fn parse_line(text: &str, line: usize) -> Result<Vec<f64>, DataError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| DataError::Parse {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Builds a [`DataSet`] from the first two non-blank `lines`:
/// x values, then y values. Later lines are ignored.
pub fn parse_table<'a, I>(lines: I) -> Result<DataSet, DataError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rows = lines
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .take(2);

    let (x_line, x_text) = rows.next().ok_or(DataError::MissingLine { expected: 2, got: 0 })?;
    let (y_line, y_text) = rows.next().ok_or(DataError::MissingLine { expected: 2, got: 1 })?;

    let xs = parse_line(x_text, x_line + 1)?;
    let ys = parse_line(y_text, y_line + 1)?;

    Ok(DataSet::new(xs, ys)?)
}
