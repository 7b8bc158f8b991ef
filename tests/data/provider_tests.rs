use std::io::{Cursor, Write};

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use tabula::data::parse::parse_line;
use tabula::data::{
    DataError, DataProvider, FileDataProvider, FunctionDataProvider, ReaderDataProvider,
    SampleFunction,
};
use tabula::interpolation::errors::InterpolationError;

type DataResult = Result<(), DataError>;

#[test]
fn parses_row() -> DataResult {
    assert_eq!(parse_line("  0 1.5\t-2e-1  ", 1)?, vec![0.0, 1.5, -0.2]);
    assert_eq!(parse_line("", 1)?, Vec::<f64>::new());
    Ok(())
}

#[test]
fn reports_bad_token() {
    let err = parse_line("1 2 three", 4).unwrap_err();
    match err {
        DataError::Parse { line, token } => {
            assert_eq!(line, 4);
            assert_eq!(token, "three");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn reader_skips_blank_lines() -> DataResult {
    let input = Cursor::new("\n   \n0 1 2 3\n\n0 1 4 9\n");
    let data = ReaderDataProvider::new(input).read()?;
    assert_eq!(data.xs(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(data.ys(), &[0.0, 1.0, 4.0, 9.0]);
    Ok(())
}

#[test]
fn reader_missing_lines() {
    let err = ReaderDataProvider::new(Cursor::new("")).read().unwrap_err();
    assert!(matches!(err, DataError::MissingLine { expected: 2, got: 0 }));

    let err = ReaderDataProvider::new(Cursor::new("0 1 2\n")).read().unwrap_err();
    assert!(matches!(err, DataError::MissingLine { expected: 2, got: 1 }));
}

#[test]
fn reader_retries_after_invalid_table() -> DataResult {
    let input = Cursor::new("0 1 1\n5 6 7\n0 1 2\n5 6 7\n");
    let mut provider = ReaderDataProvider::new(input);

    let err = provider.read().unwrap_err();
    assert!(matches!(
        err,
        DataError::Interpolation(InterpolationError::DuplicateX { .. })
    ));

    let data = provider.read()?;
    assert_eq!(data.xs(), &[0.0, 1.0, 2.0]);

    let rest = provider.into_inner();
    assert_eq!(rest.position() as usize, rest.get_ref().len());
    Ok(())
}

#[test]
fn reader_length_mismatch() {
    let err = ReaderDataProvider::new(Cursor::new("0 1 2\n0 1\n")).read().unwrap_err();
    assert!(matches!(
        err,
        DataError::Interpolation(InterpolationError::UnequalLength { x_len: 3, y_len: 2 })
    ));
}

#[test]
fn file_provider_reads_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "-1 -0.5 0 0.5 1")?;
    writeln!(file, "1 0.25 0 0.25 1")?;
    writeln!(file, "ignored trailing line")?;

    let mut provider = FileDataProvider::new(file.path());
    assert_eq!(provider.path(), file.path());

    let data = provider.read()?;
    assert_eq!(data.len(), 5);
    assert_eq!(data.ys(), &[1.0, 0.25, 0.0, 0.25, 1.0]);
    Ok(())
}

#[test]
fn file_provider_errors() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let err = FileDataProvider::new(dir.path().join("absent.txt")).read().unwrap_err();
    assert!(matches!(err, DataError::Io(_)));

    let mut file = NamedTempFile::new()?;
    writeln!(file, "0 1 2")?;
    let err = FileDataProvider::new(file.path()).read().unwrap_err();
    assert!(matches!(err, DataError::MissingLine { got: 1, .. }));

    let mut file = NamedTempFile::new()?;
    writeln!(file, "0 1 2")?;
    writeln!(file, "0 x 2")?;
    let err = FileDataProvider::new(file.path()).read().unwrap_err();
    assert!(matches!(err, DataError::Parse { line: 2, .. }));
    Ok(())
}

#[test]
fn function_provider_samples_uniformly() -> DataResult {
    let mut provider = FunctionDataProvider::new(SampleFunction::Sin, 0.0, 2.0, 5);
    assert_eq!(provider.function(), SampleFunction::Sin);

    let data = provider.read()?;
    assert_eq!(data.xs(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
    for (x, y) in data.xs().iter().zip(data.ys()) {
        assert!((y - x.sin()).abs() < 1e-15);
    }
    assert!(data.is_uniform());
    Ok(())
}

#[test]
fn function_provider_rejects_bad_input() {
    let err = FunctionDataProvider::new(SampleFunction::Exp, 1.0, 1.0, 5).read().unwrap_err();
    assert!(matches!(err, DataError::InvalidInterval { .. }));

    let err = FunctionDataProvider::new(SampleFunction::Exp, 0.0, f64::NAN, 5).read().unwrap_err();
    assert!(matches!(err, DataError::InvalidInterval { .. }));

    let err = FunctionDataProvider::new(SampleFunction::Cos, 0.0, 1.0, 1).read().unwrap_err();
    assert!(matches!(
        err,
        DataError::Interpolation(InterpolationError::InsufficientPoints { got: 1 })
    ));
}

#[test]
fn sample_function_names() -> DataResult {
    assert_eq!("sin".parse::<SampleFunction>()?, SampleFunction::Sin);
    assert_eq!("COS(x)".parse::<SampleFunction>()?, SampleFunction::Cos);
    assert_eq!("x^2".parse::<SampleFunction>()?, SampleFunction::Square);
    assert_eq!(SampleFunction::Square.to_string(), "x^2");
    assert_eq!(SampleFunction::Square.apply(-3.0), 9.0);

    for function in SampleFunction::ALL {
        assert_eq!(function.name().parse::<SampleFunction>()?, function);
    }

    let err = "tan".parse::<SampleFunction>().unwrap_err();
    assert!(matches!(err, DataError::UnknownFunction { name } if name == "tan"));
    Ok(())
}

#[test]
fn providers_as_trait_objects() -> DataResult {
    let mut providers: Vec<Box<dyn DataProvider>> = vec![
        Box::new(ReaderDataProvider::new(Cursor::new("0 1 2\n0 1 4\n"))),
        Box::new(FunctionDataProvider::new(SampleFunction::Square, 0.0, 2.0, 3)),
    ];

    let tables = providers
        .iter_mut()
        .map(|p| p.read())
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(tables[0].ys(), tables[1].ys());
    Ok(())
}
