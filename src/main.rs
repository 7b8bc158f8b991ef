//! tabula - classical interpolation over tabulated nodes
//!
//! Reads a node table, optionally prints its forward differences, and
//! reports every selected method's value at the requested point.

use anyhow::Context;
use tracing::info;

use tabula::config::OutputFormat;
use tabula::interpolation::{compare, ComparisonCfg, DifferenceReport, DifferenceTable};
use tabula::output::{filter_methods, format_values, sample_curves, JsonOutput};
use tabula::{init_tracing, log_error, log_timed_operation, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config.log_level);

    info!("Starting tabula v{}", env!("CARGO_PKG_VERSION"));

    let (data, exact) = config.read_data().map_err(|e| {
        log_error(&e, "reading node table");
        e
    })?;
    info!(nodes = data.len(), uniform = data.is_uniform(), "node table ready");

    let table = config.show_table.then(|| DifferenceTable::forward(data.ys()));

    let x_eval = [config.x];
    let report = log_timed_operation("compare", || {
        let cfg = ComparisonCfg::new()
            .set_x(data.xs())?
            .set_y(data.ys())?
            .set_x_eval(&x_eval)?;
        compare(cfg)
    })
    .context("interpolation failed")?;

    let samples = config
        .samples
        .and_then(|points| sample_curves(&data, &config.methods, points, exact));

    match config.format {
        OutputFormat::Json => {
            let output = JsonOutput {
                report: filter_methods(report, &config.methods),
                differences: table.as_ref(),
                samples,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if let Some(table) = &table {
                println!("Forward differences:");
                println!("{}", DifferenceReport::new(data.xs(), table));
            }
            print!("{}", format_values(&report, &config.methods));
            if let Some(samples) = samples {
                println!();
                print!("{samples}");
            }
        }
    }

    Ok(())
}
