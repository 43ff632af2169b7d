use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info_span};

use pnr_cli::render::{labels_table, print_report, render_json, render_text};
use pnr_core::format_pnr_status;

use crate::cli::{FormatArgs, OutputFormatArg};

/// Format one booking. Returns `false` when the booking is invalid.
pub fn run_format(args: &FormatArgs) -> Result<bool> {
    let source = args
        .input
        .as_deref()
        .filter(|path| *path != Path::new("-"));
    let span = info_span!(
        "format",
        source = %source.map_or_else(|| "stdin".into(), |path| path.display().to_string())
    );
    let _guard = span.enter();

    let input = read_booking(source)?;
    let Some(report) = format_pnr_status(&input) else {
        return Ok(false);
    };
    debug!(
        passengers = report.summary.total_passengers,
        chart_prepared = report.chart_prepared,
        "report ready"
    );

    match args.output {
        OutputFormatArg::Table => print_report(&report),
        OutputFormatArg::Json => println!("{}", render_json(&report).context("serialize report")?),
        OutputFormatArg::Text => println!("{}", render_text(&report)),
    }
    Ok(true)
}

pub fn run_labels() {
    println!("{}", labels_table());
}

fn read_booking(path: Option<&Path>) -> Result<Value> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read booking {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("read booking from stdin")?,
    };
    serde_json::from_str(&text).context("parse booking JSON")
}
