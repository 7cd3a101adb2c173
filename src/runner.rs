// src/runner.rs
use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    config::options::AppOptions,
    data::{DataSet, FaqRecord},
    error::Result,
    file, specs,
};

/// What a run produced.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Export written with `rows` data rows (header not counted).
    Written { path: PathBuf, rows: usize },
    /// Page had no pairs; nothing was written.
    Empty,
}

/// Top-level pipeline: fetch → extract → export. Each stage runs once.
pub fn run(opts: &AppOptions) -> Result<RunOutcome> {
    let records = specs::faq::fetch(&opts.scrape)?;
    export_records(opts, &records)
}

/// Extract and export from markup that was already fetched.
pub fn run_on_markup(opts: &AppOptions, markup: &str) -> Result<RunOutcome> {
    let records = specs::faq::parse_doc(markup, opts.scrape.whitespace);
    export_records(opts, &records)
}

fn export_records(opts: &AppOptions, records: &[FaqRecord]) -> Result<RunOutcome> {
    if records.is_empty() {
        warn!(url = %opts.scrape.url, "no FAQ pairs found, skipping export");
        return Ok(RunOutcome::Empty);
    }

    let data = DataSet::from_records(opts.export.lang.labels(), records);
    let path = file::write_export(&opts.export, &data)?;
    info!(rows = records.len(), "run finished");

    Ok(RunOutcome::Written { path, rows: records.len() })
}
