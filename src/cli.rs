// src/cli.rs
use std::process::ExitCode;

use clap::ArgAction;
use tracing_subscriber::EnvFilter;

use crate::config::consts::{DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
use crate::config::options::{AppOptions, ExportFormat, Lang, Whitespace};
use crate::error::Error;
use crate::runner::{self, RunOutcome};

pub const NO_DATA_MESSAGE: &str = "No FAQ data found; the page structure may have changed.";

/// Fetch a definition-list FAQ page and save its question/answer pairs to a spreadsheet.
#[derive(Debug, clap::Parser)]
#[command(name = "faq_scrape", version, about)]
pub struct Cli {
    /// Page to scrape
    #[arg(short, long, default_value = DEFAULT_URL)]
    url: String,

    /// Output file. An extension typed here is kept regardless of --format
    #[arg(short, long)]
    out: Option<String>,

    /// Output format: xlsx, csv or tsv
    #[arg(short, long, default_value_t = ExportFormat::Xlsx)]
    format: ExportFormat,

    /// Header language: ja or en
    #[arg(long, default_value = "ja")]
    lang: Lang,

    /// Request timeout in seconds (0 waits forever)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Collapse runs of whitespace inside questions and answers
    #[arg(long)]
    collapse_ws: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.url = self.url.clone();
        opts.scrape.set_timeout_secs(self.timeout);
        if self.collapse_ws {
            opts.scrape.whitespace = Whitespace::Collapse;
        }

        opts.export.format = self.format;
        opts.export.lang = self.lang;
        if let Some(out) = &self.out {
            opts.export.set_path(out);
        }
        opts
    }

    /// Run the pipeline once and print a single status line.
    pub fn run(self) -> color_eyre::Result<ExitCode> {
        setup_logging(self.verbose);

        let conclusion = conclude(runner::run(&self.options()))?;
        if conclusion.failed {
            eprintln!("{}", conclusion.message);
            Ok(ExitCode::FAILURE)
        } else {
            println!("{}", conclusion.message);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Status line for the console and whether the run counts as failed.
#[derive(Debug, PartialEq, Eq)]
pub struct Conclusion {
    pub message: String,
    /// Failed runs print to stderr and exit 1.
    pub failed: bool,
}

/// Map a run result onto the console contract.
///
/// Outcomes (including an empty page) succeed. A bad HTTP status is reported as a
/// failed run; anything else unexpected is handed back for color-eyre to render.
pub fn conclude(result: Result<RunOutcome, Error>) -> color_eyre::Result<Conclusion> {
    match result {
        Ok(outcome) => Ok(Conclusion { message: outcome_message(&outcome), failed: false }),
        Err(e @ Error::Status { .. }) => Ok(Conclusion { message: e.to_string(), failed: true }),
        Err(e) => Err(color_eyre::Report::new(e).wrap_err("FAQ export failed")),
    }
}

/// Human status line for a finished run.
pub fn outcome_message(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Written { path, rows } => {
            format!("Saved {rows} FAQ entries to '{}'.", path.display())
        }
        RunOutcome::Empty => NO_DATA_MESSAGE.to_string(),
    }
}

/// `RUST_LOG`, when set and valid, replaces the `-v` level entirely.
fn log_filter(verbosity: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(verbosity, rust_log.as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;

    use super::*;

    #[test]
    fn no_arguments_reproduce_the_fixed_procedure() {
        let cli = Cli::try_parse_from(["faq_scrape"]).unwrap();
        let opts = cli.options();
        assert_eq!(opts.scrape.url, DEFAULT_URL);
        assert_eq!(opts.scrape.timeout, Some(Duration::from_secs(30)));
        assert_eq!(opts.export.out_path(), PathBuf::from("researchmap_faq.xlsx"));
        assert_eq!(opts.export.lang, Lang::Ja);
    }

    #[test]
    fn flags_map_onto_options() {
        let cli = Cli::try_parse_from([
            "faq_scrape", "-u", "http://example.com/faq", "-f", "csv", "--lang", "en",
            "--timeout", "0", "--collapse-ws", "-o", "dump/faq", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        let opts = cli.options();
        assert_eq!(opts.scrape.url, "http://example.com/faq");
        assert_eq!(opts.scrape.timeout, None);
        assert_eq!(opts.scrape.whitespace, Whitespace::Collapse);
        assert_eq!(opts.export.format, ExportFormat::Csv);
        assert_eq!(opts.export.lang, Lang::En);
        assert_eq!(opts.export.out_path(), PathBuf::from("dump").join("faq.csv"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["faq_scrape", "--format", "ods"]).is_err());
    }

    #[test]
    fn http_status_is_a_failed_run_on_stderr() {
        let err = Error::Status { url: DEFAULT_URL.to_string(), status: 404 };
        let c = conclude(Err(err)).unwrap();
        assert!(c.failed);
        assert_eq!(c.message, format!("Failed to fetch {DEFAULT_URL}: HTTP status 404"));
    }

    #[test]
    fn empty_page_is_not_a_failure() {
        let c = conclude(Ok(RunOutcome::Empty)).unwrap();
        assert_eq!(c, Conclusion { message: NO_DATA_MESSAGE.to_string(), failed: false });
    }

    #[test]
    fn other_errors_go_to_color_eyre() {
        let err = Error::NotADirectory(PathBuf::from("blocker"));
        assert!(conclude(Err(err)).is_err());
    }

    #[test]
    fn rust_log_replaces_verbosity() {
        let from_env = log_filter(0, Some("debug")).to_string().to_ascii_lowercase();
        assert!(from_env.contains("debug"));
        assert!(!from_env.contains("warn"));

        let from_flag = log_filter(2, None).to_string().to_ascii_lowercase();
        assert!(from_flag.contains("debug"));

        let blank = log_filter(0, Some("  ")).to_string().to_ascii_lowercase();
        assert!(blank.contains("warn"));
    }

    #[test]
    fn status_lines() {
        let written = RunOutcome::Written { path: PathBuf::from("researchmap_faq.xlsx"), rows: 2 };
        assert_eq!(outcome_message(&written), "Saved 2 FAQ entries to 'researchmap_faq.xlsx'.");
        assert_eq!(outcome_message(&RunOutcome::Empty), NO_DATA_MESSAGE);
    }
}
