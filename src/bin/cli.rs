// src/bin/cli.rs
use std::process::ExitCode;

use clap::Parser;
use faq_scrape::cli::Cli;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    Cli::parse().run()
}
