// src/config/options.rs
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// How extracted text is normalized before it becomes a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Whitespace {
    /// Strip leading/trailing whitespace only.
    #[default]
    Trim,
    /// Also collapse internal runs into a single space.
    Collapse,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    pub whitespace: Whitespace,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            whitespace: Whitespace::Trim,
        }
    }
}

impl ScrapeOptions {
    /// Seconds from the command line; 0 disables the timeout.
    pub fn set_timeout_secs(&mut self, secs: u64) {
        self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Xlsx => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {other} (expected xlsx, csv or tsv)")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ext())
    }
}

/// Language of the header row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Ja,
    En,
}

impl Lang {
    pub fn labels(&self) -> [&'static str; 2] {
        match self {
            Lang::Ja => LABELS_JA,
            Lang::En => LABELS_EN,
        }
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" => Ok(Lang::Ja),
            "en" => Ok(Lang::En),
            other => Err(format!("Unknown language: {other} (expected ja or en)")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub lang: Lang,
    out_path: OutputPath,
}

impl ExportOptions {
    /// Final file path. A user-supplied extension wins; otherwise the format picks it.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.ext {
            Some(ext) => name.push(ext),
            None => name.push(self.format.ext()),
        }
        self.out_path.dir.join(name)
    }

    /// Parse a user path into dir + stem (+ extension if one was typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());

        self.out_path.dir = p
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
