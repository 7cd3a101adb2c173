// src/error.rs
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server answered with a non-2xx status.
    #[error("Failed to fetch {url}: HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

impl Error {
    /// HTTP status when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
