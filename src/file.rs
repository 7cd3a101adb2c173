// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::data::DataSet;
use crate::error::{Error, Result};
use crate::{csv, xlsx};

/// Write a single export file based on ExportOptions (path, format).
/// Always a full overwrite. Returns the final path written to.
pub fn write_export(export: &ExportOptions, data: &DataSet) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    match export.format.delimiter() {
        None => xlsx::write_workbook(&path, data)?,
        Some(sep) => {
            let io_err = |source| Error::Io { path: path.clone(), source };
            let file = File::create(&path).map_err(io_err)?; // truncate/overwrite
            csv::write_table(BufWriter::new(file), &data.headers, &data.rows, sep)
                .map_err(io_err)?;
        }
    }

    info!(path = %path.display(), rows = data.rows.len(), format = %export.format, "export written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::Io { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
