// src/csv.rs
use std::io::{self, Write};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line (if any) followed by every row.
pub fn write_table<W: Write>(
    mut w: W,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    sep: char,
) -> io::Result<()> {
    if let Some(h) = headers {
        write_row(&mut w, h, sep)?;
    }
    for r in rows {
        write_row(&mut w, r, sep)?;
    }
    w.flush()
}
