// src/xlsx.rs
// Spreadsheet export. One sheet, bold header row, frozen under the header.

use std::borrow::Cow;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::warn;

use crate::data::DataSet;
use crate::error::Result;

const SHEET_NAME: &str = "FAQ";
const COLUMN_WIDTH: f64 = 60.0;

/// Excel's per-cell character limit.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Write `data` to `path` as `.xlsx`, replacing whatever was there.
/// Cells longer than [`MAX_CELL_CHARS`] are cut rather than failing the export.
pub fn write_workbook(path: &Path, data: &DataSet) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    let wrap = Format::new().set_text_wrap();

    let mut first_row = 0u32;
    if let Some(h) = &data.headers {
        for (col, label) in h.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, clip_cell(label), &bold)?;
        }
        sheet.set_freeze_panes(1, 0)?;
        first_row = 1;
    }

    let width = data
        .headers
        .as_ref()
        .map(Vec::len)
        .into_iter()
        .chain(data.rows.iter().map(Vec::len))
        .max()
        .unwrap_or(0);
    for col in 0..width {
        sheet.set_column_width(col as u16, COLUMN_WIDTH)?;
    }

    for (i, row) in data.rows.iter().enumerate() {
        let r = first_row + i as u32;
        for (col, cell) in row.iter().enumerate() {
            let text = clip_cell(cell);
            if matches!(text, Cow::Owned(_)) {
                warn!(row = i + 1, col, max = MAX_CELL_CHARS, "cell truncated to Excel's limit");
            }
            sheet.write_string_with_format(r, col as u16, text, &wrap)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// First [`MAX_CELL_CHARS`] chars of `s`, cut on a char boundary.
pub fn clip_cell(s: &str) -> Cow<'_, str> {
    match s.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => Cow::Owned(s[..cut].to_string()),
        None => Cow::Borrowed(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_cells_pass_through() {
        assert!(matches!(clip_cell("質問"), Cow::Borrowed("質問")));
        let exact = "a".repeat(MAX_CELL_CHARS);
        assert!(matches!(clip_cell(&exact), Cow::Borrowed(_)));
    }

    #[test]
    fn long_cells_cut_on_char_boundary() {
        let long = "あ".repeat(40_000);
        let clipped = clip_cell(&long);
        assert_eq!(clipped.chars().count(), MAX_CELL_CHARS);
        assert!(clipped.chars().all(|c| c == 'あ'));
    }
}
