//! Core data model for workbook inspection.
//!
//! An inspection produces a [`WorkbookSummary`]: the ordered sheet names plus one
//! [`SheetSummary`] per sheet, each holding a bounded preview of [`PreviewRow`]s and the sheet's
//! full row/column extent.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

use crate::inspection::layout::LayoutReport;

/// A single cell value read from a sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent value. Distinct from `Text("")`.
    Empty,
    /// UTF-8 text (also used for formulas, error cells and ISO date/duration strings).
    Text(String),
    /// Numeric value; spreadsheets store integers as floats too.
    Number(f64),
    /// Boolean.
    Boolean(bool),
    /// Calendar date with time of day.
    DateTime(NaiveDateTime),
    /// Time of day only (serial value in `[0, 1)` with a date/time format).
    Time(NaiveTime),
    /// Elapsed time (cells formatted as `[h]:mm` and similar).
    Duration(TimeDelta),
}

impl CellValue {
    /// Returns `true` for [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Removes the maximal run of trailing [`CellValue::Empty`] cells.
///
/// Empty cells before the last non-empty cell keep their positions.
pub fn trim_trailing_empty(mut cells: Vec<CellValue>) -> Vec<CellValue> {
    let keep = cells
        .iter()
        .rposition(|c| !c.is_empty())
        .map_or(0, |idx| idx + 1);
    cells.truncate(keep);
    cells
}

/// One previewed row, after trailing-empty trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    /// 1-based row number as read from the sheet.
    pub index: usize,
    /// Trimmed cell values; never empty.
    pub cells: Vec<CellValue>,
}

/// Preview and extent of one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSummary {
    /// Sheet name.
    pub name: String,
    /// Rows from the preview window that still had data after trimming.
    pub rows: Vec<PreviewRow>,
    /// Number of rows read from the sheet (including rows dropped as empty).
    pub rows_read: usize,
    /// Last populated row, counted from row 1.
    pub row_count: usize,
    /// Last populated column, counted from column 1.
    pub column_count: usize,
}

/// Result of inspecting a whole workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookSummary {
    /// Sheet names in workbook order.
    pub sheet_names: Vec<String>,
    /// Per-sheet summaries, same order as `sheet_names`.
    pub sheets: Vec<SheetSummary>,
    /// Three-sheet layout check, when requested.
    pub layout: Option<LayoutReport>,
}

impl WorkbookSummary {
    /// Number of sheets in the workbook.
    pub fn sheet_count(&self) -> usize {
        self.sheet_names.len()
    }

    /// Total number of rows read across all sheet previews.
    pub fn rows_previewed(&self) -> usize {
        self.sheets.iter().map(|s| s.rows_read).sum()
    }
}
