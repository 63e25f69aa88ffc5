use calamine::{Data, Range};
use chrono::{NaiveTime, TimeDelta};

use crate::types::{CellValue, PreviewRow, SheetSummary, trim_trailing_empty};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// A single worksheet loaded from a [`super::workbook::Workbook`].
///
/// Rows and columns are addressed from A1, so leading blank rows/columns count toward the
/// extent the same way a spreadsheet application reports it. Cells holding a formula show the
/// formula text instead of its cached result.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    values: Range<Data>,
    formulas: Range<String>,
}

impl Sheet {
    pub(crate) fn new(
        name: impl Into<String>,
        values: Range<Data>,
        formulas: Range<String>,
    ) -> Self {
        Self {
            name: name.into(),
            values,
            formulas,
        }
    }

    /// Sheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last populated row, counted from row 1.
    ///
    /// A sheet without any cell reports 0 here, where openpyxl's `max_row` would report 1.
    pub fn row_count(&self) -> usize {
        self.extent().map_or(0, |(row, _)| row as usize + 1)
    }

    /// Last populated column, counted from column 1 (0 for a sheet without any cell).
    pub fn column_count(&self) -> usize {
        self.extent().map_or(0, |(_, col)| col as usize + 1)
    }

    // Bottom-right corner over both values and formulas.
    fn extent(&self) -> Option<(u32, u32)> {
        match (self.values.end(), self.formulas.end()) {
            (Some(v), Some(f)) => Some((v.0.max(f.0), v.1.max(f.1))),
            (v, f) => v.or(f),
        }
    }

    /// Lazily yields the first `limit` rows (fewer if the sheet is shorter).
    pub fn rows(&self, limit: usize) -> RowWindow<'_> {
        RowWindow {
            sheet: self,
            next_row: 0,
            end_row: limit.min(self.row_count()),
        }
    }

    /// Reads the preview window and builds the sheet's summary.
    ///
    /// Rows that are empty after trimming are dropped, but keep consuming row numbers.
    pub fn summarize(&self, limit: usize) -> SheetSummary {
        let mut rows_read = 0;
        let mut rows = Vec::new();
        for (index, cells) in self.rows(limit) {
            rows_read += 1;
            let cells = trim_trailing_empty(cells);
            if !cells.is_empty() {
                rows.push(PreviewRow { index, cells });
            }
        }

        SheetSummary {
            name: self.name.clone(),
            rows,
            rows_read,
            row_count: self.row_count(),
            column_count: self.column_count(),
        }
    }

    fn read_cell(&self, pos: (u32, u32)) -> CellValue {
        match self.formulas.get_value(pos) {
            Some(f) if !f.is_empty() => CellValue::Text(format!("={f}")),
            _ => self.values.get_value(pos).map_or(CellValue::Empty, convert_cell),
        }
    }

    fn read_row(&self, row: u32) -> Vec<CellValue> {
        (0..self.column_count() as u32)
            .map(|col| self.read_cell((row, col)))
            .collect()
    }
}

/// Finite, non-restartable iterator over the leading rows of a [`Sheet`].
///
/// Yields `(row_number, cells)` with 1-based row numbers; each row is padded with
/// [`CellValue::Empty`] to the sheet's column count and converted only when pulled.
#[derive(Debug)]
pub struct RowWindow<'a> {
    sheet: &'a Sheet,
    next_row: usize,
    end_row: usize,
}

impl Iterator for RowWindow<'_> {
    type Item = (usize, Vec<CellValue>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.end_row {
            return None;
        }
        let row = self.next_row;
        self.next_row += 1;
        Some((row + 1, self.sheet.read_row(row as u32)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end_row - self.next_row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowWindow<'_> {}

/// Converts a reader cell into a [`CellValue`].
///
/// Date-formatted serials below 1 carry no date part and become a time of day; duration
/// formats become elapsed time.
pub(crate) fn convert_cell(c: &Data) -> CellValue {
    match c {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            if dt.is_duration() {
                CellValue::Duration(serial_to_duration(serial))
            } else if (0.0..1.0).contains(&serial) {
                serial_to_time(serial).map_or(CellValue::Number(serial), CellValue::Time)
            } else {
                dt.as_datetime()
                    .map_or(CellValue::Number(serial), CellValue::DateTime)
            }
        }
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

fn serial_to_duration(serial: f64) -> TimeDelta {
    TimeDelta::microseconds((serial * MICROS_PER_DAY).round() as i64)
}

fn serial_to_time(serial: f64) -> Option<NaiveTime> {
    // Rounding can push 23:59:59.9999995 onto the next day; keep it on the last microsecond.
    let micros = ((serial * MICROS_PER_DAY).round() as u64).min(MICROS_PER_DAY as u64 - 1);
    NaiveTime::from_num_seconds_from_midnight_opt(
        (micros / 1_000_000) as u32,
        (micros % 1_000_000) as u32 * 1_000,
    )
}
