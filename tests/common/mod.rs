#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rust_xlsxwriter::{ExcelDateTime, Format, Formula, Workbook};

pub fn tmp_file(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("workbook-inspect-{name}-{nanos}.xlsx"))
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("workbook-inspect-{name}-{nanos}"));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// "Summary": 20 rows x 3 columns with row 5 left blank.
/// "Detail": 10 rows x 5 columns, fully populated.
pub fn write_summary_detail_xlsx(path: &Path) {
    let mut wb = Workbook::new();

    let ws1 = wb.add_worksheet();
    ws1.set_name("Summary").unwrap();
    for row in 0..20u32 {
        if row == 4 {
            continue;
        }
        ws1.write_string(row, 0, format!("item {}", row + 1)).unwrap();
        ws1.write_number(row, 1, row as f64).unwrap();
        ws1.write_number(row, 2, row as f64 + 0.5).unwrap();
    }

    let ws2 = wb.add_worksheet();
    ws2.set_name("Detail").unwrap();
    for row in 0..10u32 {
        for col in 0..5u16 {
            ws2.write_number(row, col, (row * 10 + col as u32) as f64).unwrap();
        }
    }

    wb.save(path).unwrap();
}

/// One sheet whose rows exercise trailing/internal empties and every cell type.
pub fn write_mixed_xlsx(path: &Path) {
    let mut wb = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let ws = wb.add_worksheet();
    ws.set_name("Mixed").unwrap();

    // Row 1: header spanning all four columns.
    ws.write_string(0, 0, "nome").unwrap();
    ws.write_string(0, 1, "prazo").unwrap();
    ws.write_string(0, 2, "ativo").unwrap();
    ws.write_string(0, 3, "inicio").unwrap();

    // Row 2: internal gap, nothing after column 3.
    ws.write_string(1, 0, "Ana").unwrap();
    ws.write_boolean(1, 2, true).unwrap();

    // Row 3: only the last column.
    let date = ExcelDateTime::from_ymd(2024, 1, 15).unwrap();
    ws.write_datetime_with_format(2, 3, &date, &date_format).unwrap();

    // Row 4: only the first column.
    ws.write_number(3, 0, 7).unwrap();

    wb.save(path).unwrap();
}

/// "Calc": a number with a formula next to it, a time of day, and an elapsed time.
pub fn write_calc_xlsx(path: &Path) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Calc").unwrap();

    // Row 1: value and a formula referring to it.
    ws.write_number(0, 0, 1).unwrap();
    ws.write_formula(0, 1, Formula::new("=A1+1")).unwrap();

    // Row 2: a time-only cell.
    let time = ExcelDateTime::from_hms(10, 30, 0).unwrap();
    ws.write_datetime_with_format(1, 0, &time, &Format::new().set_num_format("hh:mm"))
        .unwrap();

    // Row 3: 36 hours as elapsed time.
    ws.write_number_with_format(2, 0, 1.5, &Format::new().set_num_format("[h]:mm"))
        .unwrap();

    wb.save(path).unwrap();
}

pub fn write_sheets_xlsx(path: &Path, names: &[&str]) {
    let mut wb = Workbook::new();
    for name in names {
        let ws = wb.add_worksheet();
        ws.set_name(*name).unwrap();
        ws.write_string(0, 0, *name).unwrap();
    }
    wb.save(path).unwrap();
}
