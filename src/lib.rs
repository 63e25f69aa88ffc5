//! `workbook-inspect` previews the structure of an `.xlsx` workbook: its sheet names, the first
//! rows of every sheet, and each sheet's row/column extent.
//!
//! The primary entrypoint is [`inspection::inspect_path`], which returns a
//! [`types::WorkbookSummary`]. [`render::render_summary`] turns that summary into the
//! human-readable report printed by the `workbook-inspect` binary.
//!
//! ## What a summary contains
//!
//! - sheet names in workbook order
//! - per sheet, up to [`inspection::DEFAULT_ROW_LIMIT`] leading rows with trailing empty cells
//!   removed (rows that end up empty are dropped, but keep their row number)
//! - per sheet, the full row and column extent counted from A1
//!
//! Cells are typed [`types::CellValue`]s: `Empty`, `Text` (including formulas), `Number`,
//! `Boolean`, `DateTime`, `Time` or `Duration`.
//!
//! ## Quick example
//!
//! ```no_run
//! use workbook_inspect::inspection::{InspectionOptions, inspect_path};
//!
//! # fn main() -> Result<(), workbook_inspect::InspectionError> {
//! let summary = inspect_path("report.xlsx", &InspectionOptions::default())?;
//! for sheet in &summary.sheets {
//!     println!("{}: {} rows x {} cols", sheet.name, sheet.row_count, sheet.column_count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`inspection`]: opening workbooks, sheet previews, layout check, observers
//! - [`types`]: cell values and summary types
//! - [`render`]: text output
//! - [`error`]: error type used across inspection

pub mod error;
pub mod inspection;
pub mod render;
pub mod types;

pub use error::{InspectionError, InspectionResult};
