//! Workbook inspection entrypoints and implementations.
//!
//! Most callers should use [`inspect_path`] (from [`summary`]) which:
//!
//! - opens the workbook read-only and lists its sheets in workbook order
//! - previews the leading rows of every sheet and records its full row/column extent
//! - optionally reports per-sheet progress and the final outcome to an [`InspectionObserver`]
//!
//! Lower-level pieces are also available under:
//! - [`workbook`] and [`sheet`] for direct sheet access and the lazy [`RowWindow`]
//! - [`layout`] for the config/data/colors sheet check

pub mod layout;
pub mod observability;
pub mod sheet;
pub mod summary;
pub mod workbook;

pub use layout::{LayoutReport, check_layout};
pub use observability::{
    InspectionContext, InspectionObserver, InspectionSeverity, InspectionStats, LogObserver,
};
pub use sheet::{RowWindow, Sheet};
pub use summary::{DEFAULT_ROW_LIMIT, InspectionOptions, inspect_path};
pub use workbook::Workbook;
