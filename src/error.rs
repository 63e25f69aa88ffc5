use thiserror::Error;

use crate::inspection::InspectionSeverity;

/// Convenience result type for inspection operations.
pub type InspectionResult<T> = Result<T, InspectionError>;

/// Error type returned while opening or reading a workbook.
///
/// Callers at the top level treat every variant the same way (one diagnostic line, exit 1); the
/// variants exist so the cause stays readable and so observers can grade severity.
#[derive(Debug, Error)]
pub enum InspectionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The spreadsheet reader failed to open or decode the workbook.
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// A sheet was requested by a name the workbook does not list.
    #[error("sheet '{name}' not found in workbook")]
    UnknownSheet { name: String },
}

impl InspectionError {
    /// Returns `true` when the failure came from the filesystem rather than the file's content.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            InspectionError::Io(_) | InspectionError::Workbook(calamine::XlsxError::Io(_))
        )
    }

    /// Severity reported to observers: `Critical` when the file could not be read at all,
    /// `Error` when it was read but is not a usable workbook.
    pub fn severity(&self) -> InspectionSeverity {
        if self.is_io() {
            InspectionSeverity::Critical
        } else {
            InspectionSeverity::Error
        }
    }
}
