use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Reader, Xlsx};

use crate::error::{InspectionError, InspectionResult};

use super::sheet::Sheet;

/// Read-only handle on an `.xlsx` workbook.
///
/// The handle is released by [`Workbook::close`], which consumes it; on early returns it is
/// released when dropped.
pub struct Workbook {
    inner: Xlsx<BufReader<File>>,
    sheet_names: Vec<String>,
}

impl Workbook {
    /// Open the workbook at `path`.
    pub fn open(path: impl AsRef<Path>) -> InspectionResult<Self> {
        let file = File::open(path.as_ref())?;
        let inner: Xlsx<_> = Xlsx::new(BufReader::new(file))?;
        let sheet_names = inner.sheet_names();
        Ok(Self { inner, sheet_names })
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// Load a sheet's cell values and formulas by name.
    pub fn sheet(&mut self, name: &str) -> InspectionResult<Sheet> {
        if !self.sheet_names.iter().any(|s| s == name) {
            return Err(InspectionError::UnknownSheet {
                name: name.to_string(),
            });
        }
        let values = self.inner.worksheet_range(name)?;
        let formulas = self.inner.worksheet_formula(name)?;
        Ok(Sheet::new(name, values, formulas))
    }

    /// Release the underlying file handle.
    pub fn close(self) {
        drop(self);
    }
}

impl std::fmt::Debug for Workbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbook")
            .field("sheet_names", &self.sheet_names)
            .finish()
    }
}
