//! Workbook inspection entrypoint.
//!
//! Most callers should use [`inspect_path`], which opens a workbook, previews every sheet in
//! workbook order, and closes it again.
//!
//! - The preview window size comes from [`InspectionOptions::row_limit`].
//! - If an [`super::observability::InspectionObserver`] is provided, it follows the walk sheet
//!   by sheet and receives the final success/failure/alert.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::InspectionResult;
use crate::types::WorkbookSummary;

use super::layout::check_layout;
use super::observability::{
    InspectionContext, InspectionObserver, InspectionSeverity, InspectionStats,
};
use super::workbook::Workbook;

/// Number of leading rows previewed per sheet by default.
pub const DEFAULT_ROW_LIMIT: usize = 15;

/// Options controlling inspection behavior.
///
/// Use [`Default`] for the standard preview.
#[derive(Clone)]
pub struct InspectionOptions {
    /// Maximum number of leading rows read per sheet.
    pub row_limit: usize,
    /// Also check the workbook for the config/data/colors sheet layout.
    pub check_layout: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn InspectionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: InspectionSeverity,
}

impl fmt::Debug for InspectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectionOptions")
            .field("row_limit", &self.row_limit)
            .field("check_layout", &self.check_layout)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for InspectionOptions {
    fn default() -> Self {
        Self {
            row_limit: DEFAULT_ROW_LIMIT,
            check_layout: false,
            observer: None,
            alert_at_or_above: InspectionSeverity::Critical,
        }
    }
}

/// Inspect the workbook at `path`.
///
/// The summary is only returned once every sheet has been read; any failure aborts the whole
/// inspection.
///
/// When an observer is configured, this function reports:
///
/// - `on_opened` once the sheet list is known, then `on_sheet` per previewed sheet
/// - `on_success` on success, with sheet/row stats
/// - `on_failure` on failure, with [`crate::InspectionError::severity`]
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use workbook_inspect::inspection::{InspectionOptions, inspect_path};
/// use workbook_inspect::render::render_summary;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = inspect_path("workbook.xlsx", &InspectionOptions::default())?;
/// render_summary(&summary, &mut std::io::stdout().lock())?;
/// # Ok(())
/// # }
/// ```
pub fn inspect_path(
    path: impl AsRef<Path>,
    options: &InspectionOptions,
) -> InspectionResult<WorkbookSummary> {
    let path = path.as_ref();
    let ctx = InspectionContext {
        path: path.to_path_buf(),
    };

    let result = inspect_workbook(path, &ctx, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(summary) => obs.on_success(
                &ctx,
                InspectionStats {
                    sheets: summary.sheet_count(),
                    rows_previewed: summary.rows_previewed(),
                },
            ),
            Err(e) => {
                let sev = e.severity();
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn inspect_workbook(
    path: &Path,
    ctx: &InspectionContext,
    options: &InspectionOptions,
) -> InspectionResult<WorkbookSummary> {
    let observer = options.observer.as_deref();
    let mut workbook = Workbook::open(path)?;
    let sheet_names = workbook.sheet_names().to_vec();
    if let Some(obs) = observer {
        obs.on_opened(ctx, &sheet_names);
    }

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for name in &sheet_names {
        let summary = workbook.sheet(name)?.summarize(options.row_limit);
        if let Some(obs) = observer {
            obs.on_sheet(ctx, &summary);
        }
        sheets.push(summary);
    }
    workbook.close();

    let layout = options.check_layout.then(|| check_layout(&sheet_names));
    Ok(WorkbookSummary {
        sheet_names,
        sheets,
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ROW_LIMIT, InspectionOptions};
    use crate::inspection::InspectionSeverity;

    #[test]
    fn default_options_preview_fifteen_rows() {
        let opts = InspectionOptions::default();
        assert_eq!(opts.row_limit, DEFAULT_ROW_LIMIT);
        assert_eq!(DEFAULT_ROW_LIMIT, 15);
        assert!(!opts.check_layout);
        assert!(opts.observer.is_none());
        assert_eq!(opts.alert_at_or_above, InspectionSeverity::Critical);
    }

    #[test]
    fn debug_hides_observer() {
        let dbg = format!("{:?}", InspectionOptions::default());
        assert!(dbg.contains("observer_set: false"));
    }
}
