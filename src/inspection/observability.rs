use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::InspectionError;
use crate::types::SheetSummary;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InspectionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (inspection failed).
    Error,
    /// Critical error (the file could not be reached at all).
    Critical,
}

/// Context about an inspection attempt.
#[derive(Debug, Clone)]
pub struct InspectionContext {
    /// The workbook path being inspected.
    pub path: PathBuf,
}

/// Stats reported on successful inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectionStats {
    /// Number of sheets in the workbook.
    pub sheets: usize,
    /// Rows read across all preview windows.
    pub rows_previewed: usize,
}

/// Observer interface for inspection progress and outcomes.
///
/// Events arrive in order: `on_opened` once the sheet list is known, `on_sheet` after each sheet
/// is previewed, then exactly one of `on_success` or `on_failure` (followed by `on_alert` when
/// the failure meets the configured threshold). A workbook that cannot be opened skips straight
/// to `on_failure`.
pub trait InspectionObserver: Send + Sync {
    /// Called once the workbook is open, with its sheet names in workbook order.
    fn on_opened(&self, _ctx: &InspectionContext, _sheet_names: &[String]) {}

    /// Called after a sheet's preview window has been read.
    fn on_sheet(&self, _ctx: &InspectionContext, _sheet: &SheetSummary) {}

    /// Called when inspection succeeds.
    fn on_success(&self, _ctx: &InspectionContext, _stats: InspectionStats) {}

    /// Called when inspection fails.
    fn on_failure(&self, _ctx: &InspectionContext, _severity: InspectionSeverity, _error: &InspectionError) {}

    /// Called when an inspection failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &InspectionContext, severity: InspectionSeverity, error: &InspectionError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Writes one `key=value` line per inspection event.
///
/// Write errors are ignored; logging never changes the inspection outcome.
pub struct LogObserver<W> {
    out: Mutex<W>,
}

impl LogObserver<io::Stderr> {
    /// Log to stderr.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> LogObserver<W> {
    /// Log to `out`.
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Recover the writer, e.g. to read back a `Vec<u8>` buffer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn line(&self, args: fmt::Arguments<'_>) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{args}");
        }
    }
}

impl<W> fmt::Debug for LogObserver<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogObserver").finish_non_exhaustive()
    }
}

impl<W: Write + Send> InspectionObserver for LogObserver<W> {
    fn on_opened(&self, ctx: &InspectionContext, sheet_names: &[String]) {
        self.line(format_args!(
            "[inspect][open] path={} sheets={}",
            ctx.path.display(),
            sheet_names.len()
        ));
    }

    fn on_sheet(&self, _ctx: &InspectionContext, sheet: &SheetSummary) {
        self.line(format_args!(
            "[inspect][sheet] name={:?} rows_read={} kept={} extent={}x{}",
            sheet.name,
            sheet.rows_read,
            sheet.rows.len(),
            sheet.row_count,
            sheet.column_count
        ));
    }

    fn on_success(&self, ctx: &InspectionContext, stats: InspectionStats) {
        self.line(format_args!(
            "[inspect][ok] path={} sheets={} rows_previewed={}",
            ctx.path.display(),
            stats.sheets,
            stats.rows_previewed
        ));
    }

    fn on_failure(&self, ctx: &InspectionContext, severity: InspectionSeverity, error: &InspectionError) {
        self.line(format_args!(
            "[inspect][{severity:?}] path={} err={error}",
            ctx.path.display()
        ));
    }

    fn on_alert(&self, ctx: &InspectionContext, severity: InspectionSeverity, error: &InspectionError) {
        self.line(format_args!(
            "[ALERT][inspect][{severity:?}] path={} err={error}",
            ctx.path.display()
        ));
    }
}
