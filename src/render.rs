//! Human-readable text output for a [`WorkbookSummary`].
//!
//! Cell lists are printed the way a scripting-language REPL shows a list of mixed scalars:
//! `['text', 12, 3.5, True, None, datetime.datetime(2024, 1, 15, 0, 0)]`.

use std::fmt;
use std::io::{self, Write};

use chrono::{Datelike, NaiveTime, TimeDelta, Timelike};

use crate::error::InspectionError;
use crate::inspection::layout::LayoutReport;
use crate::types::{CellValue, SheetSummary, WorkbookSummary};

const SEPARATOR_WIDTH: usize = 60;

// Magnitudes outside [MIN_PLAIN_DISPLAY, MAX_PLAIN_DISPLAY) print in exponent form.
const MIN_PLAIN_DISPLAY: f64 = 1e-4;
const MAX_PLAIN_DISPLAY: f64 = 1e16;

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str("None"),
            CellValue::Text(s) => f.write_str(&quote_text(s)),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Boolean(true) => f.write_str("True"),
            CellValue::Boolean(false) => f.write_str("False"),
            CellValue::DateTime(dt) => {
                write!(f, "datetime.datetime({}, {}, {}, ", dt.year(), dt.month(), dt.day())?;
                write_clock(f, dt.time())?;
                f.write_str(")")
            }
            CellValue::Time(t) => {
                f.write_str("datetime.time(")?;
                write_clock(f, *t)?;
                f.write_str(")")
            }
            CellValue::Duration(d) => f.write_str(&format_duration(*d)),
        }
    }
}

// `h, m[, s[, us]]`: seconds only when seconds or microseconds are set.
fn write_clock(f: &mut fmt::Formatter<'_>, t: NaiveTime) -> fmt::Result {
    write!(f, "{}, {}", t.hour(), t.minute())?;
    let micros = (t.nanosecond() % 1_000_000_000) / 1_000;
    if t.second() != 0 || micros != 0 {
        write!(f, ", {}", t.second())?;
    }
    if micros != 0 {
        write!(f, ", {micros}")?;
    }
    Ok(())
}

/// Elapsed time as `datetime.timedelta(days=…, seconds=…, microseconds=…)`.
///
/// Days carry the sign; seconds and microseconds are always non-negative, and zero fields are
/// left out.
pub fn format_duration(d: TimeDelta) -> String {
    const MICROS_PER_DAY: i64 = 86_400_000_000;
    let total = d.num_microseconds().unwrap_or(i64::MAX);
    let days = total.div_euclid(MICROS_PER_DAY);
    let rest = total.rem_euclid(MICROS_PER_DAY);
    let (seconds, micros) = (rest / 1_000_000, rest % 1_000_000);

    let mut fields = Vec::new();
    if days != 0 {
        fields.push(format!("days={days}"));
    }
    if seconds != 0 {
        fields.push(format!("seconds={seconds}"));
    }
    if micros != 0 {
        fields.push(format!("microseconds={micros}"));
    }
    if fields.is_empty() {
        "datetime.timedelta(0)".to_string()
    } else {
        format!("datetime.timedelta({})", fields.join(", "))
    }
}

/// Quote text like a string literal repr: single quotes unless the text contains a single quote
/// and no double quote.
pub fn quote_text(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Integral values print without a fractional part, very small or very large magnitudes use
/// exponent form (`1e-05`, `1.5e+20`), everything else uses `f64` display.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        let s = if n > 0.0 { "inf" } else { "-inf" };
        return s.to_string();
    }

    let magnitude = n.abs();
    if n != 0.0 && !(MIN_PLAIN_DISPLAY..MAX_PLAIN_DISPLAY).contains(&magnitude) {
        format_exponent(n)
    } else if n.fract() == 0.0 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

// Shortest round-trip mantissa with a signed, at least two-digit exponent.
fn format_exponent(n: f64) -> String {
    let raw = format!("{n:e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}

/// Render values as a bracketed, comma-separated list.
pub fn format_list<T: fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|i| i.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Write the full success report for `summary`.
pub fn render_summary<W: Write>(summary: &WorkbookSummary, out: &mut W) -> io::Result<()> {
    writeln!(out, "✅ Arquivo carregado com sucesso!")?;
    writeln!(out)?;
    let names: Vec<CellValue> = summary
        .sheet_names
        .iter()
        .map(|n| CellValue::Text(n.clone()))
        .collect();
    writeln!(out, "📋 Abas encontradas: {}", format_list(&names))?;
    writeln!(out, "   Total de abas: {}", summary.sheet_count())?;

    if let Some(layout) = &summary.layout {
        render_layout(layout, out)?;
    }

    for sheet in &summary.sheets {
        render_sheet(sheet, out)?;
    }
    Ok(())
}

fn render_sheet<W: Write>(sheet: &SheetSummary, out: &mut W) -> io::Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    writeln!(out)?;
    writeln!(out, "{separator}")?;
    writeln!(out, "📄 ABA: {}", sheet.name)?;
    writeln!(out, "{separator}")?;

    for row in &sheet.rows {
        writeln!(out, "Linha {}: {}", row.index, format_list(&row.cells))?;
    }

    writeln!(out)?;
    writeln!(out, "Total de linhas com dados: {}", sheet.row_count)?;
    writeln!(out, "Total de colunas: {}", sheet.column_count)
}

fn render_layout<W: Write>(layout: &LayoutReport, out: &mut W) -> io::Result<()> {
    let mark = |ok: bool| if ok { "✅" } else { "❌" };
    writeln!(out)?;
    writeln!(out, "🔍 VALIDAÇÃO DO FORMATO:")?;
    writeln!(out, "   {} Aba \"Configurações\" ou \"Configuracoes\"", mark(layout.has_config))?;
    writeln!(out, "   {} Aba \"Dados\"", mark(layout.has_data))?;
    writeln!(
        out,
        "   {} Aba \"Cores\" (opcional)",
        if layout.has_colors { "✅" } else { "⚠️ " }
    )?;
    writeln!(out)?;
    if layout.is_valid() {
        writeln!(out, "✅ FORMATO CORRETO! O arquivo está no formato de 3 abas esperado.")
    } else {
        writeln!(out, "❌ FORMATO INCORRETO! O arquivo não está no formato esperado.")
    }
}

/// Write the single diagnostic line for a failed inspection.
pub fn render_failure<W: Write>(err: &InspectionError, out: &mut W) -> io::Result<()> {
    // Collapse multi-line reader messages so the diagnostic stays on one line.
    let message = err.to_string().replace(['\r', '\n'], " ");
    writeln!(out, "❌ Erro ao analisar arquivo: {message}")
}
