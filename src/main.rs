use std::io::{self, Write};
use std::process::ExitCode;

use workbook_inspect::inspection::{InspectionOptions, inspect_path};
use workbook_inspect::render::{render_failure, render_summary};

const WORKBOOK_PATH: &str = "modelo_indicadores/g1_prazo_decorrido.xlsx";

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let written = match inspect_path(WORKBOOK_PATH, &InspectionOptions::default()) {
        Ok(summary) => render_summary(&summary, &mut out).map(|_| ExitCode::SUCCESS),
        Err(err) => render_failure(&err, &mut out).map(|_| ExitCode::FAILURE),
    };

    match written.and_then(|code| out.flush().map(|_| code)) {
        Ok(code) => code,
        Err(_) => ExitCode::FAILURE,
    }
}
