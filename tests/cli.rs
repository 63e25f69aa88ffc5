mod common;

use std::process::Command;

use common::{tmp_dir, write_summary_detail_xlsx};

const BIN: &str = env!("CARGO_BIN_EXE_workbook-inspect");

#[test]
fn missing_workbook_prints_one_line_and_exits_1() {
    let dir = tmp_dir("cli-missing");

    let output = Command::new(BIN).current_dir(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout was: {stdout}");
    assert!(lines[0].starts_with("❌ Erro ao analisar arquivo: "));
    assert!(!stdout.contains("ABA"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn fixed_path_workbook_is_summarized() {
    let dir = tmp_dir("cli-ok");
    std::fs::create_dir_all(dir.join("modelo_indicadores")).unwrap();
    write_summary_detail_xlsx(&dir.join("modelo_indicadores").join("g1_prazo_decorrido.xlsx"));

    let output = Command::new(BIN).current_dir(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("✅ Arquivo carregado com sucesso!\n"));
    assert!(stdout.contains("   Total de abas: 2\n"));
    assert_eq!(stdout.matches("Linha ").count(), 14 + 10);
    assert!(output.stderr.is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}
