use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contas(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contas").unwrap();
    cmd.env("CONTAS_DATA_DIR", dir.path()).env("CONTAS_LOG", "warn");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    contas(&dir).arg("init").assert().success();
    dir
}

fn create_rent(dir: &TempDir) {
    contas(dir)
        .args([
            "conta",
            "create",
            "--nome",
            "Rent",
            "--valor",
            "1.500,00",
            "--vencimento",
            "2024-03-01",
            "--situacao-conta-id",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conta cadastrada com sucesso"));
}

#[test]
fn test_commands_require_init() {
    let dir = TempDir::new().unwrap();
    contas(&dir)
        .args(["conta", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contas init"));
}

#[test]
fn test_status_picker() {
    let dir = initialized();
    contas(&dir)
        .args(["situacao", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paga").and(predicate::str::contains("Pendente")));
}

#[test]
fn test_create_and_list_with_filters() {
    let dir = initialized();
    create_rent(&dir);

    contas(&dir)
        .args([
            "conta",
            "list",
            "--data-inicio",
            "2024-02-01",
            "--data-fim",
            "2024-03-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent").and(predicate::str::contains("1.500,00")));

    contas(&dir)
        .args(["conta", "list", "--nome", "water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma conta encontrada."));
}

#[test]
fn test_invalid_amount_echoes_input() {
    let dir = initialized();
    contas(&dir)
        .args([
            "conta",
            "create",
            "--nome",
            "Rent",
            "--valor",
            "abc",
            "--vencimento",
            "2024-03-01",
            "--situacao-conta-id",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conta não cadastrada!"))
        .stderr(predicate::str::contains("--valor \"abc\""));
}

#[test]
fn test_toggle_and_delete() {
    let dir = initialized();
    create_rent(&dir);

    contas(&dir)
        .args(["conta", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Situação da conta editada com sucesso!"))
        .stdout(predicate::str::contains("Rent: Pendente"));

    contas(&dir)
        .args(["conta", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conta apagada com sucesso"));

    contas(&dir)
        .args(["conta", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conta não apagada!"));
}

#[test]
fn test_export_csv_to_directory() {
    let dir = initialized();
    create_rent(&dir);
    let out = dir.path().join("reports");

    contas(&dir)
        .args(["export", "csv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 contas"));

    let files: Vec<_> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("relatorio_contas_") && files[0].ends_with(".csv"));

    let bytes = fs::read(out.join(&files[0])).unwrap();
    assert!(bytes.starts_with(b"id;Nome;Vencimento;Situa\xE7\xE3o;Valor\n"));
    assert!(bytes.ends_with(b"1;Rent;2024-03-01;Paga;1.500,00\n;;;;1.500,00\n"));
}

#[test]
fn test_export_pdf_and_word_names() {
    let dir = initialized();
    create_rent(&dir);
    let out = dir.path().join("reports");

    for format in ["pdf", "word"] {
        contas(&dir)
            .args(["export", format, "--output"])
            .arg(&out)
            .assert()
            .success();
    }

    assert!(fs::read(out.join("listar_contas.pdf"))
        .unwrap()
        .starts_with(b"%PDF-1.4"));
    assert!(fs::read(out.join("relatorio_contas_.docx"))
        .unwrap()
        .starts_with(b"PK"));
}

#[test]
fn test_export_to_stdout() {
    let dir = initialized();
    create_rent(&dir);

    contas(&dir)
        .args(["export", "csv", "--stdout", "--nome", "rent"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &[u8]| {
            out.ends_with(b"1;Rent;2024-03-01;Paga;1.500,00\n;;;;1.500,00\n")
        }));
}

#[test]
fn test_malformed_filter_date() {
    let dir = initialized();
    contas(&dir)
        .args(["export", "pdf", "--data-inicio", "amanhã"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amanhã"));
}

#[test]
fn test_store_failure_shows_only_generic_message() {
    let dir = initialized();
    // A directory where the temp file should go makes the atomic write fail
    fs::create_dir_all(dir.path().join("data").join("contas.json.tmp")).unwrap();

    contas(&dir)
        .env("CONTAS_LOG", "off")
        .args([
            "conta",
            "create",
            "--nome",
            "Rent",
            "--valor",
            "1.500,00",
            "--vencimento",
            "2024-03-01",
            "--situacao-conta-id",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conta não cadastrada!"))
        .stderr(predicate::str::contains("--nome \"Rent\""))
        .stderr(predicate::str::contains("Storage error").not())
        .stderr(predicate::str::contains("os error").not());
}

#[test]
fn test_edit_starts_from_current_values() {
    let dir = initialized();
    create_rent(&dir);

    contas(&dir)
        .args(["conta", "edit", "1", "--valor", "1.650,00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conta editada com sucesso"));

    contas(&dir)
        .args(["conta", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent").and(predicate::str::contains("1.650,00")));
}

#[test]
fn test_list_far_past_last_page() {
    let dir = initialized();
    create_rent(&dir);

    contas(&dir)
        .args(["conta", "list", "--page", "18446744073709551615"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vazia"));
}

#[test]
fn test_edit_unknown_account() {
    let dir = initialized();
    contas(&dir)
        .args(["conta", "edit", "9", "--nome", "Gas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Conta não editada!"));
}
