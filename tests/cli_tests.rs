use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_store_with_punches, pnt, setup_test_store, temp_out};

#[test]
fn test_init_creates_store() {
    let store = setup_test_store("cli_init");

    pnt()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Record store created"));

    let content = fs::read_to_string(&store).expect("read store");
    assert!(content.starts_with("Data,Hora Entrada,Hora Saída"));

    // second init leaves the store alone
    pnt()
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("left untouched"));
}

#[test]
fn test_punch_in_then_out() {
    let store = setup_test_store("cli_punch");
    init_store_with_punches(&store, &[]);

    pnt()
        .args(["--store", &store, "punch", "--at", "2024-03-01 09:00:00"])
        .assert()
        .success()
        .stdout(contains("Clock-in registered: 2024-03-01 09:00:00"));

    pnt()
        .args(["--store", &store, "punch", "--at", "2024-03-01 17:00"])
        .assert()
        .success()
        .stdout(contains("Clock-out registered: 2024-03-01 17:00:00"))
        .stdout(contains("7.00 h"))
        .stdout(contains("R$ 210.00"));

    let content = fs::read_to_string(&store).expect("read store");
    assert!(content.contains("2024-03-01,09:00:00,17:00:00,7.00,210.00,2024-03"));
}

#[test]
fn test_punch_rejects_bad_timestamp() {
    let store = setup_test_store("cli_bad_ts");

    pnt()
        .args(["--store", &store, "punch", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    assert!(!std::path::Path::new(&store).exists());
}

#[test]
fn test_list_month_with_totals() {
    let store = setup_test_store("cli_list");
    init_store_with_punches(
        &store,
        &[
            "2024-03-01 09:00:00",
            "2024-03-01 17:00:00",
            "2024-03-04 09:00:00",
            "2024-03-04 16:30:00",
            "2024-04-02 09:00:00",
        ],
    );

    pnt()
        .args(["--store", &store, "list", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("Records for March 2024"))
        .stdout(contains("2024-03-01"))
        .stdout(contains("2024-03-04"))
        .stdout(contains("2024-04-02").not())
        .stdout(contains("13.50 h"))
        .stdout(contains("R$ 405.00"));
}

#[test]
fn test_list_defaults_to_latest_month_and_flags_stale_records() {
    let store = setup_test_store("cli_list_default");
    init_store_with_punches(&store, &["2024-03-01 09:00:00", "2024-04-02 09:00:00"]);

    pnt()
        .args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(contains("April 2024"))
        .stdout(contains("2024-04-02"))
        .stdout(contains("never clocked out"));
}

#[test]
fn test_totals_for_empty_month() {
    let store = setup_test_store("cli_totals_empty");
    init_store_with_punches(&store, &["2024-03-01 09:00:00", "2024-03-01 17:00:00"]);

    pnt()
        .args(["--store", &store, "totals", "--month", "2024-04"])
        .assert()
        .success()
        .stdout(contains("0.00 h"))
        .stdout(contains("R$ 0.00"));

    pnt()
        .args(["--store", &store, "totals", "--month", "2024-4"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_months_lists_distinct_keys() {
    let store = setup_test_store("cli_months");
    init_store_with_punches(
        &store,
        &[
            "2024-01-10 09:00:00",
            "2024-01-10 18:00:00",
            "2024-02-01 09:00:00",
        ],
    );

    pnt()
        .args(["--store", &store, "months"])
        .assert()
        .success()
        .stdout(contains("2024-01  January 2024"))
        .stdout(contains("2024-02  February 2024"));
}

#[test]
fn test_export_csv_month() {
    let store = setup_test_store("cli_export_csv");
    init_store_with_punches(
        &store,
        &[
            "2024-03-01 09:00:00",
            "2024-03-01 17:00:00",
            "2024-04-01 09:00:00",
        ],
    );
    let out = temp_out("cli_export_csv", "csv");

    pnt()
        .args([
            "--store", &store, "export", "--format", "csv", "--month", "2024-03", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Data,Hora Entrada,Hora Saída,Horas Trabalhadas,Valor Recebido,Mês"));
    assert!(content.contains("2024-03-01,09:00:00,17:00:00,7.00,210.00,2024-03"));
    assert!(!content.contains("2024-04-01"));
}

#[test]
fn test_export_json_month() {
    let store = setup_test_store("cli_export_json");
    init_store_with_punches(&store, &["2024-03-01 09:00:00", "2024-03-01 17:00:00"]);
    let out = temp_out("cli_export_json", "json");

    pnt()
        .args([
            "--store", &store, "export", "--format", "json", "--month", "2024-03", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Data"], "2024-03-01");
    assert_eq!(rows[0]["Hora Saída"], "17:00:00");
    assert_eq!(rows[0]["Valor Recebido"], "210.00");
}

#[test]
fn test_export_xlsx_month() {
    let store = setup_test_store("cli_export_xlsx");
    init_store_with_punches(&store, &["2024-03-01 09:00:00", "2024-03-01 17:00:00"]);
    let out = temp_out("cli_export_xlsx", "xlsx");

    pnt()
        .args(["--store", &store, "export", "--month", "2024-03", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"), "xlsx must be a zip container");
}

#[test]
fn test_export_empty_month_writes_nothing() {
    let store = setup_test_store("cli_export_empty");
    init_store_with_punches(&store, &["2024-03-01 09:00:00"]);
    let out = temp_out("cli_export_empty", "csv");

    pnt()
        .args([
            "--store", &store, "export", "--format", "csv", "--month", "2024-05", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No records found for 2024-05"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_force() {
    let store = setup_test_store("cli_export_force");
    init_store_with_punches(&store, &["2024-03-01 09:00:00", "2024-03-01 17:00:00"]);
    let out = temp_out("cli_export_force", "csv");
    fs::write(&out, "old").expect("write");

    pnt()
        .args([
            "--store", &store, "export", "--format", "csv", "--month", "2024-03", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    pnt()
        .args([
            "--store", &store, "export", "--format", "csv", "--month", "2024-03", "--file", &out,
            "--force",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("2024-03-01"));
}

#[test]
fn test_corrupt_store_is_reported() {
    let store = setup_test_store("cli_corrupt");
    fs::write(&store, "foo,bar\n1,2\n").expect("write");

    pnt()
        .args(["--store", &store, "punch", "--at", "2024-03-01 09:00:00"])
        .assert()
        .failure()
        .stderr(contains("corrupt"));

    pnt()
        .args(["--store", &store, "list"])
        .assert()
        .failure()
        .stderr(contains("missing columns"));

    assert_eq!(fs::read_to_string(&store).expect("read"), "foo,bar\n1,2\n");
}

#[test]
fn test_log_print_shows_operations() {
    let store = setup_test_store("cli_log");
    init_store_with_punches(&store, &["2024-03-01 09:00:00", "2024-03-01 17:00:00"]);

    pnt()
        .args(["--store", &store, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Record store created"))
        .stdout(contains("Clock-in at 09:00:00"))
        .stdout(contains("Clock-out at 17:00:00"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let store = setup_test_store("cli_backup");
    init_store_with_punches(&store, &["2024-03-01 09:00:00"]);

    let plain = temp_out("cli_backup_plain", "csv");
    pnt()
        .args(["--store", &store, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(
        fs::read_to_string(&plain).expect("read backup"),
        fs::read_to_string(&store).expect("read store")
    );

    let zipped = temp_out("cli_backup_zip", "csv");
    let zip_path = temp_out("cli_backup_zip", "zip");
    pnt()
        .args(["--store", &store, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));
    assert!(std::path::Path::new(&zip_path).exists());
    assert!(!std::path::Path::new(&zipped).exists());
}

#[test]
fn test_relative_store_is_shared_by_init_and_punch() {
    let mut root = std::env::temp_dir();
    root.push("pontolog_cli_relative_store");
    fs::remove_dir_all(&root).ok();
    let home = root.join("home");
    let work = root.join("work");
    fs::create_dir_all(&home).expect("mkdir home");
    fs::create_dir_all(&work).expect("mkdir work");

    pnt()
        .current_dir(&work)
        .env("HOME", &home)
        .args(["--store", "rel.csv", "--test", "init"])
        .assert()
        .success();

    assert!(work.join("rel.csv").exists());
    assert!(!home.join(".pontolog").join("rel.csv").exists());

    pnt()
        .current_dir(&work)
        .env("HOME", &home)
        .args(["--store", "rel.csv", "punch", "--at", "2024-03-01 09:00:00"])
        .assert()
        .success();

    let content = fs::read_to_string(work.join("rel.csv")).expect("read store");
    assert!(content.contains("2024-03-01,09:00:00"));
    assert!(!home.join(".pontolog").join("rel.csv").exists());
}

#[test]
fn test_backup_compress_rejects_zip_destination_without_writing() {
    let store = setup_test_store("cli_backup_zip_dest");
    init_store_with_punches(&store, &["2024-03-01 09:00:00"]);
    let dest = temp_out("cli_backup_zip_dest", "zip");

    pnt()
        .args(["--store", &store, "backup", "--file", &dest, "--compress"])
        .assert()
        .failure()
        .stderr(contains("must not end in .zip"));

    assert!(!std::path::Path::new(&dest).exists());
}

#[test]
fn test_log_prints_without_flag() {
    let store = setup_test_store("cli_log_default");
    init_store_with_punches(&store, &["2024-03-01 09:00:00"]);

    pnt()
        .args(["--store", &store, "log"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Clock-in at 09:00:00"));
}

#[test]
fn test_export_overwrite_confirmed_on_stdin() {
    let store = setup_test_store("cli_export_confirm");
    init_store_with_punches(&store, &["2024-03-01 09:00:00", "2024-03-01 17:00:00"]);
    let out = temp_out("cli_export_confirm", "csv");
    fs::write(&out, "old").expect("write");

    pnt()
        .args([
            "--store", &store, "export", "--format", "csv", "--month", "2024-03", "--file", &out,
        ])
        .write_stdin("YES\n")
        .assert()
        .success()
        .stdout(contains("will be overwritten"));

    let content = fs::read_to_string(&out).expect("read");
    assert!(content.contains("2024-03-01,09:00:00,17:00:00,7.00,210.00,2024-03"));
}
