use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use chrono::Local;
use std::fs;
use weeklog::models::WeekMeta;

mod common;
use common::{add, init_ledger, setup_test_ledger, temp_out, wl};

#[test]
fn test_init_creates_empty_week() {
    let ledger = setup_test_ledger("cli_init");
    init_ledger(&ledger);

    let content = fs::read_to_string(&ledger).expect("ledger written");
    assert!(content.contains("\"Monday\""));
    assert!(content.contains("\"Sunday\""));

    wl().args(["--ledger", &ledger, "--test", "hours"])
        .assert()
        .success()
        .stdout(contains("Gesamte Arbeitsstunden: 0.00"));
}

#[test]
fn test_add_and_compute_hours() {
    let ledger = setup_test_ledger("cli_hours");
    init_ledger(&ledger);

    add(&ledger, "Monday", "F", "0", "8");
    add(&ledger, "Montag", "P", "8", "9");
    add(&ledger, "1", "A", "9", "17");

    wl().args(["--ledger", &ledger, "--test", "hours", "monday"])
        .assert()
        .success()
        .stdout(contains("16.00"));

    wl().args(["--ledger", &ledger, "--test", "hours"])
        .assert()
        .success()
        .stdout(contains("Gesamte Arbeitsstunden: 16.00"));
}

#[test]
fn test_invalid_input_leaves_ledger_untouched() {
    let ledger = setup_test_ledger("cli_invalid");
    init_ledger(&ledger);
    add(&ledger, "Tuesday", "F", "6", "10");
    let before = fs::read_to_string(&ledger).expect("read");

    wl().args(["--ledger", &ledger, "--test", "add", "Tuesday", "A", "abc", "12"])
        .assert()
        .failure()
        .stderr(contains("Invalid number for start"));

    wl().args(["--ledger", &ledger, "--test", "add", "Holiday", "A", "1", "2"])
        .assert()
        .failure()
        .stderr(contains("Invalid day"));

    assert_eq!(fs::read_to_string(&ledger).expect("read"), before);
}

#[test]
fn test_set_totals_and_list() {
    let ledger = setup_test_ledger("cli_list");
    init_ledger(&ledger);
    add(&ledger, "Wednesday", "F", "7.5", "12,5");

    wl().args([
        "--ledger", &ledger, "--test", "set", "Wednesday", "--hours", "11.5", "--km", "250",
    ])
    .assert()
    .success()
    .stdout(contains("Std. 11.50  km 250"));

    wl().args(["--ledger", &ledger, "--test", "set", "Wednesday", "--km", "viel"])
        .assert()
        .success()
        .stdout(contains("using 0"));

    wl().args(["--ledger", &ledger, "--test", "list", "Mittwoch"])
        .assert()
        .success()
        .stdout(contains("Mittwoch").and(contains("07:30")).and(contains("12:30")));
}

#[test]
fn test_delete_activity_by_index() {
    let ledger = setup_test_ledger("cli_del");
    init_ledger(&ledger);
    add(&ledger, "Friday", "A", "8", "9");
    add(&ledger, "Friday", "F", "9", "12");

    wl().args(["--ledger", &ledger, "--test", "del", "Friday", "--index", "1"])
        .assert()
        .success();

    wl().args(["--ledger", &ledger, "--test", "del", "Friday", "--index", "5"])
        .assert()
        .failure()
        .stderr(contains("No activity #5"));

    wl().args(["--ledger", &ledger, "--test", "hours", "Friday"])
        .assert()
        .success()
        .stdout(contains("3.00"));

    wl().args(["--ledger", &ledger, "--test", "del", "Friday", "--yes"])
        .assert()
        .success();

    wl().args(["--ledger", &ledger, "--test", "hours", "Friday"])
        .assert()
        .success()
        .stdout(contains("0.00"));
}

#[test]
fn test_import_reports_skipped_rows() {
    let ledger = setup_test_ledger("cli_import");
    init_ledger(&ledger);

    let src = temp_out("cli_import_src", "json");
    fs::write(
        &src,
        r#"{
            "Monday": {"total_hours": 9, "km": 100, "activities": [
                {"type": "F", "start": 6, "end": 10, "note": "Tour"},
                {"type": "A", "start": "abc", "end": 11}
            ]},
            "Feiertag": {}
        }"#,
    )
    .expect("write import file");

    wl().args(["--ledger", &ledger, "--test", "import", &src])
        .assert()
        .success()
        .stdout(
            contains("Skipped 1 activity")
                .and(contains("Ignored unknown key 'Feiertag'"))
                .and(contains("Gesamte Arbeitsstunden: 4.00")),
        );

    wl().args(["--ledger", &ledger, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("\"note\": \"Tour\"").and(contains("\"km\": 100.0")));
}

#[test]
fn test_import_of_broken_file_fails_without_changes() {
    let ledger = setup_test_ledger("cli_import_broken");
    init_ledger(&ledger);
    add(&ledger, "Monday", "F", "6", "10");
    let before = fs::read_to_string(&ledger).expect("read");

    let src = temp_out("cli_import_broken_src", "json");
    fs::write(&src, "{ \"Monday\": ").expect("write");

    wl().args(["--ledger", &ledger, "--test", "import", &src])
        .assert()
        .failure()
        .stderr(contains("JSON error"));

    assert_eq!(fs::read_to_string(&ledger).expect("read"), before);
}

#[test]
fn test_export_json_and_csv() {
    let ledger = setup_test_ledger("cli_export");
    init_ledger(&ledger);
    add(&ledger, "Thursday", "F", "8", "12");

    let json_out = temp_out("cli_export", "json");
    wl().args([
        "--ledger", &ledger, "--test", "export", "--format", "json", "--file", &json_out,
    ])
    .assert()
    .success();
    let content = fs::read_to_string(&json_out).expect("read exported json");
    assert!(content.contains("\"Thursday\""));

    let csv_out = temp_out("cli_export", "csv");
    wl().args([
        "--ledger", &ledger, "--test", "export", "--format", "csv", "--file", &csv_out,
    ])
    .assert()
    .success();
    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.starts_with("day,type,start,end,note"));
    assert!(content.contains("Thursday,F,8.0,12.0,"));
}

#[test]
fn test_chart_text_and_pdf() {
    let ledger = setup_test_ledger("cli_chart");
    init_ledger(&ledger);
    add(&ledger, "Monday", "F", "8", "12");
    add(&ledger, "Monday", "P", "12", "13");

    let txt = temp_out("cli_chart", "txt");
    wl().args([
        "--ledger", &ledger, "--test", "chart", "--mode", "steps", "--week-of", "2025-02-26",
        "--person", "Manfred", "--file", &txt,
    ])
    .assert()
    .success();
    let content = fs::read_to_string(&txt).expect("read chart");
    assert!(content.contains("Monteur: Manfred   Woche: 9"));
    assert!(content.contains("| 12:00 F -> P"));

    let pdf = temp_out("cli_chart", "pdf");
    wl().args([
        "--ledger", &ledger, "--test", "chart", "--format", "pdf", "--file", &pdf,
    ])
    .assert()
    .success();
    assert!(fs::read(&pdf).expect("read pdf").starts_with(b"%PDF"));

    wl().args(["--ledger", &ledger, "--test", "chart", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(contains("--file is required"));
}

#[test]
fn test_clear_week() {
    let ledger = setup_test_ledger("cli_clear");
    init_ledger(&ledger);
    add(&ledger, "Saturday", "A", "8", "10");

    wl().args(["--ledger", &ledger, "--test", "clear", "--yes"])
        .assert()
        .success();

    wl().args(["--ledger", &ledger, "--test", "hours"])
        .assert()
        .success()
        .stdout(contains("Gesamte Arbeitsstunden: 0.00"));
}

#[test]
fn test_chart_heading_defaults_to_current_week() {
    let ledger = setup_test_ledger("cli_chart_today");
    init_ledger(&ledger);

    let txt = temp_out("cli_chart_today", "txt");
    wl().args([
        "--ledger", &ledger, "--test", "chart", "--person", "Manfred", "--file", &txt,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&txt).expect("read chart");
    let expected = WeekMeta::for_date(Local::now().date_naive(), "Manfred");
    assert!(content.contains(&expected.heading()));
    assert!(!content.contains("Woche: 0"));
}

#[test]
fn test_corrupt_ledger_can_be_replaced_by_import_or_clear() {
    let ledger = setup_test_ledger("cli_corrupt");
    fs::write(&ledger, "{ broken").expect("write corrupt ledger");

    // commands that read the week still refuse the file
    wl().args(["--ledger", &ledger, "--test", "hours"])
        .assert()
        .failure()
        .stderr(contains("JSON error"));

    let src = temp_out("cli_corrupt_src", "json");
    fs::write(
        &src,
        r#"{"Monday": {"total_hours": 4, "km": 80, "activities": [
            {"type": "F", "start": 6, "end": 10, "note": ""}
        ]}}"#,
    )
    .expect("write import file");

    wl().args(["--ledger", &ledger, "--test", "import", &src])
        .assert()
        .success()
        .stdout(contains("unreadable").and(contains("Gesamte Arbeitsstunden: 4.00")));

    wl().args(["--ledger", &ledger, "--test", "hours"])
        .assert()
        .success()
        .stdout(contains("Gesamte Arbeitsstunden: 4.00"));

    fs::write(&ledger, "{ broken").expect("write corrupt ledger");
    wl().args(["--ledger", &ledger, "--test", "clear", "--yes"])
        .assert()
        .success();

    wl().args(["--ledger", &ledger, "--test", "hours"])
        .assert()
        .success()
        .stdout(contains("Gesamte Arbeitsstunden: 0.00"));
}
