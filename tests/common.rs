#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use weeklog::core::input::parse_activity;
use weeklog::models::{WeekKey, WeekLedger};

pub fn wl() -> Command {
    cargo_bin_cmd!("weeklog")
}

/// Create a unique test ledger path inside the system temp dir and remove any existing file
pub fn setup_test_ledger(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weeklog.json", name));
    let ledger_path = path.to_string_lossy().to_string();
    fs::remove_file(&ledger_path).ok();
    ledger_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

fn push(ledger: &mut WeekLedger, day: WeekKey, kind: &str, start: &str, end: &str, note: &str) {
    let note = (!note.is_empty()).then_some(note);
    let record = parse_activity(kind, start, end, note).expect("valid activity");
    ledger.add_activity(day, record);
}

/// Monday and Tuesday of a typical driver week.
pub fn sample_week() -> WeekLedger {
    let mut l = WeekLedger::new();

    push(&mut l, WeekKey::Monday, "A", "0", "8", "Preparation");
    push(&mut l, WeekKey::Monday, "F", "8", "12", "Route A");
    push(&mut l, WeekKey::Monday, "P", "12", "13", "Lunch break");
    push(&mut l, WeekKey::Monday, "F", "13", "17", "Route B");
    push(&mut l, WeekKey::Monday, "A", "17", "18", "Post-trip check");
    l.set_totals(WeekKey::Monday, Some(18.0), Some(396.0));

    push(&mut l, WeekKey::Tuesday, "A", "7", "8", "");
    push(&mut l, WeekKey::Tuesday, "F", "8", "12", "Delivery 1");
    push(&mut l, WeekKey::Tuesday, "P", "12", "12.5", "");
    push(&mut l, WeekKey::Tuesday, "F", "12.5", "16", "Delivery 2");
    l.set_totals(WeekKey::Tuesday, Some(10.0), Some(361.0));

    l
}

/// Initialize an empty ledger through the CLI
pub fn init_ledger(ledger_path: &str) {
    wl().args(["--ledger", ledger_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one activity through the CLI
pub fn add(ledger_path: &str, day: &str, kind: &str, start: &str, end: &str) {
    wl().args(["--ledger", ledger_path, "--test", "add", day, kind, start, end])
        .assert()
        .success();
}
