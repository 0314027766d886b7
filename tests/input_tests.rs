use std::env;
use std::fs;
use weeklog::core::Session;
use weeklog::core::input::{parse_activity, parse_lenient, parse_number};
use weeklog::errors::AppError;
use weeklog::models::{ActivityType, WeekKey};

#[test]
fn test_parse_number_accepts_comma_and_spaces() {
    assert_eq!(parse_number(" 7,5 "), Some(7.5));
    assert_eq!(parse_number("12"), Some(12.0));
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("inf"), None);
    assert_eq!(parse_lenient("x"), 0.0);
}

#[test]
fn test_parse_activity_rejects_non_numeric_times() {
    let err = parse_activity("F", "8", "zwölf", None).unwrap_err();
    assert!(matches!(err, AppError::InvalidNumber { field: "end", .. }));

    let ok = parse_activity("a", "9", "17", Some("  ")).expect("valid row");
    assert_eq!(ok.kind, ActivityType::Work);
    assert_eq!(ok.note, None);
}

#[test]
fn test_week_key_parsing() {
    assert_eq!(WeekKey::parse("monday"), Some(WeekKey::Monday));
    assert_eq!(WeekKey::parse("Donnerstag"), Some(WeekKey::Thursday));
    assert_eq!(WeekKey::parse("7"), Some(WeekKey::Sunday));
    assert_eq!(WeekKey::parse("0"), None);
    assert_eq!(WeekKey::parse("Feiertag"), None);

    // persisted keys are case-sensitive
    assert_eq!(WeekKey::from_key("Friday"), Some(WeekKey::Friday));
    assert_eq!(WeekKey::from_key("friday"), None);
}

#[test]
fn test_failed_load_keeps_previous_ledger() {
    let dir = env::temp_dir();
    let good = dir.join("input_tests_good_weeklog.json");
    let bad = dir.join("input_tests_bad_weeklog.json");

    let mut session = Session::new(&good);
    session
        .ledger
        .add_activity(WeekKey::Monday, parse_activity("F", "6", "10", None).unwrap());
    session.save().expect("save");

    fs::write(&bad, "{ broken").expect("write bad file");
    assert!(session.load_from(&bad).is_err());
    assert!(session.load_from(&dir.join("does_not_exist_weeklog.json")).is_err());
    assert_eq!(session.ledger.activity_count(), 1);

    let (reopened, report) = Session::open(&good).expect("open");
    assert!(report.is_clean());
    assert_eq!(reopened.ledger, session.ledger);
}

#[test]
fn test_compact_number_labels() {
    use weeklog::utils::formatting::{fmt_compact, hours2clock};

    assert_eq!(fmt_compact(396.0), "396");
    assert_eq!(fmt_compact(11.5), "11.5");
    assert_eq!(fmt_compact(1.999), "2");
    assert_eq!(hours2clock(12.5), "12:30");
}
