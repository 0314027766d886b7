mod common;
use common::{sample_week, temp_out};
use std::fs;
use std::path::Path;
use weeklog::chart::plan::{BREAK_HINT, Connector};
use weeklog::chart::{ChartMode, ChartOptions, build_plan, render_pdf, render_text};
use weeklog::models::week_key::Language;
use weeklog::models::{ActivityRecord, ActivityType, WeekKey, WeekLedger, WeekMeta};

fn opts(mode: ChartMode) -> ChartOptions {
    ChartOptions {
        mode,
        language: Language::De,
        show_break_hint: false,
    }
}

fn meta() -> WeekMeta {
    WeekMeta::new("24.02.2025 bis 28.02.2025", "Hans Mustermann", 9)
}

fn back_to_back() -> WeekLedger {
    let mut ledger = WeekLedger::new();
    ledger.add_activity(
        WeekKey::Thursday,
        ActivityRecord::new(ActivityType::Driving, 8.0, 12.0, None),
    );
    ledger.add_activity(
        WeekKey::Thursday,
        ActivityRecord::new(ActivityType::Break, 12.0, 13.0, None),
    );
    // gap of a quarter hour: never connected
    ledger.add_activity(
        WeekKey::Thursday,
        ActivityRecord::new(ActivityType::Work, 13.25, 15.0, None),
    );
    ledger
}

#[test]
fn test_steps_mode_connects_only_exact_boundaries() {
    let plan = build_plan(&back_to_back(), &meta(), &opts(ChartMode::Steps));
    let thursday = &plan.days[WeekKey::Thursday.index()];

    assert_eq!(
        thursday.connectors,
        vec![Connector {
            at: 12.0,
            from_lane: 0,
            to_lane: 1
        }]
    );
}

#[test]
fn test_segments_mode_has_no_connectors() {
    let plan = build_plan(&back_to_back(), &meta(), &opts(ChartMode::Segments));
    assert!(plan.days.iter().all(|d| d.connectors.is_empty()));
}

#[test]
fn test_segments_are_sorted_stably_by_start() {
    let mut ledger = WeekLedger::new();
    let day = WeekKey::Monday;
    ledger.add_activity(day, ActivityRecord::new(ActivityType::Work, 10.0, 11.0, None));
    ledger.add_activity(day, ActivityRecord::new(ActivityType::Driving, 6.0, 8.0, None));
    ledger.add_activity(day, ActivityRecord::new(ActivityType::Break, 6.0, 6.5, None));
    ledger.add_activity(day, ActivityRecord::new(ActivityType::Work, 6.0, 7.0, None));

    let plan = build_plan(&ledger, &meta(), &opts(ChartMode::Segments));
    let order: Vec<usize> = plan.days[0].segments.iter().map(|s| s.source_index).collect();

    assert_eq!(order, vec![1, 2, 3, 0]);
    assert_eq!(plan.days[0].bounds, Some((6.0, 11.0)));
}

#[test]
fn test_lanes_colors_and_notes() {
    let ledger = sample_week();
    let plan = build_plan(&ledger, &meta(), &opts(ChartMode::Segments));
    let monday = &plan.days[0];

    assert_eq!(plan.lanes.len(), 3);
    assert_eq!(monday.label, "Montag");
    assert_eq!(monday.segments.len(), ledger[WeekKey::Monday].activities.len());

    let lunch = &monday.segments[2];
    assert_eq!(lunch.lane, ActivityType::Break.lane());
    assert_eq!(lunch.color, ActivityType::Break.color());

    let note = monday
        .annotations
        .iter()
        .find(|a| a.text == "Lunch break")
        .expect("note present");
    assert_eq!(note.x, 12.5);
    assert_eq!(note.lane, 1);

    // Tuesday has two activities without a note
    assert_eq!(plan.days[1].annotations.len(), 2);
}

#[test]
fn test_unknown_type_gets_extra_gray_lane() {
    let mut ledger = WeekLedger::new();
    ledger.add_activity(
        WeekKey::Saturday,
        ActivityRecord::new(ActivityType::from_code("X"), 1.0, 2.0, None),
    );

    let plan = build_plan(&ledger, &meta(), &opts(ChartMode::Segments));

    assert_eq!(plan.lanes.len(), 4);
    assert_eq!(plan.lanes[3].label, "?");
    assert_eq!(plan.days[5].segments[0].color, ActivityType::from_code("X").color());
}

#[test]
fn test_empty_days_and_week_totals() {
    let plan = build_plan(&sample_week(), &meta(), &opts(ChartMode::Steps));

    let sunday = &plan.days[6];
    assert!(sunday.segments.is_empty());
    assert!(sunday.connectors.is_empty());
    assert_eq!(sunday.bounds, None);
    assert_eq!(sunday.summary.working_hours, 0.0);
    assert_eq!(sunday.summary.km, 0.0);

    assert_eq!(plan.week.declared_hours, 28.0);
    assert_eq!(plan.week.working_hours, 25.5);
    assert_eq!(plan.week.km, 757.0);
    assert_eq!(plan.hint, None);
}

#[test]
fn test_text_rendering() {
    let mut o = opts(ChartMode::Steps);
    o.show_break_hint = true;
    let plan = build_plan(&sample_week(), &meta(), &o);

    let text = render_text(&plan, false);

    assert!(text.contains(
        "Wochenbericht vom 24.02.2025 bis 28.02.2025   Monteur: Hans Mustermann   Woche: 9"
    ));
    assert!(text.contains(BREAK_HINT));
    assert!(text.contains("Std. 18  Arbeit 17.00  km 396"));
    assert!(text.contains("| 12:00 F -> P"));
    assert!(text.contains("* 12:30 P: Lunch break"));
    assert!(text.contains("Beginn 00:00  Ende 18:00"));
    assert!(text.contains("Gesamt-Stunden: 28   Arbeitsstunden: 25.50   km: 757"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_pdf_rendering_writes_file() {
    let out = temp_out("chart_pdf", "pdf");
    let plan = build_plan(&sample_week(), &meta(), &opts(ChartMode::Steps));

    render_pdf(&plan, Path::new(&out)).expect("pdf written");

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_week_meta_from_date() {
    let meta = WeekMeta::parse_for_date("2025-02-26", "Manfred").expect("valid date");

    assert_eq!(meta.date_range, "24.02.2025 bis 02.03.2025");
    assert_eq!(meta.week_number, 9);
    assert_eq!(meta.responsible_person, "Manfred");
    assert!(WeekMeta::parse_for_date("26.02.2025", "x").is_err());
}
