//! Drawing plan of a week chart.
//!
//! The plan is plain data: every coordinate is in hours (x) and lane index
//! (y). The PDF and text renderers only translate it into drawing calls.

use crate::chart::ChartMode;
use crate::core::logic::Core;
use crate::models::activity_type::OTHER_LANE;
use crate::models::day_summary::DaySummary;
use crate::models::week_key::Language;
use crate::models::{ActivityType, WeekKey, WeekLedger, WeekMeta};
use crate::utils::colors::Rgb;

pub const BREAK_HINT: &str = "Bitte um Einhaltung der gesetzlich vorgeschriebenen Mittagspause von 30 min nach 6 Arbeitsstunden!";

#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    pub mode: ChartMode,
    pub language: Language,
    pub show_break_hint: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            mode: ChartMode::Segments,
            language: Language::De,
            show_break_hint: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub index: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub lane: usize,
    pub color: Rgb,
    pub code: String,
    /// Position of the activity in the day's insertion order.
    pub source_index: usize,
}

/// Note text centered above a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub lane: usize,
    pub text: String,
}

/// Vertical step between two back-to-back activities.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub at: f64,
    pub from_lane: usize,
    pub to_lane: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayTimeline {
    pub day: WeekKey,
    pub label: String,
    pub segments: Vec<Segment>,
    pub annotations: Vec<Annotation>,
    pub connectors: Vec<Connector>,
    /// First start and last end of the day, drawn as gridlines.
    pub bounds: Option<(f64, f64)>,
    pub summary: DaySummary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeekTotals {
    pub declared_hours: f64,
    pub working_hours: f64,
    pub km: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub heading: String,
    pub hint: Option<String>,
    pub mode: ChartMode,
    pub lanes: Vec<Lane>,
    pub days: Vec<DayTimeline>,
    pub week: WeekTotals,
}

pub fn build_plan(ledger: &WeekLedger, meta: &WeekMeta, opts: &ChartOptions) -> ChartPlan {
    let days: Vec<DayTimeline> = ledger
        .iter()
        .map(|(day, _)| build_day(ledger, day, opts))
        .collect();

    let mut lanes: Vec<Lane> = ActivityType::KNOWN
        .iter()
        .map(|t| Lane {
            index: t.lane(),
            label: t.code().to_string(),
        })
        .collect();

    let has_other = days
        .iter()
        .flat_map(|d| d.segments.iter())
        .any(|s| s.lane == OTHER_LANE);
    if has_other {
        lanes.push(Lane {
            index: OTHER_LANE,
            label: "?".to_string(),
        });
    }

    let summary = Core::build_week_summary(ledger);

    ChartPlan {
        heading: meta.heading(),
        hint: opts.show_break_hint.then(|| BREAK_HINT.to_string()),
        mode: opts.mode,
        lanes,
        days,
        week: WeekTotals {
            declared_hours: summary.declared_hours,
            working_hours: summary.working_hours,
            km: summary.km,
        },
    }
}

fn build_day(ledger: &WeekLedger, day: WeekKey, opts: &ChartOptions) -> DayTimeline {
    let entry = ledger.day(day);

    let indexed = entry.sorted_activities();

    let mut segments = Vec::with_capacity(indexed.len());
    let mut annotations = Vec::new();

    for (i, a) in &indexed {
        let lane = a.kind.lane();
        segments.push(Segment {
            start: a.start,
            end: a.end,
            lane,
            color: a.kind.color(),
            code: a.kind.code().to_string(),
            source_index: *i,
        });

        if let Some(note) = &a.note {
            annotations.push(Annotation {
                x: a.start + (a.end - a.start) / 2.0,
                lane,
                text: note.clone(),
            });
        }
    }

    let connectors = match opts.mode {
        ChartMode::Segments => Vec::new(),
        ChartMode::Steps => step_connectors(&segments),
    };

    let bounds = segments.first().map(|first| {
        let last_end = segments
            .iter()
            .map(|s| s.end)
            .fold(f64::NEG_INFINITY, f64::max);
        (first.start, last_end)
    });

    DayTimeline {
        day,
        label: day.label(opts.language).to_string(),
        segments,
        annotations,
        connectors,
        bounds,
        summary: Core::build_daily_summary(entry),
    }
}

/// Connects consecutive segments only when one ends exactly where the next
/// starts; any gap, however small, gets no connector.
fn step_connectors(sorted: &[Segment]) -> Vec<Connector> {
    sorted
        .windows(2)
        .filter(|w| w[0].end == w[1].start)
        .map(|w| Connector {
            at: w[0].end,
            from_lane: w[0].lane,
            to_lane: w[1].lane,
        })
        .collect()
}
