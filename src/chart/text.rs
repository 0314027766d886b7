//! Terminal rendering of a chart plan: one block per day, two cells per hour.

use crate::chart::ChartMode;
use crate::chart::plan::{ChartPlan, DayTimeline, Lane};
use crate::utils::colors::{RESET, ansi_for, color_for_amount};
use crate::utils::formatting::{bold, fmt_compact, fmt_hours, hours2clock, pad_left, pad_right};

const CELLS_PER_HOUR: usize = 2;
const HOURS: usize = 24;
const WIDTH: usize = CELLS_PER_HOUR * HOURS;

pub fn render_text(plan: &ChartPlan, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&emphasis(&plan.heading, color));
    out.push('\n');
    if let Some(hint) = &plan.hint {
        out.push_str(hint);
        out.push('\n');
    }
    out.push('\n');

    for day in &plan.days {
        render_day(&mut out, plan, day, color);
        out.push('\n');
    }

    out.push_str(&emphasis(
        &format!(
            "Gesamt-Stunden: {}   Arbeitsstunden: {}   km: {}",
            fmt_compact(plan.week.declared_hours),
            fmt_hours(plan.week.working_hours),
            fmt_compact(plan.week.km)
        ),
        color,
    ));
    out.push('\n');
    out
}

fn emphasis(s: &str, color: bool) -> String {
    if color { bold(s) } else { s.to_string() }
}

fn render_day(out: &mut String, plan: &ChartPlan, day: &DayTimeline, color: bool) {
    let s = &day.summary;
    let km = fmt_compact(s.km);
    let km = if color {
        format!("{}{}{}", color_for_amount(s.km), km, RESET)
    } else {
        km
    };

    out.push_str(&format!(
        "{}Std. {}  Arbeit {}  km {}\n",
        pad_right(&emphasis(&day.label, color), 14),
        fmt_compact(s.declared_hours),
        fmt_hours(s.working_hours),
        km
    ));

    // highest lane on top, as on the printed chart
    for lane in plan.lanes.iter().rev() {
        out.push_str(&lane_row(day, lane, color));
        out.push('\n');
    }
    out.push_str(&axis_row());
    out.push('\n');

    if let Some((first, last)) = day.bounds {
        out.push_str(&format!(
            "    Beginn {}  Ende {}\n",
            hours2clock(first),
            hours2clock(last)
        ));
    }

    if plan.mode == ChartMode::Steps {
        for c in &day.connectors {
            out.push_str(&format!(
                "    | {} {} -> {}\n",
                hours2clock(c.at),
                lane_label(plan, c.from_lane),
                lane_label(plan, c.to_lane)
            ));
        }
    }

    for a in &day.annotations {
        out.push_str(&format!(
            "    * {} {}: {}\n",
            hours2clock(a.x),
            lane_label(plan, a.lane),
            a.text
        ));
    }
}

fn lane_label(plan: &ChartPlan, lane: usize) -> &str {
    plan.lanes
        .iter()
        .find(|l| l.index == lane)
        .map(|l| l.label.as_str())
        .unwrap_or("?")
}

fn lane_row(day: &DayTimeline, lane: &Lane, color: bool) -> String {
    let mut cells: Vec<Option<usize>> = vec![None; WIDTH];

    // later segments overwrite earlier ones, like overlapping strokes
    for (i, seg) in day.segments.iter().enumerate() {
        if seg.lane != lane.index {
            continue;
        }
        for (c, cell) in cells.iter_mut().enumerate() {
            let mid = (c as f64 + 0.5) / CELLS_PER_HOUR as f64;
            if mid >= seg.start && mid < seg.end {
                *cell = Some(i);
            }
        }
    }

    let mut row = format!("{} |", pad_left(&lane.label, 2));
    for cell in cells {
        match cell {
            Some(i) => {
                let seg = &day.segments[i];
                let ch = seg.code.chars().next().unwrap_or('#');
                if color {
                    row.push_str(&format!("{}{}{}", ansi_for(seg.color), ch, RESET));
                } else {
                    row.push(ch);
                }
            }
            None => row.push('.'),
        }
    }
    row.push('|');
    row
}

fn axis_row() -> String {
    let mut row = String::from("    ");
    let mut h = 0;
    while h < HOURS {
        row.push_str(&pad_right(&h.to_string(), CELLS_PER_HOUR * 3));
        h += 3;
    }
    row.push_str("24");
    row
}
