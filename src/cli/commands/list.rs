use crate::cli::commands::parse_optional_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::{DayEntry, WeekKey};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_working};
use crate::utils::formatting::{fmt_compact, fmt_hours, hours2clock, italic};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::List { day } = cmd {
        let days: Vec<WeekKey> = match parse_optional_day(day)? {
            Some(d) => vec![d],
            None => WeekKey::ALL.to_vec(),
        };

        for d in days {
            print_day(d.label(cfg.language), session.ledger.day(d));
        }
    }
    Ok(())
}

fn print_day(label: &str, entry: &DayEntry) {
    let s = Core::build_daily_summary(entry);
    header(format!(
        "{}  Std. {}  km {}  {}Arbeit {}{}",
        label,
        fmt_hours(s.declared_hours),
        fmt_compact(s.km),
        color_for_working(s.working_hours, s.declared_hours),
        fmt_hours(s.working_hours),
        RESET
    ));

    if entry.activities.is_empty() {
        println!("{}", italic("  no activities"));
        println!();
        return;
    }

    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Type", 8),
        Column::new("Start", 7),
        Column::new("End", 7),
        Column::new("Hours", 6),
        Column::new("Note", 30),
    ]);

    // insertion order: the number is what `del --index` expects
    for (i, a) in entry.activities.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            format!("{} {}", a.kind.code(), a.kind.description()),
            hours2clock(a.start),
            hours2clock(a.end),
            fmt_hours(a.span()),
            a.note_str().to_string(),
        ]);
    }

    print!("{}", table.render());
    println!();
}
