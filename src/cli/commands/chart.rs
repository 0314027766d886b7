use crate::chart::{ChartFormat, ChartOptions, build_plan, render_pdf, render_text};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::models::WeekMeta;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use chrono::Local;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Chart {
        format,
        mode,
        file,
        week_of,
        person,
        date_range,
        week,
        force,
    } = cmd
    {
        let person = person
            .clone()
            .unwrap_or_else(|| cfg.responsible_person.clone());

        // --week-of (default: today) fills both fields, explicit values win
        let mut meta = match week_of {
            Some(d) => WeekMeta::parse_for_date(d, person)?,
            None => WeekMeta::for_date(Local::now().date_naive(), person),
        };
        if let Some(r) = date_range {
            meta.date_range = r.clone();
        }
        if let Some(w) = week {
            meta.week_number = *w;
        }

        let opts = ChartOptions {
            mode: mode.unwrap_or(cfg.chart_mode),
            language: cfg.language,
            show_break_hint: cfg.show_break_hint,
        };
        let plan = build_plan(&session.ledger, &meta, &opts);

        match (format, file) {
            (ChartFormat::Pdf, None) => {
                return Err(AppError::Export("--file is required for pdf charts".into()));
            }
            (ChartFormat::Text, None) => print!("{}", render_text(&plan, true)),
            (fmt, Some(f)) => {
                let path = expand_tilde(f);
                ensure_writable(&path, *force)?;
                info(format!("Drawing {} chart: {}", fmt.as_str(), path.display()));

                match fmt {
                    ChartFormat::Pdf => render_pdf(&plan, &path)?,
                    ChartFormat::Text => fs::write(&path, render_text(&plan, false))?,
                }
                success(format!("Chart written to {}", path.display()));
            }
        }
    }
    Ok(())
}
