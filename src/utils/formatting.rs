//! Formatting utilities used for CLI and chart outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Pads to a display width, so that labels like "Größe" stay aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Hours as shown to the user: fixed two decimals ("8.50").
pub fn fmt_hours(h: f64) -> String {
    format!("{:.2}", h)
}

/// Hours as a clock reading ("7.5" → "07:30"); negative values keep the sign.
pub fn hours2clock(h: f64) -> String {
    let sign = if h < 0.0 { "-" } else { "" };
    let total_min = (h.abs() * 60.0).round() as i64;
    format!("{}{:02}:{:02}", sign, total_min / 60, total_min % 60)
}

/// Compact number for chart labels: integers without decimals ("396"),
/// anything else with up to two ("11.5").
pub fn fmt_compact(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
