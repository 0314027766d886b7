/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// RGB color in `0.0..=1.0` components, as used by the PDF renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

/// Fixed activity palette.
pub mod palette {
    use super::Rgb;

    pub const RED: Rgb = Rgb(0.86, 0.15, 0.15);
    pub const YELLOW: Rgb = Rgb(0.98, 0.80, 0.05);
    pub const BLUE: Rgb = Rgb(0.12, 0.35, 0.85);
    pub const GRAY: Rgb = Rgb(0.55, 0.55, 0.55);
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const GRID: Rgb = Rgb(0.80, 0.80, 0.80);
}

/// Terminal counterpart of an activity color.
pub fn ansi_for(rgb: Rgb) -> &'static str {
    if rgb == palette::RED {
        RED
    } else if rgb == palette::YELLOW {
        YELLOW
    } else if rgb == palette::BLUE {
        BLUE
    } else {
        GREY
    }
}

/// Returns GREY when the value is zero, RESET otherwise.
pub fn color_for_amount(value: f64) -> &'static str {
    if value == 0.0 { GREY } else { RESET }
}

/// Working hours color: more than the declared figure → red,
/// equal or less → green, nothing logged → grey.
pub fn color_for_working(working: f64, declared: f64) -> &'static str {
    if working == 0.0 {
        GREY
    } else if declared > 0.0 && working > declared {
        RED
    } else {
        GREEN
    }
}
