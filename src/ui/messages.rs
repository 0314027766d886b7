//! Console messages. This is the tool's only log channel: every user action
//! reports its outcome here, errors go to stderr.

use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T) -> String {
    format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(RED, ICON_ERR, msg));
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}{}", BLUE, BOLD, msg, RESET);
}
