//! src/loggers/format.rs
//!
//! Builds the final output line. Pure: the clock reading is passed in.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};

use crate::loggers::builder::LoggerConfig;
use crate::loggers::core::{LogEntry, Severity};
use crate::loggers::render::render_args;

pub const DEFAULT_TIME_FORMAT: &str = "%Y/%m/%d - %H:%M:%S";

pub const FG_RED: &str = "\x1b[31m";
pub const FG_BOLD_RED: &str = "\x1b[31;1m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_NORMAL: &str = "\x1b[0m";

const ARROW: &str = "  ▶  ";

/// Color prefix for a severity. INFO has none.
pub const fn color(severity: Severity) -> &'static str {
    match severity {
        Severity::Crit => FG_BOLD_RED,
        Severity::Error => FG_RED,
        Severity::Warn => FG_YELLOW,
        Severity::Notice => FG_GREEN,
        Severity::Debug | Severity::Json => FG_CYAN,
        Severity::Info => "",
    }
}

/// Reset suffix for a severity. INFO sets no color and so resets none.
pub const fn reset(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "",
        _ => FG_NORMAL,
    }
}

/// Spaces after `[LABEL] ` so every label occupies the same width.
pub const fn padding(severity: Severity) -> &'static str {
    match severity {
        Severity::Crit => "",
        Severity::Warn => " ",
        Severity::Notice => "  ",
        Severity::Debug | Severity::Error => "   ",
        Severity::Info | Severity::Json => "    ",
    }
}

/// Renders `now` with `pattern`, falling back to the default pattern when
/// `pattern` holds an unknown specifier.
pub fn timestamp<Tz>(now: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return now.format(DEFAULT_TIME_FORMAT).to_string();
    }
    let mut out = String::new();
    match write!(out, "{}", now.format_with_items(items.into_iter())) {
        Ok(()) => out,
        Err(_) => now.format(DEFAULT_TIME_FORMAT).to_string(),
    }
}

/// Assembles one line (without the trailing newline).
pub fn format_line<Tz>(entry: &LogEntry, config: &LoggerConfig, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let severity = entry.severity;
    let mut line = String::new();
    let _ = write!(
        line,
        "{}[{}] {} [{}] {}{}{}{}{}",
        color(severity),
        config.component,
        timestamp(now, &config.time_format),
        severity.label(),
        padding(severity),
        entry.call_site,
        ARROW,
        render_args(&entry.args, severity),
        reset(severity),
    );
    line
}
