//! src/loggers/core.rs
//!
//! Severity taxonomy and the per-call log entry.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::error::LogError;
use crate::loggers::value::LogValue;

/// Log severities, ordered by rank. Lower rank is more severe.
///
/// `Json` shares the DEBUG gate but renders its arguments as JSON.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Severity {
    Crit = 1,
    Error = 2,
    Warn = 3,
    Notice = 4,
    Info = 5,
    Debug = 6,
    Json = 7,
}

impl Severity {
    /// Severities accepted as a threshold.
    pub const THRESHOLDS: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warn,
        Severity::Error,
        Severity::Crit,
    ];

    /// Numeric rank used by the admission check.
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Json => Severity::Debug as u8,
            other => other as u8,
        }
    }

    /// Whether an entry at `self` passes the given threshold.
    pub const fn admitted_by(self, threshold: Severity) -> bool {
        matches!(self, Severity::Crit) || self.rank() <= threshold.rank()
    }

    /// Canonical name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Crit => "CRIT",
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Json => "JSON",
        }
    }

    /// Human label shown between brackets in an output line.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Crit => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warn => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
            Severity::Json => "JSON",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::THRESHOLDS
            .into_iter()
            .find(|sev| sev.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LogError::InvalidLevel(s.to_string()))
    }
}

/// Source position of the code that invoked a logging entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self { file: file.into(), line }
    }

    /// Placeholder used when the caller location cannot be resolved.
    pub fn unknown() -> Self {
        Self::new("???", 0)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Arguments carried by an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryArgs {
    /// Values from a plain entry point, rendered per severity.
    Values(Vec<LogValue>),
    /// Output of a printf-style entry point, always rendered as plain text.
    Formatted(String),
}

/// One log call, built after admission and dropped once emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub severity: Severity,
    pub call_site: CallSite,
    pub args: EntryArgs,
}
