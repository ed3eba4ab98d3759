//! src/loggers/render.rs
//!
//! Argument rendering. Three modes, chosen by severity:
//!
//! - plain: one line per value (`map[a:1 b:2]`, `[x y]`, `{field:value}`)
//! - dump (DEBUG): indented, type-annotated structure with string lengths
//! - JSON: `serde_json` pretty output, or the error text when that fails
//!
//! Mapping keys are always visited in lexicographic order of their plain text.

use std::fmt::Write;

use serde::Serialize;

use crate::core::error::LogError;
use crate::loggers::core::{EntryArgs, Severity};
use crate::loggers::value::LogValue;

const INDENT: &str = "  ";
const SEPARATOR: &str = " | ";

/// Renders a single value the way `severity` asks for.
pub fn render(value: &LogValue, severity: Severity) -> String {
    match severity {
        Severity::Debug => dump(value),
        Severity::Json => render_json(value),
        _ => plain(value),
    }
}

/// Renders every argument of an entry and joins them.
///
/// DEBUG blocks are concatenated as-is since each one already ends with a
/// newline; every other severity joins with `" | "`.
pub fn render_args(args: &EntryArgs, severity: Severity) -> String {
    match args {
        EntryArgs::Formatted(text) => text.clone(),
        EntryArgs::Values(values) if severity == Severity::Debug => {
            values.iter().map(dump).collect()
        }
        EntryArgs::Values(values) => values
            .iter()
            .map(|v| render(v, severity))
            .collect::<Vec<_>>()
            .join(SEPARATOR),
    }
}

/// Single-line text form.
pub fn plain(value: &LogValue) -> String {
    let mut out = String::new();
    write_plain(&mut out, value);
    out
}

fn write_plain(out: &mut String, value: &LogValue) {
    match value {
        LogValue::Null => out.push_str("<nil>"),
        LogValue::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        LogValue::Int(i) => {
            let _ = write!(out, "{i}");
        }
        LogValue::Uint(u) => {
            let _ = write!(out, "{u}");
        }
        LogValue::Float(f) => {
            let _ = write!(out, "{f}");
        }
        LogValue::Str(s) => out.push_str(s),
        LogValue::Seq(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_plain(out, item);
            }
            out.push(']');
        }
        LogValue::Map(entries) => {
            out.push_str("map[");
            for (i, (k, v)) in sorted_entries(entries).into_iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_plain(out, k);
                out.push(':');
                write_plain(out, v);
            }
            out.push(']');
        }
        LogValue::Struct { fields, .. } => {
            out.push('{');
            for (i, (name, v)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(name);
                out.push(':');
                write_plain(out, v);
            }
            out.push('}');
        }
    }
}

/// Deep structural dump, terminated by a newline.
pub fn dump(value: &LogValue) -> String {
    let mut out = String::new();
    write_dump(&mut out, value, 0);
    out.push('\n');
    out
}

fn write_dump(out: &mut String, value: &LogValue, depth: usize) {
    let _ = write!(out, "({}) ", value.type_name());
    match value {
        LogValue::Null => out.push_str("<nil>"),
        LogValue::Str(s) => {
            let _ = write!(out, "(len={}) {:?}", s.len(), s);
        }
        LogValue::Seq(items) => {
            let _ = write!(out, "(len={}) ", items.len());
            write_block(out, depth, items.iter(), |out, item| {
                write_dump(out, item, depth + 1)
            });
        }
        LogValue::Map(entries) => {
            let _ = write!(out, "(len={}) ", entries.len());
            write_block(out, depth, sorted_entries(entries).into_iter(), |out, (k, v)| {
                write_dump(out, k, depth + 1);
                out.push_str(": ");
                write_dump(out, v, depth + 1);
            });
        }
        LogValue::Struct { fields, .. } => {
            write_block(out, depth, fields.iter(), |out, (name, v)| {
                out.push_str(name);
                out.push_str(": ");
                write_dump(out, v, depth + 1);
            });
        }
        scalar => write_plain(out, scalar),
    }
}

fn write_block<I, F>(out: &mut String, depth: usize, items: I, mut each: F)
where
    I: ExactSizeIterator,
    F: FnMut(&mut String, I::Item),
{
    let count = items.len();
    out.push_str("{\n");
    for (i, item) in items.enumerate() {
        push_indent(out, depth + 1);
        each(out, item);
        if i + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    push_indent(out, depth);
    out.push('}');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Pretty JSON with a two-space indent. Failures render as the error's text.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> String {
    to_json(value).unwrap_or_else(|e| e.to_string())
}

/// Fallible form of [`render_json`].
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, LogError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Map entries ordered by the plain rendering of their keys.
pub(crate) fn sorted_entries(entries: &[(LogValue, LogValue)]) -> Vec<(&LogValue, &LogValue)> {
    let mut keyed: Vec<(String, &LogValue, &LogValue)> =
        entries.iter().map(|(k, v)| (plain(k), k, v)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, k, v)| (k, v)).collect()
}
