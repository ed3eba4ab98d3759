// tests/test_logger.rs
//
// End-to-end behaviour of the severity macros against an in-memory sink.

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use common::{FIXED_TIME, capture};
use rs_logger_ng::loggers::caller::UnresolvedCallerResolver;
use rs_logger_ng::loggers::format::{DEFAULT_TIME_FORMAT, FG_BOLD_RED, FG_CYAN, FG_NORMAL};
use rs_logger_ng::loggers::{FixedCallerResolver, LogValue, LoggerBuilder, Severity, ToLogValue};
use rs_logger_ng::{LogError, crit, critf, debug, debugf, error, info, infof, json, notice, warn};

fn prefix(label_and_pad: &str, line: u32) -> String {
    format!("[APP] {FIXED_TIME} [{label_and_pad}test_logger.rs:{line}  ▶  ")
}

#[test]
fn info_line_has_no_color_and_pipe_joined_args() {
    let (logger, out) = capture(Severity::Info);

    info!(logger => "a", 1); let line = line!();

    assert_eq!(out.contents(), format!("{}a | 1\n", prefix("INFO]     ", line)));
}

#[test]
fn info_is_dropped_below_notice_threshold() {
    let (logger, out) = capture(Severity::Notice);

    info!(logger => "Some string for info", 123);
    infof!(logger => "x={}", 5);

    assert!(out.is_empty());
}

#[test]
fn composite_values_render_on_one_line() {
    let (logger, out) = capture(Severity::Info);
    let mut map = HashMap::new();
    map.insert("prop2", 321i32.to_log_value());
    map.insert("prop1", "val1".to_log_value());
    let seq = vec!["val1".to_log_value(), 321i32.to_log_value()];

    info!(logger => "Some string for info", 123, map, seq); let line = line!();

    assert_eq!(
        out.contents(),
        format!(
            "{}Some string for info | 123 | map[prop1:val1 prop2:321] | [val1 321]\n",
            prefix("INFO]     ", line)
        )
    );
}

#[test]
fn every_severity_has_its_label_padding_and_color() {
    let (logger, out) = capture(Severity::Debug);

    notice!(logger => "n"); let l_notice = line!();
    warn!(logger => "w"); let l_warn = line!();
    error!(logger => "e"); let l_error = line!();
    crit!(logger => "c"); let l_crit = line!();

    let expected = [
        format!("\x1b[32m{}n{FG_NORMAL}", prefix("NOTICE]   ", l_notice)),
        format!("\x1b[33m{}w{FG_NORMAL}", prefix("WARNING]  ", l_warn)),
        format!("\x1b[31m{}e{FG_NORMAL}", prefix("ERROR]    ", l_error)),
        format!("{FG_BOLD_RED}{}c{FG_NORMAL}", prefix("CRITICAL] ", l_crit)),
    ];
    assert_eq!(out.lines(), expected);
}

#[test]
fn debug_dumps_each_argument_without_separator() {
    let (logger, out) = capture(Severity::Debug);
    let map = LogValue::Map(vec![
        ("prop2".to_log_value(), 321i32.to_log_value()),
        ("prop1".to_log_value(), "val1".to_log_value()),
    ]);

    debug!(logger => "Some string for debug", 123, map); let line = line!();

    let expected = format!(
        "{FG_CYAN}{}(string) (len=21) \"Some string for debug\"\n\
         (int) 123\n\
         (map) (len=2) {{\n\
         \x20 (string) (len=5) \"prop1\": (string) (len=4) \"val1\",\n\
         \x20 (string) (len=5) \"prop2\": (int) 321\n\
         }}\n\
         {FG_NORMAL}\n",
        prefix("DEBUG]    ", line)
    );
    assert_eq!(out.contents(), expected);
    assert!(!out.contents().contains(" | "));
}

#[test]
fn debug_dump_orders_map_keys() {
    let (logger, out) = capture(Severity::Debug);
    let mut map = HashMap::new();
    map.insert("b", 2);
    map.insert("a", 1);

    for _ in 0..5 {
        debug!(logger => map);
    }

    let text = out.contents();
    for block in text.split(FG_NORMAL).filter(|b| b.contains("(map)")) {
        let a = block.find("\"a\"").unwrap();
        let b = block.find("\"b\"").unwrap();
        assert!(a < b, "keys out of order in {block:?}");
    }
}

#[test]
fn printf_style_never_dumps() {
    let (logger, out) = capture(Severity::Debug);

    debugf!(logger => "v={} n={:?}", "s", vec![1, 2]); let line = line!();

    assert_eq!(
        out.contents(),
        format!("{FG_CYAN}{}v=s n=[1, 2]{FG_NORMAL}\n", prefix("DEBUG]    ", line))
    );
    assert!(!out.contents().contains("(string)"));
}

#[test]
fn printf_style_is_a_single_segment() {
    let (logger, out) = capture(Severity::Info);

    infof!(logger => "x={}", 5); let line = line!();

    assert_eq!(out.contents(), format!("{}x=5\n", prefix("INFO]     ", line)));
    assert!(!out.contents().contains(" | "));
}

#[test]
fn json_pretty_prints_with_sorted_keys() {
    let (logger, out) = capture(Severity::Debug);
    let map = LogValue::Map(vec![
        ("b".to_log_value(), 1i32.to_log_value()),
        ("a".to_log_value(), "x".to_log_value()),
    ]);

    json!(logger => map, 7); let line = line!();

    assert_eq!(
        out.contents(),
        format!(
            "{FG_CYAN}{}{{\n  \"a\": \"x\",\n  \"b\": 1\n}} | 7{FG_NORMAL}\n",
            prefix("JSON]     ", line)
        )
    );
}

#[test]
fn json_is_gated_like_debug() {
    let (logger, out) = capture(Severity::Info);

    json!(logger => "hidden");

    assert!(out.is_empty());
}

#[test]
fn json_failure_renders_error_text() {
    let (logger, out) = capture(Severity::Debug);
    let bad = LogValue::Map(vec![(LogValue::Seq(vec![1i32.to_log_value()]), 1i32.to_log_value())]);

    json!(logger => bad, "after");

    let text = out.contents();
    assert_eq!(out.lines().len(), 1);
    assert!(text.contains("key must be a string"), "{text}");
    assert!(text.contains(" | \"after\""));
}

#[test]
fn crit_ignores_threshold() {
    let (logger, out) = capture(Severity::Crit);

    error!(logger => "no");
    crit!(logger => "yes");
    critf!(logger => "{}!", "yes");

    let lines = out.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[CRITICAL] "));
    assert!(lines[0].ends_with(&format!("yes{FG_NORMAL}")));
    assert!(lines[1].ends_with(&format!("yes!{FG_NORMAL}")));
}

#[test]
fn call_site_points_at_the_macro_for_both_paths() {
    let (logger, out) = capture(Severity::Info);

    info!(logger => "plain"); let plain = line!();
    infof!(logger => "{}", "printf"); let printf = line!();
    logger.log(Severity::Info, vec!["direct".to_log_value()]); let direct = line!();

    let lines = out.lines();
    assert!(lines[0].contains(&format!(" test_logger.rs:{plain}  ▶  plain")));
    assert!(lines[1].contains(&format!(" test_logger.rs:{printf}  ▶  printf")));
    assert!(lines[2].contains(&format!(" test_logger.rs:{direct}  ▶  direct")));
}

#[test]
fn resolver_double_and_unresolved_placeholder() {
    let out = common::SharedBuffer::default();
    let fixed = LoggerBuilder::new("APP")
        .with_time_format(FIXED_TIME)
        .with_resolver(Arc::new(FixedCallerResolver::new("main.rs", 42)))
        .with_writer(Box::new(out.clone()))
        .build();
    let broken = LoggerBuilder::new("APP")
        .with_time_format(FIXED_TIME)
        .with_resolver(Arc::new(UnresolvedCallerResolver))
        .with_writer(Box::new(out.clone()))
        .build();

    info!(fixed => "one");
    info!(broken => "two");

    assert_eq!(
        out.lines(),
        vec![
            format!("[APP] {FIXED_TIME} [INFO]     main.rs:42  ▶  one"),
            format!("[APP] {FIXED_TIME} [INFO]     ???:0  ▶  two"),
        ]
    );
}

#[test]
fn invalid_level_keeps_previous_threshold() {
    let (logger, out) = capture(Severity::Debug);
    logger.set_level("info").unwrap();

    let err = logger.set_level("bogus").unwrap_err();

    assert_eq!(err, LogError::InvalidLevel("bogus".to_string()));
    assert!(err.to_string().contains("bogus"));
    assert_eq!(logger.level(), Severity::Info);
    debug!(logger => "hidden");
    info!(logger => "shown");
    assert_eq!(out.lines().len(), 1);
}

#[test]
fn threshold_change_applies_to_next_call() {
    let (logger, out) = capture(Severity::Debug);
    let clone = logger.clone();

    info!(logger => "first");
    clone.set_level("ERROR").unwrap();
    info!(logger => "second");
    error!(logger => "third");

    let lines = out.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("first"));
    assert!(lines[1].contains("third"));
}

#[test]
fn invalid_time_format_falls_back_to_default() {
    let (logger, out) = capture(Severity::Info);
    logger.set_time_format("%Q");

    info!(logger => "t");

    let line = out.contents();
    let stamp = &line["[APP] ".len().."[APP] ".len() + "1999/10/17 - 10:11:10".len()];
    assert_eq!(&stamp[4..5], "/");
    assert_eq!(&stamp[7..8], "/");
    assert_eq!(&stamp[10..13], " - ");
    assert!(stamp.chars().filter(char::is_ascii_digit).count() == 14, "{stamp}");
    assert_eq!(logger.time_format(), "%Q");
    assert_ne!(logger.time_format(), DEFAULT_TIME_FORMAT);
}

#[test]
fn disabled_calls_do_not_evaluate_arguments() {
    let (logger, out) = capture(Severity::Error);
    let mut evaluated = false;
    let mut touch = || {
        evaluated = true;
        "x"
    };

    info!(logger => touch());
    infof!(logger => "{}", touch());

    assert!(!evaluated);
    assert!(out.is_empty());
}

#[test]
fn component_tag_and_redirect() {
    let (logger, first) = capture(Severity::Info);
    let second = common::SharedBuffer::default();
    logger.set_component("svc");

    info!(logger => "a");
    let _previous = logger.redirect(Box::new(second.clone()));
    info!(logger => "b");

    assert!(first.contents().starts_with("[svc] "));
    assert_eq!(first.lines().len(), 1);
    assert!(second.contents().starts_with("[svc] "));
    assert!(second.contents().trim_end().ends_with("b"));
}
