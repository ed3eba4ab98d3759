//! src/loggers/builder.rs
//!
//! `Logger` owns the live configuration (threshold, time format, component
//! tag), the caller resolver and the emitter. A process-wide instance backs
//! the free functions and the logging macros.

use std::fmt;
use std::io::Write;
use std::panic::Location;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use chrono::Local;

use crate::core::error::LogError;
use crate::loggers::caller::{CallerResolver, TrackCallerResolver};
use crate::loggers::core::{CallSite, EntryArgs, LogEntry, Severity};
use crate::loggers::emitter::Emitter;
use crate::loggers::format::{DEFAULT_TIME_FORMAT, format_line};
use crate::loggers::value::LogValue;

pub const DEFAULT_COMPONENT: &str = "APP";

/// Snapshot of the mutable logger settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    pub level: Severity,
    pub time_format: String,
    pub component: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Debug,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            component: DEFAULT_COMPONENT.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct Logger {
    config: Arc<ArcSwap<LoggerConfig>>,
    resolver: Arc<dyn CallerResolver>,
    emitter: Arc<Emitter>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.config.load_full())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Read-only snapshot of the current settings. Changes go through the
    /// setters below.
    pub fn config(&self) -> Arc<LoggerConfig> {
        self.config.load_full()
    }

    /// Current threshold.
    pub fn level(&self) -> Severity {
        self.config.load().level
    }

    /// Whether a call at `severity` would be emitted right now.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.admitted_by(self.config.load().level)
    }

    /// Sets the threshold from a case-insensitive name. On error the previous
    /// threshold is kept.
    pub fn set_level(&self, name: &str) -> Result<(), LogError> {
        let level: Severity = name.parse()?;
        self.set_severity(level);
        Ok(())
    }

    /// Typed threshold setter. `Json` is stored as `Debug`, its gate.
    pub fn set_severity(&self, level: Severity) {
        let level = if level == Severity::Json { Severity::Debug } else { level };
        self.update(|cfg| cfg.level = level);
    }

    pub fn time_format(&self) -> String {
        self.config.load().time_format.clone()
    }

    /// Sets the strftime pattern used for timestamps. Unknown specifiers make
    /// lines fall back to the default pattern.
    pub fn set_time_format(&self, pattern: impl Into<String>) {
        let pattern = pattern.into();
        self.update(move |cfg| cfg.time_format = pattern.clone());
    }

    pub fn component(&self) -> String {
        self.config.load().component.clone()
    }

    pub fn set_component(&self, component: impl Into<String>) {
        let component = component.into();
        self.update(move |cfg| cfg.component = component.clone());
    }

    /// Restores threshold and time format to their defaults. The component
    /// tag is kept.
    pub fn reset(&self) {
        self.update(|cfg| {
            cfg.level = Severity::Debug;
            cfg.time_format = DEFAULT_TIME_FORMAT.to_string();
        });
    }

    /// Sends subsequent lines to `out`, returning the previous stream.
    pub fn redirect(&self, out: Box<dyn Write + Send>) -> Box<dyn Write + Send> {
        self.emitter.replace(out)
    }

    /// Logs values at `severity`. Used by the plain macros.
    #[track_caller]
    pub fn log(&self, severity: Severity, values: Vec<LogValue>) {
        self.dispatch(severity, EntryArgs::Values(values));
    }

    /// Logs pre-substituted format arguments. Used by the `*f!` macros.
    #[track_caller]
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if self.enabled(severity) {
            self.log_formatted(severity, args.to_string());
        }
    }

    #[track_caller]
    fn log_formatted(&self, severity: Severity, text: String) {
        self.dispatch(severity, EntryArgs::Formatted(text));
    }

    #[track_caller]
    fn dispatch(&self, severity: Severity, args: EntryArgs) {
        let config = self.config.load();
        if !severity.admitted_by(config.level) {
            return;
        }
        let call_site = self
            .resolver
            .resolve(Location::caller())
            .unwrap_or_else(|_| CallSite::unknown());
        let entry = LogEntry {
            severity,
            call_site,
            args,
        };
        let line = format_line(&entry, &config, &Local::now());
        self.emitter.emit(&line);
    }

    fn update<F>(&self, f: F)
    where
        F: Fn(&mut LoggerConfig),
    {
        self.config.rcu(|current| {
            let mut next = LoggerConfig::clone(current);
            f(&mut next);
            next
        });
    }
}

pub struct LoggerBuilder {
    config: LoggerConfig,
    resolver: Arc<dyn CallerResolver>,
    out: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    pub fn new(component: &str) -> Self {
        Self {
            config: LoggerConfig {
                component: component.to_string(),
                ..LoggerConfig::default()
            },
            resolver: Arc::new(TrackCallerResolver),
            out: None,
        }
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.config.level = if level == Severity::Json { Severity::Debug } else { level };
        self
    }

    pub fn with_time_format(mut self, pattern: &str) -> Self {
        self.config.time_format = pattern.to_string();
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn CallerResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Output stream; stdout when not set.
    pub fn with_writer(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = Some(out);
        self
    }

    pub fn build(self) -> Logger {
        let emitter = match self.out {
            Some(out) => Emitter::new(out),
            None => Emitter::stdout(),
        };
        Logger {
            config: Arc::new(ArcSwap::from_pointee(self.config)),
            resolver: self.resolver,
            emitter: Arc::new(emitter),
        }
    }
}

static GLOBAL: LazyLock<Logger> = LazyLock::new(|| LoggerBuilder::new(DEFAULT_COMPONENT).build());

/// The process-wide logger used by the macros without a `logger =>` prefix.
pub fn global() -> &'static Logger {
    &GLOBAL
}

pub fn set_level(name: &str) -> Result<(), LogError> {
    global().set_level(name)
}

pub fn set_severity(level: Severity) {
    global().set_severity(level)
}

pub fn level() -> Severity {
    global().level()
}

pub fn set_time_format(pattern: impl Into<String>) {
    global().set_time_format(pattern)
}

pub fn time_format() -> String {
    global().time_format()
}

/// Restores the process-wide threshold and time format to their defaults.
pub fn reset() {
    global().reset()
}
