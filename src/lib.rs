
pub mod core;
pub mod configs;
pub mod loggers;

pub use crate::core::error::LogError;
pub use loggers::{
    LogValue, Logger, LoggerBuilder, Severity, ToLogValue, global, level, reset, set_level,
    set_severity, set_time_format, time_format,
};

/// Alias of [`json!`] that does not clash with `serde_json::json!`.
pub use crate::json as log_json;
