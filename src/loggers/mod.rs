// src/loggers/mod.rs

pub mod builder;
pub mod caller;
pub mod core;
pub mod emitter;
pub mod format;
pub mod render;
pub mod value;

pub use self::builder::{
    Logger, LoggerBuilder, LoggerConfig, global, level, reset, set_level, set_severity,
    set_time_format, time_format,
};
pub use self::caller::{CallerResolver, FixedCallerResolver, TrackCallerResolver};
pub use self::core::{CallSite, Severity};
pub use self::value::{LogValue, ToLogValue};

#[doc(hidden)]
#[macro_export]
macro_rules! log_values {
    ($logger:expr, $level:expr $(, $arg:expr )* ) => {
        {
            let logger: &$crate::loggers::Logger = &$logger;
            // Arguments are only converted once the entry is admitted.
            if logger.enabled($level) {
                logger.log(
                    $level,
                    ::std::vec![ $( $crate::loggers::ToLogValue::to_log_value(&$arg) ),* ],
                );
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_format {
    ($logger:expr, $level:expr, $($fmt:tt)+ ) => {
        {
            let logger: &$crate::loggers::Logger = &$logger;
            if logger.enabled($level) {
                logger.logf($level, ::std::format_args!($($fmt)+));
            }
        }
    };
}

/// Plain entry points. `debug!(a, b)` logs through the process-wide logger,
/// `debug!(logger => a, b)` through a specific one.
#[macro_export]
macro_rules! debug {
    ($logger:expr => $( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($logger, $crate::loggers::Severity::Debug $(, $arg )* )
    };
    ($( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($crate::loggers::global(), $crate::loggers::Severity::Debug $(, $arg )* )
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr => $( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($logger, $crate::loggers::Severity::Info $(, $arg )* )
    };
    ($( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($crate::loggers::global(), $crate::loggers::Severity::Info $(, $arg )* )
    };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr => $( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($logger, $crate::loggers::Severity::Notice $(, $arg )* )
    };
    ($( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($crate::loggers::global(), $crate::loggers::Severity::Notice $(, $arg )* )
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr => $( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($logger, $crate::loggers::Severity::Warn $(, $arg )* )
    };
    ($( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($crate::loggers::global(), $crate::loggers::Severity::Warn $(, $arg )* )
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr => $( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($logger, $crate::loggers::Severity::Error $(, $arg )* )
    };
    ($( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($crate::loggers::global(), $crate::loggers::Severity::Error $(, $arg )* )
    };
}

/// Always emitted, whatever the threshold.
#[macro_export]
macro_rules! crit {
    ($logger:expr => $( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($logger, $crate::loggers::Severity::Crit $(, $arg )* )
    };
    ($( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($crate::loggers::global(), $crate::loggers::Severity::Crit $(, $arg )* )
    };
}

/// DEBUG-gated; each argument is pretty-printed as JSON.
///
/// The name clashes with `serde_json::json!`. Code that needs both can import
/// this one as `rs_logger_ng::log_json`.
#[macro_export]
macro_rules! json {
    ($logger:expr => $( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($logger, $crate::loggers::Severity::Json $(, $arg )* )
    };
    ($( $arg:expr ),* $(,)? ) => {
        $crate::log_values!($crate::loggers::global(), $crate::loggers::Severity::Json $(, $arg )* )
    };
}

/// Printf-style entry points take `format_args!` syntax. The result is logged
/// as one plain string at every severity.
#[macro_export]
macro_rules! debugf {
    ($logger:expr => $($fmt:tt)+ ) => {
        $crate::log_format!($logger, $crate::loggers::Severity::Debug, $($fmt)+ )
    };
    ($($fmt:tt)+ ) => {
        $crate::log_format!($crate::loggers::global(), $crate::loggers::Severity::Debug, $($fmt)+ )
    };
}

#[macro_export]
macro_rules! infof {
    ($logger:expr => $($fmt:tt)+ ) => {
        $crate::log_format!($logger, $crate::loggers::Severity::Info, $($fmt)+ )
    };
    ($($fmt:tt)+ ) => {
        $crate::log_format!($crate::loggers::global(), $crate::loggers::Severity::Info, $($fmt)+ )
    };
}

#[macro_export]
macro_rules! noticef {
    ($logger:expr => $($fmt:tt)+ ) => {
        $crate::log_format!($logger, $crate::loggers::Severity::Notice, $($fmt)+ )
    };
    ($($fmt:tt)+ ) => {
        $crate::log_format!($crate::loggers::global(), $crate::loggers::Severity::Notice, $($fmt)+ )
    };
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr => $($fmt:tt)+ ) => {
        $crate::log_format!($logger, $crate::loggers::Severity::Warn, $($fmt)+ )
    };
    ($($fmt:tt)+ ) => {
        $crate::log_format!($crate::loggers::global(), $crate::loggers::Severity::Warn, $($fmt)+ )
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr => $($fmt:tt)+ ) => {
        $crate::log_format!($logger, $crate::loggers::Severity::Error, $($fmt)+ )
    };
    ($($fmt:tt)+ ) => {
        $crate::log_format!($crate::loggers::global(), $crate::loggers::Severity::Error, $($fmt)+ )
    };
}

#[macro_export]
macro_rules! critf {
    ($logger:expr => $($fmt:tt)+ ) => {
        $crate::log_format!($logger, $crate::loggers::Severity::Crit, $($fmt)+ )
    };
    ($($fmt:tt)+ ) => {
        $crate::log_format!($crate::loggers::global(), $crate::loggers::Severity::Crit, $($fmt)+ )
    };
}
