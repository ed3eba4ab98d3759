//! # Core Error Module
//!
//! This module defines the central `LogError` type used throughout the library.
//! It leverages `thiserror` for error message formatting and `serde` for serialization.

use serde::Serialize;
use thiserror::Error;

/// Central error type for the `rs_logger_ng` library.
///
/// Only `InvalidLevel` and `Config` ever reach a caller. The other variants are
/// absorbed by the logger and turned into a degraded rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LogError {
    /// An unrecognized severity name was passed to a threshold setter.
    #[error("Invalid log level: {0:?}")]
    InvalidLevel(String),

    /// A value could not be rendered as JSON.
    #[error("json: {0}")]
    Serialization(String),

    /// The caller location could not be reduced to a file name.
    #[error("Unresolved call site: {0:?}")]
    UnresolvedCallSite(String),

    /// Error related to settings extraction.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LogError {
    fn from(e: serde_json::Error) -> Self {
        LogError::Serialization(e.to_string())
    }
}

impl From<figment::Error> for LogError {
    fn from(e: figment::Error) -> Self {
        LogError::Config(e.to_string())
    }
}
