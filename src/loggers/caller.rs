//! src/loggers/caller.rs
//!
//! Call-site resolution. Entry points are `#[track_caller]` all the way down,
//! so the `Location` handed to a resolver is already the public call site; the
//! resolver only reduces it to a file base name and line.

use std::panic::Location;
use std::path::Path;

use crate::core::error::LogError;
use crate::loggers::core::CallSite;

/// Turns a captured caller location into the `file:line` shown in a line.
pub trait CallerResolver: Send + Sync {
    fn resolve(&self, location: &'static Location<'static>) -> Result<CallSite, LogError>;
}

/// Default resolver: base name of the source file plus its line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackCallerResolver;

impl CallerResolver for TrackCallerResolver {
    fn resolve(&self, location: &'static Location<'static>) -> Result<CallSite, LogError> {
        let file = Path::new(location.file())
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| LogError::UnresolvedCallSite(location.file().to_string()))?;
        Ok(CallSite::new(file, location.line()))
    }
}

/// Resolver that ignores the real location, for deterministic output in tests.
#[derive(Debug, Clone)]
pub struct FixedCallerResolver {
    site: CallSite,
}

impl FixedCallerResolver {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            site: CallSite::new(file, line),
        }
    }
}

impl CallerResolver for FixedCallerResolver {
    fn resolve(&self, _location: &'static Location<'static>) -> Result<CallSite, LogError> {
        Ok(self.site.clone())
    }
}

/// Resolver that always fails; exercises the placeholder location.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnresolvedCallerResolver;

impl CallerResolver for UnresolvedCallerResolver {
    fn resolve(&self, location: &'static Location<'static>) -> Result<CallSite, LogError> {
        Err(LogError::UnresolvedCallSite(location.to_string()))
    }
}
