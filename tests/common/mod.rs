//! tests/common/mod.rs
//!
//! Shared helpers: an in-memory sink and a logger wired to it.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use rs_logger_ng::loggers::{Logger, LoggerBuilder, Severity};

/// Time format with no specifiers, so timestamps are stable in assertions.
pub const FIXED_TIME: &str = "1999/10/17 - 10:11:10";

/// Cloneable `Write` sink backed by a shared byte buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger at `level` writing to a fresh buffer with a fixed timestamp.
pub fn capture(level: Severity) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let logger = LoggerBuilder::new("APP")
        .with_level(level)
        .with_time_format(FIXED_TIME)
        .with_writer(Box::new(buffer.clone()))
        .build();
    (logger, buffer)
}
