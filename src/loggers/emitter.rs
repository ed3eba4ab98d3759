//! src/loggers/emitter.rs
//!
//! Serialized output. Lines are fully built before the lock is taken; the lock
//! only covers the write so two lines never share bytes.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

pub struct Emitter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Emitter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Writes `line` and a newline as one contiguous write. Errors are dropped.
    pub fn emit(&self, line: &str) {
        let mut bytes = Vec::with_capacity(line.len() + 1);
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = out.write_all(&bytes);
        let _ = out.flush();
    }

    /// Swaps the output stream, returning the previous one.
    pub fn replace(&self, out: Box<dyn Write + Send>) -> Box<dyn Write + Send> {
        let mut guard = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, out)
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::stdout()
    }
}
