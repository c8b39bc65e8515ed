// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::io::Write;

/**
A reference sink that logs to stderr.
 */
#[derive(Debug, Clone)]
pub struct StdErrorSink {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for StdErrorSink trait implementations:
//
// - Debug/Clone: derived - appropriate for zero-sized struct
// - Copy: implemented - safe for zero-sized struct with no heap allocation
// - PartialEq/Eq: implemented - all instances are equivalent (zero-sized)
// - Hash: implemented - consistent with Eq
// - Default: implemented - provides convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation
// - Send/Sync: automatic - zero-sized struct is always thread-safe

impl Copy for StdErrorSink {}

impl PartialEq for StdErrorSink {
    fn eq(&self, _other: &Self) -> bool {
        // All instances of a zero-sized struct are equal
        true
    }
}

impl Eq for StdErrorSink {}

impl std::hash::Hash for StdErrorSink {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {
        // Zero-sized struct has no data to hash - this is consistent with Eq
    }
}

impl Default for StdErrorSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StdErrorSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StdErrorSink {
    fn write_record(&self, record: LogRecord) {
        let mut lock = std::io::stderr().lock();
        for part in record.parts {
            lock.write_all(part.as_bytes())
                .expect("Can't log to stderr");
        }
        lock.write_all(b"\n").expect("Can't log to stderr");
    }

    fn flush(&self) {
        //nothing to do since we are unbuffered
    }
}

/**
A sink that logs to stdout, for pipelines that reserve stderr.
 */
#[derive(Debug, Clone, Copy, Default)]
pub struct StdOutSink {}

impl StdOutSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StdOutSink {
    fn write_record(&self, record: LogRecord) {
        let mut lock = std::io::stdout().lock();
        for part in record.parts {
            lock.write_all(part.as_bytes())
                .expect("Can't log to stdout");
        }
        lock.write_all(b"\n").expect("Can't log to stdout");
    }

    fn flush(&self) {
        let _ = std::io::stdout().lock().flush();
    }
}
