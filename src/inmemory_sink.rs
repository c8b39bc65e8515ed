// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! This module provides an in-memory sink for testing and debugging purposes.
//! The `InMemorySink` captures log records in memory rather than writing them
//! to stderr or other outputs, making it ideal for:
//!
//! - Unit testing code that uses logrich logging
//! - Capturing logs in environments where stderr is redirected or unavailable
//! - Programmatically examining log output
//!
//! ## Integration
//!
//! The `InMemorySink` implements the [`Sink`] trait and can be installed via
//! [`Logger::set_sink`](crate::Logger::set_sink).

use crate::log_record::LogRecord;
use crate::sink::Sink;
use parking_lot::Mutex;

/// An in-memory sink that stores rendered records in a `Vec<String>`.
///
/// This sink captures all log records in memory, allowing you to retrieve and
/// examine them programmatically. Multi-line records (from
/// [`Logger::rich`](crate::Logger::rich)) are stored as a single entry with
/// embedded newlines.
///
/// # Example
///
/// ```rust
/// use logrich::{InMemorySink, logger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// logger().set_sink(sink.clone());
///
/// logrich::info!("Test message {}", 42);
///
/// let logs = sink.drain_logs();
/// assert!(logs.contains("Test message 42"));
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    logs: Mutex<Vec<String>>,
}

// Boilerplate notes: Clone is NOT implemented - sinks typically hold unique
// resources that shouldn't be duplicated, and tests share one via Arc anyway.
// Default delegates to new().

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    /// Creates a new `InMemorySink` with an empty buffer.
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    /// Drains all captured records into a single newline-joined string,
    /// clearing the internal buffer.
    ///
    /// Subsequent calls return an empty string unless new records arrived.
    pub fn drain_logs(&self) -> String {
        let mut logs = self.logs.lock();
        let result = logs.join("\n");
        logs.clear();
        result
    }

    /// Returns a copy of the captured records without clearing the buffer.
    pub fn snapshot(&self) -> Vec<String> {
        self.logs.lock().clone()
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.logs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.lock().is_empty()
    }
}

impl Sink for InMemorySink {
    fn write_record(&self, record: LogRecord) {
        let rendered = record.to_string();
        self.logs.lock().push(rendered);
    }

    fn flush(&self) {
        // No-op since we're storing in memory, no flushing needed
    }
}
