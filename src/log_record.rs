// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for the logrich logging system.
//!
//! This module defines [`LogRecord`], the data structure that accumulates log
//! message parts during the logging process. Records are built incrementally
//! by the facade, then submitted to sinks for output.
//!
//! Instead of concatenating strings, the record stores parts separately and
//! only joins them when a sink needs the final output. This keeps allocation
//! overhead low and lets records pass by value to sinks without shared
//! buffers.

use crate::Level;
use crate::context::ContextValue;
use std::fmt::{Debug, Display};

/**
A log record.

The API assumes you progressively write into the record:

1.  Create a new [LogRecord].
2.  Progressively write to the [LogRecord].
3.  Submit it to a [`Sink`](crate::Sink).

Beyond the rendered text parts, a record carries the structured metadata
(effective context plus bound values) that produced it, so sinks that care
about structure don't have to re-parse the rendered line.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
    level: Level,
    fields: Vec<(String, ContextValue)>,
}

impl LogRecord {
    pub fn new(level: Level) -> Self {
        Self {
            parts: Vec::new(),
            level,
            fields: Vec::new(),
        }
    }

    /**
    Append the message to the record.

    This is called in the case that a message is not already owned.
    */
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /**
    Append the message to the record, taking ownership of the message.

    This is useful for messages that are already owned, such as those that are
    constructed in the process of logging. Sink implementations may choose to
    copy and drop the value if desired.
    */
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    /// Attach a structured metadata field to the record.
    pub fn attach(&mut self, key: String, value: ContextValue) {
        self.fields.push((key, value));
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Structured metadata attached to this record, in attachment order.
    pub fn fields(&self) -> &[(String, ContextValue)] {
        &self.fields
    }
}

impl Default for LogRecord {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogRecord:

- Debug/Clone/PartialEq: derived; records are plain data.
- Eq/Hash: not derived - ContextValue carries no Eq guarantee worth promising.
- Copy: Vec<String> contains heap-allocated data, not suitable for Copy.
- Ord/PartialOrd: no meaningful ordering for log records.
- Default: sensible zero-value (Info level, empty parts).
- Display: formats record parts for output.
*/
