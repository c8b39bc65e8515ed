// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::config::SinkTarget;
use crate::error::ConfigError;
use crate::log_record::LogRecord;
use std::fmt::Debug;
use std::sync::Arc;

pub trait Sink: Debug + Send + Sync {
    /**
        Submits the finished log record for output.
    */
    fn write_record(&self, record: LogRecord);

    /**
    The application may imminently exit, or a caller asked for delivery to
    complete. Ensure all buffers are flushed and up to date.
    */
    fn flush(&self);
}

/// Builds the sink a [`SinkTarget`] describes.
///
/// File targets are opened here so that an unusable path fails fast with
/// [`ConfigError`] at configure time, never at first emit.
pub(crate) fn create(target: &SinkTarget) -> Result<Arc<dyn Sink>, ConfigError> {
    match target {
        SinkTarget::Stderr => Ok(Arc::new(crate::stderror_sink::StdErrorSink::new())),
        SinkTarget::Stdout => Ok(Arc::new(crate::stderror_sink::StdOutSink::new())),
        SinkTarget::File(path) => Ok(Arc::new(crate::file_sink::FileSink::create(path)?)),
    }
}

/*
Boilerplate notes.

# Sink

Clone doesn't make sense for sinks holding unique resources (a file handle).
PartialEq/Eq are possible but it's unclear whether we'd mean data equality or
provenance. Send/Sync are required: records cross the delivery thread.
*/
