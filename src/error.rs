// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the logrich logging system.
//!
//! Configuration and stack-discipline violations are programmer errors and
//! propagate to the caller synchronously. Runtime formatting failures never
//! surface here: the facade degrades them to a diagnostic record so that
//! logging cannot crash the host application.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid configuration at `init`/`reconfigure` time.
///
/// Fatal to that call and surfaced immediately; configuration problems are
/// never deferred to the first emit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A level name did not parse.
    #[error("unknown level name: {0:?}")]
    UnknownLevel(String),

    /// The sink target could not be opened.
    #[error("invalid sink target {path:?}: {source}")]
    InvalidSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bounded delivery queue must hold at least one record.
    #[error("bounded queue capacity must be non-zero")]
    ZeroQueueBound,
}

/// A context-stack discipline violation.
///
/// The context stack is strictly LIFO; popping anything but the current top
/// frame indicates a bug in the caller.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    /// The token does not correspond to the current top frame.
    #[error("frame {0} is not the top of the context stack")]
    NotTop(u64),

    /// Pop without a matching push.
    #[error("pop on an empty context stack")]
    Empty,
}

/// The bounded delivery queue is full and the policy is fail-fast.
///
/// Only reachable when a queue bound is configured; the default queue is
/// unbounded.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("log delivery queue is full (capacity {capacity})")]
pub struct QueueFullError {
    /// Configured queue capacity.
    pub capacity: usize,
}
