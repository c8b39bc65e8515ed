// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cross-process configuration replay.
//!
//! Context and level stacks are per-process; nothing here shares live state.
//! Instead a parent captures a plain-data [`ProcessConfig`], transfers it to
//! a freshly spawned worker (over whatever channel the process manager
//! provides), and the worker replays it with
//! [`Logger::configure_child_process`] before its first emit.
//!
//! ```rust
//! use logrich::bridge::ProcessConfig;
//!
//! // parent
//! let handoff = logrich::logger().capture().to_json().unwrap();
//!
//! // child (other side of the spawn boundary)
//! let config = ProcessConfig::from_json(&handoff).unwrap();
//! logrich::logger().configure_child_process(&config).unwrap();
//! logrich::debug!("Test message from child process");
//! ```

use crate::Logger;
use crate::config::LogConfig;
use crate::context::ContextFrame;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Everything a worker process needs to reconstruct an equivalent facade:
/// the sink/level/verbosity/enqueue configuration plus the parent's
/// effective context at capture time.
///
/// A plain data structure by design; it crosses the spawn boundary as bytes,
/// never as a live handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessConfig {
    pub config: LogConfig,
    pub context: ContextFrame,
}

impl ProcessConfig {
    /// Serializes for transfer to a spawned process.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes on the worker side of the spawn boundary.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Logger {
    /// Snapshots this facade's configuration and effective context for
    /// handing to a spawned worker process.
    pub fn capture(&self) -> ProcessConfig {
        ProcessConfig {
            config: LogConfig::clone(&self.config()),
            context: self.context().effective(),
        }
    }

    /// Rebuilds this facade from a parent's [`ProcessConfig`].
    ///
    /// Intended for the first thing a worker process does: the sink, level,
    /// verbosity and delivery mode are reconfigured, the context stack is
    /// reset to empty (frames never cross the boundary implicitly), and the
    /// captured context frame, when non-empty, is replayed as one permanent
    /// frame.
    pub fn configure_child_process(&self, process_config: &ProcessConfig) -> Result<(), ConfigError> {
        self.reconfigure(process_config.config.clone())?;
        self.context().clear();
        if !process_config.context.is_empty() {
            // Pushed without retaining the token: the replayed frame lives
            // for the rest of the worker's life.
            let _ = self.context().push(process_config.context.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use crate::context::{ctx, frame};

    #[test]
    fn capture_includes_effective_context() {
        let logger = Logger::new(LogConfig::with_level(Level::Debug)).unwrap();
        let _guard = logger.contextualize(frame([("worker", ctx("TestWorker"))]));
        let captured = logger.capture();
        assert_eq!(captured.config.level, Level::Debug);
        assert_eq!(captured.context["worker"].value(), "TestWorker");
    }

    #[test]
    fn json_round_trip() {
        let logger = Logger::new(LogConfig::with_level(Level::Debug)).unwrap();
        let _guard = logger.contextualize(frame([(
            "worker",
            ctx("Worker-1").with_style("magenta").with_show_key(true),
        )]));
        let captured = logger.capture();
        let json = captured.to_json().unwrap();
        assert_eq!(ProcessConfig::from_json(&json).unwrap(), captured);
    }

    #[test]
    fn child_configure_replays_context_into_fresh_stack() {
        let parent = Logger::new(LogConfig::with_level(Level::Debug)).unwrap();
        let _guard = parent.contextualize(frame([("worker", ctx("TestWorker"))]));
        let handoff = parent.capture();

        let child = Logger::new(LogConfig::default()).unwrap();
        child.context().set_direct("stale", Some(ctx("gone")));
        child.configure_child_process(&handoff).unwrap();

        let effective = child.context().effective();
        assert_eq!(effective["worker"].value(), "TestWorker");
        assert!(effective.get("stale").is_none());
        assert_eq!(child.config().level, Level::Debug);
    }
}
