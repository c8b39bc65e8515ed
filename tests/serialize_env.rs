// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-driven serialized output mode.
//!
//! Lives in its own test binary: the environment is process-wide, and the
//! facade reads it at configure time, so this must not share a process with
//! tests that build facades concurrently. One test function keeps the two
//! phases sequential for the same reason.

use logrich::{InMemorySink, Level, LogConfig, Logger};
use std::sync::Arc;

fn capture() -> (Logger, Arc<InMemorySink>) {
    let logger = Logger::new(LogConfig::with_level(Level::Debug)).unwrap();
    let sink = Arc::new(InMemorySink::new());
    logger.set_sink(sink.clone());
    (logger, sink)
}

#[test]
fn test_serialize_env() {
    // Present and truthy: records come out as JSON objects.
    unsafe { std::env::set_var(logrich::ENV_SERIALIZE, "1") };
    let (logger, sink) = capture();
    logger.info("Serialized {}", &[&"output"]);
    logger.complete();

    let output = sink.drain_logs();
    let line = output.lines().find(|l| !l.trim().is_empty()).unwrap();
    let payload: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(payload["record"]["message"], "Serialized output");
    assert_eq!(payload["record"]["level"], "INFO");

    // Present but in the explicit falsy set: plain text output.
    unsafe { std::env::set_var(logrich::ENV_SERIALIZE, "off") };
    let (logger, sink) = capture();
    logger.info("plain {}", &[&"output"]);
    logger.complete();

    let output = sink.drain_logs();
    assert!(output.contains("plain output"));
    assert!(serde_json::from_str::<serde_json::Value>(output.lines().next().unwrap()).is_err());

    unsafe { std::env::remove_var(logrich::ENV_SERIALIZE) };
}
