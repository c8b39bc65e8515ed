// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.
//!
//! A [`LogConfig`] describes everything the facade needs to rebuild its
//! delivery pipeline: the sink target, the base minimum level, verbosity,
//! the enqueue flag, and the rendering options. The whole struct is serde-
//! serializable so it can cross a process boundary inside a
//! [`ProcessConfig`](crate::bridge::ProcessConfig).

use crate::Level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable forcing serialized (JSON-record) output mode.
pub const ENV_SERIALIZE: &str = "LOGRICH_SERIALIZE";
/// Environment variable toggling style highlighting of context values.
pub const ENV_RICH_HIGHLIGHT: &str = "LOGRICH_RICH_HIGHLIGHT";

/// Where formatted records go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinkTarget {
    Stderr,
    Stdout,
    File(PathBuf),
}

/// Complete facade configuration.
///
/// Validated and applied atomically by
/// [`Logger::reconfigure`](crate::Logger::reconfigure); emits in flight see
/// either the old snapshot or the new one, never a mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Sink target rebuilt on reconfigure.
    pub sink: SinkTarget,
    /// Base minimum severity; `level_set` overrides stack on top of this.
    pub level: Level,
    /// Verbosity knob; call-site `file:line` appears at 2 and above.
    pub verbosity: u8,
    /// Route records through the background delivery thread.
    pub enqueue: bool,
    /// Bound for the delivery queue; `None` is unbounded.
    pub queue_bound: Option<usize>,
    /// Default width for rich block rendering.
    pub width: usize,
    /// Emit one JSON object per record instead of formatted text.
    pub serialize: bool,
    /// Apply context-value styles with ANSI escapes.
    pub highlight: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sink: SinkTarget::Stderr,
            level: Level::Info,
            verbosity: 0,
            enqueue: false,
            queue_bound: None,
            width: 100,
            serialize: false,
            highlight: true,
        }
    }
}

impl LogConfig {
    /// Convenience constructor matching the usual init call shape.
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Folds the environment overrides into this configuration.
    ///
    /// Called by `init`/`reconfigure`: a set `LOGRICH_SERIALIZE` or
    /// `LOGRICH_RICH_HIGHLIGHT` wins over the programmatic value, an unset
    /// one leaves it alone.
    pub(crate) fn apply_env(&mut self) {
        if let Some(serialize) = parse_bool_env(ENV_SERIALIZE) {
            self.serialize = serialize;
        }
        if let Some(highlight) = parse_bool_env(ENV_RICH_HIGHLIGHT) {
            self.highlight = highlight;
        }
    }
}

/// Parses a boolean environment variable.
///
/// `1`, `true`, `yes`, `on` (after trimming and lowercasing) are true; the
/// explicit falsy set `0`, `false`, `no`, `off`, and the empty string are
/// false; any other present value is treated as true. Returns `None` when
/// the variable is unset. The asymmetry is deliberate and load-bearing:
/// presence of the variable with an unrecognized value means "on".
pub(crate) fn parse_bool_env(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    let normalized = value.trim().to_ascii_lowercase();
    if ["1", "true", "yes", "on"].contains(&normalized.as_str()) {
        return Some(true);
    }
    Some(!["0", "false", "no", "off", ""].contains(&normalized.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests share process environment; serialize them.
    static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());

    fn with_env<R>(name: &str, value: Option<&str>, f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock();
        match value {
            Some(value) => unsafe { std::env::set_var(name, value) },
            None => unsafe { std::env::remove_var(name) },
        }
        let result = f();
        unsafe { std::env::remove_var(name) };
        result
    }

    #[test]
    fn truthy_set() {
        for value in ["1", "true", "YES", " on "] {
            assert_eq!(
                with_env("LOGRICH_TEST_BOOL", Some(value), || parse_bool_env(
                    "LOGRICH_TEST_BOOL"
                )),
                Some(true),
                "{value:?} should be true"
            );
        }
    }

    #[test]
    fn falsy_set() {
        for value in ["0", "false", "No", "OFF", "", "  "] {
            assert_eq!(
                with_env("LOGRICH_TEST_BOOL", Some(value), || parse_bool_env(
                    "LOGRICH_TEST_BOOL"
                )),
                Some(false),
                "{value:?} should be false"
            );
        }
    }

    #[test]
    fn unrecognized_present_value_is_true() {
        assert_eq!(
            with_env("LOGRICH_TEST_BOOL", Some("banana"), || parse_bool_env(
                "LOGRICH_TEST_BOOL"
            )),
            Some(true)
        );
    }

    #[test]
    fn unset_is_none() {
        assert_eq!(
            with_env("LOGRICH_TEST_BOOL", None, || parse_bool_env(
                "LOGRICH_TEST_BOOL"
            )),
            None
        );
    }

    #[test]
    fn env_overrides_config() {
        with_env(ENV_SERIALIZE, Some("1"), || {
            let mut cfg = LogConfig::default();
            assert!(!cfg.serialize);
            cfg.apply_env();
            assert!(cfg.serialize);
        });
    }
}
