// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Severity of a log record.
///
/// Levels form a fixed total order; a record is suppressed iff its level is
/// strictly below the active minimum.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Level {
    /// Detailed debugging
    Trace = 0,
    /// Print-style debugging
    Debug = 1,
    /// Routine operational messages
    Info = 2,
    /// An operation completed as intended
    Success = 3,
    /// Suspicious condition
    Warning = 4,
    /// Runtime error
    Error = 5,
    /// The application cannot continue
    Critical = 6,
}

impl Level {
    /// Upper-case display name, as it appears in log output.
    pub fn name(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Style token string for console highlighting of this level's name.
    ///
    /// The token syntax is the same one [`ContextValue`](crate::ContextValue)
    /// styles use; see [`crate::render`].
    pub fn style(self) -> &'static str {
        match self {
            Level::Trace => "dim cyan",
            Level::Debug => "blue",
            Level::Info => "",
            Level::Success => "green",
            Level::Warning => "yellow",
            Level::Error => "red",
            Level::Critical => "bold red",
        }
    }

    pub(crate) fn from_repr(value: u8) -> Level {
        match value {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Success,
            4 => Level::Warning,
            5 => Level::Error,
            _ => Level::Critical,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Level {
    type Err = ConfigError;

    /// Parses a level by name, case-insensitively.
    ///
    /// Unknown names are a configuration error and fail fast, per the
    /// facade's `init`/`reconfigure` contract.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "SUCCESS" => Ok(Level::Success),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" => Ok(Level::Critical),
            _ => Err(ConfigError::UnknownLevel(s.to_string())),
        }
    }
}
