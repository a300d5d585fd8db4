//! Level — the seven-step severity scale and threshold checks.

pub mod color;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic severity, totally ordered from [`Level::Debug`] up to
/// [`Level::Fatal`].
///
/// The integer ranks are part of the public contract: thresholds compare
/// by rank, and `Info` sits at zero so that `Debug` is the only negative
/// level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Level {
    Debug = -1,
    Info = 0,
    Warn = 1,
    Error = 2,
    Dpanic = 3,
    Panic = 4,
    Fatal = 5,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized level name: {0:?}")]
pub struct ParseLevelError(pub String);

impl Level {
    /// All levels in ascending severity order.
    pub const ALL: [Level; 7] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Dpanic,
        Level::Panic,
        Level::Fatal,
    ];

    /// Numeric rank used for threshold comparisons.
    pub fn rank(self) -> i8 {
        self as i8
    }

    /// The capitalized token used by the line grammar.
    pub fn capital_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Dpanic => "DPANIC",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Dpanic => "dpanic",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        }
    }

    /// Threshold check: does a destination with threshold `self` admit a
    /// record at `candidate`?
    pub fn admits(self, candidate: Level) -> bool {
        candidate.rank() >= self.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts the seven level names case-insensitively (`INFO`, `info`,
    /// `Info`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.capital_str()))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
