//! Error — the three error kinds of the pipeline core.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::record::PartialRecord;

/// A `register` call failed; no partial pipeline was published.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to open {kind} sink: {source}")]
    SinkOpen {
        kind: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("invalid pipeline configuration: {0}")]
    Config(String),
}

/// A single destination's write failed during fan-out.
///
/// Reported per destination; never aborts delivery to the remaining
/// destinations and never fatal to the process.
#[derive(Debug, Error)]
#[error("write to {sink} sink failed: {source}")]
pub struct EmitError {
    pub sink: &'static str,
    #[source]
    pub source: io::Error,
}

/// Which of the five required extractions failed during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseField {
    Time,
    Level,
    Caller,
    Message,
    ExtraFields,
}

impl fmt::Display for ParseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseField::Time => "time",
            ParseField::Level => "level",
            ParseField::Caller => "caller",
            ParseField::Message => "message",
            ParseField::ExtraFields => "extra fields",
        })
    }
}

/// Decode short-circuited at `field`.
///
/// `partial` carries the fields extracted before the failure, with
/// `raw_text` always set to the original input. Severity-name and
/// JSON-shape validation failures are this kind, not separate ones.
#[derive(Debug, Error)]
#[error("failed to extract {field}: {reason}")]
pub struct StashError {
    pub partial: PartialRecord,
    pub field: ParseField,
    pub reason: String,
}
