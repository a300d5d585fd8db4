//! Record — the structured diagnostic record and its decode-side partial.

use chrono::{DateTime, FixedOffset, Local};
use serde_json::{Map, Value};

use crate::level::Level;

/// One unit of diagnostic work.
///
/// On the encode path `raw_text` is `None`; the decode path sets it to the
/// original line so callers can report what they actually read.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Timestamp with millisecond precision and an explicit UTC offset.
    pub time: DateTime<FixedOffset>,
    pub level: Level,
    /// Short source location (`file:line`), rendered verbatim.
    pub caller: String,
    /// Free text. Must not contain the tab field separator.
    pub message: String,
    /// Flat JSON object; always present, possibly empty.
    pub extra_fields: Map<String, Value>,
    /// Trailing multi-line block, attached at Dpanic and above.
    pub stack_trace: Option<String>,
    pub raw_text: Option<String>,
}

impl LogRecord {
    /// New record stamped with the current local time.
    pub fn new(level: Level, caller: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            time: Local::now().fixed_offset(),
            level,
            caller: caller.into(),
            message: message.into(),
            extra_fields: Map::new(),
            stack_trace: None,
            raw_text: None,
        }
    }

    pub fn with_time(mut self, time: DateTime<FixedOffset>) -> Self {
        self.time = time;
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_fields.insert(key.into(), value.into());
        self
    }

    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.extra_fields.extend(fields);
        self
    }

    pub fn with_stack_trace(mut self, trace: impl Into<String>) -> Self {
        self.stack_trace = Some(trace.into());
        self
    }
}

/// Decode-side partial record.
///
/// Extraction fills fields front to back; on failure the fields reached so
/// far are populated and everything after the failing field stays `None`.
/// `raw_text` is always the original input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialRecord {
    pub time: Option<DateTime<FixedOffset>>,
    pub level: Option<Level>,
    pub caller: Option<String>,
    pub message: Option<String>,
    pub extra_fields: Option<Map<String, Value>>,
    pub stack_trace: Option<String>,
    pub raw_text: String,
}
