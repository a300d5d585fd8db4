//! Encode — render a record into the fixed line grammar.
//!
//! One layout function serves both modes, so the plain and colorized
//! renderings cannot drift apart: colorization swaps only the level token.

use serde_json::Value;

use crate::level::color::colored_label;
use crate::record::LogRecord;

/// Tab separates the four tagged fields from each other and from the
/// trailing JSON object.
pub const FIELD_SEPARATOR: char = '\t';

/// `2023-02-27 10:00:00.000 +08:00` — millisecond precision, space before
/// the numeric UTC offset. The offset is always numeric so every encoded
/// line can be re-parsed.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

/// Rendering variant per destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// File and stream destinations.
    Plain,
    /// Interactive console destinations; wraps the level token in a CSI
    /// color sequence.
    Ansi,
}

/// Render one record.
///
/// The entry always ends with a single `\n`: after the JSON object, or
/// after the verbatim stack trace when one is attached.
pub fn encode(record: &LogRecord, mode: ColorMode) -> String {
    let time = record.time.format(TIME_FORMAT);
    let fields = Value::Object(record.extra_fields.clone()).to_string();

    let mut out = String::with_capacity(64 + record.message.len() + fields.len());
    out.push('[');
    out.push_str(&time.to_string());
    out.push(']');
    out.push(FIELD_SEPARATOR);
    match mode {
        ColorMode::Plain => {
            out.push('[');
            out.push_str(record.level.capital_str());
            out.push(']');
        }
        ColorMode::Ansi => out.push_str(&colored_label(record.level.capital_str())),
    }
    out.push(FIELD_SEPARATOR);
    out.push('[');
    out.push_str(&record.caller);
    out.push(']');
    out.push(FIELD_SEPARATOR);
    out.push_str(&record.message);
    out.push(FIELD_SEPARATOR);
    out.push_str(&fields);
    out.push('\n');
    if let Some(trace) = &record.stack_trace {
        out.push_str(trace);
        out.push('\n');
    }
    out
}
