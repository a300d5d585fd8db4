//! Stash — reconstruct a structured record from a rendered line.
//!
//! The inverse of [`crate::encode::encode`] for plain-mode entries.
//! Extraction is an ordered sequence over a single cursor — timestamp,
//! level, caller, message, extra-fields JSON, then the optional trailing
//! stack trace — and short-circuits on the first ill-formed field,
//! returning the fields extracted so far.

mod ansi;
mod scan;

pub use ansi::strip_ansi_codes;

use chrono::DateTime;
use serde_json::{Map, Value};

use crate::encode::TIME_FORMAT;
use crate::error::{ParseField, StashError};
use crate::level::Level;
use crate::record::{LogRecord, PartialRecord};
use scan::Scanner;

/// Parse one previously rendered diagnostic entry.
///
/// ANSI escapes are stripped up front, so colorized level tokens decode
/// too. Exactly one trailing newline is tolerated. Pure function of the
/// input: parsing the same text twice yields identical results.
pub fn stash(input: &str) -> Result<LogRecord, StashError> {
    let mut partial = PartialRecord {
        raw_text: input.to_string(),
        ..PartialRecord::default()
    };

    let stripped = strip_ansi_codes(input);
    let text: &str = stripped.as_ref();
    let text = text.strip_suffix('\n').unwrap_or(text);
    let mut scanner = Scanner::new(text);

    // Timestamp.
    let raw_time = match scanner.bracketed() {
        Some(span) => span,
        None => return Err(fail(partial, ParseField::Time, "missing bracketed timestamp")),
    };
    let time = match DateTime::parse_from_str(raw_time, TIME_FORMAT) {
        Ok(time) => time,
        Err(err) => return Err(fail(partial, ParseField::Time, err.to_string())),
    };
    partial.time = Some(time);

    // Level.
    if !scanner.tab() {
        return Err(fail(partial, ParseField::Level, "missing separator after timestamp"));
    }
    let raw_level = match scanner.bracketed() {
        Some(span) => span,
        None => return Err(fail(partial, ParseField::Level, "missing bracketed level")),
    };
    let level = match raw_level.parse::<Level>() {
        Ok(level) => level,
        Err(err) => return Err(fail(partial, ParseField::Level, err.to_string())),
    };
    partial.level = Some(level);

    // Caller.
    if !scanner.tab() {
        return Err(fail(partial, ParseField::Caller, "missing separator after level"));
    }
    let caller = match scanner.bracketed() {
        Some(span) => span,
        None => return Err(fail(partial, ParseField::Caller, "missing bracketed caller")),
    };
    partial.caller = Some(caller.to_string());

    // Message.
    if !scanner.tab() {
        return Err(fail(partial, ParseField::Message, "missing separator after caller"));
    }
    let message = match scanner.until_tab() {
        Some(span) if !span.is_empty() => span,
        Some(_) => return Err(fail(partial, ParseField::Message, "empty message")),
        None => return Err(fail(partial, ParseField::Message, "missing separator after message")),
    };
    partial.message = Some(message.to_string());

    // Extra fields.
    let raw_fields = match scanner.json_object() {
        Some(span) => span,
        None => {
            return Err(fail(
                partial,
                ParseField::ExtraFields,
                "missing balanced fields object",
            ))
        }
    };
    let extra_fields: Map<String, Value> = match serde_json::from_str(raw_fields) {
        Ok(fields) => fields,
        Err(err) => return Err(fail(partial, ParseField::ExtraFields, err.to_string())),
    };
    partial.extra_fields = Some(extra_fields.clone());

    // Optional stack trace: everything after the object's newline,
    // verbatim. Whether the record's level warranted a trace at encode
    // time is not re-derived here.
    let stack_trace = if scanner.at_end() {
        None
    } else if scanner.newline() {
        let rest = scanner.rest();
        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    } else {
        return Err(fail(
            partial,
            ParseField::ExtraFields,
            "trailing content after fields object",
        ));
    };

    Ok(LogRecord {
        time,
        level,
        caller: caller.to_string(),
        message: message.to_string(),
        extra_fields,
        stack_trace,
        raw_text: Some(input.to_string()),
    })
}

fn fail(partial: PartialRecord, field: ParseField, reason: impl Into<String>) -> StashError {
    StashError { partial, field, reason: reason.into() }
}
