//! Router — severity-gated fan-out to an ordered set of destinations.
//!
//! Delivery is best-effort per destination: one failed write is reported
//! and the remaining destinations still receive the record. There is no
//! global transaction and no retry.

use bytes::Bytes;
use parking_lot::Mutex;

use crate::encode::{encode, ColorMode};
use crate::error::{EmitError, PipelineError};
use crate::level::Level;
use crate::record::LogRecord;
use crate::sink::{Sink, SinkConfig};

struct Destination {
    threshold: Level,
    mode: ColorMode,
    // Serializes writers so per-destination byte order matches the order
    // emits were accepted. The router itself holds no other state per call.
    sink: Mutex<Box<dyn Sink>>,
}

pub struct SinkRouter {
    destinations: Vec<Destination>,
}

impl SinkRouter {
    /// Open every configured destination eagerly, in order. The first
    /// failure aborts construction; nothing stays half-open for callers.
    pub fn open(configs: Vec<SinkConfig>) -> Result<Self, PipelineError> {
        let mut destinations = Vec::with_capacity(configs.len());
        for config in configs {
            let (threshold, mode, sink) = config.open()?;
            destinations.push(Destination { threshold, mode, sink: Mutex::new(sink) });
        }
        Ok(Self { destinations })
    }

    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    /// Fan one record out to every destination whose threshold admits it.
    ///
    /// The record is rendered at most once per color mode; the same
    /// [`Bytes`] payload is shared across destinations of that mode.
    /// Returns one [`EmitError`] per failed destination (empty on full
    /// delivery).
    pub fn emit(&self, record: &LogRecord) -> Vec<EmitError> {
        let mut failures = Vec::new();
        let mut rendered: [Option<Bytes>; 2] = [None, None];

        for dest in &self.destinations {
            if !dest.threshold.admits(record.level) {
                continue;
            }
            let slot = match dest.mode {
                ColorMode::Plain => 0,
                ColorMode::Ansi => 1,
            };
            let payload = rendered[slot]
                .get_or_insert_with(|| Bytes::from(encode(record, dest.mode)))
                .clone();

            let mut sink = dest.sink.lock();
            if let Err(source) = sink.write_entry(&payload) {
                let kind = sink.kind();
                tracing::warn!(sink = kind, error = %source, "sink write failed, entry dropped for this sink");
                failures.push(EmitError { sink: kind, source });
            }
        }
        failures
    }

    /// Flush every destination, collecting failures the same way `emit`
    /// does.
    pub fn flush(&self) -> Vec<EmitError> {
        let mut failures = Vec::new();
        for dest in &self.destinations {
            let mut sink = dest.sink.lock();
            if let Err(source) = sink.flush() {
                let kind = sink.kind();
                tracing::warn!(sink = kind, error = %source, "sink flush failed");
                failures.push(EmitError { sink: kind, source });
            }
        }
        failures
    }
}
