//! Sink — destination seam and per-destination configuration.
//!
//! Every write target sits behind the [`Sink`] trait. `console.rs`,
//! `file.rs` and `stream.rs` provide the three destination kinds;
//! `memory.rs` provides a deterministic test double.

pub mod console;
pub mod file;
pub mod memory;
pub mod stream;

use std::fmt;
use std::io;

use crate::encode::ColorMode;
use crate::error::PipelineError;
use crate::level::Level;

pub use console::{ConsoleSink, ConsoleTarget};
pub use file::{FileSink, FileSinkParams};
pub use stream::{StreamConnector, StreamSink, StreamTransport};

/// A write target owned by a router destination.
///
/// Implementations may buffer internally; `write_entry` receives exactly
/// one rendered entry and must either accept the whole payload or fail.
pub trait Sink: Send {
    fn write_entry(&mut self, payload: &[u8]) -> io::Result<()>;

    /// Drain any internal buffer. The flush policy (time- or
    /// size-triggered) belongs to the owning process, not to the router.
    fn flush(&mut self) -> io::Result<()>;

    /// Short destination label used in emit failure reports.
    fn kind(&self) -> &'static str;
}

/// Destination kind plus its opaque parameters.
pub enum SinkKind {
    File(FileSinkParams),
    Console(ConsoleTarget),
    Stream(Box<dyn StreamConnector>),
}

impl fmt::Debug for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::File(params) => f.debug_tuple("File").field(params).finish(),
            SinkKind::Console(target) => f.debug_tuple("Console").field(target).finish(),
            SinkKind::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// One destination descriptor: kind, minimum admitted severity, and the
/// rendering mode applied to admitted records.
#[derive(Debug)]
pub struct SinkConfig {
    pub threshold: Level,
    pub mode: ColorMode,
    pub kind: SinkKind,
}

impl SinkConfig {
    /// File destination; always plain.
    pub fn file(threshold: Level, params: FileSinkParams) -> Self {
        Self { threshold, mode: ColorMode::Plain, kind: SinkKind::File(params) }
    }

    /// Console destination, colorized unless `color` is off.
    pub fn console(threshold: Level, target: ConsoleTarget, color: bool) -> Self {
        let mode = if color { ColorMode::Ansi } else { ColorMode::Plain };
        Self { threshold, mode, kind: SinkKind::Console(target) }
    }

    /// Remote stream destination; always plain. The connector runs eagerly
    /// at pipeline construction.
    pub fn stream(threshold: Level, connector: Box<dyn StreamConnector>) -> Self {
        Self { threshold, mode: ColorMode::Plain, kind: SinkKind::Stream(connector) }
    }

    /// Open the destination. Any failure here aborts the whole pipeline
    /// construction.
    pub(crate) fn open(self) -> Result<(Level, ColorMode, Box<dyn Sink>), PipelineError> {
        let sink: Box<dyn Sink> = match self.kind {
            SinkKind::File(params) => Box::new(
                FileSink::open(params)
                    .map_err(|source| PipelineError::SinkOpen { kind: "file", source })?,
            ),
            SinkKind::Console(target) => Box::new(ConsoleSink::new(target)),
            SinkKind::Stream(connector) => Box::new(
                StreamSink::connect(connector.as_ref())
                    .map_err(|source| PipelineError::SinkOpen { kind: "stream", source })?,
            ),
        };
        Ok((self.threshold, self.mode, sink))
    }
}
