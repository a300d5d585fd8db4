//! relog — reversible diagnostic-line encoding with multi-sink fan-out.
//!
//! Records render into one fixed, tab-separated line grammar (plain for
//! file/stream destinations, colorized for consoles), fan out to every
//! destination whose severity threshold admits them, and parse back from a
//! rendered line via [`stash`].

// Core infrastructure
pub mod encode;
pub mod error;
pub mod level;
pub mod record;

// Domain modules
pub mod conf;
pub mod pipeline;
pub mod router;
pub mod sink;
pub mod stash;

pub use conf::PipelineConfig;
pub use encode::{encode, ColorMode};
pub use error::{EmitError, ParseField, PipelineError, StashError};
pub use level::{color::Color, Level};
pub use pipeline::{Pipeline, PipelineSpec, Registry};
pub use record::{LogRecord, PartialRecord};
pub use router::SinkRouter;
pub use sink::stream::{StreamConnector, StreamTransport};
pub use sink::{ConsoleTarget, FileSinkParams, Sink, SinkConfig, SinkKind};
pub use stash::stash;
