//! Pipeline — a named destination set with static reporter identity.

pub mod registry;

pub use registry::Registry;

use std::backtrace::Backtrace;

use serde_json::{Map, Value};

use crate::error::{EmitError, PipelineError};
use crate::level::Level;
use crate::record::LogRecord;
use crate::router::SinkRouter;
use crate::sink::SinkConfig;

/// Fixed key the pipeline identity object is merged under.
pub const IDENTITY_KEY: &str = "log_info";

/// Construction request for one pipeline.
pub struct PipelineSpec {
    /// What kind of process reports through this pipeline.
    pub reporter_type: String,
    /// Which instance reports through this pipeline.
    pub reporter_name: String,
    /// Logical pipeline name; the registry key.
    pub log_type: String,
    /// Ordered destinations.
    pub sinks: Vec<SinkConfig>,
}

/// A constructed pipeline. Immutable after construction; destination
/// handles manage their own internal state (buffers, cursors).
pub struct Pipeline {
    log_type: String,
    identity: Value,
    router: SinkRouter,
}

impl Pipeline {
    /// Open every destination eagerly. Any failure aborts the whole
    /// construction; no partially-opened pipeline escapes.
    pub(crate) fn open(spec: PipelineSpec) -> Result<Self, PipelineError> {
        let mut identity = Map::new();
        identity.insert("ptype".to_string(), Value::String(spec.reporter_type));
        identity.insert("pname".to_string(), Value::String(spec.reporter_name));
        identity.insert("log_type".to_string(), Value::String(spec.log_type.clone()));

        let router = SinkRouter::open(spec.sinks)?;
        Ok(Self {
            log_type: spec.log_type,
            identity: Value::Object(identity),
            router,
        })
    }

    pub fn log_type(&self) -> &str {
        &self.log_type
    }

    pub fn destination_count(&self) -> usize {
        self.router.destination_count()
    }

    /// Merge the pipeline identity into the record and fan it out.
    ///
    /// Records at [`Level::Dpanic`] and above that carry no stack trace get
    /// one captured here. A colliding caller-supplied identity key is
    /// overwritten.
    pub fn emit(&self, mut record: LogRecord) -> Vec<EmitError> {
        record
            .extra_fields
            .insert(IDENTITY_KEY.to_string(), self.identity.clone());
        if record.stack_trace.is_none() && record.level >= Level::Dpanic {
            record.stack_trace = Some(Backtrace::force_capture().to_string());
        }
        self.router.emit(&record)
    }

    /// Drain destination buffers; the flush policy itself (time- or
    /// size-triggered) belongs to the owning process.
    pub fn flush(&self) -> Vec<EmitError> {
        self.router.flush()
    }
}
