//! Registry — name → pipeline mapping with an explicit default.
//!
//! An explicit object held by the owning application context and passed by
//! handle; there is no process-global registry. One rwlock guards the map
//! and the default reference together, so a reader sees either the old or
//! the fully-constructed new pipeline, never a half-published one.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{Pipeline, PipelineSpec};
use crate::error::PipelineError;

#[derive(Default)]
struct Inner {
    pipelines: HashMap<String, Arc<Pipeline>>,
    default: Option<Arc<Pipeline>>,
}

#[derive(Default)]
pub struct Registry {
    inner: RwLock<Inner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct and atomically publish a pipeline under its `log_type`,
    /// overwriting any prior pipeline of the same name. The first
    /// successful registration becomes the default.
    ///
    /// Construction (which opens destinations) happens outside the lock;
    /// only the publish step excludes readers.
    pub fn register(&self, spec: PipelineSpec) -> Result<Arc<Pipeline>, PipelineError> {
        let log_type = spec.log_type.clone();
        let pipeline = Arc::new(Pipeline::open(spec)?);

        let mut inner = self.inner.write();
        inner.pipelines.insert(log_type.clone(), Arc::clone(&pipeline));
        if inner.default.is_none() {
            inner.default = Some(Arc::clone(&pipeline));
        }
        drop(inner);

        tracing::info!(log_type = %log_type, "registered pipeline");
        Ok(pipeline)
    }

    pub fn lookup(&self, log_type: &str) -> Option<Arc<Pipeline>> {
        self.inner.read().pipelines.get(log_type).cloned()
    }

    /// The first successfully registered pipeline, if any.
    pub fn default_pipeline(&self) -> Option<Arc<Pipeline>> {
        self.inner.read().default.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().pipelines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::record::LogRecord;
    use crate::sink::memory::{MemoryBuffer, MemoryConnector, RefusingConnector};
    use crate::sink::SinkConfig;
    use std::thread;

    fn memory_spec(log_type: &str, buffer: &MemoryBuffer) -> PipelineSpec {
        PipelineSpec {
            reporter_type: "svc".to_string(),
            reporter_name: "svc-01".to_string(),
            log_type: log_type.to_string(),
            sinks: vec![SinkConfig::stream(
                Level::Debug,
                Box::new(MemoryConnector::new(buffer)),
            )],
        }
    }

    #[test]
    fn test_first_registration_becomes_default() {
        let registry = Registry::new();
        let first_buf = MemoryBuffer::new();
        let second_buf = MemoryBuffer::new();

        registry.register(memory_spec("app", &first_buf)).expect("register app");
        registry.register(memory_spec("audit", &second_buf)).expect("register audit");

        let default = registry.default_pipeline().expect("default exists");
        assert_eq!(default.log_type(), "app");
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = Registry::new();
        let buffer = MemoryBuffer::new();
        registry.register(memory_spec("audit", &buffer)).expect("register");

        assert!(registry.lookup("audit").is_some());
        assert!(registry.lookup("missing").is_none());
    }

    #[test]
    fn test_same_name_registration_overwrites() {
        let registry = Registry::new();
        let old_buf = MemoryBuffer::new();
        let new_buf = MemoryBuffer::new();

        registry.register(memory_spec("app", &old_buf)).expect("register old");
        registry.register(memory_spec("app", &new_buf)).expect("register new");
        assert_eq!(registry.len(), 1);

        let current = registry.lookup("app").expect("lookup");
        current.emit(LogRecord::new(Level::Info, "m.rs:1", "hello"));
        assert_eq!(old_buf.entry_count(), 0);
        assert_eq!(new_buf.entry_count(), 1);
    }

    #[test]
    fn test_failed_registration_publishes_nothing() {
        let registry = Registry::new();
        let spec = PipelineSpec {
            reporter_type: "svc".to_string(),
            reporter_name: "svc-01".to_string(),
            log_type: "app".to_string(),
            sinks: vec![SinkConfig::stream(Level::Debug, Box::new(RefusingConnector))],
        };

        assert!(registry.register(spec).is_err());
        assert!(registry.lookup("app").is_none());
        assert!(registry.default_pipeline().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_lookups_see_old_or_new() {
        let registry = std::sync::Arc::new(Registry::new());
        let buffer = MemoryBuffer::new();
        registry.register(memory_spec("app", &buffer)).expect("seed");

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = std::sync::Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let pipeline = registry.lookup("app").expect("always present");
                        assert_eq!(pipeline.log_type(), "app");
                    }
                })
            })
            .collect();

        for _ in 0..20 {
            let replacement = MemoryBuffer::new();
            registry.register(memory_spec("app", &replacement)).expect("re-register");
        }
        for reader in readers {
            reader.join().expect("reader");
        }
    }
}
