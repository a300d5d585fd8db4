//! Memory — deterministic in-memory test doubles for the stream seam.
//!
//! Lets unit tests and downstream users exercise pipelines without a real
//! broker: [`MemoryConnector`] records every shipped entry in a shared
//! buffer, [`RefusingConnector`] fails at connect time, and
//! [`BrokenConnector`] connects but fails every send.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use super::stream::{StreamConnector, StreamTransport};

/// Shared byte buffer inspectable after the pipeline wrote into it.
#[derive(Clone, Default)]
pub struct MemoryBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.inner.lock().clone()
    }

    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Number of newline-terminated entries written so far.
    pub fn entry_count(&self) -> usize {
        self.contents().iter().filter(|&&b| b == b'\n').count()
    }

    fn append(&self, payload: &[u8]) {
        self.inner.lock().extend_from_slice(payload);
    }
}

/// Connector whose transports append into a shared [`MemoryBuffer`].
pub struct MemoryConnector {
    buffer: MemoryBuffer,
}

impl MemoryConnector {
    pub fn new(buffer: &MemoryBuffer) -> Self {
        Self { buffer: buffer.clone() }
    }
}

impl StreamConnector for MemoryConnector {
    fn connect(&self) -> io::Result<Box<dyn StreamTransport>> {
        Ok(Box::new(MemoryTransport { buffer: self.buffer.clone() }))
    }
}

pub struct MemoryTransport {
    buffer: MemoryBuffer,
}

impl StreamTransport for MemoryTransport {
    fn send(&mut self, payload: &[u8]) -> io::Result<()> {
        self.buffer.append(payload);
        Ok(())
    }
}

/// Connector standing in for an unreachable broker.
pub struct RefusingConnector;

impl StreamConnector for RefusingConnector {
    fn connect(&self) -> io::Result<Box<dyn StreamTransport>> {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "broker unreachable"))
    }
}

/// Connector that connects fine but whose transport fails every send.
pub struct BrokenConnector;

struct BrokenTransport;

impl StreamTransport for BrokenTransport {
    fn send(&mut self, _payload: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "transport lost"))
    }
}

impl StreamConnector for BrokenConnector {
    fn connect(&self) -> io::Result<Box<dyn StreamTransport>> {
        Ok(Box::new(BrokenTransport))
    }
}
