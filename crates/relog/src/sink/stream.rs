//! Stream — remote stream destination seam.
//!
//! The shipping transport (broker client, socket, whatever) is an external
//! collaborator. Domain code only sees the two traits here; `memory.rs`
//! provides the deterministic test double.

use std::io;

use super::Sink;

/// An established connection that ships rendered entries somewhere else.
pub trait StreamTransport: Send {
    /// Ship one rendered entry.
    fn send(&mut self, payload: &[u8]) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Factory for a [`StreamTransport`].
///
/// `connect` runs eagerly at pipeline construction; an unreachable broker
/// fails the whole `register` call atomically.
pub trait StreamConnector: Send {
    fn connect(&self) -> io::Result<Box<dyn StreamTransport>>;
}

pub struct StreamSink {
    transport: Box<dyn StreamTransport>,
}

impl StreamSink {
    pub(crate) fn connect(connector: &dyn StreamConnector) -> io::Result<Self> {
        let transport = connector.connect()?;
        tracing::debug!("connected stream sink");
        Ok(Self { transport })
    }
}

impl Sink for StreamSink {
    fn write_entry(&mut self, payload: &[u8]) -> io::Result<()> {
        self.transport.send(payload)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.transport.flush()
    }

    fn kind(&self) -> &'static str {
        "stream"
    }
}
