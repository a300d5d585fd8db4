//! Console — interactive console destination.
//!
//! No rotation semantics; flushed per entry so colorized output shows up
//! immediately on an interactive terminal.

use std::io::{self, Write};

use super::Sink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

pub struct ConsoleSink {
    target: ConsoleTarget,
}

impl ConsoleSink {
    pub fn new(target: ConsoleTarget) -> Self {
        Self { target }
    }
}

impl Sink for ConsoleSink {
    fn write_entry(&mut self, payload: &[u8]) -> io::Result<()> {
        match self.target {
            ConsoleTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(payload)?;
                out.flush()
            }
            ConsoleTarget::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(payload)?;
                out.flush()
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        // Already flushed per entry.
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "console"
    }
}
