//! File — buffered file destination with delegated rotation policy.
//!
//! The rotation parameters travel with the sink but are enforced by the
//! external rotation collaborator, not here: this sink's contract is only
//! "accepts a byte stream". The file is opened eagerly so a bad path fails
//! pipeline construction instead of the first emit.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::Sink;

// One page of buffering between external flushes.
pub(crate) const FILE_BUFFER_SIZE: usize = 4096;

/// Destination parameters for a file sink. Everything besides `path` is
/// opaque to the router and consumed by the rotation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSinkParams {
    pub path: PathBuf,
    pub max_size_mb: u64,
    pub max_backups: u32,
    pub max_age_days: u32,
    pub compress: bool,
}

impl FileSinkParams {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_size_mb: 128,
            max_backups: 10,
            max_age_days: 30,
            compress: false,
        }
    }
}

pub struct FileSink {
    writer: BufWriter<File>,
    params: FileSinkParams,
}

impl FileSink {
    /// Open (create + append) the target file, creating parent directories.
    pub fn open(params: FileSinkParams) -> io::Result<Self> {
        if let Some(parent) = params.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(&params.path)?;
        tracing::debug!(path = %params.path.display(), "opened file sink");
        Ok(Self {
            writer: BufWriter::with_capacity(FILE_BUFFER_SIZE, file),
            params,
        })
    }

    /// Rotation parameters for the external rotation collaborator.
    pub fn params(&self) -> &FileSinkParams {
        &self.params
    }
}

impl Sink for FileSink {
    fn write_entry(&mut self, payload: &[u8]) -> io::Result<()> {
        self.writer.write_all(payload)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/logs/out.log");
        let sink = FileSink::open(FileSinkParams::new(&path)).expect("open");
        assert!(path.exists());
        drop(sink);
    }

    #[test]
    fn test_entries_reach_disk_after_flush() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.log");
        let mut sink = FileSink::open(FileSinkParams::new(&path)).expect("open");
        sink.write_entry(b"first entry\n").expect("write");
        sink.flush().expect("flush");
        let contents = fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "first entry\n");
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.log");
        fs::write(&path, "already here\n").expect("seed file");
        let mut sink = FileSink::open(FileSinkParams::new(&path)).expect("open");
        sink.write_entry(b"appended\n").expect("write");
        sink.flush().expect("flush");
        let contents = fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "already here\nappended\n");
    }

    #[test]
    fn test_open_fails_on_unwritable_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory at the target path makes the open fail.
        let path = dir.path().join("taken");
        fs::create_dir(&path).expect("occupy path");
        assert!(FileSink::open(FileSinkParams::new(&path)).is_err());
    }

    #[test]
    fn test_default_rotation_params() {
        let params = FileSinkParams::new("logs/x.log");
        assert_eq!(params.max_size_mb, 128);
        assert_eq!(params.max_backups, 10);
        assert_eq!(params.max_age_days, 30);
        assert!(!params.compress);
    }
}
