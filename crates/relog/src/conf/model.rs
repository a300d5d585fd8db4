//! Model — PipelineConfig and per-sink sections.

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Declarative pipeline configuration, one per log type.
///
/// Defaults: file sink at `info` in plain mode, colorized console at
/// `debug`, stream disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// What kind of process reports through this pipeline.
    pub reporter_type: String,
    /// Which instance reports through this pipeline.
    pub reporter_name: String,
    pub file: FileConfig,
    pub console: ConsoleConfig,
    pub stream: StreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub path: String,
    pub threshold: Level,
    /// Rotation parameters, opaque here; consumed by the rotation
    /// collaborator that owns the file.
    pub max_size_mb: u64,
    pub max_backups: u32,
    pub max_age_days: u32,
    pub compress: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub threshold: Level,
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub enabled: bool,
    /// Broker address, opaque here; consumed by the stream connector.
    pub endpoint: String,
    pub topic: String,
    pub threshold: Level,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reporter_type: "service".to_string(),
            reporter_name: "service-0".to_string(),
            file: FileConfig::default(),
            console: ConsoleConfig::default(),
            stream: StreamConfig::default(),
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: "logs/relog.log".to_string(),
            threshold: Level::Info,
            max_size_mb: 128,
            max_backups: 10,
            max_age_days: 30,
            compress: false,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: Level::Debug,
            color: true,
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: String::new(),
            topic: String::new(),
            threshold: Level::Info,
        }
    }
}

impl PipelineConfig {
    /// Validate configuration values before lowering.
    pub fn validate(&self) -> Result<(), String> {
        if self.reporter_type.is_empty() {
            return Err("reporter_type must not be empty".to_string());
        }
        if self.reporter_name.is_empty() {
            return Err("reporter_name must not be empty".to_string());
        }
        if self.file.path.is_empty() {
            return Err("file.path must not be empty".to_string());
        }
        if self.file.max_size_mb == 0 {
            return Err("file.max_size_mb must be > 0".to_string());
        }
        if self.stream.enabled && self.stream.endpoint.is_empty() {
            return Err("stream.endpoint must not be empty when stream is enabled".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Defaults ─────────────────────────────────────────────────

    #[test]
    fn test_default_file_sink_is_info() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.file.threshold, Level::Info);
        assert_eq!(cfg.file.path, "logs/relog.log");
    }

    #[test]
    fn test_default_console_is_colorized_debug() {
        let cfg = PipelineConfig::default();
        assert!(cfg.console.enabled);
        assert!(cfg.console.color);
        assert_eq!(cfg.console.threshold, Level::Debug);
    }

    #[test]
    fn test_default_stream_is_disabled() {
        let cfg = PipelineConfig::default();
        assert!(!cfg.stream.enabled);
        assert_eq!(cfg.stream.threshold, Level::Info);
    }

    // ── TOML round-trip ──────────────────────────────────────────

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: PipelineConfig = toml::from_str(
            r#"
            reporter_type = "gateway"
            reporter_name = "gw-7"

            [file]
            path = "/var/log/gw.log"
            threshold = "warn"
            "#,
        )
        .expect("parse toml");
        assert_eq!(cfg.reporter_type, "gateway");
        assert_eq!(cfg.file.threshold, Level::Warn);
        assert_eq!(cfg.file.max_backups, 10);
        assert!(cfg.console.enabled);
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let rendered = toml::to_string(&PipelineConfig::default()).expect("serialize");
        let parsed: PipelineConfig = toml::from_str(&rendered).expect("reparse");
        assert_eq!(parsed.file.path, PipelineConfig::default().file.path);
        assert_eq!(parsed.console.threshold, Level::Debug);
    }

    // ── Validation ───────────────────────────────────────────────

    #[test]
    fn test_validate_default_passes() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_identity() {
        let mut cfg = PipelineConfig::default();
        cfg.reporter_type = String::new();
        let err = cfg.validate().err().expect("must fail");
        assert!(err.contains("reporter_type"));
    }

    #[test]
    fn test_validate_rejects_zero_rotation_size() {
        let mut cfg = PipelineConfig::default();
        cfg.file.max_size_mb = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_enabled_stream_without_endpoint() {
        let mut cfg = PipelineConfig::default();
        cfg.stream.enabled = true;
        let err = cfg.validate().err().expect("must fail");
        assert!(err.contains("stream.endpoint"));
    }
}
