//! Load — config loading from file and environment variables.
//!
//! Priority: environment variables > config file > defaults.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::model::PipelineConfig;

impl PipelineConfig {
    /// Load configuration from `RELOG_CONFIG_FILE` (default `relog.toml`)
    /// when the file exists, falling back to environment variables, with
    /// env overrides applied on top either way.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path =
            std::env::var("RELOG_CONFIG_FILE").unwrap_or_else(|_| "relog.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("loading pipeline configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        if let Ok(rtype) = std::env::var("RELOG_REPORTER_TYPE") {
            config.reporter_type = rtype;
        }
        if let Ok(rname) = std::env::var("RELOG_REPORTER_NAME") {
            config.reporter_name = rname;
        }
        if let Ok(path) = std::env::var("RELOG_FILE_PATH") {
            config.file.path = path;
        }
        if let Ok(endpoint) = std::env::var("RELOG_STREAM_ENDPOINT") {
            config.stream.endpoint = endpoint;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: PipelineConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Build configuration from environment variables over the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(rtype) = std::env::var("RELOG_REPORTER_TYPE") {
            config.reporter_type = rtype;
        }
        if let Ok(rname) = std::env::var("RELOG_REPORTER_NAME") {
            config.reporter_name = rname;
        }
        if let Ok(path) = std::env::var("RELOG_FILE_PATH") {
            config.file.path = path;
        }
        if let Ok(enabled) = std::env::var("RELOG_STREAM_ENABLE") {
            config.stream.enabled = enabled == "1" || enabled.eq_ignore_ascii_case("true");
        }
        if let Ok(endpoint) = std::env::var("RELOG_STREAM_ENDPOINT") {
            config.stream.endpoint = endpoint;
        }
        if let Ok(topic) = std::env::var("RELOG_STREAM_TOPIC") {
            config.stream.topic = topic;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_parses_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pipeline.toml");
        let mut file = File::create(&path).expect("create");
        writeln!(
            file,
            "reporter_type = \"worker\"\nreporter_name = \"w-3\"\n\n[file]\npath = \"w.log\""
        )
        .expect("write");

        let config =
            PipelineConfig::from_file(path.to_str().expect("utf8 path")).expect("from_file");
        assert_eq!(config.reporter_type, "worker");
        assert_eq!(config.file.path, "w.log");
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        assert!(PipelineConfig::from_file("/nonexistent/relog.toml").is_err());
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "reporter_type = [not toml").expect("write");
        assert!(PipelineConfig::from_file(path.to_str().expect("utf8 path")).is_err());
    }

    // Environment variables are process-global, so exactly one test
    // touches them.
    #[test]
    fn test_env_overrides_defaults() {
        std::env::set_var("RELOG_REPORTER_TYPE", "edge");
        std::env::set_var("RELOG_STREAM_ENABLE", "true");
        std::env::set_var("RELOG_STREAM_ENDPOINT", "broker:9092");

        let config = PipelineConfig::from_env();
        assert_eq!(config.reporter_type, "edge");
        assert!(config.stream.enabled);
        assert_eq!(config.stream.endpoint, "broker:9092");

        std::env::remove_var("RELOG_REPORTER_TYPE");
        std::env::remove_var("RELOG_STREAM_ENABLE");
        std::env::remove_var("RELOG_STREAM_ENDPOINT");
    }
}
