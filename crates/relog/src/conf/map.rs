//! Map — lower a PipelineConfig into a construction-ready spec.

use super::model::PipelineConfig;
use crate::error::PipelineError;
use crate::pipeline::PipelineSpec;
use crate::sink::stream::StreamConnector;
use crate::sink::{ConsoleTarget, FileSinkParams, SinkConfig};

impl PipelineConfig {
    /// Lower into the ordered sink list: file, console, stream.
    ///
    /// The stream transport is an external collaborator, so an enabled
    /// stream section requires a connector; the endpoint/topic strings are
    /// carried for the connector's benefit, not interpreted here.
    pub fn to_spec(
        &self,
        log_type: &str,
        stream_connector: Option<Box<dyn StreamConnector>>,
    ) -> Result<PipelineSpec, PipelineError> {
        self.validate().map_err(PipelineError::Config)?;

        let mut sinks = Vec::with_capacity(3);

        let mut params = FileSinkParams::new(&self.file.path);
        params.max_size_mb = self.file.max_size_mb;
        params.max_backups = self.file.max_backups;
        params.max_age_days = self.file.max_age_days;
        params.compress = self.file.compress;
        sinks.push(SinkConfig::file(self.file.threshold, params));

        if self.console.enabled {
            sinks.push(SinkConfig::console(
                self.console.threshold,
                ConsoleTarget::Stdout,
                self.console.color,
            ));
        }

        if self.stream.enabled {
            let connector = stream_connector.ok_or_else(|| {
                PipelineError::Config(
                    "stream sink enabled but no stream connector supplied".to_string(),
                )
            })?;
            sinks.push(SinkConfig::stream(self.stream.threshold, connector));
        }

        Ok(PipelineSpec {
            reporter_type: self.reporter_type.clone(),
            reporter_name: self.reporter_name.clone(),
            log_type: log_type.to_string(),
            sinks,
        })
    }
}
