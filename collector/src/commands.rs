//! CLI definition and startup wiring for the collector binary.

use std::sync::Arc;

use clap::Parser;

use crate::config::Config;
use crate::error::{CollectorError, Result};
use crate::upload::{HttpSink, UploadSink};

/// Top-level CLI structure parsed from program arguments.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Path to the server configuration file (created with defaults if missing)
    #[arg(short = 'c', long = "config", default_value = "config.toml")]
    pub config_path: std::path::PathBuf,

    /// Skin sink endpoint; falls back to the SINK_URL environment variable
    #[arg(long = "sink-url")]
    pub sink_url: Option<String>,
}

impl Cli {
    /// Load configuration, build the sink client and run the listener.
    pub async fn handle(self) -> Result<()> {
        let config = Config::read_or_create(&self.config_path)?;

        let sink_url = self
            .sink_url
            .or_else(|| std::env::var("SINK_URL").ok())
            .ok_or_else(|| CollectorError::config_error("SINK_URL not set"))?;
        log::info!("Uploading skins to {}", sink_url);

        let sink: Arc<dyn UploadSink> = Arc::new(HttpSink::new(sink_url));
        crate::server::run(config, sink).await
    }
}
