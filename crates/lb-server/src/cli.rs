//! Command-line arguments for the `lifeboat` binary.

use std::path::PathBuf;

use clap::Parser;
use lb_core::{Result, ServiceConfig, ValidationMode};

#[derive(Parser, Debug, Default)]
#[command(name = "lifeboat")]
#[command(about = "Passenger survival scoring service")]
#[command(version)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "LIFEBOAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "LIFEBOAT_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "LIFEBOAT_PORT")]
    pub port: Option<u16>,

    /// Base URL of the remote classification service
    #[arg(long, env = "DELEGATE_API_URL")]
    pub delegate_url: Option<String>,

    /// Remote call timeout in milliseconds
    #[arg(long, env = "DELEGATE_TIMEOUT_MS")]
    pub delegate_timeout_ms: Option<u64>,

    /// Never call the remote service; always use the fallback model
    #[arg(long, env = "LIFEBOAT_NO_DELEGATE")]
    pub no_delegate: bool,

    /// Reject malformed numeric input instead of propagating NaN
    #[arg(long, env = "LIFEBOAT_STRICT")]
    pub strict: bool,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::load(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.delegate_url {
            config.delegate.base_url = url.clone();
        }
        if let Some(timeout_ms) = self.delegate_timeout_ms {
            config.delegate.timeout_ms = timeout_ms;
        }
        if self.no_delegate {
            config.delegate.enabled = false;
        }
        if self.strict {
            config.validation = ValidationMode::Strict;
        }

        config.validate()?;
        Ok(config)
    }
}
