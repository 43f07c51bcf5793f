use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{LbError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub delegate: DelegateConfig,
    pub validation: ValidationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote classification service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegateConfig {
    pub enabled: bool,
    pub base_url: String,
    pub predict_path: String,
    pub timeout_ms: u64,
}

/// How unparseable or out-of-range input is treated.
///
/// `Permissive` lets NaN flow through the fallback model (the response then
/// carries a null probability and `survived: false`). `Strict` rejects the
/// request before anything is scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Permissive,
    Strict,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "0.0.0.0".into(), port: 3000 }
    }
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "http://localhost:8000".into(),
            predict_path: "/api/predict/".into(),
            timeout_ms: 5000,
        }
    }
}

impl DelegateConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Full URL of the prediction endpoint.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.predict_path.starts_with('/') {
            format!("{base}{}", self.predict_path)
        } else {
            format!("{base}/{}", self.predict_path)
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| LbError::Config(e.to_string()))
    }

    /// Load from a TOML file. Missing sections fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| LbError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.delegate.enabled {
            if self.delegate.timeout_ms == 0 {
                return Err(LbError::Config("delegate.timeout_ms must be greater than zero".into()));
            }
            if !self.delegate.base_url.starts_with("http://") && !self.delegate.base_url.starts_with("https://") {
                return Err(LbError::Config(format!(
                    "delegate.base_url must be an http(s) URL, got {:?}",
                    self.delegate.base_url
                )));
            }
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
