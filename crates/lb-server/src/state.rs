//! Application state shared across all handlers. Read-only after startup.

use std::sync::Arc;
use std::time::Instant;

use lb_core::{Result, ServiceConfig};

use crate::predictor::Predictor;

#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
    pub config: Arc<ServiceConfig>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(predictor: Predictor, config: ServiceConfig) -> Self {
        Self { predictor, config: Arc::new(config), start_time: Instant::now() }
    }

    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        let predictor = Predictor::from_config(&config)?;
        Ok(Self::new(predictor, config))
    }
}
