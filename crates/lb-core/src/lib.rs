//! Lifeboat core — passenger records, feature normalization, validation and configuration.

pub mod config;
pub mod error;
pub mod features;
pub mod passenger;
pub mod validate;

pub use config::{DelegateConfig, ServerConfig, ServiceConfig, ValidationMode};
pub use error::{LbError, Result};
pub use features::{normalize, FeatureVector};
pub use passenger::PassengerInput;
pub use validate::validate;
