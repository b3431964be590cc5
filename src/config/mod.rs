//! Configuration module for memberships_import.
//!
//! Runtime knobs are loaded from environment variables; the per-invocation
//! import options come from the command line and live in [`ImportOptions`].
//!
//! # Example
//!
//! ```rust,ignore
//! use memberships_import::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Request order: {}", config.request.request_order);
//! ```

mod error;
mod import;
mod logging;
pub mod parse;
mod request;
mod staging;

pub use error::ConfigError;
pub use import::{Delimiter, ImportOptions};
pub use logging::{LogFormat, LoggingConfig};
pub use request::{RequestConfig, DEFAULT_REQUEST_ORDER};
pub use staging::StagingConfig;

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Upload staging configuration.
    pub staging: StagingConfig,
    /// Synthetic request configuration.
    pub request: RequestConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            staging: StagingConfig::from_env()?,
            request: RequestConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Request order: {}", self.request.request_order);

        if let Some(ref dir) = self.staging.upload_tmp_dir {
            info!("  Upload temp dir: {}", dir.display());
        } else {
            info!("  Upload temp dir: system default");
        }
    }
}
