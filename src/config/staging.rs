//! Upload staging configuration.

use std::path::PathBuf;

use super::parse::env_opt;
use super::ConfigError;

/// Where simulated uploads are staged.
#[derive(Clone, Debug, Default)]
pub struct StagingConfig {
    /// Designated upload temp directory (from `UPLOAD_TMP_DIR`).
    /// When unset, the system temp directory is used.
    pub upload_tmp_dir: Option<PathBuf>,
}

impl StagingConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            upload_tmp_dir: env_opt("UPLOAD_TMP_DIR").map(PathBuf::from),
        })
    }

    /// Explicit constructor, used by embedders and tests.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_tmp_dir: Some(dir.into()),
        }
    }

    /// The directory staged copies are created in.
    pub fn staging_dir(&self) -> PathBuf {
        self.upload_tmp_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}
