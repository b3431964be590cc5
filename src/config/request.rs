//! Synthetic request configuration.

use super::parse::{env_opt, env_or};
use super::ConfigError;

/// Default sub-environment precedence order for the aggregate request view.
pub const DEFAULT_REQUEST_ORDER: &str = "EGPCS";

/// Configuration for composing the synthetic request.
#[derive(Clone, Debug)]
pub struct RequestConfig {
    /// Precedence order for merging sub-environments into the aggregate
    /// view. Later tokens win key conflicts.
    pub request_order: String,
    /// Session key the nonce provider derives authenticity tokens from.
    pub session_key: String,
}

impl RequestConfig {
    /// Load configuration from environment variables.
    ///
    /// Order resolution: `REQUEST_ORDER`, then `VARIABLES_ORDER`, then the
    /// fixed default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            request_order: resolve_order(env_opt("REQUEST_ORDER"), env_opt("VARIABLES_ORDER")),
            session_key: env_or("NONCE_SESSION_KEY", "memberships-import-cli"),
        })
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            request_order: DEFAULT_REQUEST_ORDER.to_string(),
            session_key: "memberships-import-cli".to_string(),
        }
    }
}

fn resolve_order(primary: Option<String>, fallback: Option<String>) -> String {
    primary
        .or(fallback)
        .unwrap_or_else(|| DEFAULT_REQUEST_ORDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_resolution_cascade() {
        assert_eq!(
            resolve_order(Some("PG".to_string()), Some("GP".to_string())),
            "PG"
        );
        assert_eq!(resolve_order(None, Some("GP".to_string())), "GP");
        assert_eq!(resolve_order(None, None), "EGPCS");
    }

    #[test]
    fn test_default_config() {
        let config = RequestConfig::default();
        assert_eq!(config.request_order, DEFAULT_REQUEST_ORDER);
        assert!(!config.session_key.is_empty());
    }
}
