//! Logging configuration.

use super::parse::env_or;
use super::ConfigError;

/// Output format for log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG).
    pub filter: String,
    /// Output format (from LOG_FORMAT: "text" or "json").
    pub format: LogFormat,
    /// Service name for structured logging.
    pub service_name: String,
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// Filter priority: LOG_LEVEL > RUST_LOG > default.
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error.
    /// RUST_LOG accepts full tracing filter syntax.
    pub fn from_env() -> Result<Self, ConfigError> {
        let format = match env_or("LOG_FORMAT", "text").to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            filter: resolve_filter(
                std::env::var("LOG_LEVEL").ok(),
                std::env::var("RUST_LOG").ok(),
            ),
            format,
            service_name: env_or("SERVICE_NAME", "memberships_import"),
        })
    }
}

fn resolve_filter(level: Option<String>, rust_log: Option<String>) -> String {
    if let Some(level) = level {
        let level = level.to_lowercase();
        match level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {
                return format!("memberships_import={}", level);
            }
            _ => {
                eprintln!(
                    "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                    level
                );
            }
        }
    }

    if let Some(filter) = rust_log {
        return filter;
    }

    "memberships_import=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_priority() {
        assert_eq!(resolve_filter(None, None), "memberships_import=info");

        assert_eq!(
            resolve_filter(None, Some("memberships_import=warn".to_string())),
            "memberships_import=warn"
        );

        // LOG_LEVEL takes priority over RUST_LOG
        assert_eq!(
            resolve_filter(
                Some("debug".to_string()),
                Some("memberships_import=warn".to_string())
            ),
            "memberships_import=debug"
        );

        // Invalid LOG_LEVEL falls through to RUST_LOG
        assert_eq!(
            resolve_filter(
                Some("loud".to_string()),
                Some("memberships_import=error".to_string())
            ),
            "memberships_import=error"
        );
    }
}
