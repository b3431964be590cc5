//! Environment variable parsing utilities.

/// Get environment variable with default value.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get optional environment variable (None if empty or missing).
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Parse environment variable as boolean.
/// Treats "1", "true" (case-insensitive) as true.
pub fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default() {
        std::env::remove_var("MEMBERSHIPS_IMPORT_TEST_ENV_OR");
        assert_eq!(env_or("MEMBERSHIPS_IMPORT_TEST_ENV_OR", "fallback"), "fallback");
    }

    #[test]
    fn test_env_opt_filters_empty() {
        std::env::set_var("MEMBERSHIPS_IMPORT_TEST_ENV_OPT", "");
        assert_eq!(env_opt("MEMBERSHIPS_IMPORT_TEST_ENV_OPT"), None);

        std::env::set_var("MEMBERSHIPS_IMPORT_TEST_ENV_OPT", "value");
        assert_eq!(
            env_opt("MEMBERSHIPS_IMPORT_TEST_ENV_OPT"),
            Some("value".to_string())
        );

        std::env::remove_var("MEMBERSHIPS_IMPORT_TEST_ENV_OPT");
    }

    #[test]
    fn test_env_bool_values() {
        std::env::set_var("MEMBERSHIPS_IMPORT_TEST_ENV_BOOL", "1");
        assert!(env_bool("MEMBERSHIPS_IMPORT_TEST_ENV_BOOL", false));

        std::env::set_var("MEMBERSHIPS_IMPORT_TEST_ENV_BOOL", "TRUE");
        assert!(env_bool("MEMBERSHIPS_IMPORT_TEST_ENV_BOOL", false));

        std::env::set_var("MEMBERSHIPS_IMPORT_TEST_ENV_BOOL", "no");
        assert!(!env_bool("MEMBERSHIPS_IMPORT_TEST_ENV_BOOL", true));

        std::env::remove_var("MEMBERSHIPS_IMPORT_TEST_ENV_BOOL");
    }
}
