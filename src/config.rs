//! Configuration for the contact book.
//!
//! This module handles loading configuration from environment variables,
//! with a best-effort read of a `.env` file first.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::LoadPolicy;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the backing JSON file (default: `address_book.json`)
    pub book_path: PathBuf,

    /// What to do with stored records that fail validation
    /// (default: strict)
    pub load_policy: LoadPolicy,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_BOOK_PATH`: backing file path (default: `address_book.json`)
    /// - `ROLODEX_LOAD_POLICY`: `strict` or `skip-invalid` (default: `strict`)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env if it exists, but don't fail if it doesn't
        let _ = dotenvy::dotenv();

        let book_path = env::var("ROLODEX_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("address_book.json"));

        let load_policy = Self::parse_load_policy("ROLODEX_LOAD_POLICY", LoadPolicy::Strict)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            load_policy,
            log_level,
        })
    }

    /// Parse a load-policy environment variable with a default value.
    fn parse_load_policy(var_name: &str, default: LoadPolicy) -> ConfigResult<LoadPolicy> {
        match env::var(var_name) {
            Ok(val) => match val.as_str() {
                "strict" => Ok(LoadPolicy::Strict),
                "skip-invalid" => Ok(LoadPolicy::SkipInvalid),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be \"strict\" or \"skip-invalid\", got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("address_book.json"),
            load_policy: LoadPolicy::Strict,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.book_path, PathBuf::from("address_book.json"));
        assert_eq!(config.load_policy, LoadPolicy::Strict);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("ROLODEX_BOOK_PATH");
        env::remove_var("ROLODEX_LOAD_POLICY");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("address_book.json"));
        assert_eq!(config.load_policy, LoadPolicy::Strict);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("ROLODEX_BOOK_PATH", "/tmp/contacts.json");
        guard.set("ROLODEX_LOAD_POLICY", "skip-invalid");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.load_policy, LoadPolicy::SkipInvalid);
    }

    #[test]
    #[serial]
    fn test_config_rejects_unknown_load_policy() {
        let mut guard = EnvGuard::new();
        guard.set("ROLODEX_LOAD_POLICY", "lenient");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "ROLODEX_LOAD_POLICY");
        }
    }
}
