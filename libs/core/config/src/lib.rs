pub mod server;
pub mod tracing;

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment (dev = local/docker compose, prod = deployed)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Static application metadata reported by the liveness endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Build an [`AppInfo`] from the calling crate's Cargo metadata.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load the first variable that is set among `keys`, falling back to `default`
pub fn env_first_or_default(keys: &[&str], default: &str) -> String {
    keys.iter()
        .find_map(|key| env::var(key).ok())
        .unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable into `T`, using `default` when unset
pub fn env_parse_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults_to_development() {
        temp_env::with_var_unset("APP_ENV", || {
            let env = Environment::from_env();
            assert_eq!(env, Environment::Development);
            assert!(env.is_development());
            assert!(!env.is_production());
        });
    }

    #[test]
    fn test_environment_production_case_insensitive() {
        temp_env::with_var("APP_ENV", Some("PRODUCTION"), || {
            assert_eq!(Environment::from_env(), Environment::Production);
        });

        temp_env::with_var("APP_ENV", Some("Production"), || {
            assert!(Environment::from_env().is_production());
        });
    }

    #[test]
    fn test_environment_unknown_defaults_to_development() {
        temp_env::with_var("APP_ENV", Some("staging"), || {
            assert_eq!(Environment::from_env(), Environment::Development);
        });
    }

    #[test]
    fn test_app_info_macro_uses_crate_metadata() {
        let info = app_info!();
        assert_eq!(info.name, "core_config");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_env_or_default_without_value() {
        temp_env::with_var_unset("MISSING_VAR", || {
            assert_eq!(env_or_default("MISSING_VAR", "default_value"), "default_value");
        });
    }

    #[test]
    fn test_env_first_or_default_prefers_first_set_key() {
        temp_env::with_vars(
            [("PRIMARY_KEY", None::<&str>), ("ALIAS_KEY", Some("alias"))],
            || {
                assert_eq!(
                    env_first_or_default(&["PRIMARY_KEY", "ALIAS_KEY"], "fallback"),
                    "alias"
                );
            },
        );

        temp_env::with_vars(
            [("PRIMARY_KEY", Some("primary")), ("ALIAS_KEY", Some("alias"))],
            || {
                assert_eq!(
                    env_first_or_default(&["PRIMARY_KEY", "ALIAS_KEY"], "fallback"),
                    "primary"
                );
            },
        );
    }

    #[test]
    fn test_env_first_or_default_falls_back() {
        temp_env::with_vars(
            [("PRIMARY_KEY", None::<&str>), ("ALIAS_KEY", None::<&str>)],
            || {
                assert_eq!(
                    env_first_or_default(&["PRIMARY_KEY", "ALIAS_KEY"], "fallback"),
                    "fallback"
                );
            },
        );
    }

    #[test]
    fn test_env_parse_or() {
        temp_env::with_var_unset("POOL_SIZE", || {
            assert_eq!(env_parse_or("POOL_SIZE", 7u32).unwrap(), 7);
        });

        temp_env::with_var("POOL_SIZE", Some("42"), || {
            assert_eq!(env_parse_or("POOL_SIZE", 7u32).unwrap(), 42);
        });

        temp_env::with_var("POOL_SIZE", Some("many"), || {
            let err = env_parse_or("POOL_SIZE", 7u32).unwrap_err();
            assert!(err.to_string().contains("POOL_SIZE"));
        });
    }
}
