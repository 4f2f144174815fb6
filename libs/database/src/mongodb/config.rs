#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first_or_default, env_parse_or};

/// Connection string used when no environment override is present
pub const DEFAULT_URL: &str = "mongodb://localhost:27017";

/// Database used when no environment override is present
pub const DEFAULT_DATABASE: &str = "items_db";

/// MongoDB connection settings
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig {
///     database: "items_db".into(),
///     ..MongoConfig::new("mongodb://db:27017")
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    pub database: String,

    /// Reported to the server in its connection logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,

    pub min_pool_size: u32,

    pub connect_timeout_secs: u64,

    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Settings for `url` with the default database and pool bounds
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Connection string with any `user:password@` credentials masked, for logs
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };

        match rest.rsplit_once('@') {
            Some((_, host)) => format!("{}://***@{}", scheme, host),
            None => self.url.clone(),
        }
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Environment variables:
/// - `MONGO_URL` or `MONGODB_URL` (default: `mongodb://localhost:27017`)
/// - `MONGO_DATABASE` or `MONGODB_DATABASE` (default: `items_db`)
/// - `MONGODB_APP_NAME` (optional)
/// - `MONGODB_MAX_POOL_SIZE` (default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: env_first_or_default(&["MONGO_URL", "MONGODB_URL"], DEFAULT_URL),
            database: env_first_or_default(
                &["MONGO_DATABASE", "MONGODB_DATABASE"],
                DEFAULT_DATABASE,
            ),
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse_or("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mongo_config_default() {
        let config = MongoConfig::default();
        assert_eq!(config.url, "mongodb://localhost:27017");
        assert_eq!(config.database, "items_db");
        assert_eq!(config.max_pool_size, 100);
        assert_eq!(config.min_pool_size, 5);
    }

    #[test]
    fn test_mongo_config_new_keeps_defaults() {
        let config = MongoConfig::new("mongodb://db:27017");
        assert_eq!(config.url(), "mongodb://db:27017");
        assert_eq!(config.database(), "items_db");
        assert!(config.app_name.is_none());
    }

    #[test]
    fn test_redacted_url_masks_credentials() {
        let config = MongoConfig::new("mongodb://admin:s3cret@db:27017/?authSource=admin");
        assert_eq!(config.redacted_url(), "mongodb://***@db:27017/?authSource=admin");

        let plain = MongoConfig::new("mongodb://localhost:27017");
        assert_eq!(plain.redacted_url(), "mongodb://localhost:27017");
    }

    #[cfg(feature = "config")]
    const VARS: [&str; 8] = [
        "MONGO_URL",
        "MONGODB_URL",
        "MONGO_DATABASE",
        "MONGODB_DATABASE",
        "MONGODB_APP_NAME",
        "MONGODB_MAX_POOL_SIZE",
        "MONGODB_MIN_POOL_SIZE",
        "MONGODB_CONNECT_TIMEOUT_SECS",
    ];

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = MongoConfig::from_env().unwrap();
            assert_eq!(config, MongoConfig::default());
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_overrides() {
        temp_env::with_vars(
            [
                ("MONGO_URL", Some("mongodb://db:27017")),
                ("MONGO_DATABASE", Some("testdb")),
                ("MONGODB_MAX_POOL_SIZE", Some("10")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://db:27017");
                assert_eq!(config.database, "testdb");
                assert_eq!(config.max_pool_size, 10);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_alias() {
        temp_env::with_vars(
            [
                ("MONGO_URL", None::<&str>),
                ("MONGODB_URL", Some("mongodb://alias:27017")),
                ("MONGO_DATABASE", None::<&str>),
                ("MONGODB_DATABASE", Some("aliasdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://alias:27017");
                assert_eq!(config.database, "aliasdb");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_mongo_config_from_env_invalid_pool_size() {
        temp_env::with_var("MONGODB_MAX_POOL_SIZE", Some("lots"), || {
            let err = MongoConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("MONGODB_MAX_POOL_SIZE"));
        });
    }
}
