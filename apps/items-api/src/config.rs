use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb.app_name = Some(app.name.to_string());
        }

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(
            [
                "MONGO_URL",
                "MONGODB_URL",
                "MONGO_DATABASE",
                "MONGODB_DATABASE",
                "MONGODB_APP_NAME",
                "HOST",
                "PORT",
                "APP_ENV",
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "items_api");
                assert_eq!(config.mongodb.url(), "mongodb://localhost:27017");
                assert_eq!(config.mongodb.database(), "items_db");
                assert_eq!(config.mongodb.app_name.as_deref(), Some("items_api"));
                assert_eq!(config.server.address(), "0.0.0.0:8080");
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_config_invalid_port_is_error() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
