//! Database library providing the MongoDB connector and shared utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction, connection and health checks
//! - `config` - Load `MongoConfig` from the environment through `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
