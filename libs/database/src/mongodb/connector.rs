use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

/// Build a client from `config` without contacting the server.
///
/// The driver connects lazily, so this only fails on a malformed
/// connection string or invalid options.
pub async fn client_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(Client::with_options(options)?)
}

/// Round-trip a `ping` to verify the server is reachable
pub async fn ping(client: &Client) -> DatabaseResult<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    Ok(())
}

/// Build a client from `config` and verify the connection with a ping
#[instrument(skip(config), fields(url = %config.redacted_url()))]
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!("Attempting to connect to MongoDB");

    let client = client_from_config(config).await?;
    ping(&client).await?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] retried with exponential backoff.
///
/// `None` uses the default policy (3 retries from 100ms).
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}
