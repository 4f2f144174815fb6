//! Application state shared with request handlers.

use mongodb::{Client, Database};

/// Cloned per handler; the client and database are handles onto one pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Shared connection pool; may not be connected yet if startup checks failed
    pub mongo_client: Client,
    pub db: Database,
}
