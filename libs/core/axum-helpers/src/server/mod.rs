//! Server infrastructure.
//!
//! - Router assembly with OpenAPI documentation UIs
//! - Liveness endpoint
//! - Graceful shutdown followed by bounded cleanup
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes.merge(health_router(app_info!())))?;
//! let config = ServerConfig::default();
//! create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, create_production_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
