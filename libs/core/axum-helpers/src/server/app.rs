use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path the OpenAPI document is served at
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Combine API routes with documentation UIs and cross-cutting middleware.
///
/// Routes in `apis` are mounted at the root, next to:
/// - `/api-docs/openapi.json` and `/swagger-ui`
/// - `/redoc`, `/rapidoc`, `/scalar`
///
/// Unknown paths answer with a JSON 404. Every response passes through
/// request tracing, security headers and compression. A CORS layer is added
/// only when `CORS_ALLOWED_ORIGIN` is set.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is set but empty or malformed.
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors) = cors_layer_from_env()? {
        router = router.layer(cors);
    }

    Ok(router.layer(CompressionLayer::new()))
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts, so it may close
/// resources the handlers use. `cleanup` is bounded by `shutdown_timeout`;
/// if it overruns, a warning is logged and shutdown continues.
///
/// ```ignore
/// let cleanup = async move {
///     client.shutdown().await;
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve_then_cleanup(listener, router, shutdown_signal(), shutdown_timeout, cleanup).await
}

/// Serve until `shutdown` resolves and connections drain, then run `cleanup`
async fn serve_then_cleanup<S, F>(
    listener: TcpListener,
    router: Router,
    shutdown: S,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()>,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => {
            tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            );
        }
    }

    serve_result
}
