use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Environment variable holding the comma-separated origin allow-list
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// CORS layer for the read/create surface of the API.
///
/// - Allowed methods: GET, POST, OPTIONS
/// - Allowed headers: Content-Type, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Parse a comma-separated origin list, ignoring blank entries
pub fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ALLOWED_ORIGIN, e),
            )
        })
}

/// Build a CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Returns `Ok(None)` when the variable is unset (same-origin only) and an
/// error when it is set but empty or malformed.
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let Ok(raw) = std::env::var(CORS_ALLOWED_ORIGIN) else {
        return Ok(None);
    };

    let origins = parse_origins(&raw)?;
    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} cannot be empty", CORS_ALLOWED_ORIGIN),
        ));
    }

    info!("CORS configured with allowed origins: {}", raw);
    Ok(Some(create_cors_layer(origins)))
}
