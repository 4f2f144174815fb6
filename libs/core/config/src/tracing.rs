use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter for development when `RUST_LOG` is unset
const DEV_FILTER: &str = "info,items_api=debug,domain_items=debug,database=debug,tower_http=debug";

/// Default filter for production when `RUST_LOG` is unset
const PROD_FILTER: &str = "info,mongodb=warn";

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
///
/// - Shows file:line where errors occur
/// - Hides environment variables
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Build the log filter, honouring `RUST_LOG` when it is set.
pub fn build_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new(PROD_FILTER)
        } else {
            EnvFilter::new(DEV_FILTER)
        }
    })
}

/// Initialize tracing with environment-aware formatting and error span capture.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events, no module
///   targets, `ErrorLayer` for span traces.
/// - **Development** (default): pretty-printed events, `ErrorLayer` for span
///   traces.
///
/// `RUST_LOG` overrides the default filter (e.g. `RUST_LOG=domain_items=trace`).
///
/// Calling this more than once is harmless; later calls are ignored, which
/// keeps tests that initialise tracing independently from panicking.
pub fn init_tracing(environment: &Environment) {
    let filter = build_filter(environment);

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(?environment, "Tracing initialized");
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}
