//! Tracing setup: JSON lines on stdout, filterable through `RUST_LOG`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Baseline directives when `RUST_LOG` is unset. Request-level logging
/// happens in our own middleware, so the lower layers are capped at warn.
const DEFAULT_DIRECTIVES: &str = "info,sqlx=warn,sea_orm=warn,reqwest=warn,hyper=warn";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true).with_target(true))
        .init();
}
