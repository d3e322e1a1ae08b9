use crate::Environment;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install color-eyre for `main`'s error reports. Later calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directives used when `RUST_LOG` is unset
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info,sqlx=warn,sea_orm=warn"
    } else {
        "debug,sqlx=info,hyper=info"
    }
}

/// Install the global subscriber: JSON lines in production, pretty output
/// otherwise, plus `tracing_error::ErrorLayer` so eyre reports carry span
/// traces.
///
/// Only the first call installs anything.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let output = if environment.is_production() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().pretty().boxed()
    };

    let installed = tracing_subscriber::registry()
        .with(output)
        .with(tracing_error::ErrorLayer::default())
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(?environment, "Tracing initialized");
    }
}
