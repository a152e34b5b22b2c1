use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_tree::HierarchicalLayer;

use crate::config::{Config, LogFormat};

/// Installs the global subscriber. The returned guard flushes Sentry on drop and
/// must live as long as the server.
pub fn init(config: &Config) -> color_eyre::Result<Option<sentry::ClientInitGuard>> {
    let guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let format = config.log_format;
    tracing_subscriber::registry()
        .with(filter)
        .with((format == LogFormat::Plain).then(|| fmt::layer()))
        .with((format == LogFormat::Json).then(|| fmt::layer().json()))
        .with((format == LogFormat::Tree).then(|| HierarchicalLayer::new(2)))
        .with(guard.is_some().then(|| sentry_tracing::layer()))
        .try_init()?;

    Ok(guard)
}
