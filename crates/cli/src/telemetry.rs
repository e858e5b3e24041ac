use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr. Tables and JSON own stdout.
pub fn init_telemetry() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "trustnet=info,trustnet_cli=info,trustnet_kernel=info".into()),
    );
    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
    if initialized.is_err() {
        tracing::warn!("tracing subscriber already set. Telemetry re-initialized?");
    }
}
