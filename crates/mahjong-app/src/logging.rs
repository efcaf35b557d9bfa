use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the process-wide subscriber for decision telemetry. `RUST_LOG`
/// wins when set; otherwise `--verbose` raises the default level to DEBUG.
pub fn init(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    // Ignore the error if a subscriber is already set (e.g. in tests).
    let _ = tracing::subscriber::set_global_default(subscriber);
}
