use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "POKEDEX_LOG";

const DEFAULT_FILTER: &str = "pokedex=info";

/// Initializes a logger writing to `stderr`
pub fn init_logger() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    // A second init (e.g. from tests) is not an error worth reporting
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
