//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// configured level applies. Events are written to stderr.
pub fn setup_tracing(level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { level };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
