//! Log setup: `tracing` events to stderr so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
