//! Logging setup for the command-line entry point

use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a default filter directive
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
/// Stdout is left for the resolved version.
pub fn init(verbose: u8, json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
    }
}
