//! Diagnostic logging for the CLI.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Install a stderr subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("warning: tracing subscriber already initialized");
    }
}
