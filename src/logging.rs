use tracing_subscriber::{fmt, EnvFilter};

/// Log to stderr so that stdout only carries the report. Verbosity is
/// controlled with `RUST_LOG` and defaults to warnings.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
