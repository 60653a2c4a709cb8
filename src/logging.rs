use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging on stderr. Stdout is reserved for the emitted catalog.
pub fn init_logging() {
    // Respect RUST_LOG if set; otherwise only surface warnings from our crate
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("static_store=warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // try_init so a second call (tests, bundled runs) is a no-op
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}
