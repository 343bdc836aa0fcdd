use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for embedders and examples.
///
/// Honors `RUST_LOG`, defaulting to `info`. Calling it twice is harmless; the
/// second install attempt is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
