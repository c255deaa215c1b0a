//! Tracing/logging setup shared by binaries and examples.

/// Initializes structured logging for the whole process.
///
/// Verbosity is controlled through `RUST_LOG`:
///
/// - `RUST_LOG=info` — lifecycle events and successful operations
/// - `RUST_LOG=debug` — full request payloads
/// - `RUST_LOG=brewcraft_shop=debug` — debug for one crate only
///
/// Call this once, at the start of `main`; library code only emits
/// events and never installs a subscriber.
pub fn init_telemetry() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
