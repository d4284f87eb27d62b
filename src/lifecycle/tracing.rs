//! # Observability & Tracing
//!
//! Log verbosity comes from `RUST_LOG`; with nothing set only errors are shown, which keeps
//! the interactive console clean.
//!
//! ```bash
//! RUST_LOG=info cargo run    # operations and alerts
//! RUST_LOG=debug cargo run   # request payloads and threshold checks
//! ```
//!
//! Output goes to stderr so it never interleaves with the menu on stdout. The format is
//! compact and hides module paths; span names (`command`, `add`, `update`, ...) show the
//! request path inline.

/// Initializes the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
