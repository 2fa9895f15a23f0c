#![forbid(unsafe_code)]

//! Structured logging plumbing.
//!
//! Compiled away entirely unless the `tracing` feature is enabled. The
//! `tracing-json` feature additionally pulls in `tracing-subscriber` and an
//! init helper for JSON output with env-filter control (`RUST_LOG`).

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON-formatting global subscriber filtered by `RUST_LOG`
/// (default level `info`).
///
/// Returns `false` if a global subscriber was already installed, in which
/// case this call changed nothing.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(all(test, feature = "tracing-json"))]
mod tests {
    #[test]
    fn json_logging_installs_at_most_once() {
        assert!(
            super::init_json_logging(),
            "first install claims the global dispatcher"
        );
        assert!(
            !super::init_json_logging(),
            "second install must change nothing"
        );
    }
}
