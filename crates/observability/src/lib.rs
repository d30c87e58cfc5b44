//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide tracing/logging.
///
/// Output format comes from `LOG_FORMAT` (`json` by default, `pretty` for local
/// development); filtering comes from `RUST_LOG`. Safe to call multiple times;
/// subsequent calls become no-ops.
pub fn init() {
    let format = std::env::var("LOG_FORMAT")
        .ok()
        .map(|v| tracing::LogFormat::parse(&v))
        .unwrap_or_default();
    tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
