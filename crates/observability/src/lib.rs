//! Tracing/logging setup shared by the binaries.

/// Tracing subscriber configuration (filter, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging, taking the format from `LOG_FORMAT`.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}
