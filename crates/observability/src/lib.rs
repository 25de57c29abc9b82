//! Tracing and logging setup shared by the inventory binaries.

/// Initialize process-wide logging with the default `info` filter.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Subscriber configuration (filters, layers).
pub mod tracing;
