//! Telemetry output.

/// CSV export for tick results.
pub mod export;
