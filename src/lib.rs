//! Per-tick power distribution engine for device circuits.

/// Scenario configuration and presets.
pub mod config;
pub mod devices;
pub mod io;
/// Circuit tick engine, fair-share allocation, and run reporting.
pub mod sim;
