//! Device models for circuit power distribution.

/// Rate- and capacity-capped energy buffer.
pub mod battery;
/// Fixed-demand power sink.
pub mod consumer;
/// Fixed-output power source.
pub mod generator;
pub mod types;

// Re-export the main types for convenience
pub use battery::Battery;
pub use consumer::Consumer;
pub use generator::Generator;
pub use types::Device;
pub use types::PowerStatus;
