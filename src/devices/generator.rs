//! Fixed-output power source.

/// A power source contributing a fixed amount each tick.
///
/// Generators have no on/off gate: they are always contributing while
/// registered on a circuit. Removing one from the circuit is the only way
/// to take its output off the supply pool.
#[derive(Debug, Clone)]
pub struct Generator {
    /// Power available this tick (>= 0).
    pub power_production: f32,
}

impl Generator {
    /// Creates a new generator with the given per-tick output.
    ///
    /// Negative values are clamped to zero.
    pub fn new(power_production: f32) -> Self {
        Self {
            power_production: power_production.max(0.0),
        }
    }
}
