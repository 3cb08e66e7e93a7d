//! Per-tick record types.

use std::fmt;

/// Complete scalar record of one circuit tick.
///
/// Derived by observing circuit state around `update_power()`: the core
/// itself pushes no notifications, so every field here is reconstructed
/// from device state and the balance identities of the tick algorithm.
#[derive(Debug, Clone)]
pub struct TickResult {
    /// Tick index.
    pub tick: usize,
    /// Total generator output.
    pub generation: f32,
    /// Total battery discharge capacity going into the supply pool.
    pub discharge_capacity: f32,
    /// Supply pool: `generation + discharge_capacity`.
    pub supply: f32,
    /// Total consumer demand, served or not.
    pub demand: f32,
    /// Demand actually served this tick.
    pub consumed: f32,
    /// Served demand covered by generation.
    pub from_generation: f32,
    /// Served demand covered by battery discharge.
    pub from_batteries: f32,
    /// Energy charged into batteries from leftover generation.
    pub charged: f32,
    /// Consumers served this tick.
    pub powered_consumers: usize,
    /// Consumers left unserved this tick.
    pub unpowered_consumers: usize,
    /// Total stored energy across all batteries after the tick.
    pub stored_total: f32,
}

impl fmt::Display for TickResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:>4} | supply={:>7.2} (gen={:.2} batt={:.2})  demand={:>7.2}  \
             served={:>7.2} | powered={}/{} | charged={:.2}  discharged={:.2}  \
             stored={:.2}",
            self.tick,
            self.supply,
            self.generation,
            self.discharge_capacity,
            self.demand,
            self.consumed,
            self.powered_consumers,
            self.powered_consumers + self.unpowered_consumers,
            self.charged,
            self.from_batteries,
            self.stored_total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_result_display_does_not_panic() {
        let r = TickResult {
            tick: 3,
            generation: 9.0,
            discharge_capacity: 5.0,
            supply: 14.0,
            demand: 6.0,
            consumed: 6.0,
            from_generation: 6.0,
            from_batteries: 0.0,
            charged: 3.0,
            powered_consumers: 2,
            unpowered_consumers: 1,
            stored_total: 12.5,
        };
        let s = format!("{r}");
        assert!(!s.is_empty());
        assert!(s.contains("powered=2/3"));
    }
}
