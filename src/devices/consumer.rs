//! Fixed-demand power sink.

use super::types::PowerStatus;

/// A device demanding a fixed amount of power each tick.
///
/// Consumers are all-or-nothing: a tick either serves the full
/// `power_consumption` or marks the consumer [`PowerStatus::Inactive`].
/// Whether a consumer is served under shortfall is decided by its
/// registration position on the circuit, earliest first.
#[derive(Debug, Clone)]
pub struct Consumer {
    /// Power demanded each tick (>= 0).
    pub power_consumption: f32,
    /// Outcome of the most recent tick.
    pub status: PowerStatus,
}

impl Consumer {
    /// Creates a new consumer with the given per-tick demand.
    ///
    /// Negative values are clamped to zero. The consumer starts
    /// `Inactive` until the first tick computes its status.
    pub fn new(power_consumption: f32) -> Self {
        Self {
            power_consumption: power_consumption.max(0.0),
            status: PowerStatus::Inactive,
        }
    }

    /// Returns `true` when the most recent tick served this consumer.
    pub fn is_powered(&self) -> bool {
        self.status == PowerStatus::Powered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_consumer_starts_inactive() {
        let c = Consumer::new(2.0);
        assert_eq!(c.power_consumption, 2.0);
        assert_eq!(c.status, PowerStatus::Inactive);
        assert!(!c.is_powered());
    }

    #[test]
    fn negative_demand_clamps_to_zero() {
        let c = Consumer::new(-1.0);
        assert_eq!(c.power_consumption, 0.0);
    }
}
