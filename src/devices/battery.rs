//! Rate- and capacity-capped energy buffer.

/// An energy buffer that can charge from surplus generation and discharge
/// to cover consumer demand.
///
/// `max_power_rate` caps both charging and discharging within a single
/// tick. `stored_power` is kept within `[0, max_capacity]` at all times:
/// construction clamps the initial value and every mutation clamps against
/// the boundaries.
///
/// An off battery (`is_on == false`) contributes zero supply and accepts
/// zero charge during a tick; its stored power is unchanged. The direct
/// [`Battery::add_power`] / [`Battery::remove_power`] operations ignore the
/// switch — they model external energy transfer, not circuit flow.
#[derive(Debug, Clone)]
pub struct Battery {
    /// Symmetric per-tick cap on charge and discharge (> 0 by caller contract).
    pub max_power_rate: f32,
    /// Maximum energy the battery can hold (>= 0).
    pub max_capacity: f32,
    /// Whether the battery participates in circuit ticks.
    pub is_on: bool,
    /// Current energy, kept within `[0, max_capacity]`.
    stored_power: f32,
}

impl Battery {
    /// Creates a new battery with explicit initial values.
    ///
    /// The initial `stored_power` is clamped into `[0, max_capacity]`.
    /// The battery starts on.
    pub fn new(max_power_rate: f32, max_capacity: f32, stored_power: f32) -> Self {
        Self {
            max_power_rate,
            max_capacity,
            is_on: true,
            stored_power: stored_power.clamp(0.0, max_capacity.max(0.0)),
        }
    }

    /// Returns the current stored energy.
    pub fn stored_power(&self) -> f32 {
        self.stored_power
    }

    /// Adds energy directly, clamping at `max_capacity`.
    ///
    /// Returns the amount actually stored, which may be less than
    /// requested at the boundary and zero when already full. Negative
    /// requests are treated as zero.
    pub fn add_power(&mut self, amount: f32) -> f32 {
        let headroom = (self.max_capacity - self.stored_power).max(0.0);
        let applied = amount.max(0.0).min(headroom);
        self.stored_power += applied;
        applied
    }

    /// Removes energy directly, clamping at zero.
    ///
    /// Returns the amount actually removed, which may be less than
    /// requested at the boundary and zero when already empty. Negative
    /// requests are treated as zero.
    pub fn remove_power(&mut self, amount: f32) -> f32 {
        let applied = amount.max(0.0).min(self.stored_power);
        self.stored_power -= applied;
        applied
    }

    /// How much this battery can accept from the circuit this tick:
    /// `min(max_power_rate, max_capacity - stored_power)`, or zero while off.
    pub fn charge_capacity(&self) -> f32 {
        if !self.is_on {
            return 0.0;
        }
        self.max_power_rate
            .min(self.max_capacity - self.stored_power)
            .max(0.0)
    }

    /// How much this battery can supply to the circuit this tick:
    /// `min(max_power_rate, stored_power)`, or zero while off.
    pub fn discharge_capacity(&self) -> f32 {
        if !self.is_on {
            return 0.0;
        }
        self.max_power_rate.min(self.stored_power).max(0.0)
    }

    /// Switches the battery on or off.
    pub fn set_on(&mut self, on: bool) {
        self.is_on = on;
    }
}
