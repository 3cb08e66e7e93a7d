//! Circuit: an ordered device set and the per-tick power update.

use crate::devices::{Battery, Device, PowerStatus};

use super::allocator::fair_share;

/// An insertion-ordered collection of devices whose power exchange is
/// computed together each tick.
///
/// Registration order is significant: it is the consumer priority order
/// under shortfall and is preserved for the circuit's lifetime. The
/// circuit owns no device lifecycle beyond holding the entries — devices
/// are created and destroyed by an external topology layer and merely
/// registered and deregistered here.
#[derive(Debug, Clone)]
pub struct Circuit {
    name: &'static str,
    devices: Vec<Device>,
}

impl Circuit {
    /// Creates a new empty circuit.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            devices: Vec::new(),
        }
    }

    /// Returns the circuit name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers a device, appending it to the ordered device list.
    ///
    /// For consumers the append position fixes their priority: earlier
    /// registrations are served first under shortfall.
    pub fn add_device(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Deregisters the device at `index`, preserving the order of the rest.
    ///
    /// Returns `None` when the index is out of range.
    pub fn remove_device(&mut self, index: usize) -> Option<Device> {
        if index < self.devices.len() {
            Some(self.devices.remove(index))
        } else {
            None
        }
    }

    /// Returns the ordered device list.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Mutable access to the device at `index`, e.g. to toggle a battery.
    pub fn device_mut(&mut self, index: usize) -> Option<&mut Device> {
        self.devices.get_mut(index)
    }

    /// Sum of generator output this tick. Generators have no on/off gate;
    /// every registered generator contributes.
    pub fn total_generation(&self) -> f32 {
        self.devices
            .iter()
            .filter_map(Device::as_generator)
            .map(|g| g.power_production)
            .sum()
    }

    /// Sum of all consumer demand, served or not.
    pub fn total_demand(&self) -> f32 {
        self.devices
            .iter()
            .filter_map(Device::as_consumer)
            .map(|c| c.power_consumption)
            .sum()
    }

    /// Sum of demand of consumers served by the most recent tick.
    pub fn consumed_power(&self) -> f32 {
        self.devices
            .iter()
            .filter_map(Device::as_consumer)
            .filter(|c| c.is_powered())
            .map(|c| c.power_consumption)
            .sum()
    }

    /// Total power the batteries could supply this tick.
    pub fn discharge_capacity(&self) -> f32 {
        self.devices
            .iter()
            .filter_map(Device::as_battery)
            .map(Battery::discharge_capacity)
            .sum()
    }

    /// Total power the batteries could absorb this tick.
    pub fn charge_capacity(&self) -> f32 {
        self.devices
            .iter()
            .filter_map(Device::as_battery)
            .map(Battery::charge_capacity)
            .sum()
    }

    /// Total energy currently stored across all batteries, on or off.
    pub fn total_stored(&self) -> f32 {
        self.devices
            .iter()
            .filter_map(Device::as_battery)
            .map(Battery::stored_power)
            .sum()
    }

    /// Total battery capacity across all batteries, on or off.
    pub fn total_battery_capacity(&self) -> f32 {
        self.devices
            .iter()
            .filter_map(Device::as_battery)
            .map(|b| b.max_capacity)
            .sum()
    }

    /// Number of registered consumers.
    pub fn consumer_count(&self) -> usize {
        self.devices
            .iter()
            .filter(|d| d.as_consumer().is_some())
            .count()
    }

    /// Number of consumers served by the most recent tick.
    pub fn powered_count(&self) -> usize {
        self.devices
            .iter()
            .filter_map(Device::as_consumer)
            .filter(|c| c.is_powered())
            .count()
    }

    /// Recomputes power distribution for one tick.
    ///
    /// Mutates every consumer's `status` and every battery's stored power;
    /// the caller reads the updated device state afterwards (pull model).
    /// Repeated calls are deterministic but not idempotent — each call is
    /// one simulated tick of energy flow.
    ///
    /// The update runs in order:
    /// 1. aggregate generation and battery discharge capacity into the
    ///    supply pool,
    /// 2. serve consumers sequentially in registration order (strict
    ///    priority, not fairness; a failed consumer never blocks later,
    ///    smaller ones),
    /// 3. split the consumed total into generation-first and
    ///    battery-covered parts,
    /// 4. discharge batteries fair-share to cover their part,
    /// 5. charge batteries fair-share from leftover generation.
    ///
    /// An empty circuit or a zero supply pool is a well-defined no-op /
    /// all-`Inactive` outcome.
    pub fn update_power(&mut self) {
        let total_generation = self.total_generation();

        // Battery positions are fixed up front so that both allocator
        // passes address the same recipients. Off batteries participate
        // with zero capacity, which the allocator finalizes at zero.
        let battery_indices: Vec<usize> = self
            .devices
            .iter()
            .enumerate()
            .filter(|(_, d)| d.as_battery().is_some())
            .map(|(i, _)| i)
            .collect();

        let discharge_caps: Vec<f32> = battery_indices
            .iter()
            .filter_map(|&i| self.devices[i].as_battery())
            .map(Battery::discharge_capacity)
            .collect();
        let total_discharge_capacity: f32 = discharge_caps.iter().sum();

        let supply = total_generation + total_discharge_capacity;

        // Sequential consumer allocation: priority is registration order.
        let mut remaining = supply;
        for device in &mut self.devices {
            if let Device::Consumer(consumer) = device {
                if consumer.power_consumption <= remaining {
                    consumer.status = PowerStatus::Powered;
                    remaining -= consumer.power_consumption;
                } else {
                    consumer.status = PowerStatus::Inactive;
                }
            }
        }

        let consumed = supply - remaining;
        let from_generation = total_generation.min(consumed);
        let from_batteries = consumed - from_generation;

        // Discharge pass: batteries jointly cover the shortfall beyond
        // generation, split max-min fair under each battery's cap.
        if from_batteries > 0.0 {
            let allocations = fair_share(from_batteries, &discharge_caps);
            for (&i, &allocation) in battery_indices.iter().zip(allocations.iter()) {
                if let Some(battery) = self.devices[i].as_battery_mut() {
                    battery.remove_power(allocation);
                }
            }
        }

        // Charge pass: leftover generation charges the batteries, capped
        // by rate and headroom. Charge capacities are read after the
        // discharge pass so the two passes compose generically.
        let leftover = total_generation - from_generation;
        if leftover > 0.0 {
            let charge_caps: Vec<f32> = battery_indices
                .iter()
                .filter_map(|&i| self.devices[i].as_battery())
                .map(Battery::charge_capacity)
                .collect();
            let allocations = fair_share(leftover, &charge_caps);
            for (&i, &allocation) in battery_indices.iter().zip(allocations.iter()) {
                if let Some(battery) = self.devices[i].as_battery_mut() {
                    battery.add_power(allocation);
                }
            }
        }
    }
}
