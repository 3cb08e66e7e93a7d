//! Common types for circuit devices.

use super::battery::Battery;
use super::consumer::Consumer;
use super::generator::Generator;

/// Outcome of the most recent tick for a consumer.
///
/// A consumer is `Inactive` until the first tick computes its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStatus {
    /// The consumer's full demand was served this tick.
    Powered,
    /// The consumer went unserved this tick (or no tick has run yet).
    Inactive,
}

/// A device wired onto a circuit.
///
/// The variant set is closed: the tick engine dispatches by pattern
/// matching rather than through a trait object. Each variant carries its
/// role-specific numeric state; the engine reads generators, reads and
/// writes consumer status, and reads and writes battery stored power.
#[derive(Debug, Clone)]
pub enum Device {
    /// A fixed power source.
    Generator(Generator),
    /// A fixed power demand.
    Consumer(Consumer),
    /// A rate- and capacity-capped energy buffer.
    Battery(Battery),
}

impl Device {
    /// Returns a human-readable type name for the device.
    pub fn device_type(&self) -> &'static str {
        match self {
            Device::Generator(_) => "Generator",
            Device::Consumer(_) => "Consumer",
            Device::Battery(_) => "Battery",
        }
    }

    /// Returns the generator state if this device is a generator.
    pub fn as_generator(&self) -> Option<&Generator> {
        match self {
            Device::Generator(g) => Some(g),
            _ => None,
        }
    }

    /// Returns the consumer state if this device is a consumer.
    pub fn as_consumer(&self) -> Option<&Consumer> {
        match self {
            Device::Consumer(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the battery state if this device is a battery.
    pub fn as_battery(&self) -> Option<&Battery> {
        match self {
            Device::Battery(b) => Some(b),
            _ => None,
        }
    }

    /// Mutable access to the consumer state, if any.
    pub fn as_consumer_mut(&mut self) -> Option<&mut Consumer> {
        match self {
            Device::Consumer(c) => Some(c),
            _ => None,
        }
    }

    /// Mutable access to the battery state, if any.
    pub fn as_battery_mut(&mut self) -> Option<&mut Battery> {
        match self {
            Device::Battery(b) => Some(b),
            _ => None,
        }
    }
}
