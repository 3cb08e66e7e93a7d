//! Shared test fixtures for integration tests.

use circuit_sim::devices::{Battery, Consumer, Device, Generator};
use circuit_sim::sim::circuit::Circuit;

/// Generator device with the given per-tick output.
pub fn generator(power: f32) -> Device {
    Device::Generator(Generator::new(power))
}

/// Consumer device with the given per-tick demand.
pub fn consumer(demand: f32) -> Device {
    Device::Consumer(Consumer::new(demand))
}

/// Battery device, on, with the given rate, capacity, and initial store.
pub fn battery(rate: f32, capacity: f32, stored: f32) -> Device {
    Device::Battery(Battery::new(rate, capacity, stored))
}

/// Builds a circuit registering the given devices in order.
pub fn circuit_with(devices: Vec<Device>) -> Circuit {
    let mut circuit = Circuit::new("TestCircuit");
    for device in devices {
        circuit.add_device(device);
    }
    circuit
}

/// Stored power of every battery on the circuit, in registration order.
pub fn stored_levels(circuit: &Circuit) -> Vec<f32> {
    circuit
        .devices()
        .iter()
        .filter_map(Device::as_battery)
        .map(Battery::stored_power)
        .collect()
}

/// Powered flag of every consumer on the circuit, in registration order.
pub fn powered_flags(circuit: &Circuit) -> Vec<bool> {
    circuit
        .devices()
        .iter()
        .filter_map(Device::as_consumer)
        .map(Consumer::is_powered)
        .collect()
}
