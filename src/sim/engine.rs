//! Simulation engine driving circuit ticks and recording results.

use super::circuit::Circuit;
use super::clock::Clock;
use super::types::TickResult;

/// Owns a circuit and drives a fixed number of ticks against it.
///
/// The engine observes circuit state before and after each
/// `update_power()` call and reconstructs the tick's power flows from the
/// balance identities: `consumed` is the demand of powered consumers,
/// generation covers consumption first, and the stored-energy delta plus
/// the battery-covered part gives the charged amount. The circuit itself
/// stays a pull-model core with no return values.
pub struct Engine {
    circuit: Circuit,
    ticks: usize,
}

impl Engine {
    /// Creates an engine that will run `ticks` ticks over `circuit`.
    pub fn new(circuit: Circuit, ticks: usize) -> Self {
        Self { circuit, ticks }
    }

    /// Executes one tick and returns its record.
    pub fn step(&mut self, tick: usize) -> TickResult {
        let generation = self.circuit.total_generation();
        let discharge_capacity = self.circuit.discharge_capacity();
        let supply = generation + discharge_capacity;
        let demand = self.circuit.total_demand();
        let stored_before = self.circuit.total_stored();

        self.circuit.update_power();

        let consumed = self.circuit.consumed_power();
        let powered_consumers = self.circuit.powered_count();
        let unpowered_consumers = self.circuit.consumer_count() - powered_consumers;
        let stored_total = self.circuit.total_stored();

        let from_generation = generation.min(consumed);
        let from_batteries = consumed - from_generation;
        let charged = (stored_total - stored_before + from_batteries).max(0.0);

        TickResult {
            tick,
            generation,
            discharge_capacity,
            supply,
            demand,
            consumed,
            from_generation,
            from_batteries,
            charged,
            powered_consumers,
            unpowered_consumers,
            stored_total,
        }
    }

    /// Executes all configured ticks and returns the complete record vector.
    pub fn run(&mut self) -> Vec<TickResult> {
        let mut results = Vec::with_capacity(self.ticks);
        let mut clock = Clock::new(self.ticks);
        clock.run(|tick| results.push(self.step(tick)));
        results
    }

    /// Returns a reference to the circuit (for post-run state queries).
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Number of ticks this engine is configured to run.
    pub fn ticks(&self) -> usize {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::{Battery, Consumer, Device, Generator};

    fn small_circuit() -> Circuit {
        let mut circuit = Circuit::new("Test");
        circuit.add_device(Device::Generator(Generator::new(9.0)));
        circuit.add_device(Device::Consumer(Consumer::new(4.0)));
        circuit.add_device(Device::Battery(Battery::new(5.0, 50.0, 10.0)));
        circuit
    }

    #[test]
    fn run_produces_one_result_per_tick() {
        let mut engine = Engine::new(small_circuit(), 6);
        let results = engine.run();
        assert_eq!(results.len(), 6);
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.tick, i);
        }
    }

    #[test]
    fn step_reconstructs_the_balance() {
        let mut engine = Engine::new(small_circuit(), 1);
        let r = engine.step(0);

        assert_eq!(r.generation, 9.0);
        assert_eq!(r.discharge_capacity, 5.0);
        assert_eq!(r.supply, 14.0);
        assert_eq!(r.demand, 4.0);
        assert_eq!(r.consumed, 4.0);
        assert_eq!(r.from_generation, 4.0);
        assert_eq!(r.from_batteries, 0.0);
        // Leftover 5 charges the battery, capped by its rate.
        assert_eq!(r.charged, 5.0);
        assert_eq!(r.powered_consumers, 1);
        assert_eq!(r.unpowered_consumers, 0);
        assert_eq!(r.stored_total, 15.0);
    }

    #[test]
    fn step_records_battery_cover_under_shortfall() {
        let mut circuit = Circuit::new("Test");
        circuit.add_device(Device::Generator(Generator::new(3.0)));
        circuit.add_device(Device::Consumer(Consumer::new(5.0)));
        circuit.add_device(Device::Battery(Battery::new(5.0, 50.0, 10.0)));

        let mut engine = Engine::new(circuit, 1);
        let r = engine.step(0);

        assert_eq!(r.consumed, 5.0);
        assert_eq!(r.from_generation, 3.0);
        assert_eq!(r.from_batteries, 2.0);
        assert_eq!(r.charged, 0.0);
        assert_eq!(r.stored_total, 8.0);
    }

    #[test]
    fn zero_tick_engine_runs_nothing() {
        let mut engine = Engine::new(small_circuit(), 0);
        assert!(engine.run().is_empty());
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn circuit_state_is_observable_after_run() {
        let mut engine = Engine::new(small_circuit(), 2);
        engine.run();
        assert_eq!(engine.circuit().powered_count(), 1);
        assert_eq!(engine.circuit().total_stored(), 20.0);
    }
}
