//! Randomized invariant checks over seeded circuit populations.

mod common;

use circuit_sim::devices::Device;
use circuit_sim::sim::allocator::{EPSILON, fair_share};
use circuit_sim::sim::circuit::Circuit;
use circuit_sim::sim::engine::Engine;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{battery, consumer, generator, powered_flags};

/// Builds a random circuit with up to a few devices of each role.
fn random_circuit(rng: &mut StdRng) -> Circuit {
    let mut circuit = Circuit::new("RandomCircuit");
    let device_count = rng.random_range(1..=12);
    for _ in 0..device_count {
        match rng.random_range(0..3) {
            0 => circuit.add_device(generator(rng.random_range(0.0..10.0))),
            1 => circuit.add_device(consumer(rng.random_range(0.0..8.0))),
            _ => {
                let capacity = rng.random_range(1.0..40.0);
                let stored = rng.random_range(0.0..capacity);
                let mut device = battery(rng.random_range(0.5..6.0), capacity, stored);
                if rng.random_range(0..5) == 0
                    && let Some(b) = device.as_battery_mut()
                {
                    b.set_on(false);
                }
                circuit.add_device(device);
            }
        }
    }
    circuit
}

#[test]
fn allocator_conservation_and_caps_hold_for_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let n = rng.random_range(0..10);
        let caps: Vec<f32> = (0..n).map(|_| rng.random_range(0.0..10.0)).collect();
        let total = rng.random_range(0.0..40.0);

        let allocations = fair_share(total, &caps);
        assert_eq!(allocations.len(), caps.len());

        let allocated: f32 = allocations.iter().sum();
        let cap_sum: f32 = caps.iter().sum();
        let expected = total.min(cap_sum);
        assert!(
            (allocated - expected).abs() < 1e-3,
            "conservation violated: allocated {allocated}, expected {expected}"
        );

        for (a, c) in allocations.iter().zip(caps.iter()) {
            assert!(*a >= -EPSILON);
            assert!(*a <= c + 1e-4, "allocation {a} exceeds capacity {c}");
        }
    }
}

#[test]
fn allocator_is_max_min_fair_for_random_inputs() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let n = rng.random_range(1..8);
        let caps: Vec<f32> = (0..n).map(|_| rng.random_range(0.1..10.0)).collect();
        let total = rng.random_range(0.0..30.0);
        let allocations = fair_share(total, &caps);

        // A recipient below its capacity may only be raised by taking from
        // one receiving no more than it; equivalently, every recipient
        // below capacity must be at the common (maximal) share level.
        let below_cap_max = allocations
            .iter()
            .zip(caps.iter())
            .filter(|(a, c)| **a < **c - 1e-3)
            .map(|(a, _)| *a)
            .fold(f32::MIN, f32::max);
        if below_cap_max > f32::MIN {
            for (a, c) in allocations.iter().zip(caps.iter()) {
                // Nobody capped below the unfilled recipients' level.
                assert!(
                    *a >= below_cap_max.min(*c) - 1e-3,
                    "recipient at {a} (cap {c}) undercuts share level {below_cap_max}"
                );
            }
        }
    }
}

#[test]
fn circuit_invariants_hold_over_random_runs() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..100 {
        let circuit = random_circuit(&mut rng);
        let ticks = rng.random_range(1..20);
        let mut engine = Engine::new(circuit, ticks);
        let results = engine.run();

        for r in &results {
            assert!((r.consumed - (r.from_generation + r.from_batteries)).abs() < 1e-3);
            assert!(r.consumed <= r.supply + 1e-3);
            assert!(r.from_batteries >= -1e-4);
        }

        for device in engine.circuit().devices() {
            if let Some(b) = device.as_battery() {
                assert!(b.stored_power() >= 0.0, "stored power went negative");
                assert!(
                    b.stored_power() <= b.max_capacity + 1e-4,
                    "stored power exceeded capacity"
                );
            }
        }
    }
}

#[test]
fn ticks_are_deterministic_for_identical_random_circuits() {
    for seed in 0..20 {
        let mut rng_a = StdRng::seed_from_u64(seed);
        let mut rng_b = StdRng::seed_from_u64(seed);
        let mut a = random_circuit(&mut rng_a);
        let mut b = random_circuit(&mut rng_b);

        for _ in 0..8 {
            a.update_power();
            b.update_power();
        }

        assert_eq!(powered_flags(&a), powered_flags(&b));
        let stored_a: Vec<f32> = a
            .devices()
            .iter()
            .filter_map(Device::as_battery)
            .map(|bat| bat.stored_power())
            .collect();
        let stored_b: Vec<f32> = b
            .devices()
            .iter()
            .filter_map(Device::as_battery)
            .map(|bat| bat.stored_power())
            .collect();
        assert_eq!(stored_a, stored_b);
    }
}
