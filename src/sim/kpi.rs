//! Post-hoc KPI computation from tick results.

use std::fmt;

use super::types::TickResult;

/// Aggregate key performance indicators derived from a complete run.
///
/// Computed post-hoc from `Vec<TickResult>` to keep tick data and reported
/// metrics consistent.
#[derive(Debug, Clone)]
pub struct KpiReport {
    /// Total energy generated across the run.
    pub total_generation: f32,
    /// Total demand served across the run.
    pub total_consumed: f32,
    /// Total demand that went unserved (sum of per-tick shortfall).
    pub unserved_demand: f32,
    /// Total battery energy throughput (charged + discharged).
    pub battery_throughput: f32,
    /// Battery equivalent full cycles (throughput / 2 * capacity).
    pub battery_equivalent_full_cycles: f32,
    /// Number of ticks with at least one unpowered consumer.
    pub brownout_tick_count: usize,
    /// Largest supply pool observed in a single tick.
    pub peak_supply: f32,
    /// Total stored energy after the final tick.
    pub final_stored: f32,
}

impl KpiReport {
    /// Computes all KPIs from the complete tick record vector.
    ///
    /// `battery_capacity` is the summed capacity of all batteries on the
    /// circuit, used for the equivalent-full-cycle figure.
    pub fn from_results(results: &[TickResult], battery_capacity: f32) -> Self {
        if results.is_empty() {
            return Self {
                total_generation: 0.0,
                total_consumed: 0.0,
                unserved_demand: 0.0,
                battery_throughput: 0.0,
                battery_equivalent_full_cycles: 0.0,
                brownout_tick_count: 0,
                peak_supply: 0.0,
                final_stored: 0.0,
            };
        }

        let mut generation_sum = 0.0_f32;
        let mut consumed_sum = 0.0_f32;
        let mut unserved_sum = 0.0_f32;
        let mut throughput = 0.0_f32;
        let mut peak_supply = 0.0_f32;
        let mut brownouts = 0_usize;

        for r in results {
            generation_sum += r.generation;
            consumed_sum += r.consumed;
            unserved_sum += (r.demand - r.consumed).max(0.0);
            throughput += r.charged + r.from_batteries;
            peak_supply = peak_supply.max(r.supply);
            if r.unpowered_consumers > 0 {
                brownouts += 1;
            }
        }

        let cycles = if battery_capacity > 0.0 {
            throughput / (2.0 * battery_capacity)
        } else {
            0.0
        };

        Self {
            total_generation: generation_sum,
            total_consumed: consumed_sum,
            unserved_demand: unserved_sum,
            battery_throughput: throughput,
            battery_equivalent_full_cycles: cycles,
            brownout_tick_count: brownouts,
            peak_supply,
            final_stored: results[results.len() - 1].stored_total,
        }
    }
}

impl fmt::Display for KpiReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- KPI Report ---")?;
        writeln!(f, "Total generation:     {:.2}", self.total_generation)?;
        writeln!(f, "Total served:         {:.2}", self.total_consumed)?;
        writeln!(f, "Unserved demand:      {:.2}", self.unserved_demand)?;
        writeln!(
            f,
            "Battery throughput:   {:.2} ({:.2} equiv. cycles)",
            self.battery_throughput, self.battery_equivalent_full_cycles
        )?;
        writeln!(f, "Brownout ticks:       {}", self.brownout_tick_count)?;
        writeln!(f, "Peak supply:          {:.2}", self.peak_supply)?;
        write!(f, "Final stored:         {:.2}", self.final_stored)
    }
}
