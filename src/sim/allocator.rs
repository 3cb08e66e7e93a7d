//! Max-min fair-share allocation over capped recipients.

/// Tolerance for floating comparisons in the water-filling loop.
///
/// Without it, rounding in `remaining / |active|` can oscillate a recipient
/// across the finalization threshold. Equality counts as *not* less: a
/// recipient whose capacity exactly matches the share stays in the pool.
pub const EPSILON: f32 = 1e-7;

/// Distributes `total` across recipients with per-recipient capacities
/// using max-min fairness (progressive water-filling).
///
/// The returned allocations satisfy, for `x = max(total, 0)`:
/// - `0 <= a[i] <= capacities[i]` for every recipient,
/// - `sum(a) == min(x, sum(capacities))`,
/// - no recipient below its capacity can be raised without lowering a
///   recipient receiving no more than it.
///
/// Each pass computes an equal share over the still-active recipients and
/// finalizes those whose capacity falls short of it; if a pass finalizes
/// nobody, every remaining recipient takes the share and the loop stops.
/// At least one recipient is finalized per continuing pass, so the loop
/// runs at most `capacities.len()` times.
///
/// Negative capacities are treated as zero. An empty recipient set or a
/// non-positive total yields an all-zero allocation.
pub fn fair_share(total: f32, capacities: &[f32]) -> Vec<f32> {
    let mut allocations = vec![0.0_f32; capacities.len()];
    let mut remaining = total.max(0.0);
    let mut active: Vec<usize> = (0..capacities.len()).collect();

    while !active.is_empty() && remaining > EPSILON {
        let share = remaining / active.len() as f32;
        let mut finalized = false;

        active.retain(|&i| {
            let cap = capacities[i].max(0.0);
            if cap < share - EPSILON {
                allocations[i] = cap;
                remaining -= cap;
                finalized = true;
                false
            } else {
                true
            }
        });

        if !finalized {
            for &i in &active {
                allocations[i] = share;
            }
            break;
        }
    }

    allocations
}
