/// Max-min fair-share (water-filling) allocation.
pub mod allocator;
/// Circuit device registry and the per-tick power update.
pub mod circuit;
/// Tick counter driving engine runs.
pub mod clock;
pub mod engine;
pub mod kpi;
pub mod types;
