/// A bounded tick counter standing in for the external scheduler.
///
/// The core has no internal timer; something outside requests each
/// recomputation. `Clock` drives a fixed number of ticks, step-by-step or
/// through a closure run to completion.
///
/// # Examples
///
/// ```
/// use circuit_sim::sim::clock::Clock;
///
/// let mut clock = Clock::new(3);
/// let mut ticks = Vec::new();
///
/// clock.run(|tick| ticks.push(tick));
/// assert_eq!(ticks, vec![0, 1, 2]);
/// ```
pub struct Clock {
    /// Next tick to hand out.
    current: usize,
    /// Total ticks to run.
    total: usize,
}

impl Clock {
    /// Creates a clock that will hand out `total` ticks.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Advances the clock by one tick.
    ///
    /// Returns the tick index (starting from 0), or `None` once all ticks
    /// have been handed out.
    pub fn tick(&mut self) -> Option<usize> {
        if self.current < self.total {
            let tick = self.current;
            self.current += 1;
            Some(tick)
        } else {
            None
        }
    }

    /// Calls `f` with each remaining tick index until the clock completes.
    pub fn run(&mut self, mut f: impl FnMut(usize)) {
        while let Some(tick) = self.tick() {
            f(tick);
        }
    }
}
