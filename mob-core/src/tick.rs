/// Per-tick evaluation context handed to every node.
///
/// One `TickContext` is built by the agent driver for each tree tick. Nodes
/// never read a wall clock themselves: `time_seconds` is sampled once per
/// tick, so every timer in the tree observes the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Monotonic tick counter of the owning driver.
    pub tick: u64,
    /// Seconds of simulated time covered by this tick.
    pub dt_seconds: f32,
    /// Accumulated simulation clock at the start of this tick.
    pub time_seconds: f64,
}
