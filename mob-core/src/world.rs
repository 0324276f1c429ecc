use core::fmt::Debug;

/// Stable identifier for an agent.
///
/// Deterministic simulation requires:
/// - stable ordering (`Ord`) so multi-agent ticking happens in a fixed order
/// - a stable numeric ID (`stable_id`) for facade lookups and logs
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

/// Read-only world access.
///
/// The core crate intentionally does not prescribe which queries a world must
/// expose; specific subsystems (combat, perception, etc.) should define
/// extension traits.
pub trait WorldView {
    type Agent: AgentId;

    /// Whether the simulation is currently paused.
    ///
    /// Drivers neither accumulate time nor tick while the world reports
    /// paused.
    fn is_paused(&self) -> bool {
        false
    }
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
