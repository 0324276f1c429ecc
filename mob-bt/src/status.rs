#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tri-state result of one node evaluation.
///
/// `Running` is an ordinary return value, not a suspended continuation: a
/// node that has more work to do reports `Running` and is simply evaluated
/// again on a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeState {
    Running,
    Success,
    Failure,
}

impl NodeState {
    /// Whether this state concludes the node's unit of work.
    pub fn is_complete(self) -> bool {
        !matches!(self, NodeState::Running)
    }

    /// Swap `Success` and `Failure`; `Running` passes through unchanged.
    pub fn invert(self) -> Self {
        match self {
            NodeState::Running => NodeState::Running,
            NodeState::Success => NodeState::Failure,
            NodeState::Failure => NodeState::Success,
        }
    }
}
