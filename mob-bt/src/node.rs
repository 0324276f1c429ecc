use mob_core::{TickContext, WorldMut};

use crate::NodeState;

/// Owned, type-erased tree node.
pub type BoxNode<W> = Box<dyn Node<W>>;

/// Structural kind of a node.
///
/// Together with [`Node::children`] and [`Node::last_state`] this forms the
/// minimal query surface tooling needs to draw a tree; the engine exposes
/// nothing reflection-based beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Selector,
    Sequence,
    Parallel,
    Inverter,
    Repeater,
    Cooldown,
    Succeeder,
    Condition,
    Action,
}

/// A behavior tree node.
///
/// Nodes are evaluated at most once per tick, depth-first, synchronously and
/// non-reentrantly. All state that must survive between ticks (iteration
/// counters, completion timestamps, the last reported result) lives in node
/// instance fields.
pub trait Node<W>: 'static
where
    W: WorldMut + 'static,
{
    /// Evaluate this node on behalf of `agent`.
    ///
    /// Returns [`NodeState::Running`] if the node's unit of work is not
    /// finished this tick, `Success`/`Failure` when it concludes.
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState;

    /// Reinitialize this node and all descendants to `Running`, clearing any
    /// internal counters and timers.
    ///
    /// Called by an enclosing node when it discards an in-progress subtree
    /// (e.g. a completed [`Repeater`](crate::Repeater) iteration).
    fn reset(&mut self);

    /// Deep-copy this subtree into fresh owned nodes.
    ///
    /// The copy is structurally identical but its mutable state is fully
    /// independent: mutating the clone must never affect the source. This is
    /// how a shared template graph becomes a per-agent runtime instance.
    fn clone_node(&self) -> BoxNode<W>;

    /// Structural kind, for tooling.
    fn kind(&self) -> NodeKind;

    /// The state reported by the most recent evaluation, or `Running` before
    /// the first evaluation and after a reset.
    fn last_state(&self) -> NodeState;

    /// Child nodes in evaluation order. Empty for leaves.
    fn children(&self) -> &[BoxNode<W>] {
        &[]
    }
}

impl<W> Clone for BoxNode<W>
where
    W: WorldMut + 'static,
{
    fn clone(&self) -> Self {
        self.clone_node()
    }
}
