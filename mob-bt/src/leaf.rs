//! Leaf nodes: closure-backed conditions and actions.
//!
//! Stateful leaves (e.g. an action that follows a path across ticks) should
//! implement [`Node`] directly instead; these wrappers cover the common
//! stateless case.

use mob_core::{TickContext, WorldMut};

use crate::{BoxNode, Node, NodeKind, NodeState};

/// Pure predicate leaf: `Success` when the predicate holds, else `Failure`.
///
/// The predicate receives a shared world borrow, so it cannot mutate game
/// state.
pub struct Condition<F> {
    predicate: F,
    last: NodeState,
}

impl<F> Condition<F> {
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            last: NodeState::Running,
        }
    }
}

impl<F, W> Node<W> for Condition<F>
where
    F: Fn(&TickContext, W::Agent, &W) -> bool + Clone + 'static,
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        self.last = if (self.predicate)(ctx, agent, &*world) {
            NodeState::Success
        } else {
            NodeState::Failure
        };
        self.last
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(Self {
            predicate: self.predicate.clone(),
            last: self.last,
        })
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Condition
    }

    fn last_state(&self) -> NodeState {
        self.last
    }
}

/// World-mutating leaf: delegates to a closure that may report `Running`
/// across consecutive ticks.
///
/// The evaluation protocol guarantees at most one invocation per tick, so a
/// well-behaved closure never duplicates side effects within a tick.
pub struct Action<F> {
    effect: F,
    last: NodeState,
}

impl<F> Action<F> {
    pub fn new(effect: F) -> Self {
        Self {
            effect,
            last: NodeState::Running,
        }
    }
}

impl<F, W> Node<W> for Action<F>
where
    F: FnMut(&TickContext, W::Agent, &mut W) -> NodeState + Clone + 'static,
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        self.last = (self.effect)(ctx, agent, world);
        self.last
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(Self {
            effect: self.effect.clone(),
            last: self.last,
        })
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }

    fn last_state(&self) -> NodeState {
        self.last
    }
}
