//! Composite nodes: combine an ordered list of owned children.
//!
//! Child order is significant — it encodes priority and evaluation order and
//! is never reordered by the engine. Composites carry no cross-tick cursor:
//! every tick re-walks the children from the left, so earlier (higher
//! priority) branches can preempt a running later branch.

use mob_core::{TickContext, WorldMut};

use crate::{BoxNode, Node, NodeKind, NodeState};

/// Evaluates children left-to-right until one does not fail (OR logic).
///
/// Returns the first `Success` or `Running` encountered; children after that
/// point are not evaluated this tick. Returns `Failure` only when every
/// child fails. An empty selector fails.
pub struct Selector<W>
where
    W: WorldMut + 'static,
{
    children: Vec<BoxNode<W>>,
    last: NodeState,
}

impl<W> Selector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<BoxNode<W>>) -> Self {
        Self {
            children,
            last: NodeState::Running,
        }
    }
}

impl<W> Node<W> for Selector<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        for child in self.children.iter_mut() {
            match child.evaluate(ctx, agent, world) {
                NodeState::Failure => continue,
                state => {
                    self.last = state;
                    return state;
                }
            }
        }

        self.last = NodeState::Failure;
        NodeState::Failure
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(Self {
            children: self.children.clone(),
            last: self.last,
        })
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Selector
    }

    fn last_state(&self) -> NodeState {
        self.last
    }

    fn children(&self) -> &[BoxNode<W>] {
        &self.children
    }
}

/// Evaluates children left-to-right until one fails (AND logic).
///
/// Returns `Failure` immediately on the first failing child. A `Running`
/// child does **not** stop the walk: all subsequent children are still
/// evaluated this tick, and the sequence reports `Running` if any child ran,
/// `Success` otherwise. An empty sequence succeeds.
pub struct Sequence<W>
where
    W: WorldMut + 'static,
{
    children: Vec<BoxNode<W>>,
    last: NodeState,
}

impl<W> Sequence<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<BoxNode<W>>) -> Self {
        Self {
            children,
            last: NodeState::Running,
        }
    }
}

impl<W> Node<W> for Sequence<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        let mut any_running = false;

        for child in self.children.iter_mut() {
            match child.evaluate(ctx, agent, world) {
                NodeState::Failure => {
                    self.last = NodeState::Failure;
                    return NodeState::Failure;
                }
                NodeState::Running => any_running = true,
                NodeState::Success => {}
            }
        }

        self.last = if any_running {
            NodeState::Running
        } else {
            NodeState::Success
        };
        self.last
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(Self {
            children: self.children.clone(),
            last: self.last,
        })
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Sequence
    }

    fn last_state(&self) -> NodeState {
        self.last
    }

    fn children(&self) -> &[BoxNode<W>] {
        &self.children
    }
}

/// Evaluates every child every tick, with no short-circuiting.
///
/// Successes and failures are tallied fresh each tick. The parallel stays
/// `Running` while any child is still running; once every child is complete
/// it reports `Success` iff strictly more children succeeded than failed.
pub struct Parallel<W>
where
    W: WorldMut + 'static,
{
    children: Vec<BoxNode<W>>,
    last: NodeState,
}

impl<W> Parallel<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<BoxNode<W>>) -> Self {
        Self {
            children,
            last: NodeState::Running,
        }
    }
}

impl<W> Node<W> for Parallel<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        let mut successes = 0usize;
        let mut failures = 0usize;

        for child in self.children.iter_mut() {
            match child.evaluate(ctx, agent, world) {
                NodeState::Success => successes += 1,
                NodeState::Failure => failures += 1,
                NodeState::Running => {}
            }
        }

        self.last = if successes + failures == self.children.len() {
            if successes > failures {
                NodeState::Success
            } else {
                NodeState::Failure
            }
        } else {
            NodeState::Running
        };
        self.last
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(Self {
            children: self.children.clone(),
            last: self.last,
        })
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Parallel
    }

    fn last_state(&self) -> NodeState {
        self.last
    }

    fn children(&self) -> &[BoxNode<W>] {
        &self.children
    }
}
