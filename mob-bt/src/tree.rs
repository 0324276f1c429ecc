use mob_core::{TickContext, WorldMut};

use crate::{BoxNode, NodeState};

/// Container owning at most one root node.
///
/// A tree carries no runtime identity of its own: the owning agent is
/// supplied externally on every tick. A tree authored once (the template)
/// is cloned into an independent runtime instance per agent; `Clone` here is
/// the deep copy performed by [`Node::clone_node`](crate::Node::clone_node).
pub struct BehaviorTree<W>
where
    W: WorldMut + 'static,
{
    root: Option<BoxNode<W>>,
}

impl<W> BehaviorTree<W>
where
    W: WorldMut + 'static,
{
    /// An empty tree; updating it is vacuously `Failure`.
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: BoxNode<W>) -> Self {
        Self { root: Some(root) }
    }

    pub fn set_root(&mut self, root: BoxNode<W>) {
        self.root = Some(root);
    }

    pub fn take_root(&mut self) -> Option<BoxNode<W>> {
        self.root.take()
    }

    pub fn root(&self) -> Option<&BoxNode<W>> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut BoxNode<W>> {
        self.root.as_mut()
    }

    /// One evaluation pass: delegates to the root node.
    ///
    /// With no root set this logs an advisory and returns `Failure` without
    /// side effects.
    pub fn update(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        match self.root.as_mut() {
            Some(root) => root.evaluate(ctx, agent, world),
            None => {
                tracing::debug!(tick = ctx.tick, "behavior tree has no root node");
                NodeState::Failure
            }
        }
    }

    /// Recursively reset the whole graph; no-op for an empty tree.
    pub fn reset(&mut self) {
        if let Some(root) = self.root.as_mut() {
            root.reset();
        }
    }

    /// Last state reported by the root, for visualization. `Failure` for an
    /// empty tree.
    pub fn last_state(&self) -> NodeState {
        self.root
            .as_ref()
            .map(|root| root.last_state())
            .unwrap_or(NodeState::Failure)
    }
}

impl<W> Default for BehaviorTree<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Clone for BehaviorTree<W>
where
    W: WorldMut + 'static,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}
