//! Decorator nodes: wrap exactly one owned child.
//!
//! Decorators take their child at construction, so an incomplete decorator
//! cannot exist inside a live tree; completeness is validated at attach time
//! by the type system rather than checked on every evaluation.

use core::slice;

use mob_core::{TickContext, WorldMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BoxNode, Node, NodeKind, NodeState};

/// Swaps the child's `Success` and `Failure`; `Running` passes through.
pub struct Inverter<W>
where
    W: WorldMut + 'static,
{
    child: BoxNode<W>,
    last: NodeState,
}

impl<W> Inverter<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: BoxNode<W>) -> Self {
        Self {
            child,
            last: NodeState::Running,
        }
    }
}

impl<W> Node<W> for Inverter<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        self.last = self.child.evaluate(ctx, agent, world).invert();
        self.last
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
        self.child.reset();
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(Self {
            child: self.child.clone(),
            last: self.last,
        })
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Inverter
    }

    fn last_state(&self) -> NodeState {
        self.last
    }

    fn children(&self) -> &[BoxNode<W>] {
        slice::from_ref(&self.child)
    }
}

/// Iteration bound for a [`Repeater`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Repeat {
    /// Complete after the child has finished this many times.
    Times(u32),
    /// Never complete.
    Forever,
}

/// Re-invokes its child until it has completed a configured number of times.
///
/// Each time the child finishes (`Success` or `Failure` alike) the repeater
/// bumps its counter and resets the child for the next iteration. It reports
/// `Running` until the bound is reached, then `Success`, and stays completed
/// (keeps reporting `Success` without touching the child) until the repeater
/// itself is reset. [`Repeat::Forever`] never completes.
pub struct Repeater<W>
where
    W: WorldMut + 'static,
{
    child: BoxNode<W>,
    repeat: Repeat,
    completed_runs: u32,
    done: bool,
    last: NodeState,
}

impl<W> Repeater<W>
where
    W: WorldMut + 'static,
{
    pub fn new(repeat: Repeat, child: BoxNode<W>) -> Self {
        Self {
            child,
            repeat,
            completed_runs: 0,
            done: false,
            last: NodeState::Running,
        }
    }

    /// Number of child completions observed since the last reset.
    pub fn completed_runs(&self) -> u32 {
        self.completed_runs
    }
}

impl<W> Node<W> for Repeater<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        if self.done {
            self.last = NodeState::Success;
            return self.last;
        }

        // Times(0) completes without ever invoking the child.
        if matches!(self.repeat, Repeat::Times(limit) if self.completed_runs >= limit) {
            self.done = true;
            self.last = NodeState::Success;
            return self.last;
        }

        let state = self.child.evaluate(ctx, agent, world);
        self.last = if state.is_complete() {
            self.completed_runs = self.completed_runs.saturating_add(1);
            self.child.reset();
            match self.repeat {
                Repeat::Times(limit) if self.completed_runs >= limit => {
                    self.done = true;
                    NodeState::Success
                }
                _ => NodeState::Running,
            }
        } else {
            NodeState::Running
        };
        self.last
    }

    fn reset(&mut self) {
        self.completed_runs = 0;
        self.done = false;
        self.last = NodeState::Running;
        self.child.reset();
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(Self {
            child: self.child.clone(),
            repeat: self.repeat,
            completed_runs: self.completed_runs,
            done: self.done,
            last: self.last,
        })
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Repeater
    }

    fn last_state(&self) -> NodeState {
        self.last
    }

    fn children(&self) -> &[BoxNode<W>] {
        slice::from_ref(&self.child)
    }
}

/// Gates its child behind a minimum delay since the child's last completion.
///
/// While `time_seconds - last_completion < cooldown_seconds` the decorator
/// returns `Failure` without invoking the child. Otherwise it delegates and,
/// when the child completes (`Success` or `Failure`, not `Running`), records
/// the completion time. Before the first completion the child is always
/// invoked.
pub struct Cooldown<W>
where
    W: WorldMut + 'static,
{
    child: BoxNode<W>,
    cooldown_seconds: f32,
    last_completion: Option<f64>,
    last: NodeState,
}

impl<W> Cooldown<W>
where
    W: WorldMut + 'static,
{
    pub fn new(cooldown_seconds: f32, child: BoxNode<W>) -> Self {
        Self {
            child,
            cooldown_seconds: cooldown_seconds.max(0.0),
            last_completion: None,
            last: NodeState::Running,
        }
    }

    /// Simulation time of the child's most recent completion, if any.
    pub fn last_completion(&self) -> Option<f64> {
        self.last_completion
    }
}

impl<W> Node<W> for Cooldown<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        if let Some(completed_at) = self.last_completion {
            if ctx.time_seconds - completed_at < f64::from(self.cooldown_seconds) {
                self.last = NodeState::Failure;
                return self.last;
            }
        }

        let state = self.child.evaluate(ctx, agent, world);
        if state.is_complete() {
            self.last_completion = Some(ctx.time_seconds);
        }
        self.last = state;
        self.last
    }

    fn reset(&mut self) {
        self.last_completion = None;
        self.last = NodeState::Running;
        self.child.reset();
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(Self {
            child: self.child.clone(),
            cooldown_seconds: self.cooldown_seconds,
            last_completion: self.last_completion,
            last: self.last,
        })
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Cooldown
    }

    fn last_state(&self) -> NodeState {
        self.last
    }

    fn children(&self) -> &[BoxNode<W>] {
        slice::from_ref(&self.child)
    }
}

/// Always evaluates its child (for side effects) but always reports
/// `Success`, regardless of the child's outcome.
///
/// Useful to keep an optional branch from blocking a [`Sequence`](crate::Sequence).
pub struct Succeeder<W>
where
    W: WorldMut + 'static,
{
    child: BoxNode<W>,
    last: NodeState,
}

impl<W> Succeeder<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: BoxNode<W>) -> Self {
        Self {
            child,
            last: NodeState::Running,
        }
    }
}

impl<W> Node<W> for Succeeder<W>
where
    W: WorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        let _ = self.child.evaluate(ctx, agent, world);
        self.last = NodeState::Success;
        self.last
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
        self.child.reset();
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(Self {
            child: self.child.clone(),
            last: self.last,
        })
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Succeeder
    }

    fn last_state(&self) -> NodeState {
        self.last
    }

    fn children(&self) -> &[BoxNode<W>] {
        slice::from_ref(&self.child)
    }
}
