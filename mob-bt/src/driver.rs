use mob_core::{AgentId, TickContext, WorldMut};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BehaviorTree, NodeState};

/// Fixed-interval throttling configuration for an [`AgentDriver`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Seconds between tree evaluations, independent of frame rate.
    pub update_interval: f32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            update_interval: 0.1,
        }
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("update interval must be finite and positive, got {0}")]
    InvalidUpdateInterval(f32),
}

/// Owns one runtime tree instance for one agent and throttles its ticking.
///
/// The host loop calls [`advance`](Self::advance) once per frame with the
/// frame's delta time; the driver accumulates it and evaluates the tree at
/// most once per call, whenever a full update interval has elapsed.
/// Remainder time is carried over, never dropped, so decision rate stays
/// independent of frame rate.
pub struct AgentDriver<W>
where
    W: WorldMut + 'static,
{
    agent: W::Agent,
    tree: BehaviorTree<W>,
    config: DriverConfig,
    accumulator: f32,
    clock: f64,
    tick: u64,
    last: NodeState,
}

impl<W> AgentDriver<W>
where
    W: WorldMut + 'static,
{
    /// Deep-clone `template` into an owned runtime instance for `agent`.
    ///
    /// The template is never mutated by this driver; many drivers may be
    /// created from the same template without sharing any node state.
    pub fn new(
        agent: W::Agent,
        template: &BehaviorTree<W>,
        config: DriverConfig,
    ) -> Result<Self, DriverError> {
        if !config.update_interval.is_finite() || config.update_interval <= 0.0 {
            return Err(DriverError::InvalidUpdateInterval(config.update_interval));
        }

        Ok(Self {
            agent,
            tree: template.clone(),
            config,
            accumulator: 0.0,
            clock: 0.0,
            tick: 0,
            last: NodeState::Running,
        })
    }

    pub fn agent(&self) -> W::Agent {
        self.agent
    }

    pub fn config(&self) -> DriverConfig {
        self.config
    }

    pub fn tree(&self) -> &BehaviorTree<W> {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut BehaviorTree<W> {
        &mut self.tree
    }

    /// State reported by the most recent tree tick.
    pub fn last_state(&self) -> NodeState {
        self.last
    }

    /// Advance by one frame of `dt` seconds.
    ///
    /// Evaluates the tree at most once; returns the tick's result when one
    /// happened, `None` when the interval has not elapsed yet or the world
    /// is paused.
    pub fn advance(&mut self, dt: f32, world: &mut W) -> Option<NodeState> {
        if world.is_paused() {
            return None;
        }

        let dt = dt.max(0.0);
        self.accumulator += dt;
        self.clock += f64::from(dt);

        // Tolerance absorbs float drift when frame deltas sum to an exact
        // multiple of the interval (e.g. ten 0.03s frames against 0.1s).
        const TOLERANCE: f32 = 1e-5;
        if self.accumulator + TOLERANCE < self.config.update_interval {
            return None;
        }
        self.accumulator = (self.accumulator - self.config.update_interval).max(0.0);

        self.tick += 1;
        let ctx = TickContext {
            tick: self.tick,
            dt_seconds: self.config.update_interval,
            time_seconds: self.clock,
        };
        self.last = self.tree.update(&ctx, self.agent, world);
        Some(self.last)
    }

    /// Reinitialize the owned tree instance and the frame accumulator.
    ///
    /// The simulation clock keeps running; only evaluation state is
    /// discarded.
    pub fn reset(&mut self) {
        self.tree.reset();
        self.accumulator = 0.0;
        self.last = NodeState::Running;
    }
}

/// Advance all drivers for one frame, in stable agent order.
///
/// Agents tick sequentially within the frame: effects one agent applies
/// through the world are visible to agents ticked after it. Sorting by
/// `stable_id` keeps that ordering deterministic across runs.
pub fn advance_all<W>(dt: f32, world: &mut W, drivers: &mut [AgentDriver<W>])
where
    W: WorldMut + 'static,
{
    drivers.sort_by_key(|driver| driver.agent.stable_id());
    for driver in drivers.iter_mut() {
        driver.advance(dt, world);
    }
}
