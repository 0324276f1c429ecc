//! Reference leaves built on the combat facade.
//!
//! Any missing facade answer (unknown positions, no player) degrades to
//! `Failure`; these nodes never panic during evaluation.

use mob_bt::{BoxNode, Node, NodeKind, NodeState};
use mob_core::TickContext;

use crate::CombatWorldMut;

/// Condition: the owning agent is within `range` of the player.
#[derive(Debug, Clone)]
pub struct PlayerInRange {
    range: f32,
    last: NodeState,
}

impl PlayerInRange {
    pub fn new(range: f32) -> Self {
        Self {
            range,
            last: NodeState::Running,
        }
    }
}

impl<W> Node<W> for PlayerInRange
where
    W: CombatWorldMut + 'static,
{
    fn evaluate(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        self.last = match (world.enemy_position(agent), world.player_position()) {
            (Some(from), Some(to)) if world.is_in_range(from, to, self.range) => {
                NodeState::Success
            }
            _ => NodeState::Failure,
        };
        self.last
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(self.clone())
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Condition
    }

    fn last_state(&self) -> NodeState {
        self.last
    }
}

/// Condition: player health is known and above zero.
#[derive(Debug, Clone)]
pub struct PlayerAlive {
    last: NodeState,
}

impl PlayerAlive {
    pub fn new() -> Self {
        Self {
            last: NodeState::Running,
        }
    }
}

impl Default for PlayerAlive {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Node<W> for PlayerAlive
where
    W: CombatWorldMut + 'static,
{
    fn evaluate(&mut self, _ctx: &TickContext, _agent: W::Agent, world: &mut W) -> NodeState {
        let alive = world
            .player_health_ratio()
            .map(|ratio| ratio > 0.0)
            .unwrap_or(false);
        self.last = if alive {
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
        Box::new(self.clone())
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Condition
    }

    fn last_state(&self) -> NodeState {
        self.last
    }
}

/// Action: step toward the player each tick until within arrival distance.
///
/// Reports `Running` while closing in, `Success` on arrival, `Failure` when
/// either position is unknown. One movement step per tick, scaled by the
/// tick's delta time.
#[derive(Debug, Clone)]
pub struct ChasePlayer {
    speed: f32,
    arrival_distance: f32,
    last: NodeState,
}

impl ChasePlayer {
    pub fn new(speed: f32, arrival_distance: f32) -> Self {
        Self {
            speed,
            arrival_distance,
            last: NodeState::Running,
        }
    }
}

impl<W> Node<W> for ChasePlayer
where
    W: CombatWorldMut + 'static,
{
    fn evaluate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        let (from, to) = match (world.enemy_position(agent), world.player_position()) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                self.last = NodeState::Failure;
                return self.last;
            }
        };

        self.last = if from.distance(to) <= self.arrival_distance {
            NodeState::Success
        } else {
            let step = self.speed.max(0.0) * ctx.dt_seconds.max(0.0);
            world.move_agent_toward(agent, to, step);
            NodeState::Running
        };
        self.last
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(self.clone())
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }

    fn last_state(&self) -> NodeState {
        self.last
    }
}

/// Action: damage the nearest living enemy within `range`.
///
/// Fails when there is no target in range or damage dealing is not
/// currently permitted for the pair.
#[derive(Debug, Clone)]
pub struct AttackNearestEnemy {
    amount: f32,
    range: f32,
    last: NodeState,
}

impl AttackNearestEnemy {
    pub fn new(amount: f32, range: f32) -> Self {
        Self {
            amount,
            range,
            last: NodeState::Running,
        }
    }
}

impl<W> Node<W> for AttackNearestEnemy
where
    W: CombatWorldMut + 'static,
{
    fn evaluate(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) -> NodeState {
        self.last = NodeState::Failure;

        let Some(from) = world.enemy_position(agent) else {
            return self.last;
        };
        let Some(target) = world.nearest_enemy(from) else {
            return self.last;
        };
        if !world.is_enemy_alive(target) {
            return self.last;
        }
        let Some(target_pos) = world.enemy_position(target) else {
            return self.last;
        };
        if !world.is_in_range(from, target_pos, self.range) {
            return self.last;
        }
        if !world.can_deal_damage(agent, target) {
            return self.last;
        }

        world.deal_damage(agent, target, self.amount);
        self.last = NodeState::Success;
        self.last
    }

    fn reset(&mut self) {
        self.last = NodeState::Running;
    }

    fn clone_node(&self) -> BoxNode<W> {
        Box::new(self.clone())
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }

    fn last_state(&self) -> NodeState {
        self.last
    }
}
