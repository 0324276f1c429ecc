use mob_core::{Vec2, WorldMut, WorldView};

/// Read-only combat queries.
///
/// Every query is total: unavailable state is reported as `None` / `false` /
/// an empty collection rather than a fault, so one broken agent never halts
/// evaluation of others.
pub trait CombatWorldView: WorldView {
    fn player_position(&self) -> Option<Vec2>;

    /// Current player health in `0.0..=1.0`, or `None` when unavailable.
    fn player_health_ratio(&self) -> Option<f32>;

    fn enemy_position(&self, agent: Self::Agent) -> Option<Vec2>;

    fn is_enemy_alive(&self, agent: Self::Agent) -> bool;

    /// All known enemy agents, in stable order.
    fn enemies(&self) -> Vec<Self::Agent>;

    /// Nearest living enemy to `from`, if any.
    fn nearest_enemy(&self, from: Vec2) -> Option<Self::Agent>;

    fn distance_between(&self, a: Vec2, b: Vec2) -> f32 {
        a.distance(b)
    }

    fn is_in_range(&self, from: Vec2, to: Vec2, range: f32) -> bool {
        self.distance_between(from, to) <= range
    }

    /// Whether `attacker` is currently allowed to damage `target` (line of
    /// sight, attack cooldowns, factions — implementation defined).
    fn can_deal_damage(&self, attacker: Self::Agent, target: Self::Agent) -> bool;
}

/// Combat effects. Writes take effect immediately and are visible to agents
/// ticked later in the same frame.
pub trait CombatWorldMut: WorldMut + CombatWorldView {
    /// Fire-and-forget damage application.
    fn deal_damage(&mut self, attacker: Self::Agent, target: Self::Agent, amount: f32);

    /// Move `agent` up to `max_step` toward `target`, clamped at arrival.
    fn move_agent_toward(&mut self, agent: Self::Agent, target: Vec2, max_step: f32);
}
