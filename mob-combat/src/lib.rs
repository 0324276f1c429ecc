//! Combat world facade and reference behavior nodes.
//!
//! The facade traits are the single indirection point between behavior trees
//! and game state: nodes read the world and apply effects exclusively
//! through them, so a malfunctioning game system degrades to `Failure`
//! answers instead of faulting evaluation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod nodes;
pub mod world;

pub use nodes::{AttackNearestEnemy, ChasePlayer, PlayerAlive, PlayerInRange};
pub use world::{CombatWorldMut, CombatWorldView};
