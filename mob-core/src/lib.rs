//! Deterministic, engine-agnostic agent kernel primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod math;
pub mod tick;
pub mod world;

pub use math::Vec2;
pub use tick::TickContext;
pub use world::{AgentId, WorldMut, WorldView};
