//! Behavior tree runtime built on `mob-core`.
//!
//! Trees are authored once as templates and deep-cloned per agent, so every
//! agent owns an independent runtime instance of the shared graph. Each
//! agent's driver throttles evaluation to a fixed interval, decoupling
//! decision cost from frame rate.
//!
//! - [`Node`]: core trait for all nodes ([`NodeState`] tri-state result)
//! - Composite nodes: [`Selector`], [`Sequence`], [`Parallel`]
//! - Decorator nodes: [`Inverter`], [`Repeater`], [`Cooldown`], [`Succeeder`]
//! - Leaf nodes: [`Condition`], [`Action`]
//! - [`BehaviorTree`]: root container; [`AgentDriver`]: per-agent ticking

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod composite;
pub mod decorator;
pub mod driver;
pub mod leaf;
pub mod node;
pub mod status;
pub mod tree;

pub use composite::{Parallel, Selector, Sequence};
pub use decorator::{Cooldown, Inverter, Repeat, Repeater, Succeeder};
pub use driver::{advance_all, AgentDriver, DriverConfig, DriverError};
pub use leaf::{Action, Condition};
pub use node::{BoxNode, Node, NodeKind};
pub use status::NodeState;
pub use tree::BehaviorTree;
