//! Decision: turn a gated style into a concrete action

pub mod action;
pub mod system;
pub mod utility;

pub use action::{Action, AgentAction, DialogueAction};
pub use system::DecisionSystem;
pub use utility::compute_utility;
