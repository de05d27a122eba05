//! Perception: classified social stimuli and the queue they arrive through

pub mod event;
pub mod queue;

pub use event::{PerceptionEvent, PerceptionEventType};
pub use queue::{PerceptionSender, PerceptionSystem};
