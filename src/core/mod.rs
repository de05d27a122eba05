pub mod config;
pub mod error;
pub mod types;

pub use config::AgentConfig;
pub use error::{RapportError, Result};
pub use types::{clamp01, lerp, AgentId, SimTime, SourceId};
