//! Bridge between the core and its dialogue collaborators
//!
//! Inbound: NLU packets (JSON produced by a language-understanding service)
//! become perception events. Outbound: the agent's state is exported as a
//! decision packet for a reply generator. No network code lives here.

pub mod export;
pub mod mapper;
pub mod nlu;

pub use export::{DecisionExporter, DecisionPacket, DialogueActionType, StyleTone};
pub use mapper::EventMapper;
pub use nlu::NluPacket;
