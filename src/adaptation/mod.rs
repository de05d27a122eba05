//! Adaptation: learned interaction style plus the safety gate on top of it

pub mod reinforcement;
pub mod style;
pub mod style_guard;

pub use reinforcement::{ReinforcementAdapter, StateKey};
pub use style::InteractionStyle;
pub use style_guard::{GuardVerdict, StyleGuard};
