//! Emotion: the agent's valence/arousal state and the appraisal that moves it

pub mod appraisal;
pub mod state;

pub use appraisal::{AppraisalResult, AppraisalSystem, BaseProfile};
pub use state::{EmotionalDelta, EmotionalState};
