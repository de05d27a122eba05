use crate::core::types::{clamp01, SimTime};
use crate::emotion::state::EmotionalState;
use crate::perception::event::PerceptionEvent;
use serde::{Deserialize, Serialize};

/// A single remembered interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// What happened
    pub event: PerceptionEvent,
    /// Agent valence right after the event was appraised
    pub valence_snapshot: f32,
    /// Agent arousal right after the event was appraised
    pub arousal_snapshot: f32,
    /// Relationship delta the event produced
    pub relation_impact: f32,
    /// When it happened (copied from the event)
    pub timestamp: SimTime,
}

impl MemoryRecord {
    pub fn new(event: PerceptionEvent, emotion: &EmotionalState, relation_impact: f32) -> Self {
        let timestamp = event.timestamp();
        Self {
            event,
            valence_snapshot: emotion.valence,
            arousal_snapshot: emotion.arousal,
            relation_impact,
            timestamp,
        }
    }

    /// How emotionally charged the moment was: clamp01(|valence| + arousal)
    pub fn emotional_weight(&self) -> f32 {
        clamp01(self.valence_snapshot.abs() + self.arousal_snapshot)
    }
}
