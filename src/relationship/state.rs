use crate::core::types::clamp01;
use serde::{Deserialize, Serialize};

/// How the agent stands with one entity. Every field stays in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationshipState {
    pub trust: f32,
    pub anxiety: f32,
    pub stability: f32,
    /// Last recorded violation score (informational)
    pub violation: f32,
}

impl Default for RelationshipState {
    fn default() -> Self {
        Self {
            trust: 0.50,
            anxiety: 0.20,
            stability: 0.50,
            violation: 0.20,
        }
    }
}

impl RelationshipState {
    pub fn clamp(&mut self) {
        self.trust = clamp01(self.trust);
        self.anxiety = clamp01(self.anxiety);
        self.stability = clamp01(self.stability);
        self.violation = clamp01(self.violation);
    }

    pub fn is_bounded(&self) -> bool {
        [self.trust, self.anxiety, self.stability, self.violation]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}
