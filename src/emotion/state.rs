use serde::{Deserialize, Serialize};

/// Change produced by appraisal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionalDelta {
    /// -1..1
    pub valence_delta: f32,
    /// 0..1
    pub arousal_delta: f32,
}

/// Core affect of the agent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionalState {
    /// -1.0 = miserable, 1.0 = elated
    pub valence: f32,
    /// 0.0 = calm, 1.0 = highly activated
    pub arousal: f32,
}

impl EmotionalState {
    pub fn new(valence: f32, arousal: f32) -> Self {
        let mut state = Self { valence, arousal };
        state.clamp();
        state
    }

    pub fn apply(&mut self, delta: EmotionalDelta) {
        self.valence += delta.valence_delta;
        self.arousal += delta.arousal_delta;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.valence = if self.valence.is_nan() { 0.0 } else { self.valence.clamp(-1.0, 1.0) };
        self.arousal = crate::core::types::clamp01(self.arousal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_accumulates() {
        let mut emo = EmotionalState::default();
        emo.apply(EmotionalDelta { valence_delta: 0.3, arousal_delta: 0.1 });
        emo.apply(EmotionalDelta { valence_delta: -0.1, arousal_delta: 0.1 });
        assert!((emo.valence - 0.2).abs() < 1e-6);
        assert!((emo.arousal - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_apply_clamps() {
        let mut emo = EmotionalState::new(0.9, 0.95);
        emo.apply(EmotionalDelta { valence_delta: 0.5, arousal_delta: 0.5 });
        assert_eq!(emo.valence, 1.0);
        assert_eq!(emo.arousal, 1.0);

        emo.apply(EmotionalDelta { valence_delta: -5.0, arousal_delta: 0.0 });
        assert_eq!(emo.valence, -1.0);
    }
}
