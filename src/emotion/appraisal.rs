//! Appraisal - how a perceived social act feels, given who did it
//!
//! Appraisal is a pure function of (event, relationship, emotion). Every
//! event type starts from a fixed base profile, which is then scaled by the
//! event's intensity and shaped by its cues:
//! - engagement amplifies arousal and relationship impact
//! - politeness boosts positive readings and softens negative ones
//! - the existing relationship biases the reading: trust makes kindness
//!   land harder, anxiety makes hostility land harder

use crate::core::types::{clamp01, lerp};
use crate::emotion::state::{EmotionalDelta, EmotionalState};
use crate::perception::event::{PerceptionEvent, PerceptionEventType};
use crate::relationship::state::RelationshipState;
use serde::{Deserialize, Serialize};

/// Weight of raw sentiment on valence
const SENTIMENT_VALENCE_WEIGHT: f32 = 0.35;

/// Weight of raw sentiment on the relationship delta
const SENTIMENT_RELATION_WEIGHT: f32 = 0.12;

/// Extra violation for impolite negativity
const RUDENESS_VIOLATION_WEIGHT: f32 = 0.15;

/// Arousal added by an anxious relationship (full on negative valence)
const ANXIETY_AROUSAL_WEIGHT: f32 = 0.08;

/// Fraction of the anxiety arousal kept when valence is non-negative
const ANXIETY_AROUSAL_POSITIVE_FACTOR: f32 = 0.3;

/// Starting point of an event type before scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseProfile {
    pub valence: f32,
    pub arousal: f32,
    pub trust: f32,
    pub violation: f32,
}

impl BaseProfile {
    const fn new(valence: f32, arousal: f32, trust: f32, violation: f32) -> Self {
        Self { valence, arousal, trust, violation }
    }

    /// Exhaustive table; adding an event type without a profile won't compile.
    pub fn for_event(event_type: PerceptionEventType) -> Self {
        use PerceptionEventType::*;
        match event_type {
            Greeting => Self::new(0.08, 0.03, 0.05, 0.00),
            Farewell => Self::new(0.00, 0.02, 0.00, 0.00),

            InfoRequest => Self::new(0.02, 0.03, 0.04, 0.00),
            PoliteRequest => Self::new(0.04, 0.04, 0.06, 0.02),
            Demand => Self::new(-0.08, 0.05, -0.06, 0.10),

            Thanks => Self::new(0.20, 0.04, 0.18, 0.00),
            Praise => Self::new(0.25, 0.05, 0.22, 0.00),
            Apology => Self::new(0.18, 0.04, 0.15, 0.00),

            Agreement => Self::new(0.10, 0.03, 0.08, 0.00),
            Disagreement => Self::new(-0.05, 0.04, -0.03, 0.02),
            Confusion => Self::new(-0.03, 0.05, -0.02, 0.03),

            Criticism => Self::new(-0.15, 0.06, -0.10, 0.08),
            Insult => Self::new(-0.35, 0.12, -0.30, 0.35),
            Threat => Self::new(-0.45, 0.18, -0.40, 0.50),

            BoundaryViolation => Self::new(-0.30, 0.10, -0.25, 0.60),

            PromiseMade => Self::new(0.06, 0.03, 0.05, 0.02),
            PromiseKept => Self::new(0.28, 0.06, 0.25, 0.00),
            PromiseBroken => Self::new(-0.32, 0.10, -0.28, 0.65),

            TopicShift => Self::new(0.00, 0.02, 0.00, 0.05),
            NoResponse => Self::new(-0.10, 0.04, -0.08, 0.10),
        }
    }
}

/// Output of one appraisal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppraisalResult {
    pub emotion_delta: EmotionalDelta,
    /// Signed push on the relationship, -1..1
    pub relation_delta: f32,
    /// How badly the event breached expectations, 0..1
    pub violation_score: f32,
    /// clamp01(|valence| + arousal), 0..1
    pub emotional_weight: f32,
}

/// Stateless appraisal
#[derive(Debug, Clone, Copy, Default)]
pub struct AppraisalSystem;

impl AppraisalSystem {
    pub fn new() -> Self {
        Self
    }

    pub fn appraise(
        &self,
        event: &PerceptionEvent,
        relationship: &RelationshipState,
        _emotion: &EmotionalState,
    ) -> AppraisalResult {
        let intensity = event.intensity();
        let sentiment = event.sentiment();
        let politeness = event.politeness();
        let engagement = event.engagement();
        let expectation_violation = event.expectation_violation();

        let base = BaseProfile::for_event(event.event_type());

        let engage_factor = lerp(0.85, 1.10, engagement);
        let polite_pos_boost = lerp(0.90, 1.15, politeness);
        let polite_neg_damp = lerp(1.15, 0.85, politeness);

        let bias_pos = 1.0 + 0.60 * relationship.trust - 0.40 * relationship.anxiety;
        let bias_neg = 1.0 + 0.60 * relationship.anxiety - 0.40 * relationship.trust;

        let shape = |v: f32| {
            if v >= 0.0 {
                v * bias_pos * polite_pos_boost
            } else {
                v * bias_neg * polite_neg_damp
            }
        };

        let valence = shape(
            base.valence * intensity + SENTIMENT_VALENCE_WEIGHT * sentiment * intensity,
        );

        let anxiety_factor = if valence < 0.0 { 1.0 } else { ANXIETY_AROUSAL_POSITIVE_FACTOR };
        let arousal = base.arousal * intensity * engage_factor
            + ANXIETY_AROUSAL_WEIGHT * relationship.anxiety * anxiety_factor;

        let valence = valence.clamp(-1.0, 1.0);
        let arousal = clamp01(arousal);

        let relation_delta = shape(
            base.trust * intensity * engage_factor
                + SENTIMENT_RELATION_WEIGHT * sentiment * intensity,
        )
        .clamp(-1.0, 1.0);

        let violation = clamp01(base.violation * intensity + expectation_violation);
        let violation_score = clamp01(
            violation
                + RUDENESS_VIOLATION_WEIGHT * (-sentiment).max(0.0) * (1.0 - politeness),
        );

        let emotional_weight = clamp01(valence.abs() + arousal);

        AppraisalResult {
            emotion_delta: EmotionalDelta {
                valence_delta: valence,
                arousal_delta: arousal,
            },
            relation_delta,
            violation_score,
            emotional_weight,
        }
    }
}
