//! Deterministic safety gate over the learned style
//!
//! The learned policy proposes; the guard disposes. Rules, in order:
//! 1. violation > 0.55 or a hostile act (Threat, Insult, BoundaryViolation,
//!    PromiseBroken) -> Boundary
//! 2. Friendly toward a low-trust entity (trust < 0.35) -> Neutral
//! 3. anxiety > 0.65 -> Boundary
//! 4. otherwise the proposal stands

use crate::adaptation::style::InteractionStyle;
use crate::perception::event::PerceptionEvent;
use crate::relationship::state::RelationshipState;
use serde::{Deserialize, Serialize};

const VIOLATION_LIMIT: f32 = 0.55;
const FRIENDLY_MIN_TRUST: f32 = 0.35;
const ANXIETY_LIMIT: f32 = 0.65;

/// Which rule decided the final style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardVerdict {
    HardBoundary,
    LowTrustDowngrade,
    HighAnxiety,
    PassThrough,
}

pub struct StyleGuard;

impl StyleGuard {
    pub fn apply(
        proposed: InteractionStyle,
        event: &PerceptionEvent,
        relationship: &RelationshipState,
        violation_score: f32,
    ) -> InteractionStyle {
        Self::evaluate(proposed, event, relationship, violation_score).0
    }

    pub fn evaluate(
        proposed: InteractionStyle,
        event: &PerceptionEvent,
        relationship: &RelationshipState,
        violation_score: f32,
    ) -> (InteractionStyle, GuardVerdict) {
        if violation_score > VIOLATION_LIMIT || event.event_type().is_hostile() {
            return (InteractionStyle::Boundary, GuardVerdict::HardBoundary);
        }

        if proposed == InteractionStyle::Friendly && relationship.trust < FRIENDLY_MIN_TRUST {
            return (InteractionStyle::Neutral, GuardVerdict::LowTrustDowngrade);
        }

        if relationship.anxiety > ANXIETY_LIMIT {
            return (InteractionStyle::Boundary, GuardVerdict::HighAnxiety);
        }

        (proposed, GuardVerdict::PassThrough)
    }
}
