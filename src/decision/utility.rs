use crate::core::config::AgentConfig;
use crate::emotion::state::EmotionalState;
use crate::relationship::state::RelationshipState;

/// U = w_t * trust - w_a * anxiety + 0.2 * (valence + 1) / 2 - 0.15 * cost, clamped to [-1, 1]
pub fn compute_utility(
    config: &AgentConfig,
    relationship: &RelationshipState,
    emotion: &EmotionalState,
    action_cost: f32,
) -> f32 {
    let mut u = 0.0;
    u += config.utility_trust_weight * relationship.trust;
    u -= config.utility_anxiety_weight * relationship.anxiety;
    u += 0.20 * (emotion.valence + 1.0) * 0.5;
    u -= 0.15 * action_cost;
    u.clamp(-1.0, 1.0)
}
