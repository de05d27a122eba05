//! Relationship dynamics
//!
//! Short-term experience swings trust and anxiety quickly; reflection
//! applies a slower, memory-informed correction on top.

use crate::core::config::AgentConfig;
use crate::core::types::SourceId;
use crate::relationship::state::RelationshipState;
use ahash::AHashMap;

/// Stability gained per experience when trust holds steady
const STABILITY_GAIN: f32 = 0.10;

/// Stability lost per unit of violation
const STABILITY_VIOLATION_LOSS: f32 = 0.08;

/// Stability moved per unit of reflection score
const STABILITY_REFLECTION_GAIN: f32 = 0.05;

/// Owns every relationship the agent has
#[derive(Debug, Clone)]
pub struct RelationshipModel {
    alpha_experience: f32,
    beta_violation: f32,
    gamma_reflection: f32,
    states: AHashMap<SourceId, RelationshipState>,
}

impl RelationshipModel {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            alpha_experience: config.alpha_experience,
            beta_violation: config.beta_violation,
            gamma_reflection: config.gamma_reflection,
            states: AHashMap::with_capacity(8),
        }
    }

    /// Existing state, or a fresh default one registered under `id`
    pub fn get_or_create(&mut self, id: &SourceId) -> &mut RelationshipState {
        if !self.states.contains_key(id) {
            tracing::debug!("New relationship with {}", id);
        }
        self.states.entry(id.clone()).or_default()
    }

    pub fn get(&self, id: &SourceId) -> Option<&RelationshipState> {
        self.states.get(id)
    }

    /// Known entity ids, sorted for deterministic iteration
    pub fn entity_ids(&self) -> Vec<SourceId> {
        let mut ids: Vec<SourceId> = self.states.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Fold one appraised experience into the relationship
    pub fn apply_experience(&mut self, id: &SourceId, relation_delta: f32, violation: f32) {
        let alpha = self.alpha_experience;
        let beta = self.beta_violation;
        let rel = self.get_or_create(id);

        let trust_before = rel.trust;

        rel.trust += alpha * relation_delta;
        rel.trust -= beta * violation * 0.5;

        rel.anxiety += beta * violation;
        rel.anxiety -= alpha * relation_delta.max(0.0) * 0.25;

        let delta_trust = (rel.trust - trust_before).abs();
        rel.stability += STABILITY_GAIN * (1.0 - delta_trust) - STABILITY_VIOLATION_LOSS * violation;

        rel.violation = violation;

        rel.clamp();
    }

    /// Apply the slow correction computed by reflection
    pub fn apply_reflection(&mut self, id: &SourceId, reflection_score: f32) {
        let gamma = self.gamma_reflection;
        let rel = self.get_or_create(id);

        rel.trust += gamma * reflection_score;
        rel.anxiety -= gamma * reflection_score * 0.6;
        rel.stability += STABILITY_REFLECTION_GAIN * reflection_score;

        rel.clamp();
    }
}
