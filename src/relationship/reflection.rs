//! Reflection - periodic reassessment of a relationship from memory
//!
//! Each remembered interaction with the entity contributes
//! `emotional_weight * relation_impact * exp(-lambda * age)`. The sum is
//! scaled by `0.75 + 0.5 * trust`, so memories of trusted entities weigh more,
//! and clamped to [-1, 1].

use crate::core::config::AgentConfig;
use crate::core::types::{SimTime, SourceId};
use crate::memory::relational::RelationalMemory;
use crate::relationship::model::RelationshipModel;

#[derive(Debug, Clone)]
pub struct ReflectionEngine {
    time_decay_lambda: f32,
}

impl ReflectionEngine {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            time_decay_lambda: config.time_decay_lambda,
        }
    }

    pub fn compute_reflection_score(
        &self,
        memory: &RelationalMemory,
        relationships: &mut RelationshipModel,
        entity_id: &SourceId,
        now: SimTime,
    ) -> f32 {
        let trust = relationships.get_or_create(entity_id).trust;

        let sum: f32 = memory
            .records_for(entity_id)
            .map(|record| {
                let age = (now - record.timestamp).max(0.0) as f32;
                let time_decay = (-self.time_decay_lambda * age).exp();
                record.emotional_weight() * record.relation_impact * time_decay
            })
            .sum();

        (sum * (0.75 + 0.5 * trust)).clamp(-1.0, 1.0)
    }
}
