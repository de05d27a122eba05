use crate::adaptation::reinforcement::ReinforcementAdapter;
use crate::core::config::AgentConfig;
use crate::core::types::AgentId;
use crate::decision::system::DecisionSystem;
use crate::emotion::appraisal::AppraisalSystem;
use crate::emotion::state::EmotionalState;
use crate::memory::relational::RelationalMemory;
use crate::motivation::MotivationSystem;
use crate::perception::queue::PerceptionSystem;
use crate::relationship::model::RelationshipModel;
use crate::relationship::reflection::ReflectionEngine;

/// Everything one agent owns. Components never point back here; the
/// driving loop passes what each one needs.
#[derive(Debug)]
pub struct AgentContext {
    pub id: AgentId,
    pub config: AgentConfig,

    pub perception: PerceptionSystem,
    pub appraisal: AppraisalSystem,
    pub emotion: EmotionalState,

    pub relationships: RelationshipModel,
    pub memory: RelationalMemory,

    pub reflection: ReflectionEngine,
    pub motivation: MotivationSystem,

    pub decision: DecisionSystem,
    pub rl: ReinforcementAdapter,
}

impl AgentContext {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            id: AgentId::new(),
            config: config.clone(),

            perception: PerceptionSystem::new(),
            appraisal: AppraisalSystem::new(),
            emotion: EmotionalState::default(),

            relationships: RelationshipModel::new(config),
            memory: RelationalMemory::new(config.memory_capacity),

            reflection: ReflectionEngine::new(config),
            motivation: MotivationSystem::new(),

            decision: DecisionSystem::new(config),
            rl: ReinforcementAdapter::new(config),
        }
    }
}
