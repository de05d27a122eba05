//! Agent state -> decision packet for the reply generator

use crate::adaptation::style::InteractionStyle;
use crate::agent::runner::Agent;
use crate::core::types::SourceId;
use crate::memory::record::MemoryRecord;
use crate::relationship::state::RelationshipState;
use serde::{Deserialize, Serialize};

/// Number of recent memories summarized into a packet
pub const MEMORY_SUMMARY_LEN: usize = 3;

/// Tone handed to the reply generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleTone {
    Friendly,
    Neutral,
    Boundary,
}

impl StyleTone {
    pub fn from_relationship(rel: &RelationshipState) -> Self {
        if rel.trust > 0.65 && rel.anxiety < 0.3 {
            StyleTone::Friendly
        } else if rel.anxiety > 0.6 {
            StyleTone::Boundary
        } else {
            StyleTone::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogueActionType {
    AskClarify,
    ProposePlan,
    GiveSteps,
    ExplainWhy,
    Summarize,
    SetBoundary,
    Encourage,
    RequestInfo,
    CorrectMistake,
    Acknowledge,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionParams {
    pub bullets: Vec<String>,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplyConstraints {
    pub max_sentences: u32,
    pub no_jargon: bool,
    pub be_concise: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionPacket {
    pub turn_id: i64,
    pub style: StyleTone,
    /// Style the agent actually settled on in its last step
    pub agent_style: InteractionStyle,
    pub action: DialogueActionType,
    pub action_params: ActionParams,
    pub constraints: ReplyConstraints,
    pub relation_state: RelationshipState,
    /// Newest last
    pub memory_summary: Vec<String>,
}

impl DecisionPacket {
    pub fn to_json(&self) -> crate::core::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionExporter;

impl DecisionExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, turn_id: i64, agent: &Agent, entity: &SourceId) -> DecisionPacket {
        let relation_state = agent.get_relationship(entity);
        let agent_style = agent.current_style();
        let style = StyleTone::from_relationship(&relation_state);

        let action = if style == StyleTone::Boundary || agent_style == InteractionStyle::Boundary {
            DialogueActionType::SetBoundary
        } else {
            DialogueActionType::ProposePlan
        };

        let talkativeness = agent.config().talkativeness;
        let constraints = ReplyConstraints {
            max_sentences: 2 + (talkativeness * 8.0).round() as u32,
            no_jargon: true,
            be_concise: talkativeness < 0.5,
        };

        let recent = recent_records(agent, entity);
        let memory_summary = recent.iter().map(summarize).collect();

        let mut bullets: Vec<String> = Vec::new();
        for record in &recent {
            let topic = record.event.context_tag();
            if !topic.is_empty() && !bullets.iter().any(|b| b == topic) {
                bullets.push(topic.to_string());
            }
        }

        tracing::debug!(
            "Decision packet {} for {}: tone {:?}, action {:?}",
            turn_id,
            entity,
            style,
            action
        );

        DecisionPacket {
            turn_id,
            style,
            agent_style,
            action,
            action_params: ActionParams {
                bullets,
                questions: Vec::new(),
            },
            constraints,
            relation_state,
            memory_summary,
        }
    }
}

fn recent_records(agent: &Agent, entity: &SourceId) -> Vec<MemoryRecord> {
    let mut recent: Vec<MemoryRecord> = agent
        .memory()
        .records_for(entity)
        .rev()
        .take(MEMORY_SUMMARY_LEN)
        .cloned()
        .collect();
    recent.reverse();
    recent
}

fn summarize(record: &MemoryRecord) -> String {
    let detail = if record.event.evidence().is_empty() {
        record.event.context_tag()
    } else {
        record.event.evidence()
    };
    format!("{} ({})", record.event.event_type(), detail)
}
