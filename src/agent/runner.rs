//! Agent tick loop
//!
//! Each tick:
//! 1. Drain every queued perception event, strictly FIFO. Per event:
//!    appraisal -> relationship update -> memory -> RL style proposal ->
//!    style guard -> RL learning step -> action selection -> action sink.
//! 2. If the reflection deadline has passed, reflect once and schedule the
//!    next pass at `now + interval`. Missed passes are not caught up.

use crate::adaptation::style::InteractionStyle;
use crate::adaptation::style_guard::{GuardVerdict, StyleGuard};
use crate::agent::context::AgentContext;
use crate::agent::sink::ActionSink;
use crate::agent::telemetry::TelemetryLogger;
use crate::core::config::AgentConfig;
use crate::core::error::Result;
use crate::core::types::{SimTime, SourceId};
use crate::decision::action::Action;
use crate::emotion::state::EmotionalState;
use crate::memory::relational::RelationalMemory;
use crate::motivation::MotivationState;
use crate::perception::event::{PerceptionEvent, PerceptionEventType};
use crate::perception::queue::PerceptionSender;
use crate::relationship::state::RelationshipState;
use serde::{Deserialize, Serialize};

/// What happened to one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub time: SimTime,
    pub event_type: PerceptionEventType,
    pub source_id: SourceId,
    pub proposed_style: InteractionStyle,
    pub verdict: GuardVerdict,
    pub style: InteractionStyle,
    pub action: String,
    pub action_cost: f32,
    pub utility: f32,
    pub violation_score: f32,
    pub emotion: EmotionalState,
    pub relationship: RelationshipState,
}

/// One reflection pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionReport {
    pub time: SimTime,
    /// Score per reflected entity, in sorted id order
    pub scores: Vec<(SourceId, f32)>,
    /// Mean score fed to motivation
    pub motivation_signal: f32,
    pub motivation: MotivationState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub outcomes: Vec<StepOutcome>,
    pub reflection: Option<ReflectionReport>,
}

pub struct Agent {
    ctx: AgentContext,
    next_reflection_at: SimTime,
    current_style: InteractionStyle,
    last_violation_score: f32,
    telemetry: TelemetryLogger,
}

impl Agent {
    /// Validates the config; an invalid config never yields an agent
    pub fn new(config: &AgentConfig, now: SimTime) -> Result<Self> {
        config.validate()?;

        let mut ctx = AgentContext::new(config);
        let primary = SourceId::new(config.primary_entity.clone());
        ctx.relationships.get_or_create(&primary);

        tracing::info!(
            "Agent {} ready (primary entity {}, reflection every {}s)",
            ctx.id,
            primary,
            config.reflection_interval_sec
        );

        Ok(Self {
            next_reflection_at: now + config.reflection_interval_sec,
            ctx,
            current_style: InteractionStyle::Neutral,
            last_violation_score: 0.0,
            telemetry: TelemetryLogger::default(),
        })
    }

    pub fn push_event(&self, event: PerceptionEvent) {
        self.ctx.perception.enqueue(event);
    }

    /// Producer handle for other threads/tasks
    pub fn sender(&self) -> PerceptionSender {
        self.ctx.perception.sender()
    }

    pub fn pending_events(&self) -> usize {
        self.ctx.perception.len()
    }

    /// Drain the queue, then reflect if due
    pub fn tick<S: ActionSink + ?Sized>(&mut self, now: SimTime, sink: &mut S) -> TickReport {
        let outcomes = self.drain_now(now, sink);

        let reflection = if now >= self.next_reflection_at {
            self.next_reflection_at = now + self.ctx.config.reflection_interval_sec;
            Some(self.reflect_now(now))
        } else {
            None
        };

        TickReport { outcomes, reflection }
    }

    /// Process every queued event now, without the reflection check
    pub fn drain_now<S: ActionSink + ?Sized>(&mut self, now: SimTime, sink: &mut S) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        while let Some(event) = self.ctx.perception.try_dequeue() {
            outcomes.push(self.process_event(event, now, sink));
        }
        outcomes
    }

    fn process_event<S: ActionSink + ?Sized>(
        &mut self,
        event: PerceptionEvent,
        now: SimTime,
        sink: &mut S,
    ) -> StepOutcome {
        let ctx = &mut self.ctx;
        let source = event.source_id().clone();

        let before = *ctx.relationships.get_or_create(&source);

        let appraisal = ctx.appraisal.appraise(&event, &before, &ctx.emotion);
        ctx.emotion.apply(appraisal.emotion_delta);
        self.last_violation_score = appraisal.violation_score;

        ctx.relationships
            .apply_experience(&source, appraisal.relation_delta, appraisal.violation_score);
        ctx.memory
            .add_record(event.clone(), &ctx.emotion, appraisal.relation_delta);
        let after = *ctx.relationships.get_or_create(&source);

        let proposed = ctx.rl.select_style(&after, &event);
        let (style, verdict) =
            StyleGuard::evaluate(proposed, &event, &after, appraisal.violation_score);
        if verdict != GuardVerdict::PassThrough {
            tracing::debug!("Style guard {:?}: {} -> {}", verdict, proposed, style);
        }
        self.current_style = style;

        ctx.rl.learn(&before, &event, &after);

        let action = ctx.decision.choose_action(&after, &ctx.emotion, style);
        let utility = ctx.decision.utility(&after, &ctx.emotion, &action);
        sink.execute(&action, style);

        tracing::debug!(
            "Ev={} src={} emo(V={:.2},A={:.2}) rel(T={:.2},Anx={:.2}) style={}",
            event.event_type(),
            source,
            ctx.emotion.valence,
            ctx.emotion.arousal,
            after.trust,
            after.anxiety,
            style
        );
        self.telemetry.log(
            now,
            format!(
                "ev={};src={};V={:.3};A={:.3};T={:.3};Anx={:.3};S={:.3};viol={:.3};style={};action={}",
                event.event_type(),
                source,
                ctx.emotion.valence,
                ctx.emotion.arousal,
                after.trust,
                after.anxiety,
                after.stability,
                appraisal.violation_score,
                style,
                action.name()
            ),
        );

        StepOutcome {
            time: now,
            event_type: event.event_type(),
            source_id: source,
            proposed_style: proposed,
            verdict,
            style,
            action: action.name().to_string(),
            action_cost: action.base_cost(),
            utility,
            violation_score: appraisal.violation_score,
            emotion: ctx.emotion,
            relationship: after,
        }
    }

    /// Reflect on every known relationship right now
    pub fn reflect_now(&mut self, now: SimTime) -> ReflectionReport {
        let ctx = &mut self.ctx;
        let mut scores = Vec::new();

        for id in ctx.relationships.entity_ids() {
            let score = ctx.reflection.compute_reflection_score(
                &ctx.memory,
                &mut ctx.relationships,
                &id,
                now,
            );
            ctx.relationships.apply_reflection(&id, score);
            tracing::debug!("Reflection on {}: {:.3}", id, score);
            scores.push((id, score));
        }

        let motivation_signal = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|(_, s)| s).sum::<f32>() / scores.len() as f32
        };
        ctx.motivation.apply_reflection(motivation_signal);
        let motivation = *ctx.motivation.state();

        tracing::info!(
            "Reflection pass over {} relationship(s), signal {:.3} -> motivations updated",
            scores.len(),
            motivation_signal
        );
        self.telemetry.log(
            now,
            format!(
                "reflection;signal={:.3};socialize={:.3};avoid={:.3};help={:.3}",
                motivation_signal, motivation.socialize, motivation.avoid, motivation.help
            ),
        );

        ReflectionReport {
            time: now,
            scores,
            motivation_signal,
            motivation,
        }
    }

    /// Current state with `entity`; an unknown entity reads as the default
    /// relationship and is not registered
    pub fn get_relationship(&self, entity: &SourceId) -> RelationshipState {
        self.ctx
            .relationships
            .get(entity)
            .copied()
            .unwrap_or_default()
    }

    pub fn get_emotional_state(&self) -> EmotionalState {
        self.ctx.emotion
    }

    pub fn motivation(&self) -> MotivationState {
        *self.ctx.motivation.state()
    }

    pub fn current_style(&self) -> InteractionStyle {
        self.current_style
    }

    pub fn last_violation_score(&self) -> f32 {
        self.last_violation_score
    }

    pub fn next_reflection_at(&self) -> SimTime {
        self.next_reflection_at
    }

    pub fn memory(&self) -> &RelationalMemory {
        &self.ctx.memory
    }

    pub fn config(&self) -> &AgentConfig {
        &self.ctx.config
    }

    pub fn context(&self) -> &AgentContext {
        &self.ctx
    }

    pub fn telemetry(&self) -> &TelemetryLogger {
        &self.telemetry
    }
}
