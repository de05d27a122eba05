//! The outbound edge: whoever actually speaks or animates the chosen action

use crate::adaptation::style::InteractionStyle;
use crate::decision::action::{Action, AgentAction};

pub trait ActionSink {
    fn execute(&mut self, action: &AgentAction, style: InteractionStyle);
}

/// Logs each action and does nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingActionSink;

impl ActionSink for TracingActionSink {
    fn execute(&mut self, action: &AgentAction, style: InteractionStyle) {
        tracing::info!(
            "[action] {} (style={}, cost={:.2})",
            action.name(),
            style,
            action.base_cost()
        );
    }
}

/// Keeps every executed action, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingActionSink {
    pub executed: Vec<(String, InteractionStyle)>,
}

impl ActionSink for RecordingActionSink {
    fn execute(&mut self, action: &AgentAction, style: InteractionStyle) {
        self.executed.push((action.name().to_string(), style));
    }
}
