//! Action definitions and catalog

use crate::adaptation::style::InteractionStyle;
use serde::{Deserialize, Serialize};

/// Anything the agent can hand to the action layer
pub trait Action {
    fn name(&self) -> &str;
    fn base_cost(&self) -> f32;
}

/// Speaking in a given style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueAction {
    pub style: InteractionStyle,
    name: String,
}

impl DialogueAction {
    pub const BASE_COST: f32 = 0.10;

    pub fn new(style: InteractionStyle) -> Self {
        Self {
            style,
            name: format!("Dialogue: {}", style),
        }
    }
}

impl Action for DialogueAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn base_cost(&self) -> f32 {
        Self::BASE_COST
    }
}

/// Action catalog. New families get a variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AgentAction {
    Dialogue(DialogueAction),
}

impl AgentAction {
    /// Every catalog entry that can express `style`, in preference order
    pub fn candidates_for(style: InteractionStyle) -> Vec<AgentAction> {
        vec![AgentAction::Dialogue(DialogueAction::new(style))]
    }

    pub fn style(&self) -> InteractionStyle {
        match self {
            AgentAction::Dialogue(d) => d.style,
        }
    }
}

impl Action for AgentAction {
    fn name(&self) -> &str {
        match self {
            AgentAction::Dialogue(d) => d.name(),
        }
    }

    fn base_cost(&self) -> f32 {
        match self {
            AgentAction::Dialogue(d) => d.base_cost(),
        }
    }
}
