//! Action selection from the final style

use crate::adaptation::style::InteractionStyle;
use crate::core::config::AgentConfig;
use crate::decision::action::{Action, AgentAction, DialogueAction};
use crate::decision::utility::compute_utility;
use crate::emotion::state::EmotionalState;
use crate::relationship::state::RelationshipState;
use ordered_float::OrderedFloat;

#[derive(Debug, Clone)]
pub struct DecisionSystem {
    config: AgentConfig,
}

impl DecisionSystem {
    pub fn new(config: &AgentConfig) -> Self {
        Self { config: config.clone() }
    }

    /// Highest-utility catalog entry for `style`; ties keep catalog order
    pub fn choose_action(
        &self,
        relationship: &RelationshipState,
        emotion: &EmotionalState,
        style: InteractionStyle,
    ) -> AgentAction {
        let mut best: Option<(OrderedFloat<f32>, AgentAction)> = None;
        for candidate in AgentAction::candidates_for(style) {
            let score = OrderedFloat(self.utility(relationship, emotion, &candidate));
            if best.as_ref().map_or(true, |(s, _)| score > *s) {
                best = Some((score, candidate));
            }
        }

        match best {
            Some((_, action)) => action,
            None => AgentAction::Dialogue(DialogueAction::new(style)),
        }
    }

    pub fn utility(
        &self,
        relationship: &RelationshipState,
        emotion: &EmotionalState,
        action: &dyn Action,
    ) -> f32 {
        compute_utility(&self.config, relationship, emotion, action.base_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_matches_style() {
        let decision = DecisionSystem::new(&AgentConfig::default());
        for style in InteractionStyle::ALL {
            let action = decision.choose_action(
                &RelationshipState::default(),
                &EmotionalState::default(),
                style,
            );
            assert_eq!(action.style(), style);
            assert_eq!(action.name(), format!("Dialogue: {}", style));
        }
    }

    #[test]
    fn test_utility_tracks_trust() {
        let decision = DecisionSystem::new(&AgentConfig::default());
        let action = decision.choose_action(
            &RelationshipState::default(),
            &EmotionalState::default(),
            InteractionStyle::Neutral,
        );
        let emo = EmotionalState::default();
        let low = RelationshipState { trust: 0.1, ..Default::default() };
        let high = RelationshipState { trust: 0.9, ..Default::default() };
        assert!(decision.utility(&high, &emo, &action) > decision.utility(&low, &emo, &action));
    }
}
