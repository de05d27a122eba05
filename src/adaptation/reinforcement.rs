//! Tabular Q-learning over interaction styles
//!
//! State is a 4x4 grid of (trust, anxiety) bins per event type; actions are
//! the four interaction styles. Selection is epsilon-greedy with ties going
//! to the lowest index. The reward is read off how the relationship moved:
//! `w_s * d(stability) - w_a * d(anxiety)`, clamped to [-1, 1].
//!
//! `learn` pairs with the most recent `select_style`. The agent calls it in
//! the same pipeline pass as the selection, with the relationship as it
//! stands after that event, so the update is online and never lags by an
//! event.

use crate::adaptation::style::InteractionStyle;
use crate::core::config::AgentConfig;
use crate::perception::event::{PerceptionEvent, PerceptionEventType};
use crate::relationship::state::RelationshipState;
use ahash::AHashMap;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Bins per relationship axis
const BINS: f32 = 4.0;
const MAX_BIN: u8 = 3;

type QVector = [f32; InteractionStyle::COUNT];

/// Discretized state bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey {
    pub trust_bin: u8,
    pub anxiety_bin: u8,
    pub event_type: PerceptionEventType,
}

impl StateKey {
    pub fn new(relationship: &RelationshipState, event_type: PerceptionEventType) -> Self {
        Self {
            trust_bin: bin(relationship.trust),
            anxiety_bin: bin(relationship.anxiety),
            event_type,
        }
    }
}

fn bin(value: f32) -> u8 {
    let b = (value * BINS).floor();
    if b.is_nan() || b < 0.0 {
        0
    } else {
        (b as u8).min(MAX_BIN)
    }
}

/// First index of the maximum; NaN entries never win
fn argmax(values: &QVector) -> usize {
    let mut best = 0;
    let mut best_value = values[0];
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}

#[derive(Debug, Clone)]
pub struct ReinforcementAdapter {
    epsilon: f32,
    learning_rate: f32,
    discount: f32,
    reward_stability_weight: f32,
    reward_anxiety_weight: f32,
    q: AHashMap<StateKey, QVector>,
    previous: Option<(StateKey, InteractionStyle)>,
    rng: ChaCha8Rng,
}

impl ReinforcementAdapter {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            epsilon: config.epsilon,
            learning_rate: config.learning_rate,
            discount: config.discount,
            reward_stability_weight: config.reward_stability_weight,
            reward_anxiety_weight: config.reward_anxiety_weight,
            q: AHashMap::with_capacity(128),
            previous: None,
            rng: ChaCha8Rng::seed_from_u64(config.rl_seed),
        }
    }

    /// Epsilon-greedy choice for the current bucket; remembered for `learn`
    pub fn select_style(
        &mut self,
        relationship: &RelationshipState,
        event: &PerceptionEvent,
    ) -> InteractionStyle {
        let state = StateKey::new(relationship, event.event_type());
        let greedy = argmax(self.q_entry(state));

        let action = if self.rng.gen::<f32>() < self.epsilon {
            self.rng.gen_range(0..InteractionStyle::COUNT)
        } else {
            greedy
        };

        let style = InteractionStyle::from_index(action);
        self.previous = Some((state, style));
        style
    }

    /// One-step Q update for the last selection. No-op before any selection.
    pub fn learn(
        &mut self,
        before: &RelationshipState,
        event: &PerceptionEvent,
        after: &RelationshipState,
    ) {
        let Some((state, style)) = self.previous else {
            return;
        };

        let reward = self.reward(before, after);

        let next_state = StateKey::new(after, event.event_type());
        let next_best = {
            let next = self.q_entry(next_state);
            next[argmax(next)]
        };

        let learning_rate = self.learning_rate;
        let discount = self.discount;
        let q = self.q_entry(state);
        let a = style.index();
        let td_error = reward + discount * next_best - q[a];
        q[a] += learning_rate * td_error;

        tracing::trace!(
            "Q[{:?}][{}] <- {:.4} (reward {:.4})",
            state,
            style,
            q[a],
            reward
        );
    }

    pub fn reward(&self, before: &RelationshipState, after: &RelationshipState) -> f32 {
        let reward = self.reward_stability_weight * (after.stability - before.stability)
            - self.reward_anxiety_weight * (after.anxiety - before.anxiety);
        reward.clamp(-1.0, 1.0)
    }

    pub fn q_values(&self, state: &StateKey) -> Option<&QVector> {
        self.q.get(state)
    }

    pub fn table_len(&self) -> usize {
        self.q.len()
    }

    fn q_entry(&mut self, state: StateKey) -> &mut QVector {
        self.q.entry(state).or_insert([0.0; InteractionStyle::COUNT])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greedy_config() -> AgentConfig {
        AgentConfig {
            epsilon: 0.0,
            ..AgentConfig::default()
        }
    }

    fn event(t: PerceptionEventType) -> PerceptionEvent {
        PerceptionEvent::new(t, "User", 0.5, "", 0.0)
    }

    #[test]
    fn test_binning() {
        let rel = RelationshipState { trust: 0.99, anxiety: 0.26, ..Default::default() };
        let key = StateKey::new(&rel, PerceptionEventType::Praise);
        assert_eq!((key.trust_bin, key.anxiety_bin), (3, 1));

        let rel = RelationshipState { trust: 1.0, anxiety: 0.0, ..Default::default() };
        let key = StateKey::new(&rel, PerceptionEventType::Praise);
        assert_eq!((key.trust_bin, key.anxiety_bin), (3, 0));
        assert_eq!(bin(-0.5), 0);
        assert_eq!(bin(f32::NAN), 0);
    }

    #[test]
    fn test_argmax_ties_pick_lowest() {
        assert_eq!(argmax(&[0.0, 0.0, 0.0, 0.0]), 0);
        assert_eq!(argmax(&[0.1, 0.3, 0.3, 0.2]), 1);
        assert_eq!(argmax(&[-1.0, -0.5, -2.0, -0.5]), 1);
    }

    #[test]
    fn test_greedy_selection_is_deterministic() {
        let mut adapter = ReinforcementAdapter::new(&greedy_config());
        let rel = RelationshipState::default();
        let ev = event(PerceptionEventType::Greeting);

        let first = adapter.select_style(&rel, &ev);
        for _ in 0..20 {
            assert_eq!(adapter.select_style(&rel, &ev), first);
        }
        assert_eq!(first, InteractionStyle::Friendly);
    }

    #[test]
    fn test_learn_without_selection_is_noop() {
        let mut adapter = ReinforcementAdapter::new(&greedy_config());
        let before = RelationshipState::default();
        let after = RelationshipState { stability: 0.9, ..before };
        adapter.learn(&before, &event(PerceptionEventType::Praise), &after);
        assert_eq!(adapter.table_len(), 0);
    }

    #[test]
    fn test_positive_reward_raises_chosen_value() {
        let mut adapter = ReinforcementAdapter::new(&greedy_config());
        let before = RelationshipState::default();
        let after = RelationshipState { stability: 0.7, anxiety: 0.1, ..before };
        let ev = event(PerceptionEventType::Praise);

        let style = adapter.select_style(&before, &ev);
        let key = StateKey::new(&before, ev.event_type());
        let old = adapter.q_values(&key).unwrap()[style.index()];

        adapter.learn(&before, &ev, &after);
        let new = adapter.q_values(&key).unwrap()[style.index()];
        assert!(new > old);

        // reward 0.2 + 0.05 = 0.25, next-state max 0 -> 0.2 * 0.25
        assert!((new - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_negative_reward_steers_away() {
        let mut adapter = ReinforcementAdapter::new(&greedy_config());
        let before = RelationshipState::default();
        let worse = RelationshipState { stability: 0.2, anxiety: 0.6, ..before };
        let ev = event(PerceptionEventType::Demand);

        assert_eq!(adapter.select_style(&before, &ev), InteractionStyle::Friendly);
        adapter.learn(&before, &ev, &worse);
        assert_eq!(adapter.select_style(&before, &ev), InteractionStyle::Neutral);
    }

    #[test]
    fn test_reward_weights_and_clamp() {
        let adapter = ReinforcementAdapter::new(&AgentConfig::default());
        let before = RelationshipState::default();
        let after = RelationshipState { stability: 0.6, anxiety: 0.4, ..before };
        assert!((adapter.reward(&before, &after) - (0.1 - 0.5 * 0.2)).abs() < 1e-6);

        let weighted = ReinforcementAdapter::new(&AgentConfig {
            reward_stability_weight: 2.0,
            reward_anxiety_weight: 2.0,
            ..AgentConfig::default()
        });
        let extreme = RelationshipState { stability: 1.0, anxiety: 0.0, ..before };
        let low = RelationshipState { stability: 0.0, anxiety: 1.0, ..before };
        assert_eq!(weighted.reward(&low, &extreme), 1.0);
        assert_eq!(weighted.reward(&extreme, &low), -1.0);
    }

    #[test]
    fn test_same_seed_same_exploration() {
        let config = AgentConfig {
            epsilon: 1.0,
            rl_seed: 7,
            ..AgentConfig::default()
        };
        let mut a = ReinforcementAdapter::new(&config);
        let mut b = ReinforcementAdapter::new(&config);
        let rel = RelationshipState::default();
        let ev = event(PerceptionEventType::TopicShift);

        let picks_a: Vec<_> = (0..32).map(|_| a.select_style(&rel, &ev)).collect();
        let picks_b: Vec<_> = (0..32).map(|_| b.select_style(&rel, &ev)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().any(|s| *s != picks_a[0]));
    }

    #[test]
    fn test_table_bounded_by_key_space() {
        let mut adapter = ReinforcementAdapter::new(&AgentConfig::default());
        for t in PerceptionEventType::ALL {
            for trust in 0..8 {
                for anxiety in 0..8 {
                    let rel = RelationshipState {
                        trust: trust as f32 / 7.0,
                        anxiety: anxiety as f32 / 7.0,
                        ..Default::default()
                    };
                    adapter.select_style(&rel, &event(t));
                }
            }
        }
        assert_eq!(adapter.table_len(), 4 * 4 * PerceptionEventType::ALL.len());
    }
}
