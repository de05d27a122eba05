//! Agent configuration with documented constants
//!
//! Every tunable coefficient of the agent lives here. The value is built once
//! by the embedding application (defaults, TOML file, or by hand) and passed
//! by reference into the composition root. Nothing mutates it afterwards.

use crate::core::error::{RapportError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for one agent
///
/// Defaults reproduce the shy-but-warming persona the dynamics were tuned for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    // === PERSONA ===
    /// How reserved the agent is with strangers (0..1)
    ///
    /// Carried for dialogue collaborators; the core dynamics do not read it.
    pub base_shyness: f32,

    /// How quickly the persona is expected to open up (0..1)
    ///
    /// Carried for dialogue collaborators; the core dynamics do not read it.
    pub warmup_rate: f32,

    /// Verbosity of the persona (0..1)
    ///
    /// Drives the sentence budget of exported decision packets.
    pub talkativeness: f32,

    // === RELATIONSHIP DYNAMICS ===
    /// Weight of a single experience on trust (alpha, 0..2)
    ///
    /// At 0.25 a strong positive event (relation delta ~0.3) moves trust
    /// by ~0.075, so roughly a dozen such events saturate trust.
    pub alpha_experience: f32,

    /// Weight of a violation on anxiety, and half of it on trust (beta, 0..2)
    ///
    /// Kept above alpha so that breaches hurt more than kindness helps.
    pub beta_violation: f32,

    /// Weight of the reflection signal on trust/anxiety (gamma, 0..2)
    pub gamma_reflection: f32,

    // === REFLECTION ===
    /// Seconds between reflection passes
    pub reflection_interval_sec: f64,

    /// Exponential decay rate of memories in reflection (per second)
    ///
    /// At 0.02 a memory loses half its weight after ~35 seconds.
    pub time_decay_lambda: f32,

    // === MEMORY ===
    /// Maximum number of records kept in relational memory (FIFO)
    pub memory_capacity: usize,

    // === RL ADAPTER ===
    /// Exploration probability for epsilon-greedy style selection
    pub epsilon: f32,

    /// Q-learning step size
    pub learning_rate: f32,

    /// Q-learning discount factor (0..0.99)
    pub discount: f32,

    /// Weight of the stability delta in the RL reward
    pub reward_stability_weight: f32,

    /// Weight of the anxiety delta in the RL reward (subtracted)
    pub reward_anxiety_weight: f32,

    /// Seed of the adapter's exploration generator
    pub rl_seed: u64,

    // === DECISION ===
    /// Weight of trust in the action utility
    pub utility_trust_weight: f32,

    /// Weight of anxiety in the action utility (subtracted)
    pub utility_anxiety_weight: f32,

    // === AGENT ===
    /// Entity whose relationship exists from the first tick
    pub primary_entity: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_shyness: 0.7,
            warmup_rate: 0.25,
            talkativeness: 0.35,

            alpha_experience: 0.25,
            beta_violation: 0.40,
            gamma_reflection: 0.15,

            reflection_interval_sec: 30.0,
            time_decay_lambda: 0.02,

            memory_capacity: 200,

            epsilon: 0.10,
            learning_rate: 0.20,
            discount: 0.85,
            reward_stability_weight: 1.0,
            reward_anxiety_weight: 0.5,
            rl_seed: 0x5EED_0003,

            utility_trust_weight: 1.0,
            utility_anxiety_weight: 0.8,

            primary_entity: "User".to_string(),
        }
    }
}

impl AgentConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AgentConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded agent config from {}", path.display());
        Ok(config)
    }

    /// Validate configuration ranges
    pub fn validate(&self) -> Result<()> {
        let unit = [
            ("base_shyness", self.base_shyness),
            ("warmup_rate", self.warmup_rate),
            ("talkativeness", self.talkativeness),
            ("time_decay_lambda", self.time_decay_lambda),
            ("epsilon", self.epsilon),
            ("learning_rate", self.learning_rate),
        ];
        for (name, value) in unit {
            check_range(name, value, 0.0, 1.0)?;
        }

        let weights = [
            ("alpha_experience", self.alpha_experience),
            ("beta_violation", self.beta_violation),
            ("gamma_reflection", self.gamma_reflection),
            ("utility_trust_weight", self.utility_trust_weight),
            ("utility_anxiety_weight", self.utility_anxiety_weight),
            ("reward_stability_weight", self.reward_stability_weight),
            ("reward_anxiety_weight", self.reward_anxiety_weight),
        ];
        for (name, value) in weights {
            check_range(name, value, 0.0, 2.0)?;
        }

        check_range("discount", self.discount, 0.0, 0.99)?;

        if !self.reflection_interval_sec.is_finite() || self.reflection_interval_sec <= 0.0 {
            return Err(RapportError::InvalidConfig(format!(
                "reflection_interval_sec ({}) must be a positive number of seconds",
                self.reflection_interval_sec
            )));
        }

        if self.memory_capacity == 0 {
            return Err(RapportError::InvalidConfig(
                "memory_capacity must be at least 1".into(),
            ));
        }

        if self.primary_entity.trim().is_empty() {
            return Err(RapportError::InvalidConfig(
                "primary_entity must not be empty".into(),
            ));
        }

        Ok(())
    }
}

fn check_range(name: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(RapportError::InvalidConfig(format!(
            "{} ({}) must be within [{}, {}]",
            name, value, min, max
        )));
    }
    Ok(())
}
