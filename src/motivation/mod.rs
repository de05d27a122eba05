//! Drives that drift slowly with reflection

use crate::core::types::clamp01;
use serde::{Deserialize, Serialize};

/// 0.0 = no pull at all, 1.0 = overwhelming pull
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotivationState {
    pub socialize: f32,
    pub avoid: f32,
    pub help: f32,
}

impl Default for MotivationState {
    fn default() -> Self {
        Self {
            socialize: 0.50,
            avoid: 0.20,
            help: 0.40,
        }
    }
}

impl MotivationState {
    pub fn clamp(&mut self) {
        self.socialize = clamp01(self.socialize);
        self.avoid = clamp01(self.avoid);
        self.help = clamp01(self.help);
    }

    /// Strongest drive
    pub fn dominant(&self) -> (DriveType, f32) {
        let drives = [
            (DriveType::Socialize, self.socialize),
            (DriveType::Avoid, self.avoid),
            (DriveType::Help, self.help),
        ];
        drives
            .into_iter()
            .fold((DriveType::Socialize, f32::MIN), |best, d| if d.1 > best.1 { d } else { best })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveType {
    Socialize,
    Avoid,
    Help,
}

/// Holds the drive state; only reflection moves it
#[derive(Debug, Clone, Default)]
pub struct MotivationSystem {
    state: MotivationState,
}

impl MotivationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MotivationState {
        &self.state
    }

    pub fn apply_reflection(&mut self, reflection_score: f32) {
        self.state.socialize += 0.15 * reflection_score;
        self.state.help += 0.10 * reflection_score;
        self.state.avoid -= 0.12 * reflection_score;
        self.state.clamp();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_reflection_warms_up() {
        let mut motivation = MotivationSystem::new();
        motivation.apply_reflection(1.0);
        let s = motivation.state();
        assert!((s.socialize - 0.65).abs() < 1e-6);
        assert!((s.help - 0.50).abs() < 1e-6);
        assert!((s.avoid - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_negative_reflection_withdraws() {
        let mut motivation = MotivationSystem::new();
        motivation.apply_reflection(-1.0);
        let s = motivation.state();
        assert!(s.socialize < 0.5);
        assert!(s.avoid > 0.2);
        assert_eq!(motivation.state().dominant().0, DriveType::Socialize);
    }

    #[test]
    fn test_drives_stay_bounded() {
        let mut motivation = MotivationSystem::new();
        for _ in 0..20 {
            motivation.apply_reflection(-1.0);
        }
        let s = motivation.state();
        assert_eq!(s.socialize, 0.0);
        assert_eq!(s.help, 0.0);
        assert_eq!(s.avoid, 1.0);
        assert_eq!(s.dominant(), (DriveType::Avoid, 1.0));
    }
}
