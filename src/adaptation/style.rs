use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Social posture of a response. Discriminants double as Q-table action indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum InteractionStyle {
    Friendly = 0,
    #[default]
    Neutral = 1,
    Avoidant = 2,
    Boundary = 3,
}

impl InteractionStyle {
    pub const COUNT: usize = 4;

    pub const ALL: [InteractionStyle; Self::COUNT] = [
        InteractionStyle::Friendly,
        InteractionStyle::Neutral,
        InteractionStyle::Avoidant,
        InteractionStyle::Boundary,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Out-of-range indices map to Neutral
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(InteractionStyle::Neutral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for style in InteractionStyle::ALL {
            assert_eq!(InteractionStyle::from_index(style.index()), style);
        }
        assert_eq!(InteractionStyle::from_index(17), InteractionStyle::Neutral);
    }

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(InteractionStyle::default(), InteractionStyle::Neutral);
    }

    #[test]
    fn test_display() {
        assert_eq!(InteractionStyle::Boundary.to_string(), "Boundary");
    }
}
