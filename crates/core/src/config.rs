use crate::{Card, GoalType, Rank, Suit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TOTAL_MOVES: u32 = 15;

/// Setup failures. Gameplay rule failures never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("level {0:?} grants no moves")]
    ZeroMoves(String),
    #[error("level {0:?} has no goals")]
    NoGoals(String),
    #[error("goal {0:?} requires zero progress")]
    ZeroRequirement(GoalType),
    #[error("unknown pattern id {0:?}")]
    UnknownPattern(String),
    #[error("pattern allow-list enables no patterns")]
    EmptyCatalog,
    #[error("moves remaining ({remaining}) exceed total moves ({total})")]
    MovesExceedTotal { remaining: u32, total: u32 },
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleTier {
    Tutorial,
    #[default]
    Early,
    Mid,
}

impl RuleTier {
    pub fn allows_jokers(self) -> bool {
        !matches!(self, RuleTier::Mid)
    }

    pub fn default_deck_description(self) -> &'static str {
        match self {
            RuleTier::Tutorial => "Tutorial deck",
            RuleTier::Early => "Standard deck with jokers",
            RuleTier::Mid => "Standard deck, no jokers",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardCount {
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default = "one")]
    pub count: u32,
}

impl CardCount {
    pub fn card(&self) -> Card {
        Card::standard(self.suit, self.rank)
    }
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeckTweakSettings {
    pub extra_jokers: u32,
    pub shuffle_after_tweaks: bool,
    pub use_deterministic_shuffle: bool,
    pub shuffle_seed: u64,
    pub additional_cards: Vec<CardCount>,
    /// Replaces the standard pile when non-empty.
    pub preset_draw_pile: Vec<Card>,
}

impl Default for DeckTweakSettings {
    fn default() -> Self {
        Self {
            extra_jokers: 0,
            shuffle_after_tweaks: true,
            use_deterministic_shuffle: false,
            shuffle_seed: 0,
            additional_cards: Vec::new(),
            preset_draw_pile: Vec::new(),
        }
    }
}

impl DeckTweakSettings {
    pub fn seeded(seed: u64) -> Self {
        Self {
            use_deterministic_shuffle: true,
            shuffle_seed: seed,
            ..Self::default()
        }
    }

    /// Curated pile drawn in exactly the given order.
    pub fn preset(cards: Vec<Card>) -> Self {
        Self {
            shuffle_after_tweaks: false,
            preset_draw_pile: cards,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalSpec {
    pub goal: GoalType,
    pub required: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelConfig {
    pub name: String,
    pub total_moves: u32,
    pub goals: Vec<GoalSpec>,
    #[serde(default)]
    pub allowed_patterns: Option<Vec<String>>,
    #[serde(default)]
    pub deck: DeckTweakSettings,
    #[serde(default)]
    pub rule_tier: RuleTier,
    #[serde(default)]
    pub deck_description: Option<String>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            total_moves: DEFAULT_TOTAL_MOVES,
            goals: vec![
                GoalSpec {
                    goal: GoalType::Pair,
                    required: 2,
                },
                GoalSpec {
                    goal: GoalType::Run3,
                    required: 1,
                },
            ],
            allowed_patterns: None,
            deck: DeckTweakSettings::default(),
            rule_tier: RuleTier::Early,
            deck_description: None,
        }
    }
}

impl LevelConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_moves == 0 {
            return Err(ConfigError::ZeroMoves(self.name.clone()));
        }
        if self.goals.is_empty() {
            return Err(ConfigError::NoGoals(self.name.clone()));
        }
        if let Some(spec) = self.goals.iter().find(|spec| spec.required == 0) {
            return Err(ConfigError::ZeroRequirement(spec.goal));
        }
        Ok(())
    }

    pub fn deck_description(&self) -> String {
        self.deck_description
            .clone()
            .unwrap_or_else(|| self.rule_tier.default_deck_description().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_valid() {
        let level = LevelConfig::default();
        assert_eq!(level.total_moves, 15);
        assert_eq!(level.goals.len(), 2);
        assert!(level.validate().is_ok());
    }

    #[test]
    fn rejects_zero_moves_and_zero_requirements() {
        let mut level = LevelConfig::default();
        level.total_moves = 0;
        assert!(matches!(level.validate(), Err(ConfigError::ZeroMoves(_))));

        let mut level = LevelConfig::default();
        level.goals[1].required = 0;
        assert_eq!(
            level.validate(),
            Err(ConfigError::ZeroRequirement(GoalType::Run3))
        );
    }

    #[test]
    fn tweak_settings_default_when_omitted() {
        let level: LevelConfig = serde_json::from_str(
            r#"{"name": "L", "total_moves": 3, "goals": [{"goal": "Pair", "required": 1}]}"#,
        )
        .unwrap();
        assert!(level.deck.shuffle_after_tweaks);
        assert!(level.allowed_patterns.is_none());
        assert_eq!(level.rule_tier, RuleTier::Early);
    }

    #[test]
    fn additional_card_count_defaults_to_one() {
        let tweak: DeckTweakSettings = serde_json::from_str(
            r#"{"additional_cards": [{"suit": "Hearts", "rank": "Ace"}], "preset_draw_pile": ["KS"]}"#,
        )
        .unwrap();
        assert_eq!(tweak.additional_cards[0].count, 1);
        assert_eq!(tweak.preset_draw_pile.len(), 1);
    }
}
