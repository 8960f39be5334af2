use crate::{
    Card, ConfigError, Deck, Event, EventBus, Goal, LevelConfig, PatternCatalog, RngState,
    RuleTier,
};
use serde::{Deserialize, Serialize};
use tracing::info;

mod actions;
mod hints;
mod snapshot;

pub use hints::Hint;
pub use snapshot::SessionSnapshot;

/// Hand size above which the player must discard before drawing again.
pub const MAX_HAND_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LevelStatus {
    InProgress,
    MustDiscard,
    Complete,
    Failed,
}

impl LevelStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, LevelStatus::Complete | LevelStatus::Failed)
    }
}

/// One level's mutable session. Every mutating operation either applies in
/// full and returns success, or changes nothing and returns failure.
#[derive(Debug, Clone)]
pub struct GameState {
    level_name: String,
    deck_description: String,
    rule_tier: RuleTier,
    catalog: PatternCatalog,
    rng: RngState,
    deck: Deck,
    hand: Vec<Card>,
    goals: Vec<Goal>,
    score: i64,
    moves_remaining: u32,
    total_moves: u32,
    reported: Option<LevelStatus>,
}

impl GameState {
    pub fn new(level: &LevelConfig, mut rng: RngState) -> Result<Self, ConfigError> {
        level.validate()?;
        let catalog = PatternCatalog::with_allowed(level.allowed_patterns.as_deref())?;

        let mut deck = Deck::default();
        deck.reset(&mut rng);
        deck.apply_tweaks(&level.deck, &mut rng);
        if !level.rule_tier.allows_jokers() {
            deck.remove_jokers();
        }

        let goals = level
            .goals
            .iter()
            .map(|spec| Goal::new(spec.goal, spec.required))
            .collect();

        info!(
            level = %level.name,
            moves = level.total_moves,
            tier = ?level.rule_tier,
            deck_size = deck.len(),
            "level started"
        );

        Ok(Self {
            level_name: level.name.clone(),
            deck_description: level.deck_description(),
            rule_tier: level.rule_tier,
            catalog,
            rng,
            deck,
            hand: Vec::new(),
            goals,
            score: 0,
            moves_remaining: level.total_moves,
            total_moves: level.total_moves,
            reported: None,
        })
    }

    /// Falls back to the built-in default level when no level is supplied.
    pub fn from_optional_level(
        level: Option<&LevelConfig>,
        rng: RngState,
    ) -> Result<Self, ConfigError> {
        match level {
            Some(level) => Self::new(level, rng),
            None => Self::new(&LevelConfig::default(), rng),
        }
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn deck_description(&self) -> &str {
        &self.deck_description
    }

    pub fn rule_tier(&self) -> RuleTier {
        self.rule_tier
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn must_discard(&self) -> bool {
        self.hand.len() > MAX_HAND_SIZE
    }

    pub fn can_draw(&self) -> bool {
        self.moves_remaining > 0 && !self.must_discard() && !self.deck.is_empty()
    }

    pub fn can_discard(&self) -> bool {
        !self.hand.is_empty() && self.moves_remaining > 0
    }

    pub fn is_level_complete(&self) -> bool {
        self.goals.iter().all(Goal::is_complete)
    }

    /// Out of moves with goals still open. Completion takes priority.
    pub fn is_level_failed(&self) -> bool {
        self.moves_remaining == 0 && !self.is_level_complete()
    }

    pub fn status(&self) -> LevelStatus {
        if self.is_level_complete() {
            LevelStatus::Complete
        } else if self.is_level_failed() {
            LevelStatus::Failed
        } else if self.must_discard() {
            LevelStatus::MustDiscard
        } else {
            LevelStatus::InProgress
        }
    }

    /// Moves forward through the tiers only. Entering a tier without
    /// jokers strips them from both piles.
    pub fn advance_rule_tier(&mut self, tier: RuleTier, events: &mut EventBus) -> bool {
        if tier <= self.rule_tier {
            return false;
        }
        let jokers_removed = if tier.allows_jokers() {
            0
        } else {
            self.deck.remove_jokers()
        };
        self.rule_tier = tier;
        self.deck_description = tier.default_deck_description().to_string();
        info!(tier = ?tier, jokers_removed, "rule tier advanced");
        events.push(Event::RuleTierChanged {
            tier,
            jokers_removed,
        });
        true
    }

    /// Emits the level outcome when it first becomes terminal. A free
    /// pattern play after the last move can still turn a failure into a
    /// completion, which is then reported too.
    fn report_outcome(&mut self, events: &mut EventBus) {
        let status = self.status();
        if !status.is_terminal() || self.reported == Some(LevelStatus::Complete) {
            return;
        }
        match status {
            LevelStatus::Complete => {
                info!(
                    level = %self.level_name,
                    score = self.score,
                    moves_remaining = self.moves_remaining,
                    "level complete"
                );
                events.push(Event::LevelCompleted {
                    score: self.score,
                    moves_remaining: self.moves_remaining,
                });
            }
            _ if self.reported.is_some() => return,
            _ => {
                info!(level = %self.level_name, score = self.score, "level failed");
                events.push(Event::LevelFailed { score: self.score });
            }
        }
        self.reported = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeckTweakSettings, GoalSpec, GoalType};

    #[test]
    fn falls_back_to_default_level() {
        let state = GameState::from_optional_level(None, RngState::from_seed(1)).unwrap();
        assert_eq!(state.level_name(), "Default");
        assert_eq!(state.total_moves(), 15);
        assert_eq!(state.goals()[0], Goal::new(GoalType::Pair, 2));
        assert_eq!(state.goals()[1], Goal::new(GoalType::Run3, 1));
        assert_eq!(state.deck().len(), 54);
        assert_eq!(state.status(), LevelStatus::InProgress);
    }

    #[test]
    fn rejects_unknown_allowed_pattern() {
        let level = LevelConfig {
            allowed_patterns: Some(vec!["Pair".to_string(), "Nope".to_string()]),
            ..LevelConfig::default()
        };
        let err = GameState::new(&level, RngState::from_seed(1)).unwrap_err();
        assert_eq!(err, ConfigError::UnknownPattern("Nope".to_string()));
    }

    #[test]
    fn mid_tier_level_has_no_jokers() {
        let level = LevelConfig {
            rule_tier: RuleTier::Mid,
            deck: DeckTweakSettings {
                extra_jokers: 3,
                ..DeckTweakSettings::default()
            },
            ..LevelConfig::default()
        };
        let state = GameState::new(&level, RngState::from_seed(1)).unwrap();
        assert_eq!(state.deck().len(), 52);
        assert!(state.deck().draw_pile().all(|card| !card.is_joker()));
    }

    #[test]
    fn tier_only_moves_forward() {
        let mut state = GameState::from_optional_level(None, RngState::from_seed(4)).unwrap();
        let mut events = EventBus::default();
        assert!(!state.advance_rule_tier(RuleTier::Tutorial, &mut events));
        assert!(state.advance_rule_tier(RuleTier::Mid, &mut events));
        assert_eq!(state.deck().len(), 52);
        assert_eq!(state.deck_description(), "Standard deck, no jokers");
        assert_eq!(
            events.events(),
            &[Event::RuleTierChanged {
                tier: RuleTier::Mid,
                jokers_removed: 2
            }]
        );
        assert!(!state.advance_rule_tier(RuleTier::Mid, &mut events));
    }

    #[test]
    fn goals_follow_level_order() {
        let level = LevelConfig {
            goals: vec![
                GoalSpec {
                    goal: GoalType::Flush,
                    required: 1,
                },
                GoalSpec {
                    goal: GoalType::TotalScore,
                    required: 200,
                },
            ],
            ..LevelConfig::default()
        };
        let state = GameState::new(&level, RngState::from_seed(2)).unwrap();
        let kinds: Vec<GoalType> = state.goals().iter().map(|goal| goal.goal_type).collect();
        assert_eq!(kinds, vec![GoalType::Flush, GoalType::TotalScore]);
    }
}
