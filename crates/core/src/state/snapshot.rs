use super::GameState;
use crate::{Card, ConfigError, Deck, Goal, PatternCatalog, RngState, RuleTier};
use serde::{Deserialize, Serialize};

/// Flat, serializable form of a session. Restoring it yields a state with
/// the same legal moves and goal progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub total_moves: u32,
    pub moves_remaining: u32,
    pub score: i64,
    pub level_name: String,
    pub deck_description: String,
    #[serde(default)]
    pub rule_tier: RuleTier,
    pub hand: Vec<Card>,
    pub draw_pile: Vec<Card>,
    pub discard_pile: Vec<Card>,
    pub goals: Vec<Goal>,
    /// `None` means the full standard catalog.
    #[serde(default)]
    pub allowed_patterns: Option<Vec<String>>,
}

impl GameState {
    pub fn snapshot(&self) -> SessionSnapshot {
        let allowed_patterns = if self.catalog == PatternCatalog::standard() {
            None
        } else {
            Some(self.catalog.ids())
        };
        SessionSnapshot {
            total_moves: self.total_moves,
            moves_remaining: self.moves_remaining,
            score: self.score,
            level_name: self.level_name.clone(),
            deck_description: self.deck_description.clone(),
            rule_tier: self.rule_tier,
            hand: self.hand.clone(),
            draw_pile: self.deck.draw_pile().copied().collect(),
            discard_pile: self.deck.discard_pile().to_vec(),
            goals: self.goals.clone(),
            allowed_patterns,
        }
    }

    pub fn restore(snapshot: SessionSnapshot, rng: RngState) -> Result<Self, ConfigError> {
        if snapshot.moves_remaining > snapshot.total_moves {
            return Err(ConfigError::MovesExceedTotal {
                remaining: snapshot.moves_remaining,
                total: snapshot.total_moves,
            });
        }
        if snapshot.goals.is_empty() {
            return Err(ConfigError::NoGoals(snapshot.level_name));
        }
        if let Some(goal) = snapshot.goals.iter().find(|goal| goal.required == 0) {
            return Err(ConfigError::ZeroRequirement(goal.goal_type));
        }
        let catalog = PatternCatalog::with_allowed(snapshot.allowed_patterns.as_deref())?;
        let mut state = Self {
            level_name: snapshot.level_name,
            deck_description: snapshot.deck_description,
            rule_tier: snapshot.rule_tier,
            catalog,
            rng,
            deck: Deck::from_piles(snapshot.draw_pile, snapshot.discard_pile),
            hand: snapshot.hand,
            goals: snapshot.goals,
            score: snapshot.score,
            moves_remaining: snapshot.moves_remaining,
            total_moves: snapshot.total_moves,
            reported: None,
        };
        let status = state.status();
        state.reported = status.is_terminal().then_some(status);
        Ok(state)
    }
}
