use crate::pattern::{is_rainbow, split_jokers};
use crate::{Card, Pattern};
use serde::{Deserialize, Serialize};

pub const LENGTH_BONUS_PER_CARD: i64 = 10;

/// How a pattern's score was reached. Multipliers apply in field order and
/// truncate after each step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub pattern: Pattern,
    pub base: i64,
    pub length_bonus: i64,
    pub joker_bonus: bool,
    pub face_bonus: bool,
    pub rainbow_bonus: bool,
    pub total: i64,
}

impl Pattern {
    pub fn score_breakdown(&self, cards: &[Card]) -> ScoreBreakdown {
        let (jokers, ranked) = split_jokers(cards);
        let base = self.base_points();
        let length_bonus = self
            .minimum_length()
            .map(|min| cards.len().saturating_sub(min) as i64 * LENGTH_BONUS_PER_CARD)
            .unwrap_or(0);

        let joker_bonus = jokers > 0;
        let face_bonus = !ranked.is_empty() && ranked.iter().all(Card::is_face_card);
        let rainbow_bonus = is_rainbow(&ranked);

        let mut total = base + length_bonus;
        if joker_bonus {
            total = total * 3 / 2;
        }
        if face_bonus {
            total *= 2;
        }
        if rainbow_bonus {
            total = total * 6 / 5;
        }

        ScoreBreakdown {
            pattern: *self,
            base,
            length_bonus,
            joker_bonus,
            face_bonus,
            rainbow_bonus,
            total,
        }
    }

    pub fn calculate_score(&self, cards: &[Card]) -> i64 {
        self.score_breakdown(cards).total
    }
}

/// A pattern paired with the score it earns for one particular selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPattern {
    pub pattern: Pattern,
    pub score: i64,
}
