use crate::Pattern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A goal family. Most families are met by several pattern ids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GoalType {
    Pair,
    ThreeOfKind,
    FourOfKind,
    Run3,
    Run4,
    Run5,
    SuitedRun3,
    SuitedRun4,
    SuitedRun5,
    Flush,
    FullHouse,
    RoyalFlush,
    SuitSet,
    ColorSet,
    TotalScore,
}

impl GoalType {
    pub fn matches(self, pattern: &Pattern) -> bool {
        match self {
            GoalType::Pair => matches!(pattern, Pattern::Pair),
            GoalType::ThreeOfKind => {
                matches!(pattern, Pattern::ThreeOfKind | Pattern::FourOfKind)
            }
            GoalType::FourOfKind => matches!(pattern, Pattern::FourOfKind),
            GoalType::Run3 => run_at_least(pattern, 3, false),
            GoalType::Run4 => run_at_least(pattern, 4, false),
            GoalType::Run5 => run_at_least(pattern, 5, false),
            GoalType::SuitedRun3 => run_at_least(pattern, 3, true),
            GoalType::SuitedRun4 => run_at_least(pattern, 4, true),
            GoalType::SuitedRun5 => run_at_least(pattern, 5, true),
            GoalType::Flush => matches!(pattern, Pattern::Flush | Pattern::RoyalFlush),
            GoalType::FullHouse => matches!(pattern, Pattern::FullHouse),
            GoalType::RoyalFlush => matches!(pattern, Pattern::RoyalFlush),
            GoalType::SuitSet => matches!(pattern, Pattern::SuitSet { .. }),
            GoalType::ColorSet => matches!(pattern, Pattern::ColorSet { .. }),
            GoalType::TotalScore => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GoalType::Pair => "Pairs",
            GoalType::ThreeOfKind => "Three of a Kind",
            GoalType::FourOfKind => "Four of a Kind",
            GoalType::Run3 => "Runs of 3+",
            GoalType::Run4 => "Runs of 4+",
            GoalType::Run5 => "Runs of 5+",
            GoalType::SuitedRun3 => "Suited Runs of 3+",
            GoalType::SuitedRun4 => "Suited Runs of 4+",
            GoalType::SuitedRun5 => "Suited Runs of 5+",
            GoalType::Flush => "Flushes",
            GoalType::FullHouse => "Full Houses",
            GoalType::RoyalFlush => "Royal Flushes",
            GoalType::SuitSet => "Suit Sets",
            GoalType::ColorSet => "Color Sets",
            GoalType::TotalScore => "Score",
        }
    }
}

fn run_at_least(pattern: &Pattern, length: u8, suited_only: bool) -> bool {
    match *pattern {
        Pattern::SuitedRun { min_len } => min_len >= length,
        Pattern::StraightRun { min_len } => !suited_only && min_len >= length,
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub required: u32,
    pub current: u32,
}

impl Goal {
    pub fn new(goal_type: GoalType, required: u32) -> Self {
        Self {
            goal_type,
            required,
            current: 0,
        }
    }

    pub fn matches_pattern(&self, pattern: &Pattern) -> bool {
        self.goal_type.matches(pattern)
    }

    /// No upper clamp: completion is `current >= required`.
    pub fn increment(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount);
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.required
    }

    pub fn remaining(&self) -> u32 {
        self.required.saturating_sub(self.current)
    }

    /// Applies one played pattern. Score goals track the running score even
    /// once complete. Returns whether `current` changed.
    pub fn record_play(&mut self, pattern: &Pattern, running_score: i64) -> bool {
        if self.goal_type == GoalType::TotalScore {
            let score = u32::try_from(running_score.max(0)).unwrap_or(u32::MAX);
            let changed = self.current != score;
            self.current = score;
            return changed;
        }
        if self.matches_pattern(pattern) {
            self.increment(1);
            return true;
        }
        false
    }

    pub fn describe(&self) -> String {
        format!(
            "{} {}/{}",
            self.goal_type.label(),
            self.current.min(self.required),
            self.required
        )
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
