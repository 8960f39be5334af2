use crate::{Card, Goal, Pattern, RuleTier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawSource {
    Stock,
    Discard,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CardDrawn { card: Card, source: DrawSource },
    CardDiscarded { card: Card },
    PatternPlayed { pattern: Pattern, score: i64 },
    ScoreChanged { score: i64 },
    GoalUpdated { index: usize, goal: Goal },
    HandChanged { size: usize },
    MovesChanged { remaining: u32 },
    RuleTierChanged { tier: RuleTier, jokers_removed: usize },
    LevelCompleted { score: i64, moves_remaining: u32 },
    LevelFailed { score: i64 },
}

/// Notifications collected during an operation, in emission order.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn events(&self) -> &[Event] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
