use super::GameState;
use crate::{advances_goal, select_pattern, Card, Pattern};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

const MIN_HINT_CARDS: usize = 2;
const MAX_HINT_CARDS: usize = 5;

/// A playable selection from the current hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub indices: Vec<usize>,
    pub pattern: Pattern,
    pub score: i64,
    pub advances_goal: bool,
}

impl GameState {
    /// Playable selections of 2 to 5 cards, goal-advancing first, then by
    /// score.
    pub fn hints(&self, limit: usize) -> Vec<Hint> {
        let mut combos = Vec::new();
        for size in MIN_HINT_CARDS..=MAX_HINT_CARDS {
            enumerate_combinations(self.hand.len(), size, &mut combos);
        }
        let mut hints = Vec::new();
        for indices in combos {
            let cards: Vec<Card> = indices.iter().map(|&i| self.hand[i]).collect();
            let candidates = self.catalog.detect_scored(&cards);
            let Some(chosen) = select_pattern(&candidates, &self.goals) else {
                continue;
            };
            hints.push(Hint {
                indices,
                pattern: chosen.pattern,
                score: chosen.score,
                advances_goal: advances_goal(&chosen, &self.goals),
            });
        }
        hints.sort_by_key(|hint| (Reverse(hint.advances_goal), Reverse(hint.score)));
        hints.truncate(limit);
        hints
    }
}

fn enumerate_combinations(n: usize, k: usize, out: &mut Vec<Vec<usize>>) {
    if n == 0 || k == 0 || k > n {
        return;
    }
    let mut current = Vec::with_capacity(k);
    recurse_combinations(0, n, k, &mut current, out);
}

fn recurse_combinations(
    start: usize,
    n: usize,
    k: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    let max_idx = n - (k - current.len());
    for idx in start..=max_idx {
        current.push(idx);
        recurse_combinations(idx + 1, n, k, current, out);
        current.pop();
    }
}
