use crate::catalog::highest_score;
use crate::{Goal, ScoredPattern};

/// Picks the pattern to play for one selection. Patterns that advance an
/// incomplete goal win over higher-scoring ones that do not; within each
/// group the highest score wins and ties keep the earlier candidate.
pub fn select_pattern(candidates: &[ScoredPattern], goals: &[Goal]) -> Option<ScoredPattern> {
    let relevant: Vec<&ScoredPattern> = candidates
        .iter()
        .filter(|candidate| advances_goal(candidate, goals))
        .collect();
    if relevant.is_empty() {
        return highest_score(candidates.iter());
    }
    highest_score(relevant.into_iter())
}

pub fn advances_goal(candidate: &ScoredPattern, goals: &[Goal]) -> bool {
    goals
        .iter()
        .any(|goal| !goal.is_complete() && goal.matches_pattern(&candidate.pattern))
}
