use cardpattern_core::{
    Card, DrawSource, Event, EventBus, GameState, Hint, LevelStatus, ScoreBreakdown,
};

pub fn print_help() {
    println!("commands:");
    println!("  hand | h              show the hand with indices");
    println!("  goals | g             show goal progress");
    println!("  status | s            level, moves, score and piles");
    println!("  draw [n] | d [n]      draw n cards from the stock (one move)");
    println!("  take | t              take the top discard (one move)");
    println!("  discard i.. | x i..   discard cards by index (one move)");
    println!("  play i.. [pattern]    play cards as a pattern (free)");
    println!("  detect i..            list patterns the cards form");
    println!("  hint                  suggest playable selections");
    println!("  tier <early|mid>      advance the rule tier");
    println!("  save FILE             write the session to FILE");
    println!("  quit | q              leave");
}

pub fn print_hand(state: &GameState) {
    println!("== Hand == ({} cards)", state.hand().len());
    for (idx, card) in state.hand().iter().enumerate() {
        println!("{idx:>4}  {:<6} {}", card.to_string(), card.code());
    }
    if state.must_discard() {
        println!("hand is over the limit: discard before drawing");
    }
}

pub fn print_goals(state: &GameState) {
    println!("== Goals ==");
    for goal in state.goals() {
        let mark = if goal.is_complete() { "x" } else { " " };
        println!("  [{mark}] {}", goal.describe());
    }
}

pub fn print_status(state: &GameState) {
    println!(
        "level: {} | tier {:?} | {}",
        state.level_name(),
        state.rule_tier(),
        state.deck_description()
    );
    println!(
        "moves {}/{} | score {} | stock {} | discard {} (top {})",
        state.moves_remaining(),
        state.total_moves(),
        state.score(),
        state.deck().draw_len(),
        state.deck().discard_len(),
        state
            .deck()
            .top_discard()
            .map(Card::to_string)
            .unwrap_or_else(|| "-".to_string())
    );
    println!("status: {}", status_label(state.status()));
}

pub fn print_breakdown(breakdown: &ScoreBreakdown) {
    let mut line = format!(
        "  {:<16} base {} + length {}",
        breakdown.pattern.name(),
        breakdown.base,
        breakdown.length_bonus
    );
    if breakdown.joker_bonus {
        line.push_str(" x1.5 joker");
    }
    if breakdown.face_bonus {
        line.push_str(" x2 faces");
    }
    if breakdown.rainbow_bonus {
        line.push_str(" x1.2 rainbow");
    }
    line.push_str(&format!(" = {}", breakdown.total));
    println!("{line}");
}

pub fn print_hints(state: &GameState, hints: &[Hint]) {
    if hints.is_empty() {
        println!("no playable selection in hand");
        return;
    }
    for hint in hints {
        let cards: Vec<String> = hint
            .indices
            .iter()
            .map(|&idx| state.hand()[idx].to_string())
            .collect();
        let goal = if hint.advances_goal { " (goal)" } else { "" };
        let indices: Vec<String> = hint.indices.iter().map(usize::to_string).collect();
        println!(
            "  play {} {}  -> {} for {}{}   [{}]",
            indices.join(" "),
            hint.pattern.id(),
            hint.pattern.name(),
            hint.score,
            goal,
            cards.join(" ")
        );
    }
}

pub fn drain_events(events: &mut EventBus) {
    for event in events.drain() {
        println!("event: {}", format_event(&event));
    }
}

pub fn format_event(event: &Event) -> String {
    match event {
        Event::CardDrawn { card, source } => match source {
            DrawSource::Stock => format!("drew {card} from the stock"),
            DrawSource::Discard => format!("took {card} from the discard pile"),
        },
        Event::CardDiscarded { card } => format!("discarded {card}"),
        Event::PatternPlayed { pattern, score } => format!("played {pattern} for {score}"),
        Event::ScoreChanged { score } => format!("score {score}"),
        Event::GoalUpdated { goal, .. } => format!("goal {}", goal.describe()),
        Event::HandChanged { size } => format!("hand size {size}"),
        Event::MovesChanged { remaining } => format!("moves remaining {remaining}"),
        Event::RuleTierChanged {
            tier,
            jokers_removed,
        } => format!("rule tier {tier:?}, {jokers_removed} jokers removed"),
        Event::LevelCompleted {
            score,
            moves_remaining,
        } => format!("level complete: score {score} with {moves_remaining} moves left"),
        Event::LevelFailed { score } => format!("level failed: score {score}"),
    }
}

fn status_label(status: LevelStatus) -> &'static str {
    match status {
        LevelStatus::InProgress => "in progress",
        LevelStatus::MustDiscard => "must discard",
        LevelStatus::Complete => "complete",
        LevelStatus::Failed => "failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardpattern_core::{Goal, GoalType, Pattern};

    #[test]
    fn formats_gameplay_events() {
        let card: Card = "7H".parse().unwrap();
        assert_eq!(
            format_event(&Event::CardDrawn {
                card,
                source: DrawSource::Discard
            }),
            "took 7♥ from the discard pile"
        );
        let mut goal = Goal::new(GoalType::Pair, 2);
        goal.increment(1);
        assert_eq!(
            format_event(&Event::GoalUpdated { index: 0, goal }),
            "goal Pairs 1/2"
        );
        assert_eq!(
            format_event(&Event::PatternPlayed {
                pattern: Pattern::Pair,
                score: 12
            }),
            format!("played {} for 12", Pattern::Pair.name())
        );
    }
}
