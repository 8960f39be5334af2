use super::{GameState, MAX_HAND_SIZE};
use crate::{select_pattern, Card, DrawSource, Event, EventBus, Pattern, ScoredPattern};
use tracing::debug;

impl GameState {
    /// Fills the hand up to the maximum without spending moves.
    pub fn deal_initial_hand(&mut self, events: &mut EventBus) -> usize {
        let mut dealt = 0;
        while self.hand.len() < MAX_HAND_SIZE {
            let Some(card) = self.deck.draw_from_stock() else {
                break;
            };
            self.hand.push(card);
            events.push(Event::CardDrawn {
                card,
                source: DrawSource::Stock,
            });
            dealt += 1;
        }
        if dealt > 0 {
            events.push(Event::HandChanged {
                size: self.hand.len(),
            });
        }
        debug!(dealt, "initial hand dealt");
        dealt
    }

    pub fn draw_from_stock(&mut self, consume_move: bool, events: &mut EventBus) -> bool {
        self.draw_one(DrawSource::Stock, consume_move, events)
    }

    pub fn draw_from_discard(&mut self, consume_move: bool, events: &mut EventBus) -> bool {
        self.draw_one(DrawSource::Discard, consume_move, events)
    }

    /// Draws up to `count` cards for a single move. Stops at the first
    /// failed draw or once the hand is over the limit.
    pub fn draw_cards(&mut self, count: usize, from_discard: bool, events: &mut EventBus) -> bool {
        if self.moves_remaining == 0 {
            debug!(count, "batch draw rejected: no moves left");
            return false;
        }
        let source = if from_discard {
            DrawSource::Discard
        } else {
            DrawSource::Stock
        };
        let mut drawn = 0;
        for _ in 0..count {
            if self.must_discard() || !self.draw_one(source, false, events) {
                break;
            }
            drawn += 1;
        }
        if drawn == 0 {
            return false;
        }
        self.spend_move(events);
        true
    }

    /// Discards any number of cards for one move.
    pub fn discard_cards(&mut self, cards: &[Card], events: &mut EventBus) -> bool {
        if cards.is_empty() || self.moves_remaining == 0 {
            debug!(
                selected = cards.len(),
                moves_remaining = self.moves_remaining,
                "discard rejected"
            );
            return false;
        }
        let Some(remaining) = without_cards(&self.hand, cards) else {
            debug!("discard rejected: cards not in hand");
            return false;
        };
        self.hand = remaining;
        for card in cards {
            self.deck.add_to_discard(*card);
            events.push(Event::CardDiscarded { card: *card });
        }
        events.push(Event::HandChanged {
            size: self.hand.len(),
        });
        debug!(discarded = cards.len(), "cards discarded");
        self.spend_move(events);
        true
    }

    pub fn discard_selection(&mut self, indices: &[usize], events: &mut EventBus) -> bool {
        match self.resolve_selection(indices) {
            Some(cards) => self.discard_cards(&cards, events),
            None => false,
        }
    }

    /// Plays `cards` as `pattern`. Costs no moves.
    pub fn play_pattern(&mut self, cards: &[Card], pattern: &Pattern, events: &mut EventBus) -> bool {
        if !self.catalog.contains(pattern) || !pattern.validate(cards) {
            debug!(pattern = %pattern.id(), "play rejected: pattern not valid here");
            return false;
        }
        let Some(remaining) = without_cards(&self.hand, cards) else {
            debug!(pattern = %pattern.id(), "play rejected: cards not in hand");
            return false;
        };
        let points = pattern.calculate_score(cards);
        self.hand = remaining;
        self.score += points;
        events.push(Event::PatternPlayed {
            pattern: *pattern,
            score: points,
        });
        events.push(Event::ScoreChanged { score: self.score });
        for (index, goal) in self.goals.iter_mut().enumerate() {
            if goal.record_play(pattern, self.score) {
                events.push(Event::GoalUpdated {
                    index,
                    goal: *goal,
                });
            }
        }
        events.push(Event::HandChanged {
            size: self.hand.len(),
        });
        debug!(pattern = %pattern.id(), points, score = self.score, "pattern played");
        self.report_outcome(events);
        true
    }

    /// Detects every enabled pattern for the selected cards and plays the
    /// goal-aware best one.
    pub fn play_selection(
        &mut self,
        indices: &[usize],
        events: &mut EventBus,
    ) -> Option<ScoredPattern> {
        let cards = self.resolve_selection(indices)?;
        let candidates = self.catalog.detect_scored(&cards);
        let chosen = select_pattern(&candidates, &self.goals)?;
        self.play_pattern(&cards, &chosen.pattern, events)
            .then_some(chosen)
    }

    pub fn play_selection_as(
        &mut self,
        indices: &[usize],
        pattern: &Pattern,
        events: &mut EventBus,
    ) -> bool {
        match self.resolve_selection(indices) {
            Some(cards) => self.play_pattern(&cards, pattern, events),
            None => false,
        }
    }

    /// Scored patterns the selected cards satisfy, in catalog order.
    pub fn detect_selection(&self, indices: &[usize]) -> Vec<ScoredPattern> {
        self.resolve_selection(indices)
            .map(|cards| self.catalog.detect_scored(&cards))
            .unwrap_or_default()
    }

    /// Maps hand indices to cards. Repeated or out-of-range indices reject
    /// the whole selection.
    pub fn resolve_selection(&self, indices: &[usize]) -> Option<Vec<Card>> {
        if indices.is_empty() {
            return None;
        }
        let mut seen = Vec::with_capacity(indices.len());
        for &idx in indices {
            if idx >= self.hand.len() || seen.contains(&idx) {
                return None;
            }
            seen.push(idx);
        }
        Some(indices.iter().map(|&idx| self.hand[idx]).collect())
    }

    fn draw_one(&mut self, source: DrawSource, consume_move: bool, events: &mut EventBus) -> bool {
        if self.must_discard() {
            debug!(?source, "draw rejected: must discard first");
            return false;
        }
        if consume_move && self.moves_remaining == 0 {
            debug!(?source, "draw rejected: no moves left");
            return false;
        }
        let drawn = match source {
            DrawSource::Stock => self.deck.draw_from_stock(),
            DrawSource::Discard => self.deck.draw_from_discard(),
        };
        let Some(card) = drawn else {
            debug!(?source, "draw rejected: pile empty");
            return false;
        };
        self.hand.push(card);
        events.push(Event::CardDrawn { card, source });
        events.push(Event::HandChanged {
            size: self.hand.len(),
        });
        debug!(%card, ?source, hand = self.hand.len(), "card drawn");
        if consume_move {
            self.spend_move(events);
        }
        true
    }

    fn spend_move(&mut self, events: &mut EventBus) {
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        events.push(Event::MovesChanged {
            remaining: self.moves_remaining,
        });
        self.report_outcome(events);
    }
}

/// Removes one copy of each selected card, or `None` if any is missing.
fn without_cards(hand: &[Card], cards: &[Card]) -> Option<Vec<Card>> {
    let mut remaining = hand.to_vec();
    for card in cards {
        let pos = remaining.iter().position(|held| held == card)?;
        remaining.remove(pos);
    }
    Some(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_cards_respects_multiplicity() {
        let hand = [Card::JOKER, Card::JOKER];
        assert_eq!(without_cards(&hand, &[Card::JOKER]), Some(vec![Card::JOKER]));
        assert_eq!(
            without_cards(&hand, &[Card::JOKER, Card::JOKER, Card::JOKER]),
            None
        );
    }
}
