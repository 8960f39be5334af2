use crate::{Card, DeckTweakSettings, Rank, RngState, Suit};
use rand::seq::SliceRandom;
use rand::RngCore;
use std::collections::VecDeque;

pub const STANDARD_JOKERS: usize = 2;

/// Draw pile (front is the next draw) and discard pile (back is the most
/// recent discard).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deck {
    draw: VecDeque<Card>,
    discard: Vec<Card>,
}

impl Deck {
    /// 52 ranked cards plus two jokers, unshuffled.
    pub fn standard() -> Self {
        let mut draw = VecDeque::with_capacity(52 + STANDARD_JOKERS);
        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                draw.push_back(Card::standard(suit, rank));
            }
        }
        for _ in 0..STANDARD_JOKERS {
            draw.push_back(Card::JOKER);
        }
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn from_piles(draw: Vec<Card>, discard: Vec<Card>) -> Self {
        Self {
            draw: draw.into(),
            discard,
        }
    }

    pub fn reset<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::standard();
        self.shuffle(rng);
    }

    pub fn shuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        self.draw.make_contiguous().shuffle(rng);
    }

    /// One-time level setup. A deterministic shuffle first puts the pile in
    /// canonical order so equal seeds yield equal draw sequences no matter
    /// how the pile was ordered before.
    pub fn apply_tweaks(&mut self, settings: &DeckTweakSettings, rng: &mut RngState) {
        if settings.preset_draw_pile.is_empty() {
            for _ in 0..settings.extra_jokers {
                self.draw.push_back(Card::JOKER);
            }
            for extra in &settings.additional_cards {
                for _ in 0..extra.count {
                    self.draw.push_back(extra.card());
                }
            }
        } else {
            self.draw = settings.preset_draw_pile.iter().copied().collect();
            self.discard.clear();
        }

        if !settings.shuffle_after_tweaks {
            return;
        }
        if settings.use_deterministic_shuffle {
            self.draw.make_contiguous().sort();
            rng.reseed(settings.shuffle_seed);
        }
        self.shuffle(rng);
    }

    pub fn draw_from_stock(&mut self) -> Option<Card> {
        self.draw.pop_front()
    }

    pub fn draw_from_discard(&mut self) -> Option<Card> {
        self.discard.pop()
    }

    pub fn add_to_discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Strips every joker from both piles without reshuffling. Returns how
    /// many were removed.
    pub fn remove_jokers(&mut self) -> usize {
        let before = self.len();
        self.draw.retain(|card| !card.is_joker());
        self.discard.retain(|card| !card.is_joker());
        before - self.len()
    }

    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> + '_ {
        self.draw.iter()
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    pub fn top_discard(&self) -> Option<&Card> {
        self.discard.last()
    }

    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw.is_empty() && self.discard.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardCount;

    fn count_suit(deck: &Deck, suit: Suit) -> usize {
        deck.draw_pile().filter(|card| card.suit() == suit).count()
    }

    #[test]
    fn reset_builds_54_cards() {
        let mut deck = Deck::default();
        deck.reset(&mut RngState::from_seed(1));
        assert_eq!(deck.len(), 54);
        assert_eq!(count_suit(&deck, Suit::Joker), 2);
        for suit in Suit::STANDARD {
            assert_eq!(count_suit(&deck, suit), 13);
        }
    }

    #[test]
    fn shuffle_permutes_reproducibly() {
        let mut first = Deck::standard();
        first.shuffle(&mut RngState::from_seed(42));
        let mut second = Deck::standard();
        second.shuffle(&mut RngState::from_seed(42));
        assert_eq!(first, second);
        assert_ne!(first, Deck::standard());

        let mut shuffled: Vec<Card> = first.draw_pile().copied().collect();
        let mut original: Vec<Card> = Deck::standard().draw_pile().copied().collect();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn discard_is_last_in_first_out() {
        let mut deck = Deck::from_piles(Vec::new(), Vec::new());
        let ace = Card::standard(Suit::Hearts, Rank::Ace);
        let king = Card::standard(Suit::Spades, Rank::King);
        deck.add_to_discard(ace);
        deck.add_to_discard(king);
        assert_eq!(deck.draw_from_discard(), Some(king));
        assert_eq!(deck.draw_from_discard(), Some(ace));
        assert_eq!(deck.draw_from_discard(), None);
        assert_eq!(deck.draw_from_stock(), None);
    }

    #[test]
    fn tweaks_add_jokers_and_cards() {
        let mut rng = RngState::from_seed(3);
        let mut deck = Deck::standard();
        let settings = DeckTweakSettings {
            extra_jokers: 2,
            additional_cards: vec![CardCount {
                suit: Suit::Hearts,
                rank: Rank::Seven,
                count: 3,
            }],
            ..DeckTweakSettings::default()
        };
        deck.apply_tweaks(&settings, &mut rng);
        assert_eq!(deck.len(), 59);
        assert_eq!(count_suit(&deck, Suit::Joker), 4);
        let sevens = deck
            .draw_pile()
            .filter(|card| **card == Card::standard(Suit::Hearts, Rank::Seven))
            .count();
        assert_eq!(sevens, 4);
    }

    #[test]
    fn unshuffled_tweaks_append_in_order() {
        let mut rng = RngState::from_seed(3);
        let mut deck = Deck::from_piles(vec![Card::standard(Suit::Clubs, Rank::Two)], Vec::new());
        let settings = DeckTweakSettings {
            extra_jokers: 1,
            shuffle_after_tweaks: false,
            ..DeckTweakSettings::default()
        };
        deck.apply_tweaks(&settings, &mut rng);
        assert_eq!(deck.draw_from_stock(), Some(Card::standard(Suit::Clubs, Rank::Two)));
        assert_eq!(deck.draw_from_stock(), Some(Card::JOKER));
    }

    #[test]
    fn remove_jokers_keeps_order() {
        let two = Card::standard(Suit::Clubs, Rank::Two);
        let three = Card::standard(Suit::Clubs, Rank::Three);
        let mut deck = Deck::from_piles(
            vec![Card::JOKER, two, Card::JOKER, three],
            vec![Card::JOKER],
        );
        assert_eq!(deck.remove_jokers(), 3);
        assert_eq!(deck.draw_pile().copied().collect::<Vec<_>>(), vec![two, three]);
        assert!(deck.discard_pile().is_empty());
    }
}
