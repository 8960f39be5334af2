use crate::{Card, Suit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SET_LENGTH: u8 = 3;
const MIN_RUN_LENGTH: u8 = 3;
const FULL_HOUSE_SIZE: usize = 5;
const ROYAL_RANKS: [u8; 5] = [1, 10, 11, 12, 13];

/// A scoring rule. Length-variable kinds carry their minimum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Pattern {
    Pair,
    ThreeOfKind,
    FourOfKind,
    SuitedRun { min_len: u8 },
    StraightRun { min_len: u8 },
    Flush,
    FullHouse,
    RoyalFlush,
    SuitSet { min_len: u8 },
    ColorSet { min_len: u8 },
}

impl Pattern {
    /// Every built-in pattern in catalog order.
    pub const STANDARD: [Pattern; 14] = [
        Pattern::Pair,
        Pattern::ThreeOfKind,
        Pattern::FourOfKind,
        Pattern::SuitedRun { min_len: 3 },
        Pattern::SuitedRun { min_len: 4 },
        Pattern::SuitedRun { min_len: 5 },
        Pattern::StraightRun { min_len: 3 },
        Pattern::StraightRun { min_len: 4 },
        Pattern::StraightRun { min_len: 5 },
        Pattern::Flush,
        Pattern::FullHouse,
        Pattern::RoyalFlush,
        Pattern::SuitSet {
            min_len: DEFAULT_SET_LENGTH,
        },
        Pattern::ColorSet {
            min_len: DEFAULT_SET_LENGTH,
        },
    ];

    pub fn id(&self) -> String {
        match *self {
            Pattern::Pair => "Pair".to_string(),
            Pattern::ThreeOfKind => "ThreeOfKind".to_string(),
            Pattern::FourOfKind => "FourOfKind".to_string(),
            Pattern::SuitedRun { min_len } => format!("SuitedRun{min_len}"),
            Pattern::StraightRun { min_len } => format!("StraightRun{min_len}"),
            Pattern::Flush => "Flush".to_string(),
            Pattern::FullHouse => "FullHouse".to_string(),
            Pattern::RoyalFlush => "RoyalFlush".to_string(),
            Pattern::SuitSet { min_len } => set_id("SuitSet", min_len),
            Pattern::ColorSet { min_len } => set_id("ColorSet", min_len),
        }
    }

    pub fn from_id(id: &str) -> Option<Pattern> {
        let pattern = match id {
            "Pair" => Pattern::Pair,
            "ThreeOfKind" => Pattern::ThreeOfKind,
            "FourOfKind" => Pattern::FourOfKind,
            "Flush" => Pattern::Flush,
            "FullHouse" => Pattern::FullHouse,
            "RoyalFlush" => Pattern::RoyalFlush,
            "SuitSet" => Pattern::SuitSet {
                min_len: DEFAULT_SET_LENGTH,
            },
            "ColorSet" => Pattern::ColorSet {
                min_len: DEFAULT_SET_LENGTH,
            },
            other => {
                if let Some(len) = length_suffix(other, "SuitedRun", MIN_RUN_LENGTH) {
                    Pattern::SuitedRun { min_len: len }
                } else if let Some(len) = length_suffix(other, "StraightRun", MIN_RUN_LENGTH) {
                    Pattern::StraightRun { min_len: len }
                } else if let Some(len) = length_suffix(other, "SuitSet", 2) {
                    Pattern::SuitSet { min_len: len }
                } else if let Some(len) = length_suffix(other, "ColorSet", 2) {
                    Pattern::ColorSet { min_len: len }
                } else {
                    return None;
                }
            }
        };
        Some(pattern)
    }

    pub fn name(&self) -> String {
        match *self {
            Pattern::Pair => "Pair".to_string(),
            Pattern::ThreeOfKind => "Three of a Kind".to_string(),
            Pattern::FourOfKind => "Four of a Kind".to_string(),
            Pattern::SuitedRun { min_len } => format!("Suited Run of {min_len}"),
            Pattern::StraightRun { min_len } => format!("Straight Run of {min_len}"),
            Pattern::Flush => "Flush".to_string(),
            Pattern::FullHouse => "Full House".to_string(),
            Pattern::RoyalFlush => "Royal Flush".to_string(),
            Pattern::SuitSet { min_len } => format!("Suit Set of {min_len}+"),
            Pattern::ColorSet { min_len } => format!("Color Set of {min_len}+"),
        }
    }

    pub fn base_points(&self) -> i64 {
        match *self {
            Pattern::Pair => 10,
            Pattern::ThreeOfKind => 30,
            Pattern::FourOfKind => 60,
            Pattern::SuitedRun { min_len } => 40 + length_step(min_len),
            Pattern::StraightRun { min_len } => 20 + length_step(min_len),
            Pattern::Flush => 50,
            Pattern::FullHouse => 70,
            Pattern::RoyalFlush => 150,
            Pattern::SuitSet { min_len } => 15 + length_step(min_len),
            Pattern::ColorSet { min_len } => 10 + length_step(min_len),
        }
    }

    /// Minimum length for patterns that score extra cards, `None` for
    /// fixed-size patterns.
    pub fn minimum_length(&self) -> Option<usize> {
        match *self {
            Pattern::SuitedRun { min_len }
            | Pattern::StraightRun { min_len }
            | Pattern::SuitSet { min_len }
            | Pattern::ColorSet { min_len } => Some(min_len as usize),
            _ => None,
        }
    }

    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Pattern::Pair => Some(2),
            Pattern::ThreeOfKind => Some(3),
            Pattern::FourOfKind => Some(4),
            Pattern::Flush | Pattern::FullHouse | Pattern::RoyalFlush => Some(5),
            _ => None,
        }
    }

    pub fn accepts_len(&self, len: usize) -> bool {
        match (self.fixed_size(), self.minimum_length()) {
            (Some(size), _) => len == size,
            (None, Some(min)) => len >= min,
            (None, None) => false,
        }
    }

    pub fn validate(&self, cards: &[Card]) -> bool {
        if !self.accepts_len(cards.len()) {
            return false;
        }
        let (jokers, ranked) = split_jokers(cards);
        match *self {
            Pattern::Pair | Pattern::ThreeOfKind | Pattern::FourOfKind => {
                all_same(&ranked, |card| card.rank())
            }
            Pattern::SuitedRun { .. } => {
                all_same(&ranked, |card| card.suit()) && run_gaps_fit(&ranked, jokers)
            }
            Pattern::StraightRun { .. } => run_gaps_fit(&ranked, jokers),
            Pattern::Flush | Pattern::SuitSet { .. } => all_same(&ranked, |card| card.suit()),
            Pattern::ColorSet { .. } => all_same(&ranked, |card| card.color()),
            Pattern::FullHouse => full_house_fits(&ranked, jokers),
            Pattern::RoyalFlush => jokers == 0 && is_royal(&ranked),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Pattern::from_id(id).ok_or_else(|| format!("unknown pattern id {id:?}"))
    }
}

impl TryFrom<String> for Pattern {
    type Error = String;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        id.parse()
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.id()
    }
}

fn set_id(family: &str, min_len: u8) -> String {
    if min_len == DEFAULT_SET_LENGTH {
        family.to_string()
    } else {
        format!("{family}{min_len}")
    }
}

fn length_suffix(id: &str, family: &str, floor: u8) -> Option<u8> {
    let len: u8 = id.strip_prefix(family)?.parse().ok()?;
    (floor..=13).contains(&len).then_some(len)
}

fn length_step(min_len: u8) -> i64 {
    i64::from(min_len.saturating_sub(MIN_RUN_LENGTH)) * 20
}

pub(crate) fn split_jokers(cards: &[Card]) -> (usize, Vec<Card>) {
    let ranked: Vec<Card> = cards.iter().copied().filter(|card| !card.is_joker()).collect();
    (cards.len() - ranked.len(), ranked)
}

fn all_same<K: PartialEq>(cards: &[Card], key: impl Fn(&Card) -> K) -> bool {
    match cards.split_first() {
        Some((first, rest)) => {
            let expected = key(first);
            rest.iter().all(|card| key(card) == expected)
        }
        None => true,
    }
}

/// Walks the ranks in ascending order; every skipped rank costs one joker.
/// Duplicate ranks never fit.
fn run_gaps_fit(ranked: &[Card], jokers: usize) -> bool {
    let mut values: Vec<u8> = ranked.iter().map(|card| card.rank().value()).collect();
    values.sort_unstable();
    let Some(&first) = values.first() else {
        return true;
    };
    let mut expected = first;
    let mut gaps = 0usize;
    for value in values {
        if value < expected {
            return false;
        }
        gaps += usize::from(value - expected);
        if gaps > jokers {
            return false;
        }
        expected = value + 1;
    }
    true
}

fn full_house_fits(ranked: &[Card], jokers: usize) -> bool {
    let mut groups: HashMap<u8, usize> = HashMap::new();
    for card in ranked {
        *groups.entry(card.rank().value()).or_insert(0) += 1;
    }
    let mut sizes: Vec<usize> = groups.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    match sizes.as_slice() {
        [] => jokers == FULL_HOUSE_SIZE,
        [only] => *only >= 2 && only + jokers == FULL_HOUSE_SIZE,
        [3, 2] => jokers == 0,
        [big, small] => {
            *small >= 1 && *big >= 2 && big + small + jokers == FULL_HOUSE_SIZE
        }
        _ => false,
    }
}

fn is_royal(ranked: &[Card]) -> bool {
    if !all_same(ranked, |card| card.suit()) {
        return false;
    }
    let mut values: Vec<u8> = ranked.iter().map(|card| card.rank().value()).collect();
    values.sort_unstable();
    values == ROYAL_RANKS
}

/// True when more than one ranked card is present and no two share a suit.
pub(crate) fn is_rainbow(ranked: &[Card]) -> bool {
    if ranked.len() < 2 {
        return false;
    }
    let mut seen: Vec<Suit> = Vec::with_capacity(ranked.len());
    for card in ranked {
        if seen.contains(&card.suit()) {
            return false;
        }
        seen.push(card.suit());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_roundtrip() {
        for pattern in Pattern::STANDARD {
            assert_eq!(Pattern::from_id(&pattern.id()), Some(pattern));
        }
        assert_eq!(
            Pattern::from_id("SuitSet4"),
            Some(Pattern::SuitSet { min_len: 4 })
        );
        assert_eq!(Pattern::from_id("SuitedRun2"), None);
        assert_eq!(Pattern::from_id("Straight"), None);
    }

    #[test]
    fn longer_run_variants_are_worth_more() {
        let run3 = Pattern::StraightRun { min_len: 3 }.base_points();
        let run5 = Pattern::StraightRun { min_len: 5 }.base_points();
        assert_eq!(run5 - run3, 40);
    }

    #[test]
    fn size_rules() {
        assert!(Pattern::Pair.accepts_len(2));
        assert!(!Pattern::Pair.accepts_len(3));
        assert!(Pattern::SuitSet { min_len: 3 }.accepts_len(6));
        assert!(!Pattern::SuitSet { min_len: 3 }.accepts_len(2));
    }
}
