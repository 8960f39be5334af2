use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    Joker,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn color(self) -> Option<Color> {
        match self {
            Suit::Hearts | Suit::Diamonds => Some(Color::Red),
            Suit::Clubs | Suit::Spades => Some(Color::Black),
            Suit::Joker => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::Joker => "",
        }
    }

    fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Joker => 'J',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Joker = 0,
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric rank with the ace low: Joker=0, Ace=1 .. King=13.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            0 => Some(Rank::Joker),
            1..=13 => Some(Rank::STANDARD[value as usize - 1]),
            _ => None,
        }
    }

    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Joker => "Joker",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("empty card text")]
    Empty,
    #[error("unknown rank in {0:?}")]
    UnknownRank(String),
    #[error("unknown suit in {0:?}")]
    UnknownSuit(String),
    #[error("joker suit and rank must appear together ({suit:?}, {rank:?})")]
    HalfJoker { suit: Suit, rank: Rank },
}

/// A playing card. The joker is the only card whose suit or rank is `Joker`,
/// and then both are.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "CardRepr", into = "CardRepr")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    pub const JOKER: Card = Card {
        suit: Suit::Joker,
        rank: Rank::Joker,
    };

    pub fn new(suit: Suit, rank: Rank) -> Result<Self, CardParseError> {
        if (suit == Suit::Joker) != (rank == Rank::Joker) {
            return Err(CardParseError::HalfJoker { suit, rank });
        }
        Ok(Self { suit, rank })
    }

    /// Builds a card from parts. Either half being `Joker` yields the joker.
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        if suit == Suit::Joker || rank == Rank::Joker {
            return Self::JOKER;
        }
        Self { suit, rank }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker
    }

    pub fn is_face_card(&self) -> bool {
        self.rank.is_face()
    }

    pub fn color(&self) -> Option<Color> {
        self.suit.color()
    }

    /// Compact text form accepted by [`FromStr`], e.g. `10H` or `JK`.
    pub fn code(&self) -> String {
        if self.is_joker() {
            return "JK".to_string();
        }
        format!("{}{}", self.rank.label(), self.suit.letter())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str("Joker");
        }
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let upper = text.trim().to_ascii_uppercase();
        if upper.is_empty() {
            return Err(CardParseError::Empty);
        }
        if upper == "JK" || upper == "JOKER" {
            return Ok(Self::JOKER);
        }
        let mut chars = upper.chars();
        let suit = match chars.next_back() {
            Some('H') | Some('♥') => Suit::Hearts,
            Some('D') | Some('♦') => Suit::Diamonds,
            Some('C') | Some('♣') => Suit::Clubs,
            Some('S') | Some('♠') => Suit::Spades,
            _ => return Err(CardParseError::UnknownSuit(text.to_string())),
        };
        let rank = match chars.as_str() {
            "A" | "1" => Rank::Ace,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "T" => Rank::Ten,
            digits => digits
                .parse::<u8>()
                .ok()
                .filter(|value| (2..=10).contains(value))
                .and_then(Rank::from_value)
                .ok_or_else(|| CardParseError::UnknownRank(text.to_string()))?,
        };
        Ok(Self { suit, rank })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum CardRepr {
    Text(String),
    Parts { suit: Suit, rank: Rank },
}

impl TryFrom<CardRepr> for Card {
    type Error = CardParseError;

    fn try_from(value: CardRepr) -> Result<Self, Self::Error> {
        match value {
            CardRepr::Text(text) => text.parse(),
            CardRepr::Parts { suit, rank } => Card::new(suit, rank),
        }
    }
}

impl From<Card> for CardRepr {
    fn from(card: Card) -> Self {
        CardRepr::Parts {
            suit: card.suit,
            rank: card.rank,
        }
    }
}
