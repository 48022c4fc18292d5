use serde::{Deserialize, Serialize};
use std::fmt;

/// Card ranks in deck order. Discriminants double as the numeric rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
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
    pub const ALL: [Rank; 13] = [
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

    /// Point contribution of this rank under the ace value currently in force.
    pub fn points(&self, ace: AceValue) -> u8 {
        match self {
            Rank::Ace => ace.points(),
            Rank::Jack | Rank::Queen | Rank::King => 10,
            numeric => *numeric as u8,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            numeric => write!(f, "{}", *numeric as u8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        };
        write!(f, "{letter}")
    }
}

/// Value every ace counts for at the table, overwritten each time a freshly
/// drawn ace is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AceValue {
    One,
    #[default]
    Eleven,
}

impl AceValue {
    pub fn points(self) -> u8 {
        match self {
            AceValue::One => 1,
            AceValue::Eleven => 11,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn value(&self, ace: AceValue) -> u8 {
        self.rank.points(ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ranks_are_worth_their_number() {
        assert_eq!(Rank::Two.points(AceValue::Eleven), 2);
        assert_eq!(Rank::Seven.points(AceValue::One), 7);
        assert_eq!(Rank::Ten.points(AceValue::Eleven), 10);
    }

    #[test]
    fn test_face_cards_are_worth_ten() {
        assert_eq!(Rank::Jack.points(AceValue::One), 10);
        assert_eq!(Rank::Queen.points(AceValue::Eleven), 10);
        assert_eq!(Rank::King.points(AceValue::One), 10);
    }

    #[test]
    fn test_ace_follows_the_shared_value() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(card.value(AceValue::One), 1);
        assert_eq!(card.value(AceValue::Eleven), 11);
    }

    #[test]
    fn test_display_tokens() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "AS");
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "10C");
        assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "QH");
        assert_eq!(Card::new(Rank::Four, Suit::Diamonds).to_string(), "4D");
    }
}
