use crate::card::{AceValue, Card};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cards held by one participant plus the running point total.
///
/// The total is an append-only accumulator: each card contributes its value
/// at the moment it was added. Re-summing the cards later is not equivalent,
/// since the shared ace value may have been reassigned in between.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card, ace: AceValue) {
        self.total += card.value(ace);
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Snapshot format: rank+suit tokens separated by spaces, then the bracketed
/// running total, e.g. `10C AS [21]`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        write!(f, "[{}]", self.total)
    }
}
