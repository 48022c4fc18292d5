use crate::card::{AceValue, Card, Rank, Suit};
use crate::error::Error;
use crate::participant::Participant;
use crate::table::InputSource;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Size of a full single deck.
pub const DECK_SIZE: usize = 52;

/// An ordered run of cards. The back of the vector is the drawing end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck with an explicit card order, drawing end last. Useful for
    /// replaying a known layout.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Fill with the full 52-card cross product, rank-major then suit.
    pub fn populate(&mut self) -> Result<(), Error> {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
        if self.cards.len() != DECK_SIZE {
            return Err(Error::WrongDeckSize(self.cards.len()));
        }
        Ok(())
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the card at the drawing end. An empty deck is
    /// benign: the caller gets `None` and the deck is untouched.
    pub fn deal(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            log::warn!("no cards left in the deck");
            return None;
        }
        self.cards.pop()
    }

    /// Deal the top card into a participant's hand, running the ace
    /// resolution protocol first when that card is an ace so it is valued
    /// correctly as it lands. Returns whether a card moved.
    pub fn deal_into(
        &mut self,
        who: &mut Participant,
        ace: &mut AceValue,
        input: &mut dyn InputSource,
    ) -> bool {
        let Some(card) = self.cards.last().copied() else {
            log::warn!("no cards left in the deck");
            return false;
        };
        if card.rank == Rank::Ace {
            *ace = who.choose_ace(input);
        }
        self.cards.pop();
        who.hand.add(card, *ace);
        true
    }

    /// Reorder the deck so that the next draw(s), taken in sequence from the
    /// drawing end, sum to exactly `target` points.
    ///
    /// Each step takes the largest single-draw contribution still needed (an
    /// ace only counts for 11 while the shared ace value is Eleven), scans
    /// from the front for the first card worth that much and relocates it to
    /// the drawing end, keeping every other card in relative order. Returns
    /// how many cards were staged.
    pub fn rig(&mut self, target: u8, ace: AceValue) -> Result<usize, Error> {
        let mut remaining = target;
        let mut staged = 0usize;
        while remaining > 0 {
            let step = if remaining >= 11 && ace == AceValue::Eleven {
                11
            } else {
                remaining.min(10)
            };
            let found = self
                .cards
                .iter()
                .position(|card| card.value(ace) == step)
                .ok_or(Error::RigExhausted { need: step, target })?;
            let card = self.cards.remove(found);
            self.cards.push(card);
            staged += 1;
            remaining -= step;
        }
        // The staged run must sum to the target exactly.
        let points: u8 = self
            .cards
            .iter()
            .rev()
            .take(staged)
            .map(|card| card.value(ace))
            .sum();
        if points != target {
            return Err(Error::RigMismatch {
                target,
                staged: points,
            });
        }
        log::debug!("staged {staged} cards worth {target} points");
        Ok(staged)
    }
}
