mod card;
mod deck;
mod error;
mod fairness;
mod hand;
mod participant;
mod table;

pub use card::{AceValue, Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use error::Error;
pub use fairness::{
    FairnessMeter, Outcome, OPENING_WIN_RATIO, WIN_RATIO_CEILING, WIN_RATIO_FLOOR,
};
pub use hand::Hand;
pub use participant::{Participant, Seat};
pub use table::{resolve, DisplaySink, InputSource, Table};
