use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("deck holds {0} cards after populate, expected 52")]
    WrongDeckSize(usize),
    #[error("no card worth {need} points left while staging {target}")]
    RigExhausted { need: u8, target: u8 },
    #[error("staged cards are worth {staged} points, wanted {target}")]
    RigMismatch { target: u8, staged: u8 },
    #[error("table still holds cards after cleanup")]
    DirtyTable,
}
