use crate::card::AceValue;
use crate::deck::Deck;
use crate::error::Error;
use crate::fairness::{FairnessMeter, WIN_RATIO_CEILING, WIN_RATIO_FLOOR};
use crate::hand::Hand;
use crate::table::InputSource;
use serde::{Deserialize, Serialize};

/// Which side of the table a participant plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    House,
    Player,
}

/// A hand plus the seat-specific draw and ace policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub seat: Seat,
    pub hand: Hand,
}

impl Participant {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Hand::new(),
        }
    }

    /// Pure draw policy: the house stands on 17, the player may keep drawing
    /// up to 21.
    pub fn wants_card(&self) -> bool {
        match self.seat {
            Seat::House => self.hand.total() <= 16,
            Seat::Player => self.hand.total() < 21,
        }
    }

    pub fn is_busted(&self) -> bool {
        self.hand.total() > 21
    }

    /// Ace resolution protocol, run before the ace lands in the hand. The
    /// house takes 11 whenever that hits 21 exactly or keeps it in
    /// must-draw territory; the player is asked.
    pub fn choose_ace(&self, input: &mut dyn InputSource) -> AceValue {
        match self.seat {
            Seat::House => {
                let total = self.hand.total();
                if total + 11 == 21 || total + 11 <= 16 {
                    AceValue::Eleven
                } else {
                    AceValue::One
                }
            }
            Seat::Player => input.ace_value(),
        }
    }

    /// Draw decision with the fairness gate: when this participant still
    /// wants a card and the house win ratio sits outside the band on this
    /// seat's side, stage the deck so the coming draws land exactly on 21.
    /// The staging is a one-shot nudge per call.
    pub fn check_draw(
        &self,
        deck: &mut Deck,
        meter: &FairnessMeter,
        ace: AceValue,
    ) -> Result<bool, Error> {
        let drawing = self.wants_card();
        if drawing {
            let ratio = meter.ratio();
            let target = 21 - self.hand.total();
            match self.seat {
                Seat::House if ratio < WIN_RATIO_FLOOR => {
                    log::debug!("win ratio {ratio:.2} below floor, staging {target} for the house");
                    stage(deck, target, ace)?;
                }
                Seat::Player if ratio > WIN_RATIO_CEILING => {
                    log::debug!(
                        "win ratio {ratio:.2} above ceiling, staging {target} for the player"
                    );
                    stage(deck, target, ace)?;
                }
                _ => {}
            }
        }
        Ok(drawing)
    }
}

/// A target the deck cannot express (no card worth the needed step) is
/// benign: the draw simply goes unstaged. A staged run that sums wrong is a
/// logic defect and propagates.
fn stage(deck: &mut Deck, target: u8, ace: AceValue) -> Result<(), Error> {
    match deck.rig(target, ace) {
        Ok(_) => Ok(()),
        Err(Error::RigExhausted { need, .. }) => {
            log::warn!("no card worth {need} points to stage {target}, drawing unstaged");
            Ok(())
        }
        Err(err) => Err(err),
    }
}
