use crate::card::AceValue;
use crate::deck::Deck;
use crate::error::Error;
use crate::fairness::{FairnessMeter, Outcome};
use crate::hand::Hand;
use crate::participant::{Participant, Seat};
use rand::Rng;

/// External collaborator supplying the player's choices. Implementations
/// must keep asking until they hold a valid answer; the engine blocks on it.
pub trait InputSource {
    /// Draw another card, or stand.
    fn draw_decision(&mut self) -> bool;
    /// Value for a freshly drawn ace, 1 or 11 only.
    fn ace_value(&mut self) -> AceValue;
    /// Play another round once this one is settled.
    fn another_round(&mut self) -> bool;
}

/// External collaborator rendering hand snapshots and round outcomes.
pub trait DisplaySink {
    fn show_hand(&mut self, seat: Seat, hand: &Hand);
    fn announce(&mut self, outcome: Outcome);
}

/// Resolve final totals into exactly one outcome. The house takes every
/// round the player busts, its own exact 21 against a lesser hand, and the
/// higher total under 21; the mirrored cases go to the player; equal totals
/// push.
pub fn resolve(house: &Hand, player: &Hand) -> Outcome {
    let h = house.total();
    let p = player.total();
    if p > 21 || (h == 21 && p < 21) || (h < 21 && p < 21 && h > p) {
        Outcome::House
    } else if h > 21 || (p == 21 && h < 21) || (p < 21 && h < 21 && p > h) {
        Outcome::Player
    } else {
        Outcome::Push
    }
}

/// One table: the shared deck, both participants, the fairness statistic and
/// the ace value currently in force.
#[derive(Debug)]
pub struct Table<R: Rng> {
    pub deck: Deck,
    pub house: Participant,
    pub player: Participant,
    pub meter: FairnessMeter,
    pub ace: AceValue,
    rng: R,
}

impl<R: Rng> Table<R> {
    pub fn new(rng: R) -> Self {
        Self {
            deck: Deck::new(),
            house: Participant::new(Seat::House),
            player: Participant::new(Seat::Player),
            meter: FairnessMeter::new(),
            ace: AceValue::default(),
            rng,
        }
    }

    /// Play one full round on a freshly populated, shuffled deck.
    pub fn play_round(
        &mut self,
        input: &mut dyn InputSource,
        display: &mut dyn DisplaySink,
    ) -> Result<Outcome, Error> {
        let outcome = self.try_round(input, display);
        if outcome.is_err() {
            // A failed round must not leak cards into the next one.
            self.house.hand.clear();
            self.player.hand.clear();
            self.deck.clear();
        }
        outcome
    }

    fn try_round(
        &mut self,
        input: &mut dyn InputSource,
        display: &mut dyn DisplaySink,
    ) -> Result<Outcome, Error> {
        self.deck.populate()?;
        self.deck.shuffle(&mut self.rng);
        self.run_deal(input, display)
    }

    /// Deal and play out a round on the deck in its current order. Split out
    /// from [`Table::play_round`] so a known layout can be replayed.
    pub fn run_deal(
        &mut self,
        input: &mut dyn InputSource,
        display: &mut dyn DisplaySink,
    ) -> Result<Outcome, Error> {
        self.deck.deal_into(&mut self.house, &mut self.ace, input);
        display.show_hand(Seat::House, &self.house.hand);

        self.deck.deal_into(&mut self.player, &mut self.ace, input);
        self.deck.deal_into(&mut self.player, &mut self.ace, input);
        display.show_hand(Seat::Player, &self.player.hand);

        while self
            .player
            .check_draw(&mut self.deck, &self.meter, self.ace)?
        {
            if !input.draw_decision() {
                break;
            }
            self.deck.deal_into(&mut self.player, &mut self.ace, input);
            display.show_hand(Seat::Player, &self.player.hand);
            if self.player.is_busted() || self.player.hand.total() == 21 {
                break;
            }
        }

        if !self.player.is_busted() {
            // The gate runs once before the house's second card so a low win
            // ratio can stage the deck ahead of the whole house turn.
            self.house
                .check_draw(&mut self.deck, &self.meter, self.ace)?;
            self.deck.deal_into(&mut self.house, &mut self.ace, input);
            display.show_hand(Seat::House, &self.house.hand);
            while self
                .house
                .check_draw(&mut self.deck, &self.meter, self.ace)?
            {
                self.deck.deal_into(&mut self.house, &mut self.ace, input);
                display.show_hand(Seat::House, &self.house.hand);
                if self.house.is_busted() || self.house.hand.total() == 21 {
                    break;
                }
            }
        }

        let outcome = resolve(&self.house.hand, &self.player.hand);
        self.meter.record(outcome);
        log::debug!(
            "house win ratio {:.2} over {} decisive rounds",
            self.meter.ratio(),
            self.meter.decisive_rounds()
        );
        display.announce(outcome);

        self.house.hand.clear();
        self.player.hand.clear();
        self.deck.clear();
        if self.house.hand.total() != 0 || self.player.hand.total() != 0 || !self.deck.is_empty() {
            return Err(Error::DirtyTable);
        }
        Ok(outcome)
    }
}
