use serde::{Deserialize, Serialize};

/// Lowest house win ratio tolerated before the deck is staged for the house.
pub const WIN_RATIO_FLOOR: f64 = 0.55;
/// Highest house win ratio tolerated before the deck is staged for the player.
pub const WIN_RATIO_CEILING: f64 = 0.65;
/// Ratio reported before any decisive round, chosen inside the band so the
/// first round never triggers staging.
pub const OPENING_WIN_RATIO: f64 = 0.60;

/// How a resolved round went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    House,
    Player,
    Push,
}

/// Running house win statistic over decisive rounds, kept for the whole
/// session. This is the only feedback channel from past outcomes into the
/// draw decisions of later rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessMeter {
    pub house_wins: u32,
    pub player_wins: u32,
}

impl FairnessMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds resolved as a win for either side; pushes do not count.
    pub fn decisive_rounds(&self) -> u32 {
        self.house_wins + self.player_wins
    }

    /// Current house win ratio, or the opening value while no decisive round
    /// has been played.
    pub fn ratio(&self) -> f64 {
        let decisive = self.decisive_rounds();
        if decisive == 0 {
            OPENING_WIN_RATIO
        } else {
            f64::from(self.house_wins) / f64::from(decisive)
        }
    }

    /// Fold one resolved round into the statistic. Pushes leave the counters,
    /// and therefore the ratio, untouched.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::House => self.house_wins += 1,
            Outcome::Player => self.player_wins += 1,
            Outcome::Push => {}
        }
    }
}
