use blackjack::{
    AceValue, Card, Deck, DisplaySink, FairnessMeter, Hand, InputSource, Outcome, Rank, Seat,
    Suit, Table,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

struct ScriptedInput {
    draws: VecDeque<bool>,
    aces: VecDeque<AceValue>,
}

impl ScriptedInput {
    fn new(draws: &[bool], aces: &[AceValue]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            aces: aces.iter().copied().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn draw_decision(&mut self) -> bool {
        self.draws
            .pop_front()
            .expect("ran out of scripted draw decisions")
    }

    fn ace_value(&mut self) -> AceValue {
        self.aces.pop_front().expect("ran out of scripted ace choices")
    }

    fn another_round(&mut self) -> bool {
        false
    }
}

/// Stands on everything; aces, if any, count 11.
struct AlwaysStand;

impl InputSource for AlwaysStand {
    fn draw_decision(&mut self) -> bool {
        false
    }

    fn ace_value(&mut self) -> AceValue {
        AceValue::Eleven
    }

    fn another_round(&mut self) -> bool {
        false
    }
}

#[derive(Default)]
struct RecordingDisplay {
    house: Vec<String>,
    player: Vec<String>,
    outcomes: Vec<Outcome>,
}

impl DisplaySink for RecordingDisplay {
    fn show_hand(&mut self, seat: Seat, hand: &Hand) {
        let snapshot = hand.to_string();
        match seat {
            Seat::House => self.house.push(snapshot),
            Seat::Player => self.player.push(snapshot),
        }
    }

    fn announce(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }
}

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn table_with_deck(cards: Vec<Card>) -> Table<ChaCha8Rng> {
    let mut table = Table::new(ChaCha8Rng::seed_from_u64(0));
    table.deck = Deck::from_cards(cards);
    table
}

#[test]
fn test_house_plays_out_its_turn_when_the_player_stands() {
    // Drawing end last: house gets 7, the player 10 and 9, then the house
    // draws 9 and 5.
    let mut table = table_with_deck(vec![
        card(Rank::Five, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Seven, Suit::Clubs),
    ]);
    let mut input = ScriptedInput::new(&[false], &[]);
    let mut display = RecordingDisplay::default();

    let outcome = table.run_deal(&mut input, &mut display).unwrap();

    // 21 beats 19.
    assert_eq!(outcome, Outcome::House);
    assert_eq!(display.player.last().unwrap(), "10S 9H [19]");
    assert_eq!(display.house.last().unwrap(), "7C 9D 5C [21]");
    assert_eq!(table.meter.house_wins, 1);
    assert_eq!(table.meter.ratio(), 1.0);
}

#[test]
fn test_low_win_ratio_stages_an_ace_for_the_house() {
    // Ratio 0.50 sits below the floor: the house gate fires at total 10 and
    // relocates the buried ace so the very next house draw lands on 21.
    let mut table = table_with_deck(vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Clubs),
    ]);
    table.meter = FairnessMeter {
        house_wins: 1,
        player_wins: 1,
    };
    let mut input = ScriptedInput::new(&[false], &[]);
    let mut display = RecordingDisplay::default();

    let outcome = table.run_deal(&mut input, &mut display).unwrap();

    assert_eq!(outcome, Outcome::House);
    assert_eq!(display.house.last().unwrap(), "10C AS [21]");
    assert_eq!(table.meter.house_wins, 2);
}

#[test]
fn test_high_win_ratio_stages_the_deck_for_the_player() {
    // Ratio 0.75 sits above the ceiling: the player gate fires at total 14
    // and the next draw completes exactly 21. The house, on the same ratio,
    // never stages in the same round.
    let mut table = table_with_deck(vec![
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Six, Suit::Clubs),
    ]);
    table.meter = FairnessMeter {
        house_wins: 3,
        player_wins: 1,
    };
    let mut input = ScriptedInput::new(&[true], &[]);
    let mut display = RecordingDisplay::default();

    let outcome = table.run_deal(&mut input, &mut display).unwrap();

    assert_eq!(display.player.last().unwrap(), "10S 4D 7H [21]");
    // The house drew 9 and 2 unstaged and stopped on 17.
    assert_eq!(display.house.last().unwrap(), "6C 9D 2C [17]");
    assert_eq!(outcome, Outcome::Player);
    assert_eq!(table.meter.player_wins, 2);
}

#[test]
fn test_player_bust_hands_the_round_to_the_house() {
    let mut table = table_with_deck(vec![
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Seven, Suit::Clubs),
    ]);
    let mut input = ScriptedInput::new(&[true], &[]);
    let mut display = RecordingDisplay::default();

    let outcome = table.run_deal(&mut input, &mut display).unwrap();

    assert_eq!(outcome, Outcome::House);
    assert_eq!(display.player.last().unwrap(), "10S 9H 5D [24]");
    // The house never drew past its first card.
    assert_eq!(display.house.len(), 1);
    assert_eq!(table.meter.decisive_rounds(), 1);
    assert_eq!(table.meter.ratio(), 1.0);
}

#[test]
fn test_equal_totals_push_and_leave_the_meter_unchanged() {
    let mut table = table_with_deck(vec![
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Ten, Suit::Clubs),
    ]);
    let mut input = ScriptedInput::new(&[false], &[]);
    let mut display = RecordingDisplay::default();

    let outcome = table.run_deal(&mut input, &mut display).unwrap();

    assert_eq!(outcome, Outcome::Push);
    assert_eq!(display.outcomes, vec![Outcome::Push]);
    assert_eq!(table.meter.decisive_rounds(), 0);
    assert_eq!(table.meter.ratio(), 0.60);
}

#[test]
fn test_player_chooses_the_value_of_a_drawn_ace() {
    let mut table = table_with_deck(vec![
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Eight, Suit::Clubs),
    ]);
    let mut input = ScriptedInput::new(&[true, false], &[AceValue::One]);
    let mut display = RecordingDisplay::default();

    let outcome = table.run_deal(&mut input, &mut display).unwrap();

    // The ace landed at its chosen value of 1.
    assert_eq!(display.player.last().unwrap(), "10S 9H AH [20]");
    assert_eq!(display.house.last().unwrap(), "8C 9C [17]");
    assert_eq!(outcome, Outcome::Player);
}

#[test]
fn test_play_round_cleans_the_table() {
    let mut table = Table::new(ChaCha8Rng::seed_from_u64(42));
    let mut input = AlwaysStand;
    let mut display = RecordingDisplay::default();

    let outcome = table.play_round(&mut input, &mut display).unwrap();

    assert!(table.deck.is_empty());
    assert_eq!(table.house.hand.total(), 0);
    assert_eq!(table.player.hand.total(), 0);
    assert_eq!(display.outcomes, vec![outcome]);
}

#[test]
fn test_counters_survive_across_rounds() {
    let mut table = Table::new(ChaCha8Rng::seed_from_u64(3));
    let mut display = RecordingDisplay::default();
    for _ in 0..5 {
        table.play_round(&mut AlwaysStand, &mut display).unwrap();
    }
    assert_eq!(display.outcomes.len(), 5);
    let decisive = display
        .outcomes
        .iter()
        .filter(|o| **o != Outcome::Push)
        .count() as u32;
    assert_eq!(table.meter.decisive_rounds(), decisive);
    assert_eq!(
        table.meter.house_wins + table.meter.player_wins,
        decisive
    );
}
