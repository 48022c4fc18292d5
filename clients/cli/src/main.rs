use blackjack::{AceValue, DisplaySink, Hand, InputSource, Outcome, Seat, Table};
use clap::Parser;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "blackjack-cli", about = "Single-deck blackjack against the house")]
struct Cli {
    /// Seed for the deck shuffles, random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

/// Stdin-backed input source. Invalid answers are re-prompted; a closed
/// stdin reads as "stop playing".
struct Prompt {
    stdin: io::Stdin,
}

impl Prompt {
    fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        print!("{question}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl InputSource for Prompt {
    fn draw_decision(&mut self) -> bool {
        loop {
            let Some(answer) = self.ask("Do you want to draw? (y/n): ") else {
                return false;
            };
            match answer.as_str() {
                "y" | "Y" => return true,
                "n" | "N" => return false,
                _ => println!("Please answer y or n."),
            }
        }
    }

    fn ace_value(&mut self) -> AceValue {
        loop {
            let question = "You drew an Ace! How many points would you like it to be worth? (1/11): ";
            let Some(answer) = self.ask(question) else {
                // stdin is gone; take the blackjack-friendly value
                return AceValue::Eleven;
            };
            match answer.as_str() {
                "1" => return AceValue::One,
                "11" => return AceValue::Eleven,
                _ => println!(
                    "Incorrect value entered. Face value of Ace can be either 1 or 11. Please try again."
                ),
            }
        }
    }

    fn another_round(&mut self) -> bool {
        matches!(
            self.ask("Would you like another round? (y/n): ").as_deref(),
            Some("y") | Some("Y")
        )
    }
}

struct Console;

impl DisplaySink for Console {
    fn show_hand(&mut self, seat: Seat, hand: &Hand) {
        let label = match seat {
            Seat::House => "House",
            Seat::Player => "Player",
        };
        println!("{label}: {hand}");
    }

    fn announce(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::House => println!("House wins."),
            Outcome::Player => println!("Player wins."),
            Outcome::Push => println!("Push: no one wins."),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    println!("Welcome to the Blackjack table!\n");

    let mut table = Table::new(rng);
    let mut input = Prompt::new();
    let mut display = Console;

    loop {
        if let Err(e) = table.play_round(&mut input, &mut display) {
            log::error!("round aborted: {e}");
        }
        if !input.another_round() {
            break;
        }
        println!();
    }

    let meter = table.meter;
    println!(
        "\nGame over! House won {} and you won {} of {} decisive rounds.",
        meter.house_wins,
        meter.player_wins,
        meter.decisive_rounds()
    );
}
