//! Single-player blackjack CLI.
//!
//! Thin driver over the `twentyone` engine: reads a game count, runs that
//! many rounds, and maps [`Outcome`] tags to console messages.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use twentyone::{Hand, Outcome, Round};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let games_to_play = prompt_game_count();

    for game_number in 1..=games_to_play {
        println!();
        println!("{}", "*".repeat(30));
        println!("Game {game_number} of {games_to_play}");
        println!("{}", "*".repeat(30));

        play_round(&mut rng);
    }

    println!("\nThanks for playing!");
}

/// Plays one round from a fresh shuffled deck.
fn play_round(rng: &mut ChaCha8Rng) {
    let mut round = Round::new(rng);

    print_hand(round.player_hand(), false);
    print_hand(round.dealer_hand(), false);

    let outcome = round.resolve();
    if outcome.is_resolved() {
        println!("{}", outcome_message(outcome, false));
        return;
    }

    while round.player_can_act() {
        match prompt_choice() {
            Choice::Hit => {
                if round.hit().is_ok() {
                    print_hand(round.player_hand(), false);
                }
            }
            Choice::Stand => {
                if let Err(err) = round.stand() {
                    println!("Action error: {err:?}");
                }
            }
        }
    }

    let outcome = round.resolve();
    if outcome.is_resolved() {
        println!("{}", outcome_message(outcome, false));
        return;
    }

    if let Err(err) = round.dealer_play() {
        println!("Dealer error: {err:?}");
        return;
    }

    print_hand(round.dealer_hand(), true);

    println!("Final Results");
    println!("Your hand: {}", round.player_hand().value());
    println!("Dealer's hand: {}", round.dealer_hand().value());

    match round.final_outcome() {
        Ok(outcome) => println!("{}", outcome_message(outcome, true)),
        Err(err) => println!("Showdown error: {err:?}"),
    }
}

/// Player decision for one prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Hit,
    Stand,
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Asks how many games to play, re-prompting until a positive number is
/// given.
fn prompt_game_count() -> usize {
    loop {
        let input = prompt_line("How many games do you want to play? ");
        match input.parse::<usize>() {
            Ok(0) => {}
            Ok(count) => return count,
            Err(_) => println!("You must enter a number."),
        }
    }
}

/// Asks for hit or stand, re-prompting until a recognized token is given.
fn prompt_choice() -> Choice {
    let mut prompt = "Please choose 'Hit' or 'Stand': ";
    loop {
        let input = prompt_line(prompt);
        println!();
        match input.as_str() {
            "h" | "hit" => return Choice::Hit,
            "s" | "stand" => return Choice::Stand,
            _ => prompt = "Please choose 'Hit' or 'Stand' (or H/S): ",
        }
    }
}

fn print_hand(hand: &Hand, show_all_dealer_cards: bool) {
    for line in hand.display_lines(show_all_dealer_cards) {
        println!("{line}");
    }
    println!();
}

/// Maps an outcome tag to its console message. `Tie` reads differently at
/// showdown than it does on a mutual opening blackjack.
const fn outcome_message(outcome: Outcome, game_over: bool) -> &'static str {
    match outcome {
        Outcome::Unresolved => "",
        Outcome::PlayerBust => "You busted. Dealer wins!",
        Outcome::DealerBust => "Dealer busted. You win!",
        Outcome::Tie => {
            if game_over {
                "Tie!"
            } else {
                "Both players have blackjack! Tie!"
            }
        }
        Outcome::PlayerBlackjack => "You have blackjack. You win!",
        Outcome::PlayerWins => "You win!",
        Outcome::DealerWins => "Dealer wins.",
    }
}
