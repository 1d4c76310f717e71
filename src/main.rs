//! Interactive command-line blackjack.

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, DealerHand, Game, GameState, Hand, Outcome, Suit};

fn main() -> ExitCode {
    println!("Blackjack (dealer hits until 17)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    loop {
        match play_round(&mut game) {
            Ok(()) => {}
            Err(err) => {
                eprintln!("fatal: {err}");
                return ExitCode::FAILURE;
            }
        }

        if prompt_line("\nPlay again? (y/n): ") != "y" {
            println!("Goodbye.");
            break;
        }

        // Every round starts from a fresh shuffled deck and empty hands.
        game.clear_round();
        println!();
    }

    ExitCode::SUCCESS
}

fn play_round(game: &mut Game) -> Result<(), Box<dyn Error>> {
    game.deal()?;

    let up_card = game
        .dealer_hand()
        .up_card()
        .copied()
        .map_or_else(|| "??".to_string(), |card| format_card(&card));
    println!("\nDealer shows: {up_card}");
    print_player_hand(game.player_hand());

    while game.state() == GameState::PlayerTurn {
        // Anything that is not a hit counts as a stand.
        if prompt_line("(h)it or (s)tand? ") == "h" {
            let card = game.hit()?;
            println!("You draw {}", format_card(&card));
            print_player_hand(game.player_hand());
        } else {
            game.stand()?;
        }
    }

    if game.player_hand().is_bust() {
        println!("You bust!");
    }

    let drawn = game.dealer_play()?;
    for card in &drawn {
        println!("Dealer draws {}", format_card(card));
    }

    let summary = game.resolve()?;
    println!(
        "\nDealer: {} (value {})",
        format_dealer(game.dealer_hand()),
        summary.dealer_value
    );
    println!(
        "You:    {} (value {})",
        format_cards(game.player_hand().cards()),
        summary.player_value
    );
    if summary.dealer_bust {
        println!("Dealer busts!");
    }

    match summary.outcome {
        Outcome::PlayerWins => println!("You win!"),
        Outcome::DealerWins => println!("Dealer wins."),
        Outcome::Push => println!("Push."),
    }

    Ok(())
}

fn print_player_hand(hand: &Hand) {
    println!(
        "Your hand: {} (value {})",
        format_cards(hand.cards()),
        hand.value()
    );
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

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_hole_revealed() {
        format_cards(dealer.cards())
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
