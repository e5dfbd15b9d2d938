//! Peeks at a fresh deck, then deals it out into two hands.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bitdeck::{CardSet, DECK_SIZE, Deck, DeckError, DeckOptions};

const PEEK_COUNT: usize = 5;
const PLAYERS: usize = 2;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Deal error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DeckError> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(DeckOptions::default(), seed);

    println!("Peeking");
    for card in deck.peek_cards(PEEK_COUNT)? {
        println!("  {card}");
    }

    let mut hands = [CardSet::new(); PLAYERS];

    println!("Drawing Cards:");
    for _ in 0..DECK_SIZE / PLAYERS {
        for hand in &mut hands {
            let card = deck.draw_card()?;
            println!("  {card}");
            hand.insert(card);
        }
    }

    for (player, hand) in hands.iter().enumerate() {
        println!("Player {} Hand:", player + 1);
        print!("{hand}");
    }

    println!();
    Ok(())
}
