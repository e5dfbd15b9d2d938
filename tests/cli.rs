//! Dealing binary output tests.

use std::collections::HashMap;
use std::process::Command;

use bitdeck::{Card, CardSet, DECK_SIZE};

fn run_dealer() -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_bitdeck"))
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

/// Maps each `"  Suit, Value"` line back to its card.
fn card_lines() -> HashMap<String, Card> {
    CardSet::full()
        .iter()
        .map(|card| (format!("  {card}"), card))
        .collect()
}

fn parse(lines: &[&str]) -> Vec<Card> {
    let cards = card_lines();
    lines
        .iter()
        .map(|line| *cards.get(*line).unwrap_or_else(|| panic!("bad line {line:?}")))
        .collect()
}

#[test]
fn output_has_sections_in_order() {
    let stdout = run_dealer();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 4 + 5 + DECK_SIZE + DECK_SIZE + 1);
    assert_eq!(lines[0], "Peeking");
    assert_eq!(lines[6], "Drawing Cards:");
    assert_eq!(lines[59], "Player 1 Hand:");
    assert_eq!(lines[86], "Player 2 Hand:");
    assert_eq!(lines[113], "");
    assert!(stdout.ends_with("\n\n"));
}

#[test]
fn output_deals_peeked_cards_first_and_splits_the_deck() {
    let stdout = run_dealer();
    let lines: Vec<&str> = stdout.lines().collect();

    let peeked = parse(&lines[1..6]);
    let drawn = parse(&lines[7..59]);
    let first = parse(&lines[60..86]);
    let second = parse(&lines[87..113]);

    assert_eq!(peeked, drawn[..5]);
    assert_eq!(drawn.iter().copied().collect::<CardSet>(), CardSet::full());

    // Draws alternate between the two players.
    let first_dealt: CardSet = drawn.iter().copied().step_by(2).collect();
    let second_dealt: CardSet = drawn.iter().copied().skip(1).step_by(2).collect();
    assert_eq!(first.iter().copied().collect::<CardSet>(), first_dealt);
    assert_eq!(second.iter().copied().collect::<CardSet>(), second_dealt);

    // Hands print in ascending bit order.
    assert_eq!(first, first_dealt.iter().collect::<Vec<_>>());
    assert_eq!(second, second_dealt.iter().collect::<Vec<_>>());
}
