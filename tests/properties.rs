//! Deck invariants under arbitrary operation sequences.

use bitdeck::{Card, CardSet, DECK_SIZE, Deck, DeckError, DeckOptions};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Draw,
    Peek(usize),
    Shuffle,
    Redeck(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Draw),
        2 => (0..8usize).prop_map(Op::Peek),
        1 => Just(Op::Shuffle),
        2 => (0..DECK_SIZE as u8).prop_map(Op::Redeck),
    ]
}

fn check_invariants(deck: &Deck, drawn: CardSet) {
    let peeked: CardSet = deck.peeked().iter().copied().collect();

    assert_eq!(peeked.len(), deck.peeked().len(), "duplicate peeked card");
    assert_eq!(deck.remaining(), deck.pool().len());
    assert_eq!(deck.cards_left(), deck.pool().len() + peeked.len());
    assert_eq!(deck.pool().bits() & peeked.bits(), 0);

    let in_deck = deck.pool().bits() | peeked.bits();
    assert_eq!(in_deck & drawn.bits(), 0);
    assert_eq!(in_deck | drawn.bits(), CardSet::full().bits());
}

proptest! {
    #[test]
    fn operations_preserve_deck_invariants(
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 0..120),
    ) {
        let mut deck = Deck::new(DeckOptions::default(), seed);
        let mut drawn = CardSet::new();

        for op in ops {
            match op {
                Op::Draw => match deck.draw_card() {
                    Ok(card) => prop_assert!(drawn.insert(card)),
                    Err(err) => {
                        prop_assert_eq!(err, DeckError::Empty);
                        prop_assert_eq!(deck.cards_left(), 0);
                    }
                },
                Op::Peek(count) => {
                    let before: Vec<Card> = deck.peeked().iter().copied().collect();
                    match deck.peek_cards(count) {
                        Ok(cards) => {
                            prop_assert_eq!(cards.len(), count);
                            let shared = before.len().min(count);
                            prop_assert_eq!(&cards[..shared], &before[..shared]);
                        }
                        Err(err) => prop_assert_eq!(
                            err,
                            DeckError::InsufficientCards {
                                requested: count,
                                available: deck.cards_left(),
                            }
                        ),
                    }
                }
                Op::Shuffle => {
                    deck.shuffle();
                    prop_assert!(deck.peeked().is_empty());
                }
                Op::Redeck(index) => {
                    let card = Card::from_index(index).unwrap();
                    let was_drawn = drawn.remove(card);
                    match deck.redeck(card) {
                        Ok(()) => prop_assert!(was_drawn),
                        Err(err) => {
                            prop_assert!(!was_drawn);
                            prop_assert_eq!(err, DeckError::AlreadyInDeck);
                        }
                    }
                }
            }

            check_invariants(&deck, drawn);
        }
    }
}
