//! Deck integration tests.

use std::collections::HashSet;

use highcard::{Card, DECK_SIZE, DealError, Deck, DeckError, Rank, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sorted(cards: &[Card]) -> Vec<(u8, u8)> {
    let mut keys: Vec<(u8, u8)> = cards
        .iter()
        .map(|card| (card.suit as u8, card.strength()))
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn new_deck_has_every_card_once_in_canonical_order() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(deck.contains(&Card::new(suit, rank)));
        }
    }

    assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, Rank::Two));
    assert_eq!(deck.cards()[12], Card::new(Suit::Hearts, Rank::Ace));
    assert_eq!(deck.cards()[13], Card::new(Suit::Diamonds, Rank::Two));
    assert_eq!(deck.cards()[51], Card::new(Suit::Spades, Rank::Ace));
}

#[test]
fn deal_pops_from_the_end() {
    let mut deck = Deck::new();
    assert_eq!(deck.deal().unwrap(), Card::new(Suit::Spades, Rank::Ace));
    assert_eq!(deck.deal().unwrap(), Card::new(Suit::Spades, Rank::King));
    assert_eq!(deck.len(), DECK_SIZE - 2);
}

#[test]
fn dealing_a_shuffled_deck_yields_every_card_then_fails() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::fresh_shuffled(&mut rng);

    let mut seen = HashSet::new();
    for remaining in (0..DECK_SIZE).rev() {
        let card = deck.deal().unwrap();
        assert!(seen.insert(card), "{card} dealt twice");
        assert_eq!(deck.len(), remaining);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.deal().unwrap_err(), DealError::EmptyDeck);
}

#[test]
fn shuffle_changes_order_and_reshuffles_every_call() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut deck = Deck::new();

    deck.shuffle(&mut rng);
    assert_ne!(deck, Deck::new());

    let first = deck.clone();
    deck.shuffle(&mut rng);
    assert_ne!(deck, first);
}

#[test]
fn shuffle_with_same_seed_is_deterministic() {
    let a = Deck::fresh_shuffled(&mut ChaCha8Rng::seed_from_u64(99));
    let b = Deck::fresh_shuffled(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(a, b);
}

#[test]
fn from_cards_rejects_duplicates() {
    let ace = Card::new(Suit::Clubs, Rank::Ace);
    let two = Card::new(Suit::Clubs, Rank::Two);

    assert_eq!(
        Deck::from_cards(vec![ace, two, ace]).unwrap_err(),
        DeckError::DuplicateCard(ace)
    );

    let mut deck = Deck::from_cards(vec![two, ace]).unwrap();
    assert_eq!(deck.deal().unwrap(), ace);
    assert_eq!(deck.deal().unwrap(), two);
}

#[test]
fn rank_strength_follows_face_order() {
    let strengths: Vec<u8> = Rank::ALL.iter().map(|rank| rank.strength()).collect();
    assert_eq!(strengths, (2..=14).collect::<Vec<u8>>());
    assert!(Rank::Ace > Rank::King);
    assert!(Rank::Ten < Rank::Jack);
}

#[test]
fn card_display() {
    assert_eq!(
        Card::new(Suit::Spades, Rank::Ace).to_string(),
        "Ace of Spades"
    );
    assert_eq!(
        Card::new(Suit::Hearts, Rank::Ten).to_string(),
        "10 of Hearts"
    );
    assert_eq!(
        Card::new(Suit::Diamonds, Rank::Queen).to_string(),
        "Queen of Diamonds"
    );
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), dealt in 0usize..=DECK_SIZE) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        for _ in 0..dealt {
            deck.deal().unwrap();
        }

        let before = sorted(deck.cards());
        deck.shuffle(&mut rng);

        prop_assert_eq!(deck.len(), DECK_SIZE - dealt);
        prop_assert_eq!(sorted(deck.cards()), before);
    }
}
