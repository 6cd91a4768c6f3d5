//! A single 52-card deck.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, DeckError};
use crate::random::RandomSource;

/// An ordered deck of cards. The last card is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order: suits Hearts, Diamonds, Clubs,
    /// Spades, each from Two up to Ace.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a full deck and shuffles it.
    #[must_use]
    pub fn fresh_shuffled<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from explicit cards; the last card is dealt first.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears more than once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }
        Ok(Self { cards })
    }

    /// Shuffles the deck in place with Fisher-Yates.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.pick_index(i);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::EmptyDeck)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck still holds the given card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
