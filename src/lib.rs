//! A high-card betting game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow: every
//! player who can cover the bet pays into the pot, receives one card, and the
//! highest card takes the pot. Players whose funds run out are eliminated.
//!
//! # Example
//!
//! ```
//! use highcard::{Game, GameOptions};
//!
//! let options = GameOptions::default().with_players(3).with_rounds(5);
//! let mut game = Game::new(options, 42).unwrap();
//! let result = game.play_round().unwrap();
//! assert_eq!(result.draws.len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod random;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ConfigError, DealError, DeckError, RoundError};
pub use game::{EndReason, Game, GameState};
pub use options::GameOptions;
pub use player::{Player, PlayerId};
pub use random::RandomSource;
pub use result::{Draw, GameSummary, RoundResult, Standing};
