//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors raised when game options are not usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The game needs at least one player.
    #[error("the game needs at least one player")]
    NoPlayers,
    /// More players than a single deck can serve in one round.
    #[error("at most {max} players fit a single deck, got {got}")]
    TooManyPlayers {
        /// Largest supported player count.
        max: usize,
        /// Requested player count.
        got: usize,
    },
    /// The game needs at least one round.
    #[error("the game needs at least one round")]
    NoRounds,
    /// Starting funds are negative.
    #[error("starting funds cannot be negative")]
    NegativeFunds,
    /// The funds of the whole table do not fit in an `i64`.
    #[error("starting funds are too large for {players} players")]
    FundsOverflow {
        /// Requested player count.
        players: u8,
    },
    /// Bet amount is zero or negative.
    #[error("bet amount must be positive")]
    ZeroBet,
    /// A configuration value could not be parsed as a number.
    #[error("{field} is not a valid number")]
    NotANumber {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// All rounds have been played or every player is eliminated.
    #[error("the game is over")]
    GameOver,
    /// The deck ran dry mid-round.
    #[error(transparent)]
    Deal(#[from] DealError),
}
