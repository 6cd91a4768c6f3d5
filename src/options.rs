//! Game configuration options.

use core::str::FromStr;

use crate::card::DECK_SIZE;
use crate::error::ConfigError;

/// Configuration options for a high-card game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use highcard::GameOptions;
///
/// let options = GameOptions::default()
///     .with_players(4)
///     .with_rounds(20)
///     .with_starting_funds(50);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of players seated at the start.
    pub players: u8,
    /// Number of rounds to play.
    pub rounds: u32,
    /// Funds each player starts with.
    pub starting_funds: i64,
    /// Fixed bet every active player pays into the pot each round.
    pub bet: i64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            players: 2,
            rounds: 10,
            starting_funds: 100,
            bet: 10,
        }
    }
}

impl GameOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_players(5);
    /// assert_eq!(options.players, 5);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_rounds(3);
    /// assert_eq!(options.rounds, 3);
    /// ```
    #[must_use]
    pub const fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Sets the starting funds for each player.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_funds(250);
    /// assert_eq!(options.starting_funds, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_funds(mut self, funds: i64) -> Self {
        self.starting_funds = funds;
        self
    }

    /// Sets the fixed bet amount.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet(25);
    /// assert_eq!(options.bet, 25);
    /// ```
    #[must_use]
    pub const fn with_bet(mut self, bet: i64) -> Self {
        self.bet = bet;
        self
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players, more players than cards in a
    /// deck, no rounds, negative starting funds, table funds that overflow an
    /// `i64`, or a non-positive bet.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.players as usize > DECK_SIZE {
            return Err(ConfigError::TooManyPlayers {
                max: DECK_SIZE,
                got: self.players as usize,
            });
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.starting_funds < 0 {
            return Err(ConfigError::NegativeFunds);
        }
        // Funds only move between players, so no balance or pot can exceed
        // the table total.
        if self.starting_funds.checked_mul(self.players as i64).is_none() {
            return Err(ConfigError::FundsOverflow {
                players: self.players,
            });
        }
        if self.bet <= 0 {
            return Err(ConfigError::ZeroBet);
        }
        Ok(())
    }

    /// Parses a raw configuration value typed by a user.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotANumber`] naming `field` if the input does
    /// not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{ConfigError, GameOptions};
    ///
    /// let rounds: u32 = GameOptions::parse_field("rounds", " 12 ").unwrap();
    /// assert_eq!(rounds, 12);
    /// assert_eq!(
    ///     GameOptions::parse_field::<u32>("rounds", "many"),
    ///     Err(ConfigError::NotANumber { field: "rounds" })
    /// );
    /// ```
    pub fn parse_field<T: FromStr>(field: &'static str, input: &str) -> Result<T, ConfigError> {
        input
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotANumber { field })
    }
}
