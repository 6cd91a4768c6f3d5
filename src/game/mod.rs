//! Game engine and state management.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::deck::Deck;
use crate::error::ConfigError;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};
use crate::random::RandomSource;
use crate::result::{GameSummary, Standing};

mod round;
mod session;
pub mod state;

pub use state::{EndReason, GameState};

/// A high-card betting game that owns the deck and every player.
///
/// Players live in an arena indexed by their ID; the roster lists the IDs
/// still in the game, in ascending order. Eliminated players keep their
/// records so final standings can be reported.
///
/// The random source defaults to a seeded [`ChaCha8Rng`] but any
/// [`RandomSource`] can be supplied through [`Game::with_rng`].
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Game options.
    options: GameOptions,
    /// Cards left to deal.
    deck: Deck,
    /// Every player ever seated (`player_id - 1` -> player).
    players: Vec<Player>,
    /// IDs of players not yet eliminated.
    roster: Vec<PlayerId>,
    /// Rounds completed so far.
    rounds_played: u32,
    /// Random number generator.
    rng: R,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are not playable.
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.roster(), &[1, 2]);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a new game that shuffles with the given random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are not playable.
    pub fn with_rng(options: GameOptions, rng: R) -> Result<Self, ConfigError> {
        options.validate()?;

        let players: Vec<Player> = (1..=options.players)
            .map(|id| Player::new(id, options.starting_funds))
            .collect();
        let roster = players.iter().map(Player::id).collect();

        info!(
            players = options.players,
            rounds = options.rounds,
            starting_funds = options.starting_funds,
            bet = options.bet,
            "new game"
        );

        Ok(Self {
            options,
            deck: Deck::new(),
            players,
            roster,
            rounds_played: 0,
            rng,
        })
    }
}

impl<R> Game<R> {
    const fn slot(player_id: PlayerId) -> usize {
        player_id as usize - 1
    }

    /// Replaces the deck with a full unshuffled one if it holds fewer than
    /// `needed` cards.
    ///
    /// Returns `true` if the deck was replaced. Callers shuffle it.
    fn replace_deck_if_short(&mut self, needed: usize) -> bool {
        if self.deck.len() >= needed {
            return false;
        }

        info!(remaining = self.deck.len(), needed, "replacing deck");
        self.deck = Deck::new();
        true
    }

    fn player_mut(&mut self, player_id: PlayerId) -> &mut Player {
        &mut self.players[Self::slot(player_id)]
    }

    /// Returns the game options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns every player, including eliminated ones, in ID order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    ///
    /// Eliminated players are still returned.
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        player_id
            .checked_sub(1)
            .and_then(|slot| self.players.get(slot as usize))
    }

    /// Returns the IDs of players still in the game.
    pub fn roster(&self) -> &[PlayerId] {
        &self.roster
    }

    /// Returns whether the player is still in the game.
    pub fn in_roster(&self, player_id: PlayerId) -> bool {
        self.roster.contains(&player_id)
    }

    /// Returns the number of cards remaining in the deck.
    pub const fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck for stacking.
    ///
    /// Each round still shuffles the deck with the game's random source, so
    /// a stacked order only survives with a source that leaves cards in place.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of rounds played.
    pub const fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the number of rounds left to play.
    pub const fn rounds_remaining(&self) -> u32 {
        self.options.rounds.saturating_sub(self.rounds_played)
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        if self.roster.is_empty() {
            GameState::Finished(EndReason::RosterEmpty)
        } else if self.rounds_played >= self.options.rounds {
            GameState::Finished(EndReason::RoundsExhausted)
        } else {
            GameState::InProgress
        }
    }

    /// Returns whether no more rounds can be played.
    pub fn is_over(&self) -> bool {
        self.state() != GameState::InProgress
    }

    /// Returns the score and funds of every player.
    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|player| Standing::of(player, self.in_roster(player.id())))
            .collect()
    }

    /// Returns a summary of the game so far.
    pub fn summary(&self) -> GameSummary {
        let top = self.players.iter().map(Player::score).max().unwrap_or(0);
        let leaders = if top == 0 {
            Vec::new()
        } else {
            self.players
                .iter()
                .filter(|player| player.score() == top)
                .map(Player::id)
                .collect()
        };

        let end = match self.state() {
            GameState::InProgress => None,
            GameState::Finished(reason) => Some(reason),
        };

        GameSummary {
            rounds_played: self.rounds_played,
            end,
            standings: self.standings(),
            leaders,
        }
    }
}
