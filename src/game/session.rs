use tracing::info;

use crate::error::RoundError;
use crate::random::RandomSource;
use crate::result::{GameSummary, RoundResult};

use super::Game;

impl<R: RandomSource> Game<R> {
    /// Plays rounds until every round is used up or the roster is empty.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by [`Game::play_round`].
    ///
    /// # Example
    ///
    /// ```
    /// use highcard::{EndReason, Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default().with_rounds(5), 7).unwrap();
    /// let summary = game.run().unwrap();
    /// assert_eq!(summary.rounds_played, 5);
    /// assert_eq!(summary.end, Some(EndReason::RoundsExhausted));
    /// ```
    pub fn run(&mut self) -> Result<GameSummary, RoundError> {
        self.run_with(|_| {})
    }

    /// Plays the remaining rounds, handing each result to `on_round`.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by [`Game::play_round`].
    pub fn run_with<F>(&mut self, mut on_round: F) -> Result<GameSummary, RoundError>
    where
        F: FnMut(&RoundResult),
    {
        while !self.is_over() {
            let result = self.play_round()?;
            on_round(&result);
        }

        let summary = self.summary();
        info!(
            rounds = summary.rounds_played,
            end = ?summary.end,
            leaders = ?summary.leaders,
            "game over"
        );
        Ok(summary)
    }
}
