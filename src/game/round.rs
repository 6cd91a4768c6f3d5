use alloc::vec::Vec;
use tracing::{debug, info};

use crate::error::RoundError;
use crate::player::PlayerId;
use crate::random::RandomSource;
use crate::result::{Draw, RoundResult};

use super::Game;

/// Returns the first draw holding the highest strength.
fn winning_draw(draws: &[Draw]) -> Option<&Draw> {
    let mut best: Option<&Draw> = None;
    for draw in draws {
        if best.is_none_or(|leader| draw.strength > leader.strength) {
            best = Some(draw);
        }
    }
    best
}

impl<R: RandomSource> Game<R> {
    /// Plays one betting round.
    ///
    /// Every roster player whose funds cover the bet pays it up front and is
    /// dealt one card in ascending ID order. The highest card takes the pot;
    /// on equal strength the lowest ID wins. Afterwards every roster player
    /// with funds at or below zero is eliminated, and the deck is replaced
    /// with a fresh shuffled one if it can no longer serve the roster.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::GameOver`] if the game has finished, or
    /// [`RoundError::Deal`] if the deck ran out mid-round.
    pub fn play_round(&mut self) -> Result<RoundResult, RoundError> {
        if self.is_over() {
            return Err(RoundError::GameOver);
        }

        let round = self.rounds_played + 1;
        let bet = self.options.bet;

        let active: Vec<PlayerId> = self
            .roster
            .iter()
            .copied()
            .filter(|&id| self.players[Self::slot(id)].can_cover(bet))
            .collect();

        let mut reshuffled = self.replace_deck_if_short(active.len());
        self.deck.shuffle(&mut self.rng);

        for &id in &active {
            self.player_mut(id).place_bet(bet);
        }

        let mut draws = Vec::with_capacity(active.len());
        for &id in &active {
            let card = self.deck.deal()?;
            self.player_mut(id).receive_card(card);
            debug!(round, player = id, card = %card, "dealt");
            draws.push(Draw {
                player_id: id,
                card,
                strength: card.strength(),
            });
        }

        let winner = winning_draw(&draws).map(|draw| draw.player_id);
        let pot = match winner {
            Some(id) => {
                let pot = bet * active.len() as i64;
                self.player_mut(id).win_pot(pot);
                pot
            }
            None => 0,
        };

        let mut eliminated = Vec::new();
        let players = &self.players;
        self.roster.retain(|&id| {
            let broke = players[Self::slot(id)].is_broke();
            if broke {
                eliminated.push(id);
            }
            !broke
        });

        self.rounds_played = round;
        if self.replace_deck_if_short(self.roster.len()) {
            self.deck.shuffle(&mut self.rng);
            reshuffled = true;
        }

        info!(
            round,
            active = active.len(),
            winner = ?winner,
            pot,
            eliminated = eliminated.len(),
            "round settled"
        );
        for &id in &eliminated {
            info!(round, player = id, "player eliminated");
        }

        Ok(RoundResult {
            round,
            bet,
            pot,
            draws,
            winner,
            eliminated,
            reshuffled,
            standings: self.standings(),
        })
    }
}
