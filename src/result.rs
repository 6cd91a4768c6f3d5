//! Round and game result types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::EndReason;
use crate::player::{Player, PlayerId};

/// A card dealt to one player during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The player ID.
    pub player_id: PlayerId,
    /// The card dealt.
    pub card: Card,
    /// The card's strength (2 through 14).
    pub strength: u8,
}

/// A player's score and funds at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    /// The player ID.
    pub player_id: PlayerId,
    /// Rounds won so far.
    pub score: u32,
    /// Current funds.
    pub funds: i64,
    /// Whether the player is still on the roster.
    pub in_roster: bool,
}

impl Standing {
    pub(crate) const fn of(player: &Player, in_roster: bool) -> Self {
        Self {
            player_id: player.id(),
            score: player.score(),
            funds: player.funds(),
            in_roster,
        }
    }
}

/// Result of a single round.
///
/// The round is fully settled by the time this value exists; renderers may
/// reveal `draws` one at a time without touching the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub round: u32,
    /// Bet paid by each active player.
    pub bet: i64,
    /// Total paid to the winner (0 when nobody played).
    pub pot: i64,
    /// Cards dealt, in ascending player ID order.
    pub draws: Vec<Draw>,
    /// The round winner, if anyone played.
    pub winner: Option<PlayerId>,
    /// Players removed from the roster at the end of this round.
    pub eliminated: Vec<PlayerId>,
    /// Whether the deck was replaced with a fresh one during this round.
    pub reshuffled: bool,
    /// Scores and funds of every player after settlement.
    pub standings: Vec<Standing>,
}

/// Final report of a finished (or interrupted) game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Number of rounds played.
    pub rounds_played: u32,
    /// Why the game ended, or `None` if it is still in progress.
    pub end: Option<EndReason>,
    /// Scores and funds of every player.
    pub standings: Vec<Standing>,
    /// Players sharing the highest score (empty if nobody won a round).
    pub leaders: Vec<PlayerId>,
}
