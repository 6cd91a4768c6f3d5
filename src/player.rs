//! Player records.

use crate::card::Card;

/// Stable player identifier, assigned sequentially from 1.
pub type PlayerId = u8;

/// A player's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    score: u32,
    funds: i64,
    last_card: Option<Card>,
}

impl Player {
    /// Creates a new player with the given funds.
    #[must_use]
    pub const fn new(id: PlayerId, funds: i64) -> Self {
        Self {
            id,
            score: 0,
            funds,
            last_card: None,
        }
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the number of rounds won.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the current funds.
    #[must_use]
    pub const fn funds(&self) -> i64 {
        self.funds
    }

    /// Returns the most recently dealt card.
    #[must_use]
    pub const fn last_card(&self) -> Option<Card> {
        self.last_card
    }

    /// Returns whether the player can cover the given bet.
    #[must_use]
    pub const fn can_cover(&self, bet: i64) -> bool {
        self.funds >= bet
    }

    /// Returns whether the player is out of funds.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.funds <= 0
    }

    pub(crate) const fn place_bet(&mut self, amount: i64) {
        self.funds -= amount;
    }

    pub(crate) const fn receive_card(&mut self, card: Card) {
        self.last_card = Some(card);
    }

    pub(crate) const fn win_pot(&mut self, pot: i64) {
        self.funds += pot;
        self.score += 1;
    }
}
