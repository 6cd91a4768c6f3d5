//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Rounds remain and at least one player is on the roster.
    InProgress,
    /// No more rounds will be played.
    Finished(EndReason),
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every configured round was played.
    RoundsExhausted,
    /// Every player was eliminated.
    RosterEmpty,
}
