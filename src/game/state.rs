//! Game state types.

/// Identity of a card-holding participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holder {
    /// The human player.
    Player,
    /// An automated opponent, by zero-based index.
    Opponent(u8),
}

/// Per-turn draw permissions for the current turn-holder.
///
/// Both flags reset when the turn passes to the next holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnFlags {
    /// Whether the turn-holder has already drawn from the deck this turn.
    pub drawn_from_deck: bool,
    /// Whether the turn-holder has already drawn from another holder this
    /// turn.
    pub drawn_from_opponent: bool,
}

/// Outcome of a round.
///
/// Once the outcome leaves [`InProgress`](Outcome::InProgress) it is
/// terminal and every further mutating call is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The round is still being played.
    InProgress,
    /// The holder emptied their hand and won.
    Won(Holder),
    /// Stalemate: every hand is at capacity and the player holds no valid
    /// group.
    Draw,
}
