//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The game has already ended.
    #[error("the game has already ended")]
    GameOver,
    /// Deck draw count is outside 1..=3.
    #[error("deck draw count is outside 1..=3")]
    InvalidCount,
    /// The targeted holder does not exist in this game.
    #[error("no such holder in this game")]
    NoSuchHolder,
    /// The turn-holder cannot draw from their own hand.
    #[error("cannot draw from your own hand")]
    SelfDraw,
}

/// Errors that can occur when discarding a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The game has already ended.
    #[error("the game has already ended")]
    GameOver,
    /// The selected cards do not form a valid group.
    #[error("the selected cards do not form a valid group")]
    InvalidGroup,
}

/// Errors that can occur when toggling the discard selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The game has already ended.
    #[error("the game has already ended")]
    GameOver,
    /// The card position is outside the turn-holder's hand.
    #[error("no card at that position")]
    NoSuchCard,
}

/// Errors that can occur when passing the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassError {
    /// The game has already ended.
    #[error("the game has already ended")]
    GameOver,
}

/// Errors that can occur when playing an automated turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AutoPlayError {
    /// The game has already ended.
    #[error("the game has already ended")]
    GameOver,
    /// It is the player's turn and their turn has not been delegated.
    #[error("the player's turn has not been delegated")]
    NotDelegated,
}
