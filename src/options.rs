//! Game configuration options.

/// Decision strategy used by automated opponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Strategy {
    /// Draw a uniformly random count from the deck, steal from the player
    /// on a coin flip, then discard the largest valid group.
    #[default]
    Naive,
    /// Size deck draws by the waiting set and steal from whichever holder
    /// scores highest as an acquisition target.
    Heuristic,
}

/// Configuration options for a Notty game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use nottyrs::{GameOptions, Strategy};
///
/// let options = GameOptions::default()
///     .with_opponents(2)
///     .with_strategy(Strategy::Heuristic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of automated opponents. Values outside 1..=2 are clamped when
    /// the game is created.
    pub opponents: u8,
    /// Strategy used by the automated opponents.
    pub strategy: Strategy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            opponents: 1,
            strategy: Strategy::Naive,
        }
    }
}

impl GameOptions {
    /// Sets the number of automated opponents.
    ///
    /// # Example
    ///
    /// ```
    /// use nottyrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_opponents(2);
    /// assert_eq!(options.opponents, 2);
    /// ```
    #[must_use]
    pub const fn with_opponents(mut self, opponents: u8) -> Self {
        self.opponents = opponents;
        self
    }

    /// Sets the opponent strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use nottyrs::{GameOptions, Strategy};
    ///
    /// let options = GameOptions::default().with_strategy(Strategy::Heuristic);
    /// assert_eq!(options.strategy, Strategy::Heuristic);
    /// ```
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}
