//! Card types and deck constants.

/// Card colour.
///
/// Variant order matches the counting-table row order (red = 0, yellow = 1,
/// green = 2, blue = 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Colour {
    /// All colours, in counting-table row order.
    pub const ALL: [Self; COLOUR_COUNT] = [Self::Red, Self::Yellow, Self::Green, Self::Blue];

    /// Returns the counting-table row index of this colour.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The colour of the card.
    pub colour: Colour,
    /// The rank of the card (0 through 9).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 0..=9
    /// are accepted but never occur in a deck and never validate as part of
    /// a group.
    #[must_use]
    pub const fn new(colour: Colour, rank: u8) -> Self {
        Self { colour, rank }
    }
}

/// Number of card colours.
pub const COLOUR_COUNT: usize = 4;

/// Number of card ranks (0 through 9).
pub const RANK_COUNT: usize = 10;

/// Copies of each colour/rank combination in the deck.
pub const CARD_COPIES: usize = 2;

/// Total number of cards in the deck.
pub const DECK_SIZE: usize = COLOUR_COUNT * RANK_COUNT * CARD_COPIES;
