//! Hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::groups::{self, CountingTable};

/// The maximum number of cards a hand may hold.
pub const HAND_CAPACITY: usize = 20;

/// A participant's hand of cards.
///
/// The hand is an ordered container; the capacity cap is enforced by the
/// game's transfer operations, not by the container itself.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at the given position, shifting later
    /// cards down. Returns `None` if the position is out of range.
    pub fn remove_at(&mut self, position: usize) -> Option<Card> {
        if position < self.cards.len() {
            Some(self.cards.remove(position))
        } else {
            None
        }
    }

    /// Removes and returns the first card equal to `card`, if any copy is
    /// held.
    pub fn remove_first(&mut self, card: Card) -> Option<Card> {
        let position = self.cards.iter().position(|&c| c == card)?;
        Some(self.cards.remove(position))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand has reached [`HAND_CAPACITY`].
    #[must_use]
    pub fn is_at_capacity(&self) -> bool {
        self.cards.len() >= HAND_CAPACITY
    }

    /// Returns how many more cards the hand can hold.
    #[must_use]
    pub fn capacity_remaining(&self) -> usize {
        HAND_CAPACITY.saturating_sub(self.cards.len())
    }

    /// Builds the colour/rank occurrence matrix for the hand.
    #[must_use]
    pub fn counting_table(&self) -> CountingTable {
        CountingTable::from_cards(&self.cards)
    }

    /// Finds every maximal valid group in the hand.
    ///
    /// See [`groups::find_all_valid_groups`].
    #[must_use]
    pub fn valid_groups(&self) -> Vec<Vec<Card>> {
        groups::find_all_valid_groups(&self.cards)
    }

    /// Finds the largest valid group in the hand, if any.
    ///
    /// See [`groups::find_largest_valid_group`].
    #[must_use]
    pub fn largest_valid_group(&self) -> Option<Vec<Card>> {
        groups::find_largest_valid_group(&self.cards)
    }

    /// Computes the cards this hand is waiting on.
    ///
    /// See [`groups::waiting_cards`].
    #[must_use]
    pub fn waiting_cards(&self) -> Vec<Card> {
        groups::waiting_cards(&self.cards)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}
