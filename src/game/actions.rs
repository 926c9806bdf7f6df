use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{DiscardError, DrawError, PassError, SelectError};
use crate::groups;
use crate::hand::Hand;

use super::{Game, Holder, MAX_DECK_DRAW};

impl Game {
    /// Draws up to `n` cards from the deck into the turn-holder's hand.
    ///
    /// The draw is a silent no-op (`Ok(0)`) if the deck has already been
    /// drawn from this turn. When the full request would push the hand past
    /// capacity the draw degrades to however many cards fit. The per-turn
    /// deck flag is consumed either way. Returns the number of cards that
    /// moved.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended or `n` is outside
    /// 1..=[`MAX_DECK_DRAW`].
    pub fn draw_from_deck(&self, n: usize) -> Result<usize, DrawError> {
        if !self.in_progress() {
            return Err(DrawError::GameOver);
        }
        if n == 0 || n > MAX_DECK_DRAW {
            return Err(DrawError::InvalidCount);
        }

        let mut flags = self.flags.lock();
        if flags.drawn_from_deck {
            return Ok(0);
        }
        flags.drawn_from_deck = true;
        drop(flags);

        let moved = self.transfer_from_deck(self.turn_holder(), n);
        self.check_outcome();
        Ok(moved)
    }

    /// Draws one card, picked at random, from `target`'s hand into the
    /// turn-holder's hand.
    ///
    /// The draw is a silent no-op (`Ok(false)`) if another holder has
    /// already been drawn from this turn, the target's hand is empty, or
    /// the turn-holder's hand is at capacity. The per-turn holder flag is
    /// consumed either way. Returns whether a card moved.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended, the target does not
    /// participate in this game, or the target is the turn-holder.
    pub fn draw_from_holder(&self, target: Holder) -> Result<bool, DrawError> {
        if !self.in_progress() {
            return Err(DrawError::GameOver);
        }
        if !self.holder_exists(target) {
            return Err(DrawError::NoSuchHolder);
        }
        let holder = self.turn_holder();
        if holder == target {
            return Err(DrawError::SelfDraw);
        }

        let mut flags = self.flags.lock();
        if flags.drawn_from_opponent {
            return Ok(false);
        }
        flags.drawn_from_opponent = true;
        drop(flags);

        let moved = self.transfer_between(holder, target);
        self.check_outcome();
        Ok(moved)
    }

    /// Toggles a card of the turn-holder's hand in the pending discard
    /// selection.
    ///
    /// `position` indexes the hand's current card order, so physically
    /// duplicate cards stay distinguishable. Returns whether the card is
    /// selected after the toggle.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended or the position is
    /// outside the turn-holder's hand.
    pub fn toggle_selection(&self, position: usize) -> Result<bool, SelectError> {
        if !self.in_progress() {
            return Err(SelectError::GameOver);
        }

        let hands = self.hands.lock();
        let hand_len = hands
            .get(self.holder_index(self.turn_holder()))
            .map_or(0, Hand::len);
        drop(hands);
        if position >= hand_len {
            return Err(SelectError::NoSuchCard);
        }

        let mut selection = self.selection.lock();
        if let Some(index) = selection.iter().position(|&p| p == position) {
            selection.remove(index);
            Ok(false)
        } else {
            selection.push(position);
            Ok(true)
        }
    }

    /// Validates the pending selection and, if it forms a valid group,
    /// returns the selected cards from the turn-holder's hand to the deck
    /// and clears the selection.
    ///
    /// On failure the hand and the selection are left untouched, so the
    /// selection can be adjusted and resubmitted. Returns the number of
    /// cards discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended or the selected cards
    /// do not form a valid group.
    pub fn submit_discard(&self) -> Result<usize, DiscardError> {
        if !self.in_progress() {
            return Err(DiscardError::GameOver);
        }

        let mut selection = self.selection.lock();
        let mut hands = self.hands.lock();
        let Some(hand) = hands.get_mut(self.holder_index(self.turn_holder())) else {
            return Err(DiscardError::InvalidGroup);
        };

        let cards: Vec<Card> = selection
            .iter()
            .filter_map(|&p| hand.cards().get(p).copied())
            .collect();
        if cards.len() != selection.len() || !groups::is_valid_group(&cards) {
            return Err(DiscardError::InvalidGroup);
        }

        let mut positions = selection.clone();
        positions.sort_unstable();

        let mut deck = self.deck.lock();
        for &position in positions.iter().rev() {
            if let Some(card) = hand.remove_at(position) {
                deck.push(card);
            }
        }
        selection.clear();
        drop(deck);
        drop(hands);
        drop(selection);

        self.check_outcome();
        Ok(cards.len())
    }

    /// Discards the turn-holder's largest valid group back to the deck.
    ///
    /// A silent no-op (`Ok(0)`) when the hand contains no valid group.
    /// Returns the number of cards discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended.
    pub fn discard_largest_group(&self) -> Result<usize, DiscardError> {
        if !self.in_progress() {
            return Err(DiscardError::GameOver);
        }

        let mut hands = self.hands.lock();
        let Some(hand) = hands.get_mut(self.holder_index(self.turn_holder())) else {
            return Ok(0);
        };
        let Some(group) = hand.largest_valid_group() else {
            return Ok(0);
        };

        let mut deck = self.deck.lock();
        for card in &group {
            if let Some(card) = hand.remove_first(*card) {
                deck.push(card);
            }
        }
        drop(deck);
        drop(hands);

        self.check_outcome();
        Ok(group.len())
    }

    /// Ends the turn: clears the pending selection, resets both draw flags,
    /// and advances to the next holder in the fixed cyclic order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended.
    pub fn pass_turn(&self) -> Result<(), PassError> {
        if !self.in_progress() {
            return Err(PassError::GameOver);
        }
        self.advance_turn();
        Ok(())
    }
}
