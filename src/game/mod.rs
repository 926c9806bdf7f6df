//! Game engine and state management.

use core::sync::atomic::{AtomicBool, Ordering};

use alloc::vec::Vec;
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{CARD_COPIES, Card, Colour, DECK_SIZE, RANK_COUNT};
use crate::hand::{HAND_CAPACITY, Hand};
use crate::options::GameOptions;

mod actions;
mod policy;
pub mod state;

pub use state::{Holder, Outcome, TurnFlags};

/// Cards dealt to each participant at the start of a round.
pub const INITIAL_HAND_SIZE: usize = 5;

/// Maximum number of cards a single deck draw may request.
pub const MAX_DECK_DRAW: usize = 3;

/// A Notty game engine that manages hands, the deck, and turn flow.
///
/// The engine owns the deck and every participant's hand, and mediates all
/// card movement between them: nothing outside the engine moves a card.
/// Use [`GameOptions`] to configure the opponent count and strategy.
pub struct Game {
    /// Cards in the deck.
    pub deck: Mutex<Vec<Card>>,
    /// Game options.
    pub options: GameOptions,
    /// Hands in turn order: the player first, then each opponent.
    pub hands: Mutex<Vec<Hand>>,
    /// Current turn-holder.
    turn: Mutex<Holder>,
    /// Per-turn draw flags for the current turn-holder.
    flags: Mutex<TurnFlags>,
    /// Pending discard selection (positions in the turn-holder's hand).
    selection: Mutex<Vec<usize>>,
    /// Round outcome.
    outcome: Mutex<Outcome>,
    /// Whether the player's turns are played by the engine.
    delegated: AtomicBool,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed and deals the opening hands.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nottyrs::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let game = Game::new(options, 42);
    /// let _ = game;
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let options = GameOptions {
            opponents: options.opponents.clamp(1, 2),
            ..options
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::create_deck(&mut rng);

        let mut hands = Vec::with_capacity(1 + options.opponents as usize);
        for _ in 0..=options.opponents {
            hands.push(Hand::new());
        }

        let game = Self {
            deck: Mutex::new(deck),
            options,
            hands: Mutex::new(hands),
            turn: Mutex::new(Holder::Player),
            flags: Mutex::new(TurnFlags::default()),
            selection: Mutex::new(Vec::new()),
            outcome: Mutex::new(Outcome::InProgress),
            delegated: AtomicBool::new(false),
            rng: Mutex::new(rng),
        };
        game.deal_initial_hands();
        game
    }

    /// Creates and shuffles a full deck.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for colour in Colour::ALL {
            for rank in 0..RANK_COUNT as u8 {
                for _ in 0..CARD_COPIES {
                    cards.push(Card::new(colour, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Deals the opening hands, one card at a time in holder order.
    fn deal_initial_hands(&self) {
        for _ in 0..INITIAL_HAND_SIZE {
            for holder in self.holders() {
                self.transfer_from_deck(holder, 1);
            }
        }
    }

    /// Moves up to `n` cards from the deck into `holder`'s hand, shuffling
    /// the deck before every pop. The draw degrades to the remaining hand
    /// capacity when the full request does not fit. Returns the number of
    /// cards moved.
    fn transfer_from_deck(&self, holder: Holder, n: usize) -> usize {
        let mut deck = self.deck.lock();
        let mut hands = self.hands.lock();
        let mut rng = self.rng.lock();

        let Some(hand) = hands.get_mut(self.holder_index(holder)) else {
            return 0;
        };

        let count = if hand.len() + n <= HAND_CAPACITY && deck.len() >= n {
            n
        } else {
            hand.capacity_remaining()
        };
        let count = count.min(deck.len());

        for _ in 0..count {
            deck.shuffle(&mut *rng);
            if let Some(card) = deck.pop() {
                hand.add_card(card);
            }
        }
        count
    }

    /// Moves one random card from `from`'s hand into `to`'s hand, if `from`
    /// holds any card and `to` has room. Returns whether a card moved.
    fn transfer_between(&self, to: Holder, from: Holder) -> bool {
        let mut hands = self.hands.lock();
        let mut rng = self.rng.lock();

        let from_index = self.holder_index(from);
        let to_index = self.holder_index(to);

        let from_len = hands.get(from_index).map_or(0, Hand::len);
        let has_room = hands.get(to_index).is_some_and(|h| !h.is_at_capacity());
        if from_len == 0 || !has_room {
            return false;
        }

        let pick = rng.random_range(0..from_len);
        let Some(card) = hands.get_mut(from_index).and_then(|h| h.remove_at(pick)) else {
            return false;
        };
        if let Some(hand) = hands.get_mut(to_index) {
            hand.add_card(card);
        }
        true
    }

    /// Re-evaluates the round outcome after a mutation.
    ///
    /// The player's empty hand is checked before the opponents'; a
    /// stalemate requires every hand at capacity and no valid group in the
    /// player's hand. Once decided, the outcome never changes.
    fn check_outcome(&self) {
        let mut outcome = self.outcome.lock();
        if *outcome != Outcome::InProgress {
            return;
        }

        let hands = self.hands.lock();
        if hands.first().is_some_and(Hand::is_empty) {
            *outcome = Outcome::Won(Holder::Player);
            return;
        }
        for (index, hand) in hands.iter().enumerate().skip(1) {
            if hand.is_empty() {
                *outcome = Outcome::Won(Holder::Opponent((index - 1) as u8));
                return;
            }
        }

        let everyone_full = hands.iter().all(Hand::is_at_capacity);
        let player_stuck = hands.first().is_some_and(|h| h.valid_groups().is_empty());
        if everyone_full && player_stuck {
            *outcome = Outcome::Draw;
        }
    }

    /// Resets the per-turn state and moves the turn to the next holder.
    fn advance_turn(&self) {
        self.selection.lock().clear();
        *self.flags.lock() = TurnFlags::default();
        let mut turn = self.turn.lock();
        *turn = self.next_holder(*turn);
    }

    /// Returns the holder after `holder` in the fixed cyclic turn order.
    const fn next_holder(&self, holder: Holder) -> Holder {
        match holder {
            Holder::Player => Holder::Opponent(0),
            Holder::Opponent(index) => {
                if index + 1 < self.options.opponents {
                    Holder::Opponent(index + 1)
                } else {
                    Holder::Player
                }
            }
        }
    }

    /// Index of `holder`'s hand in the `hands` vector.
    const fn holder_index(&self, holder: Holder) -> usize {
        match holder {
            Holder::Player => 0,
            Holder::Opponent(index) => 1 + index as usize,
        }
    }

    /// Returns whether `holder` participates in this game.
    const fn holder_exists(&self, holder: Holder) -> bool {
        match holder {
            Holder::Player => true,
            Holder::Opponent(index) => index < self.options.opponents,
        }
    }

    /// Returns whether the round is still being played.
    fn in_progress(&self) -> bool {
        *self.outcome.lock() == Outcome::InProgress
    }

    /// Returns every holder in turn order.
    #[must_use]
    pub fn holders(&self) -> Vec<Holder> {
        let mut holders = Vec::with_capacity(1 + self.options.opponents as usize);
        holders.push(Holder::Player);
        for index in 0..self.options.opponents {
            holders.push(Holder::Opponent(index));
        }
        holders
    }

    /// Returns the number of automated opponents.
    #[must_use]
    pub const fn opponent_count(&self) -> u8 {
        self.options.opponents
    }

    /// Returns the current round outcome.
    pub fn outcome(&self) -> Outcome {
        *self.outcome.lock()
    }

    /// Returns the current turn-holder.
    pub fn turn_holder(&self) -> Holder {
        *self.turn.lock()
    }

    /// Returns the current turn-holder's draw flags.
    pub fn flags(&self) -> TurnFlags {
        *self.flags.lock()
    }

    /// Returns the pending discard selection as positions in the
    /// turn-holder's hand.
    pub fn selection(&self) -> Vec<usize> {
        self.selection.lock().clone()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a clone of `holder`'s hand.
    ///
    /// Returns `None` if the holder does not participate in this game.
    pub fn hand(&self, holder: Holder) -> Option<Hand> {
        self.hands.lock().get(self.holder_index(holder)).cloned()
    }

    /// Sets whether the engine plays the player's turns automatically.
    pub fn set_delegate(&self, delegated: bool) {
        self.delegated.store(delegated, Ordering::SeqCst);
    }

    /// Returns whether the player's turns are played by the engine.
    pub fn is_delegated(&self) -> bool {
        self.delegated.load(Ordering::SeqCst)
    }
}
