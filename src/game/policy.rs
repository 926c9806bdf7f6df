use rand::Rng;

use crate::error::AutoPlayError;
use crate::hand::Hand;
use crate::options::Strategy;

use super::{Game, Holder, MAX_DECK_DRAW};

/// A holder is only worth stealing from when it has more cards than this.
const MIN_STEAL_HAND: usize = 3;

#[cfg(feature = "std")]
#[expect(
    clippy::cast_precision_loss,
    reason = "waiting-set sizes are far below f64 precision"
)]
fn half_rounded(n: usize) -> usize {
    ((n as f64) / 2.0).round() as usize
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
#[expect(
    clippy::cast_precision_loss,
    reason = "waiting-set sizes are far below f64 precision"
)]
fn half_rounded(n: usize) -> usize {
    libm::round((n as f64) / 2.0) as usize
}

impl Game {
    /// Plays the current turn automatically, then advances to the next
    /// holder.
    ///
    /// An opponent's turn runs the configured [`Strategy`]; the player's
    /// turn runs the same heuristic on their behalf and requires delegation
    /// to be enabled via [`Game::set_delegate`]. If the game ends mid-turn
    /// the remaining steps are skipped and the turn does not advance.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already ended, or if it is the
    /// player's turn and their turn has not been delegated.
    pub fn play_auto_turn(&self) -> Result<(), AutoPlayError> {
        if !self.in_progress() {
            return Err(AutoPlayError::GameOver);
        }

        match self.turn_holder() {
            Holder::Player => {
                if !self.is_delegated() {
                    return Err(AutoPlayError::NotDelegated);
                }
                self.delegated_player_turn();
            }
            Holder::Opponent(_) => match self.options.strategy {
                Strategy::Naive => self.naive_turn(),
                Strategy::Heuristic => self.heuristic_turn(),
            },
        }

        if self.in_progress() {
            self.advance_turn();
        }
        Ok(())
    }

    /// Naive strategy: random deck draw, coin-flip steal from the player,
    /// one discard.
    fn naive_turn(&self) {
        let n = self.rng.lock().random_range(1..=MAX_DECK_DRAW);
        let _ = self.draw_from_deck(n);

        if self.in_progress() && self.rng.lock().random_bool(0.5) {
            let _ = self.draw_from_holder(Holder::Player);
        }
        if self.in_progress() {
            let _ = self.discard_largest_group();
        }
    }

    /// Heuristic strategy: discard, deck draw sized by the waiting set,
    /// discard again, steal from the best-scoring holder, final discard.
    fn heuristic_turn(&self) {
        let holder = self.turn_holder();
        let _ = self.discard_largest_group();

        if self.in_progress() && !self.hand_is_full(holder) {
            let waiting = self.waiting_count(holder);
            let _ = self.draw_from_deck(half_rounded(waiting).clamp(1, MAX_DECK_DRAW));

            if self.in_progress() {
                let _ = self.discard_largest_group();
            }
            if self.in_progress() {
                if let Some(target) = self.best_steal_target(holder) {
                    let _ = self.draw_from_holder(target);
                }
            }
        }

        if self.in_progress() {
            let _ = self.discard_largest_group();
        }
    }

    /// Plays one heuristic-style turn on the player's behalf, honouring the
    /// player's per-turn draw flags.
    fn delegated_player_turn(&self) {
        if !self.flags().drawn_from_deck {
            let waiting = self.waiting_count(Holder::Player);
            let _ = self.draw_from_deck(half_rounded(waiting).clamp(1, MAX_DECK_DRAW));
        }

        if self.in_progress() && !self.flags().drawn_from_opponent {
            if let Some(target) = self.best_steal_target(Holder::Player) {
                let _ = self.draw_from_holder(target);
            }
        }

        if self.in_progress() {
            let _ = self.discard_largest_group();
        }
    }

    /// Fraction of `target`'s cards that appear in `holder`'s waiting set.
    ///
    /// An empty target scores 0 (guarded division).
    #[expect(
        clippy::cast_precision_loss,
        reason = "hand sizes never exceed the capacity cap"
    )]
    fn steal_score(&self, holder: Holder, target: Holder) -> f64 {
        let hands = self.hands.lock();
        let Some(own) = hands.get(self.holder_index(holder)) else {
            return 0.0;
        };
        let Some(other) = hands.get(self.holder_index(target)) else {
            return 0.0;
        };
        if other.is_empty() {
            return 0.0;
        }

        let waiting = own.waiting_cards();
        let matching = other.cards().iter().filter(|c| waiting.contains(c)).count();
        matching as f64 / other.len() as f64
    }

    /// Picks the holder worth stealing from, if any.
    ///
    /// The winner's score must strictly exceed 0.5 and every competing
    /// holder's score, and the winner must hold more than
    /// `MIN_STEAL_HAND` cards.
    fn best_steal_target(&self, holder: Holder) -> Option<Holder> {
        let mut best: Option<(Holder, f64)> = None;
        let mut runner_up = 0.0_f64;

        for candidate in self.holders() {
            if candidate == holder {
                continue;
            }
            let score = self.steal_score(holder, candidate);
            match best {
                Some((_, top)) if score <= top => runner_up = runner_up.max(score),
                _ => {
                    if let Some((_, top)) = best {
                        runner_up = runner_up.max(top);
                    }
                    best = Some((candidate, score));
                }
            }
        }

        let (target, score) = best?;
        if score > 0.5 && score > runner_up && self.hand_len(target) > MIN_STEAL_HAND {
            Some(target)
        } else {
            None
        }
    }

    /// Number of cards in `holder`'s hand.
    fn hand_len(&self, holder: Holder) -> usize {
        self.hands
            .lock()
            .get(self.holder_index(holder))
            .map_or(0, Hand::len)
    }

    /// Whether `holder`'s hand is at capacity.
    fn hand_is_full(&self, holder: Holder) -> bool {
        self.hands
            .lock()
            .get(self.holder_index(holder))
            .is_some_and(Hand::is_at_capacity)
    }

    /// Size of `holder`'s waiting set.
    fn waiting_count(&self, holder: Holder) -> usize {
        self.hands
            .lock()
            .get(self.holder_index(holder))
            .map_or(0, |hand| hand.waiting_cards().len())
    }
}
