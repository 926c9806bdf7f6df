//! A Notty card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! drawing from the deck or from another participant, validating and
//! discarding card groups, turn rotation, and automated opponent turns.
//! The group rules themselves (validity, search, waiting cards) are exposed
//! as pure functions for front ends that want to reason about hands.
//!
//! # Example
//!
//! ```no_run
//! use nottyrs::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod groups;
pub mod hand;
pub mod options;
mod sync;

// Re-export main types
pub use card::{CARD_COPIES, COLOUR_COUNT, Card, Colour, DECK_SIZE, RANK_COUNT};
pub use error::{AutoPlayError, DiscardError, DrawError, PassError, SelectError};
pub use game::{Game, Holder, INITIAL_HAND_SIZE, MAX_DECK_DRAW, Outcome, TurnFlags};
pub use groups::{
    CountingTable, MIN_GROUP_LEN, find_all_valid_groups, find_largest_valid_group, is_valid_group,
    waiting_cards,
};
pub use hand::{HAND_CAPACITY, Hand};
pub use options::{GameOptions, Strategy};
