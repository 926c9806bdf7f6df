//! Group validity, group search, and waiting-card computation.
//!
//! A *group* is a discardable combination of at least three cards: either a
//! run (one colour, contiguous ascending ranks) or a set (one rank,
//! pairwise-distinct colours). These functions are pure predicates and
//! searches over card slices; they do not know about hands, turns, or the
//! deck.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{COLOUR_COUNT, Card, Colour, RANK_COUNT};

/// Minimum number of cards in a valid group.
pub const MIN_GROUP_LEN: usize = 3;

/// Returns whether the cards form a valid group.
///
/// A run is one colour with pairwise-distinct ranks forming a contiguous
/// ascending sequence; a set is one rank with pairwise-distinct colours.
/// Fewer than [`MIN_GROUP_LEN`] cards never validate. The order of the
/// input does not matter.
///
/// # Example
///
/// ```
/// use nottyrs::{Card, Colour, is_valid_group};
///
/// let run = [
///     Card::new(Colour::Red, 2),
///     Card::new(Colour::Red, 3),
///     Card::new(Colour::Red, 4),
/// ];
/// assert!(is_valid_group(&run));
/// ```
#[must_use]
pub fn is_valid_group(cards: &[Card]) -> bool {
    if cards.len() < MIN_GROUP_LEN {
        return false;
    }

    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable();

    let same_colour = cards.iter().all(|c| c.colour == cards[0].colour);
    let distinct_ranks = ranks.windows(2).all(|w| w[0] != w[1]);

    // Run: one colour, distinct ranks, no gaps once sorted.
    if same_colour && distinct_ranks {
        return ranks.windows(2).all(|w| w[1] - w[0] == 1);
    }

    // Set: one rank, pairwise-distinct colours.
    if cards.iter().all(|c| c.rank == cards[0].rank) {
        let mut seen = [false; COLOUR_COUNT];
        for card in cards {
            if seen[card.colour.index()] {
                return false;
            }
            seen[card.colour.index()] = true;
        }
        return true;
    }

    false
}

/// Occurrence matrix over a collection of cards (rows: colours, columns:
/// ranks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingTable([[u8; RANK_COUNT]; COLOUR_COUNT]);

impl CountingTable {
    /// Counts the given cards into a fresh table.
    ///
    /// Cards with a rank outside 0..=9 are ignored; they cannot occur in a
    /// deck.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut table = [[0_u8; RANK_COUNT]; COLOUR_COUNT];
        for card in cards {
            if let Some(count) = table[card.colour.index()].get_mut(card.rank as usize) {
                *count += 1;
            }
        }
        Self(table)
    }

    /// Returns how many cards of the given colour and rank are present.
    #[must_use]
    pub fn count(&self, colour: Colour, rank: u8) -> u8 {
        self.0[colour.index()]
            .get(rank as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// Finds every maximal valid group in the cards.
///
/// Set groups are emitted first, one per rank held in at least three
/// distinct colours (presence only; duplicate copies are not enumerated
/// separately). Run groups follow, one per maximal contiguous rank run of
/// length at least three within a colour; sub-runs of a longer run are not
/// enumerated. The scan order (ascending rank, then ascending colour) is
/// deterministic.
///
/// An empty result means the cards contain no valid group.
#[must_use]
pub fn find_all_valid_groups(cards: &[Card]) -> Vec<Vec<Card>> {
    let table = CountingTable::from_cards(cards);
    let mut groups = Vec::new();

    // Ranks held in three or more distinct colours.
    for rank in 0..RANK_COUNT as u8 {
        let mut colours_at_rank = Vec::new();
        for colour in Colour::ALL {
            if table.count(colour, rank) > 0 {
                colours_at_rank.push(Card::new(colour, rank));
            }
        }
        if colours_at_rank.len() >= MIN_GROUP_LEN {
            groups.push(colours_at_rank);
        }
    }

    // Maximal contiguous rank runs within each colour.
    for colour in Colour::ALL {
        let mut run = Vec::new();
        for rank in 0..RANK_COUNT as u8 {
            if table.count(colour, rank) > 0 {
                run.push(Card::new(colour, rank));
            } else if run.len() >= MIN_GROUP_LEN {
                groups.push(core::mem::take(&mut run));
            } else {
                run.clear();
            }
        }
        if run.len() >= MIN_GROUP_LEN {
            groups.push(run);
        }
    }

    groups
}

/// Finds the valid group with the most cards, if any.
///
/// Ties keep the group discovered first by the [`find_all_valid_groups`]
/// scan order.
#[must_use]
pub fn find_largest_valid_group(cards: &[Card]) -> Option<Vec<Card>> {
    let mut largest: Option<Vec<Card>> = None;
    for group in find_all_valid_groups(cards) {
        if largest.as_ref().is_none_or(|l| group.len() > l.len()) {
            largest = Some(group);
        }
    }
    largest
}

/// Computes the waiting cards of a hand: cards not necessarily held that
/// would create or extend a valid group if added.
///
/// Two adjacent ranks of one colour wait on the ranks just outside them
/// (within 1..=9 below and 0..=9 above); two ranks of one colour separated
/// by a single gap wait on the middle rank; a rank held in exactly two
/// distinct colours waits on the other two colours. The result may contain
/// repeats when several rules produce the same card; callers should treat
/// it as a set and test membership only.
#[must_use]
pub fn waiting_cards(cards: &[Card]) -> Vec<Card> {
    let mut waiting = Vec::new();

    let mut colour_groups: HashMap<Colour, Vec<u8>> = HashMap::new();
    let mut rank_groups: HashMap<u8, Vec<Colour>> = HashMap::new();
    for card in cards {
        colour_groups.entry(card.colour).or_default().push(card.rank);
        rank_groups.entry(card.rank).or_default().push(card.colour);
    }

    for (&colour, ranks) in &colour_groups {
        let mut ranks = ranks.clone();
        ranks.sort_unstable();
        for pair in ranks.windows(2) {
            let (low, high) = (pair[0], pair[1]);
            if high == low + 1 {
                if low >= 2 && !ranks.contains(&(low - 1)) {
                    waiting.push(Card::new(colour, low - 1));
                }
                if high < 9 && !ranks.contains(&(high + 1)) {
                    waiting.push(Card::new(colour, high + 1));
                }
            } else if high == low + 2 {
                waiting.push(Card::new(colour, low + 1));
            }
        }
    }

    for (&rank, colours) in &rank_groups {
        let mut held = [false; COLOUR_COUNT];
        for colour in colours {
            held[colour.index()] = true;
        }
        if held.iter().filter(|&&h| h).count() == 2 {
            for colour in Colour::ALL {
                if !held[colour.index()] {
                    waiting.push(Card::new(colour, rank));
                }
            }
        }
    }

    waiting
}
