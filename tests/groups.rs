//! Group rule tests: validity, search, and waiting cards.

use nottyrs::{
    Card, Colour, find_all_valid_groups, find_largest_valid_group, is_valid_group, waiting_cards,
};

const fn card(colour: Colour, rank: u8) -> Card {
    Card::new(colour, rank)
}

fn contains(cards: &[Card], colour: Colour, rank: u8) -> bool {
    cards.contains(&card(colour, rank))
}

#[test]
fn run_of_three_is_valid() {
    assert!(is_valid_group(&[
        card(Colour::Red, 2),
        card(Colour::Red, 3),
        card(Colour::Red, 4),
    ]));
}

#[test]
fn gapped_run_is_invalid() {
    assert!(!is_valid_group(&[
        card(Colour::Red, 2),
        card(Colour::Red, 4),
        card(Colour::Red, 5),
    ]));
}

#[test]
fn set_of_three_distinct_colours_is_valid() {
    assert!(is_valid_group(&[
        card(Colour::Red, 5),
        card(Colour::Yellow, 5),
        card(Colour::Green, 5),
    ]));
}

#[test]
fn set_with_repeated_colour_is_invalid() {
    assert!(!is_valid_group(&[
        card(Colour::Red, 5),
        card(Colour::Red, 5),
        card(Colour::Yellow, 5),
    ]));
}

#[test]
fn set_of_all_four_colours_is_valid() {
    assert!(is_valid_group(&[
        card(Colour::Red, 9),
        card(Colour::Yellow, 9),
        card(Colour::Green, 9),
        card(Colour::Blue, 9),
    ]));
}

#[test]
fn fewer_than_three_cards_never_validate() {
    assert!(!is_valid_group(&[]));
    assert!(!is_valid_group(&[card(Colour::Red, 5)]));
    assert!(!is_valid_group(&[card(Colour::Red, 5), card(Colour::Red, 6)]));
}

#[test]
fn validator_ignores_input_order() {
    let mut run = [
        card(Colour::Blue, 7),
        card(Colour::Blue, 5),
        card(Colour::Blue, 6),
    ];
    assert!(is_valid_group(&run));
    run.reverse();
    assert!(is_valid_group(&run));
    run.swap(0, 1);
    assert!(is_valid_group(&run));
}

#[test]
fn search_finds_single_run() {
    let hand = [
        card(Colour::Red, 1),
        card(Colour::Red, 2),
        card(Colour::Red, 3),
        card(Colour::Yellow, 7),
    ];

    let groups = find_all_valid_groups(&hand);
    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0],
        vec![
            card(Colour::Red, 1),
            card(Colour::Red, 2),
            card(Colour::Red, 3),
        ]
    );

    let largest = find_largest_valid_group(&hand).unwrap();
    assert_eq!(largest, groups[0]);
}

#[test]
fn search_emits_sets_before_runs() {
    let hand = [
        card(Colour::Red, 5),
        card(Colour::Yellow, 5),
        card(Colour::Green, 5),
        card(Colour::Blue, 1),
        card(Colour::Blue, 2),
        card(Colour::Blue, 3),
    ];

    let groups = find_all_valid_groups(&hand);
    assert_eq!(groups.len(), 2);
    assert!(groups[0].iter().all(|c| c.rank == 5));
    assert!(groups[1].iter().all(|c| c.colour == Colour::Blue));

    // Equal sizes keep the first discovered group.
    let largest = find_largest_valid_group(&hand).unwrap();
    assert_eq!(largest, groups[0]);
}

#[test]
fn search_emits_the_maximal_run_only() {
    let hand = [
        card(Colour::Green, 2),
        card(Colour::Green, 3),
        card(Colour::Green, 4),
        card(Colour::Green, 5),
        card(Colour::Green, 6),
    ];

    let groups = find_all_valid_groups(&hand);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 5);
}

#[test]
fn search_emits_each_separate_run() {
    let hand = [
        card(Colour::Green, 0),
        card(Colour::Green, 1),
        card(Colour::Green, 2),
        card(Colour::Green, 5),
        card(Colour::Green, 6),
        card(Colour::Green, 7),
    ];

    let groups = find_all_valid_groups(&hand);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 3);
    assert_eq!(groups[1].len(), 3);
}

#[test]
fn search_ignores_duplicate_copies() {
    // Two copies of the same card count once in a group.
    let hand = [
        card(Colour::Red, 4),
        card(Colour::Red, 4),
        card(Colour::Red, 5),
        card(Colour::Red, 6),
    ];

    let groups = find_all_valid_groups(&hand);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 3);
}

#[test]
fn largest_prefers_strictly_bigger_group() {
    let hand = [
        card(Colour::Red, 5),
        card(Colour::Yellow, 5),
        card(Colour::Green, 5),
        card(Colour::Blue, 1),
        card(Colour::Blue, 2),
        card(Colour::Blue, 3),
        card(Colour::Blue, 4),
    ];

    let largest = find_largest_valid_group(&hand).unwrap();
    assert_eq!(largest.len(), 4);
    assert!(largest.iter().all(|c| c.colour == Colour::Blue));
}

#[test]
fn empty_hand_has_no_groups_or_waiting_cards() {
    assert!(find_all_valid_groups(&[]).is_empty());
    assert!(find_largest_valid_group(&[]).is_none());
    assert!(waiting_cards(&[]).is_empty());
}

#[test]
fn waiting_pair_extends_both_ways() {
    let waiting = waiting_cards(&[card(Colour::Red, 2), card(Colour::Red, 3)]);
    assert!(contains(&waiting, Colour::Red, 1));
    assert!(contains(&waiting, Colour::Red, 4));
}

#[test]
fn waiting_gap_of_two_fills_the_middle() {
    let waiting = waiting_cards(&[card(Colour::Red, 4), card(Colour::Red, 6)]);
    assert!(contains(&waiting, Colour::Red, 5));
}

#[test]
fn waiting_two_colours_complete_the_set() {
    let waiting = waiting_cards(&[card(Colour::Red, 5), card(Colour::Yellow, 5)]);
    assert!(contains(&waiting, Colour::Green, 5));
    assert!(contains(&waiting, Colour::Blue, 5));
}

#[test]
fn waiting_three_colours_do_not_wait_on_the_fourth() {
    let waiting = waiting_cards(&[
        card(Colour::Red, 5),
        card(Colour::Yellow, 5),
        card(Colour::Green, 5),
    ]);
    assert!(!contains(&waiting, Colour::Blue, 5));
}

#[test]
fn waiting_respects_rank_bounds() {
    // Nothing below rank 1 and nothing above rank 9 is ever waited on.
    let low = waiting_cards(&[card(Colour::Red, 0), card(Colour::Red, 1)]);
    assert_eq!(low, vec![card(Colour::Red, 2)]);

    let high = waiting_cards(&[card(Colour::Red, 8), card(Colour::Red, 9)]);
    assert_eq!(high, vec![card(Colour::Red, 7)]);
}

#[test]
fn waiting_skips_extensions_already_held() {
    let waiting = waiting_cards(&[
        card(Colour::Red, 2),
        card(Colour::Red, 3),
        card(Colour::Red, 4),
    ]);
    assert!(contains(&waiting, Colour::Red, 1));
    assert!(contains(&waiting, Colour::Red, 5));
    assert!(!contains(&waiting, Colour::Red, 3));
    assert!(!contains(&waiting, Colour::Red, 4));
}
