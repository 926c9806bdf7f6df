//! CLI Notty example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use nottyrs::{Card, Colour, Game, GameOptions, Hand, Holder, Outcome, Strategy};

fn main() {
    println!("Notty CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let opponents = loop {
        match prompt_usize("Number of opponents (1-2): ") {
            Some(n @ 1..=2) => break n as u8,
            Some(_) => println!("Please enter 1 or 2."),
            None => return,
        }
    };
    let strategy = match prompt_line("Opponent type ([n]aive / [h]euristic): ").as_str() {
        "h" | "heuristic" => Strategy::Heuristic,
        _ => Strategy::Naive,
    };

    let options = GameOptions::default()
        .with_opponents(opponents)
        .with_strategy(strategy);
    let game = Game::new(options, seed);

    while game.outcome() == Outcome::InProgress {
        match game.turn_holder() {
            Holder::Player if !game.is_delegated() => {
                if !player_turn(&game) {
                    return;
                }
            }
            holder => {
                if let Err(err) = game.play_auto_turn() {
                    println!("Auto-play error: {err}");
                    break;
                }
                println!("{} finished their turn.", holder_name(holder));
            }
        }
    }

    print_table(&game);
    match game.outcome() {
        Outcome::Won(holder) => println!("{} wins!", holder_name(holder)),
        Outcome::Draw => println!("Stalemate. Nobody wins."),
        Outcome::InProgress => {}
    }
}

/// Runs the interactive player turn. Returns `false` when the player quits.
fn player_turn(game: &Game) -> bool {
    while game.outcome() == Outcome::InProgress && game.turn_holder() == Holder::Player {
        print_table(game);
        println!("{}", format_actions(game));

        let action = prompt_line("Action: ");
        let result: Result<(), String> = match action.split_whitespace().next().unwrap_or("") {
            "d" | "draw" => match prompt_usize("How many cards (1-3): ") {
                Some(n) => game
                    .draw_from_deck(n)
                    .map(|moved| println!("Drew {moved} card(s)."))
                    .map_err(|err| err.to_string()),
                None => return false,
            },
            "o" | "opponent" => {
                let target = match prompt_usize("Which opponent (1-2): ") {
                    Some(n @ 1..=2) => Holder::Opponent(n as u8 - 1),
                    Some(_) => continue,
                    None => return false,
                };
                game.draw_from_holder(target)
                    .map(|moved| {
                        if moved {
                            println!("Took a card from {}.", holder_name(target));
                        } else {
                            println!("Nothing to take.");
                        }
                    })
                    .map_err(|err| err.to_string())
            }
            "t" | "toggle" => match prompt_usize("Card position: ") {
                Some(position) => game
                    .toggle_selection(position)
                    .map(|selected| {
                        if selected {
                            println!("Selected card {position}.");
                        } else {
                            println!("Deselected card {position}.");
                        }
                    })
                    .map_err(|err| err.to_string()),
                None => return false,
            },
            "g" | "group" => game
                .submit_discard()
                .map(|count| println!("Discarded a group of {count}."))
                .map_err(|err| err.to_string()),
            "p" | "pass" => {
                if let Err(err) = game.pass_turn() {
                    println!("Pass error: {err}");
                }
                return true;
            }
            "m" | "me" => {
                game.set_delegate(true);
                println!("The engine will play for you from now on.");
                return true;
            }
            "q" | "quit" => return false,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
    }
    true
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());

    for holder in game.holders() {
        let hand = game.hand(holder).unwrap_or_default();
        let marker = if holder == game.turn_holder() { "*" } else { " " };
        match holder {
            Holder::Player => {
                let selection = game.selection();
                println!(
                    "{} {}: {} | {} card(s)",
                    marker,
                    holder_name(holder),
                    format_hand(&hand, &selection),
                    hand.len()
                );
            }
            Holder::Opponent(_) => {
                println!(
                    "{} {}: {} card(s)",
                    marker,
                    holder_name(holder),
                    hand.len()
                );
            }
        }
    }

    let waiting = game.hand(Holder::Player).unwrap_or_default().waiting_cards();
    if !waiting.is_empty() {
        let cards: Vec<String> = waiting.iter().map(format_card).collect();
        println!("  Waiting on: {}", cards.join(" "));
    }
    println!();
}

fn format_actions(game: &Game) -> String {
    let flags = game.flags();
    let has_group = !game
        .hand(Holder::Player)
        .unwrap_or_default()
        .valid_groups()
        .is_empty();

    let mut parts = Vec::new();
    parts.push(format_action("draw", "d", !flags.drawn_from_deck));
    parts.push(format_action("opponent", "o", !flags.drawn_from_opponent));
    parts.push(format_action("toggle", "t", true));
    parts.push(format_action("group", "g", has_group));
    parts.push(format_action("pass", "p", true));
    parts.push(format_action("me", "m", true));
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn holder_name(holder: Holder) -> String {
    match holder {
        Holder::Player => "Player".to_string(),
        Holder::Opponent(index) => format!("Opponent {}", index + 1),
    }
}

fn format_hand(hand: &Hand, selection: &[usize]) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .enumerate()
        .map(|(position, card)| {
            let text = format_card(card);
            if selection.contains(&position) {
                format!("[{text}]")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (letter, color_code) = match card.colour {
        Colour::Red => ("R", "31"),
        Colour::Yellow => ("Y", "33"),
        Colour::Green => ("G", "32"),
        Colour::Blue => ("B", "34"),
    };
    colorize(&format!("{letter}{}", card.rank + 1), color_code)
}
