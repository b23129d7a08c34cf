//! CLI roll-off example.
//!
//! Run with `RUST_LOG=debug` to see each round logged.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use rolloff::{RollOff, RollOffOptions, RollOffResult, RollOffState, SeededRoller};

fn main() {
    env_logger::init();
    println!("Roll-off CLI example (type 'q' to quit)");

    loop {
        let Some(players) = prompt_usize("Number of players (0 to quit): ") else {
            break;
        };
        if players == 0 {
            println!("Goodbye.");
            break;
        }

        let eliminated = prompt_seats(players);

        let seed_input = prompt_line("Seed (blank for clock): ");
        let roller = match seed_input.parse::<i64>() {
            Ok(seed) => SeededRoller::new(seed),
            Err(_) => SeededRoller::from_clock(),
        };
        println!("Using seed {}", roller.seed());

        let mut rolloff = match RollOff::new(players, RollOffOptions::default()) {
            Ok(rolloff) => rolloff,
            Err(err) => {
                println!("Roll-off error: {err}");
                continue;
            }
        };

        loop {
            match rolloff.step(&roller, eliminated.as_slice()) {
                Ok(RollOffState::Rolling) => {
                    println!(
                        "Round {}: tie at {}, rolling again",
                        rolloff.rounds(),
                        rolloff.current_max().unwrap_or(0)
                    );
                }
                Ok(RollOffState::Done { .. }) => break,
                Err(err) => {
                    println!("Roll-off error: {err}");
                    break;
                }
            }
        }

        if let Some(result) = rolloff.finish() {
            print_result(&result, &eliminated);
        }
    }
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

/// Reads a comma-separated list of eliminated seats.
fn prompt_seats(players: usize) -> Vec<bool> {
    let mut eliminated = vec![false; players];
    let input = prompt_line("Eliminated seats, comma separated (blank for none): ");
    for seat in input.split(',').filter_map(|s| s.trim().parse::<usize>().ok()) {
        match eliminated.get_mut(seat) {
            Some(slot) => *slot = true,
            None => println!("Ignoring seat {seat}: no such player."),
        }
    }
    eliminated
}

fn print_result(result: &RollOffResult, eliminated: &[bool]) {
    println!();
    for (seat, history) in result.rolls().iter().enumerate() {
        let rolls = if eliminated[seat] {
            colorize("eliminated", "90")
        } else {
            history
                .iter()
                .map(|roll| format!("{}+{}={}", roll.first(), roll.second(), roll.sum()))
                .collect::<Vec<_>>()
                .join("  ")
        };
        let marker = if seat == result.winner() {
            colorize("*", "32")
        } else {
            " ".to_string()
        };
        println!("{marker} Player {seat}: {rolls}");
    }
    println!(
        "Player {} wins after {} round(s).",
        result.winner(),
        result.rounds()
    );
    println!("Wire form: {}\n", result.encode());
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
