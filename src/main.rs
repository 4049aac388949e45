//! Capitals replay viewer.
//!
//! Reads a saved game log and prints the game turn by turn to stdout.
//!
//! Usage:
//!   capitals <log.json> [--boards]
//!
//! Options:
//!   --boards   Print the board after every turn, not only at the end

use std::env;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use capitals::protocol::notation::format_action;
use capitals::{Dictionary, GameLog, LetterGenerator};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut path: Option<String> = None;
    let mut show_boards = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--boards" => show_boards = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other if path.is_none() && !other.starts_with("--") => path = Some(other.to_string()),
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
    }

    let Some(path) = path else {
        print_usage();
        process::exit(1);
    };

    // Replaying only reads recorded states, so no dictionary is needed.
    let log = match GameLog::from_file(
        Path::new(&path),
        Arc::new(Dictionary::default()),
        LetterGenerator::seeded(1),
    ) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("failed to load {}: {}", path, e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(e) = print_log(&log, show_boards, &mut out) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn print_log<W: Write>(log: &GameLog, show_boards: bool, out: &mut W) -> io::Result<()> {
    writeln!(out, "RED: {}  BLUE: {}", log.red_name, log.blue_name)?;
    writeln!(out)?;

    let states = log.states();
    for (i, action) in log.actions().iter().enumerate() {
        let before = &states[i];
        let player = log.name(before.turn);
        match action {
            Some(positions) => {
                let word = before
                    .board
                    .get_word(positions)
                    .ok()
                    .flatten()
                    .unwrap_or_else(|| "?".to_string());
                writeln!(
                    out,
                    "Round {:>3} {:<4} {}: {} {}",
                    before.round,
                    before.turn,
                    player,
                    word,
                    format_action(positions)
                )?;
            }
            None => writeln!(out, "Round {:>3} {:<4} {}: (skip)", before.round, before.turn, player)?,
        }
        if show_boards {
            writeln!(out, "{}", states[i + 1].board)?;
        }
    }

    let last = log.current_state();
    if !show_boards {
        writeln!(out)?;
        writeln!(out, "{}", last.board)?;
    }
    match log.winner() {
        Some(color) => writeln!(out, "Winner: {} ({})", color, log.name(color))?,
        None => writeln!(out, "No winner after round {}", last.round)?,
    }
    out.flush()
}

fn print_usage() {
    eprintln!("Usage: capitals <log.json> [--boards]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --boards   Print the board after every turn");
    eprintln!("  --help     Show this help");
}
