//! Self-play match CLI.
//!
//! Plays the longest-word agent against itself and writes every game as
//! JSONL (one replay document per line).
//!
//! Usage:
//!   cargo run --release --bin selfplay -- --dict words.txt [OPTIONS]
//!
//! Options:
//!   --dict FILE       Word list, one word per line (default: dict.txt)
//!   --games N         Number of games to play (default: 10)
//!   --max-rounds N    Round limit per game (default: 100)
//!   --skip-limit N    Consecutive skipped turns before abort (default: 2)
//!   --threads N       Number of parallel threads (default: 1)
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --output FILE     Output file path (default: stdout)
//!   --quiet           Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use capitals::agent::LongestWordAgent;
use capitals::runner::{self, RunConfig, Seat};
use capitals::Dictionary;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = RunConfig::default();
    let mut dict_path = "dict.txt".to_string();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--dict" => dict_path = value(&args, &mut i),
            "--games" => config.num_games = parse(&args, &mut i),
            "--max-rounds" => config.max_rounds = parse(&args, &mut i),
            "--skip-limit" => config.skip_limit = parse(&args, &mut i),
            "--threads" => config.threads = parse(&args, &mut i),
            "--seed" => config.seed = parse(&args, &mut i),
            "--output" => output_path = Some(value(&args, &mut i)),
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let dictionary = match Dictionary::from_file(Path::new(&dict_path)) {
        Ok(d) => Arc::new(d),
        Err(e) => {
            eprintln!("failed to read dictionary {}: {}", dict_path, e);
            process::exit(1);
        }
    };

    if !config.quiet {
        eprintln!(
            "Self-play: {} games, {} words, max {} rounds, {} threads",
            config.num_games,
            dictionary.len(),
            config.max_rounds,
            config.threads
        );
    }

    let agent = LongestWordAgent::new(&dictionary);
    let start = Instant::now();
    let games = match runner::run_series(&config, dictionary.clone(), |_| {
        (
            Seat::new("longest_word", Box::new(agent.clone())),
            Seat::new("longest_word", Box::new(agent.clone())),
        )
    }) {
        Ok(games) => games,
        Err(e) => {
            eprintln!("failed to start worker threads: {}", e);
            process::exit(1);
        }
    };

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            games.len(),
            start.elapsed().as_secs_f64()
        );
        runner::print_summary(&games);
    }

    let written = match &output_path {
        Some(path) => File::create(path)
            .and_then(|file| runner::write_jsonl(&games, &mut BufWriter::new(file))),
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            runner::write_jsonl(&games, &mut writer)
        }
    };
    match (written, output_path) {
        (Err(e), _) => {
            eprintln!("failed to write output: {}", e);
            process::exit(1);
        }
        (Ok(()), Some(path)) if !config.quiet => eprintln!("Wrote {} games to {}", games.len(), path),
        _ => {}
    }
}

/// Returns the value following the flag at `args[*i]`, advancing `i`.
fn value(args: &[String], i: &mut usize) -> String {
    *i += 1;
    match args.get(*i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("missing value for {}", args[*i - 1]);
            process::exit(1);
        }
    }
}

fn parse<T: std::str::FromStr>(args: &[String], i: &mut usize) -> T {
    let flag = args[*i].clone();
    let raw = value(args, i);
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("invalid {} value: '{}'", flag, raw);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dict FILE      Word list, one word per line (default: dict.txt)");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --max-rounds N   Round limit per game (default: 100)");
    eprintln!("  --skip-limit N   Consecutive skipped turns before abort (default: 2)");
    eprintln!("  --threads N      Number of parallel threads (default: 1)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress progress and summary output");
    eprintln!("  --help           Show this help");
}
