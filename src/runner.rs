//! Match runner: plays agents against each other and records the games.
//!
//! A pass and a rejected move both count as a skipped turn: the log records
//! a null action and play moves to the other side. Once `skip_limit`
//! consecutive turns have been skipped the game is aborted with no winner.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::agent::Agent;
use crate::board::Color;
use crate::dictionary::Dictionary;
use crate::game_log::GameLog;
use crate::letters::LetterGenerator;
use crate::protocol::notation::format_action;
use crate::protocol::replay::{log_document, LogDocument};
use crate::state::State;

/// Configuration for a series of games.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Games stop once the round counter passes this value.
    pub max_rounds: u32,
    /// Consecutive skipped turns that abort a game.
    pub skip_limit: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            num_games: 10,
            max_rounds: 100,
            skip_limit: 2,
            threads: 1,
            seed: 0,
            quiet: false,
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Color),
    /// Ran out of rounds with both sides on the board.
    RoundLimit,
    /// Too many consecutive skipped turns.
    Aborted,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Won(c) => Some(c),
            _ => None,
        }
    }

    pub fn describe(self) -> String {
        match self {
            Outcome::Won(c) => format!("{} wins", c),
            Outcome::RoundLimit => "round limit".to_string(),
            Outcome::Aborted => "aborted".to_string(),
        }
    }
}

/// A complete played game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub game_id: usize,
    pub outcome: Outcome,
    /// Turns passed voluntarily.
    pub passes: u32,
    /// Turns forfeited by submitting a rejected move.
    pub invalid_moves: u32,
    pub log: GameLog,
}

/// One side of a match: a display name and the agent playing it.
pub struct Seat {
    pub name: String,
    pub agent: Box<dyn Agent>,
}

impl Seat {
    pub fn new(name: impl Into<String>, agent: Box<dyn Agent>) -> Self {
        Seat {
            name: name.into(),
            agent,
        }
    }
}

/// Plays one game from `initial` to completion.
pub fn play_game(
    red: &mut Seat,
    blue: &mut Seat,
    initial: State,
    config: &RunConfig,
    game_id: usize,
) -> GameRecord {
    let mut log = GameLog::initial(initial, red.name.clone(), blue.name.clone());
    let mut passes = 0u32;
    let mut invalid_moves = 0u32;
    let mut consecutive_skips = 0u32;

    let outcome = loop {
        if let Some(winner) = log.winner() {
            break Outcome::Won(winner);
        }
        if log.current_round() > config.max_rounds {
            break Outcome::RoundLimit;
        }

        let state = log.current_state().clone();
        let seat = match state.turn {
            Color::Red => &mut *red,
            Color::Blue => &mut *blue,
        };

        match seat.agent.act(&state) {
            Some(action) if !action.is_empty() => {
                let shown = format_action(&action);
                match log.act(action) {
                    Ok(_) => {
                        consecutive_skips = 0;
                        continue;
                    }
                    Err(e) => {
                        invalid_moves += 1;
                        if !config.quiet {
                            eprintln!(
                                "Game {}: {} ({}) played {}: {}",
                                game_id, seat.name, state.turn, shown, e
                            );
                        }
                    }
                }
            }
            _ => passes += 1,
        }

        log.add_turn(None, state.pass());
        consecutive_skips += 1;
        if consecutive_skips >= config.skip_limit {
            break Outcome::Aborted;
        }
    };

    GameRecord {
        game_id,
        outcome,
        passes,
        invalid_moves,
        log,
    }
}

/// Plays `config.num_games` games, concurrently when `config.threads > 1`.
///
/// `make_seats` builds fresh red and blue seats for each game id. Game `i`
/// uses seed `config.seed + i` (or entropy when the seed is zero). Records
/// are returned in game-id order.
pub fn run_series<F>(
    config: &RunConfig,
    dictionary: Arc<Dictionary>,
    make_seats: F,
) -> Result<Vec<GameRecord>, rayon::ThreadPoolBuildError>
where
    F: Fn(usize) -> (Seat, Seat) + Sync,
{
    let completed = AtomicUsize::new(0);
    let play = |game_id: usize| {
        let seed = if config.seed != 0 {
            config.seed.wrapping_add(game_id as u64)
        } else {
            0
        };
        let initial = State::initial(dictionary.clone(), LetterGenerator::from_seed_or_entropy(seed));
        let (mut red, mut blue) = make_seats(game_id);

        let start = Instant::now();
        let game = play_game(&mut red, &mut blue, initial, config, game_id);
        if !config.quiet {
            let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
            eprintln!(
                "Game {}/{}: {} after {} turns, round {} ({:.2}s)",
                n,
                config.num_games,
                game.outcome.describe(),
                game.log.turns(),
                game.log.current_round(),
                start.elapsed().as_secs_f64(),
            );
        }
        game
    };

    if config.threads <= 1 {
        return Ok((0..config.num_games).map(play).collect());
    }

    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    Ok(pool.install(|| (0..config.num_games).into_par_iter().map(play).collect()))
}

/// One line of JSONL output.
#[derive(Serialize)]
struct GameLine {
    game_id: usize,
    winner: Option<&'static str>,
    outcome: String,
    passes: u32,
    invalid_moves: u32,
    log: LogDocument,
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        let line = GameLine {
            game_id: game.game_id,
            winner: game.outcome.winner().map(Color::name),
            outcome: game.outcome.describe(),
            passes: game.passes,
            invalid_moves: game.invalid_moves,
            log: log_document(&game.log),
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut red_wins = 0usize;
    let mut blue_wins = 0usize;
    let mut round_limits = 0usize;
    let mut aborted = 0usize;
    let mut total_turns = 0usize;
    let mut total_invalid = 0u32;

    for game in games {
        total_turns += game.log.turns();
        total_invalid += game.invalid_moves;
        match game.outcome {
            Outcome::Won(Color::Red) => red_wins += 1,
            Outcome::Won(Color::Blue) => blue_wins += 1,
            Outcome::RoundLimit => round_limits += 1,
            Outcome::Aborted => aborted += 1,
        }
    }

    let pct = |n: usize| 100.0 * n as f64 / total.max(1) as f64;
    eprintln!("=== Match Summary ===");
    eprintln!("Games: {}", total);
    eprintln!("Avg turns/game: {:.1}", total_turns as f64 / total.max(1) as f64);
    eprintln!("Invalid moves: {}", total_invalid);
    eprintln!("  RED wins: {} ({:.1}%)", red_wins, pct(red_wins));
    eprintln!(" BLUE wins: {} ({:.1}%)", blue_wins, pct(blue_wins));
    eprintln!("Round limit: {}", round_limits);
    eprintln!("Aborted: {}", aborted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::LongestWordAgent;
    use crate::board::{Board, Position, Tile};
    use crate::game_log::Action;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// Replays a fixed list of answers, then passes.
    struct Scripted(Vec<Option<Action>>);

    impl Agent for Scripted {
        fn act(&mut self, _state: &State) -> Option<Action> {
            if self.0.is_empty() {
                None
            } else {
                self.0.remove(0)
            }
        }
    }

    fn quiet() -> RunConfig {
        RunConfig {
            quiet: true,
            ..RunConfig::default()
        }
    }

    fn small_state() -> State {
        let board = Board::new([
            (p(2, 2), Tile::RedCapital),
            (p(2, 3), Tile::BlueCapital),
            (p(3, 3), Tile::Letter('A')),
            (p(5, 5), Tile::Letter('A')),
        ])
        .unwrap();
        State::new(
            Arc::new(Dictionary::from_words(["a"])),
            board,
            LetterGenerator::seeded(3),
        )
    }

    #[test]
    fn winning_move_ends_game() {
        let mut red = Seat::new("red", Box::new(Scripted(vec![Some(vec![p(3, 3)])])));
        let mut blue = Seat::new("blue", Box::new(Scripted(vec![])));
        let game = play_game(&mut red, &mut blue, small_state(), &quiet(), 0);

        assert_eq!(game.outcome, Outcome::Won(Color::Red));
        assert_eq!(game.log.turns(), 1);
        assert_eq!(game.log.red_name, "red");
    }

    #[test]
    fn two_passes_abort() {
        let mut red = Seat::new("red", Box::new(Scripted(vec![])));
        let mut blue = Seat::new("blue", Box::new(Scripted(vec![])));
        let game = play_game(&mut red, &mut blue, small_state(), &quiet(), 0);

        assert_eq!(game.outcome, Outcome::Aborted);
        assert_eq!(game.passes, 2);
        assert_eq!(game.log.actions(), &[None, None]);
    }

    #[test]
    fn invalid_move_counts_as_skip() {
        let mut red = Seat::new("red", Box::new(Scripted(vec![Some(vec![p(2, 2)])])));
        let mut blue = Seat::new("blue", Box::new(Scripted(vec![Some(vec![p(3, 3)])])));
        let game = play_game(&mut red, &mut blue, small_state(), &quiet(), 0);

        assert_eq!(game.invalid_moves, 1);
        assert_eq!(game.log.actions()[0], None);
        assert_eq!(game.outcome, Outcome::Won(Color::Blue));
    }

    #[test]
    fn valid_move_resets_skip_counter() {
        let red_moves = vec![None, Some(vec![p(5, 5)])];
        let blue_moves = vec![Some(vec![p(4, 6)]), None];
        let mut state = small_state();
        state.board = state.board.set_tile(p(4, 6), Tile::Letter('A')).unwrap();

        let mut red = Seat::new("red", Box::new(Scripted(red_moves)));
        let mut blue = Seat::new("blue", Box::new(Scripted(blue_moves)));
        let game = play_game(&mut red, &mut blue, state, &quiet(), 0);

        // pass, move, move, pass, pass -> aborted on the fifth turn
        assert_eq!(game.outcome, Outcome::Aborted);
        assert_eq!(game.log.turns(), 5);
    }

    #[test]
    fn round_limit_stops_play() {
        let config = RunConfig {
            max_rounds: 1,
            skip_limit: 100,
            ..quiet()
        };
        let mut red = Seat::new("red", Box::new(Scripted(vec![])));
        let mut blue = Seat::new("blue", Box::new(Scripted(vec![])));
        let game = play_game(&mut red, &mut blue, small_state(), &config, 0);

        assert_eq!(game.outcome, Outcome::RoundLimit);
        assert_eq!(game.log.current_round(), 2);
    }

    fn series(threads: usize) -> Vec<GameRecord> {
        let dictionary = Arc::new(Dictionary::from_words([
            "a", "an", "at", "ate", "eat", "tea", "ten", "net", "one", "toe", "tone", "note",
        ]));
        let config = RunConfig {
            num_games: 4,
            max_rounds: 20,
            threads,
            seed: 77,
            quiet: true,
            ..RunConfig::default()
        };
        let dict = dictionary.clone();
        run_series(&config, dictionary, move |_| {
            (
                Seat::new("red", Box::new(LongestWordAgent::new(&dict))),
                Seat::new("blue", Box::new(LongestWordAgent::new(&dict))),
            )
        })
        .unwrap()
    }

    #[test]
    fn sequential_series_produces_all_games() {
        let games = series(1);
        assert_eq!(games.len(), 4);
        for (i, game) in games.iter().enumerate() {
            assert_eq!(game.game_id, i);
            assert_eq!(game.log.actions().len() + 1, game.log.states().len());
        }
    }

    #[test]
    fn seeded_series_is_reproducible_across_thread_counts() {
        let a = series(1);
        let b = series(2);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.log, y.log);
            assert_eq!(x.outcome, y.outcome);
        }
    }

    #[test]
    fn jsonl_output_is_valid() {
        let games = series(1);
        let mut buf = Vec::new();
        write_jsonl(&games, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), games.len());
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["log"]["states"].is_array());
            assert!(value["game_id"].is_u64());
        }
    }
}
