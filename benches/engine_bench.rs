use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use std::time::Duration;

use capitals::agent::LongestWordAgent;
use capitals::board::valid_positions;
use capitals::runner::{play_game, RunConfig, Seat};
use capitals::{Board, Color, Dictionary, LetterGenerator, LetterSource, Position, State, Tile};

const WORDS: &str = "ate\neat\ntea\nten\nnet\none\ntoe\ntone\nnote\nrat\ntar\nart\nstar\nrats\nsea\nsat\ntin\nsit\nits\nrest\nstare\nnotes\nstone\nonset\n";

/// A board covered in letters, with red holding the left edge and blue the right.
fn crowded_board() -> Board {
    let mut letters = LetterGenerator::seeded(3);
    let entries = valid_positions().iter().map(|&pos| {
        let tile = match (pos.x, pos.y) {
            (1, 1) => Tile::RedCapital,
            (0, _) => Tile::Red,
            (5, 7) => Tile::BlueCapital,
            (6, _) => Tile::Blue,
            _ => Tile::Letter(letters.sample()),
        };
        (pos, tile)
    });
    Board::new(entries).unwrap()
}

fn bench_floodfill_territory(c: &mut Criterion) {
    let board = crowded_board();
    c.bench_function("floodfill_red_territory", |b| {
        b.iter(|| {
            board
                .floodfill([Position::new(1, 1)], |_, tile| tile.is_territory_of(Color::Red))
                .unwrap()
        })
    });
}

fn bench_floodfill_whole_board(c: &mut Criterion) {
    let board = crowded_board();
    c.bench_function("floodfill_whole_board", |b| {
        b.iter(|| board.floodfill([Position::new(3, 3)], |_, _| true).unwrap())
    });
}

fn bench_use_tiles(c: &mut Criterion) {
    let board = crowded_board();
    let played = [
        Position::new(1, 0),
        Position::new(1, 2),
        Position::new(2, 3),
        Position::new(4, 4),
        Position::new(5, 4),
    ];
    let letters = LetterGenerator::seeded(11);
    c.bench_function("use_tiles_five_letters", |b| {
        b.iter(|| {
            let mut letters = letters.clone();
            board
                .use_tiles(black_box(&played), Color::Red, &mut letters)
                .unwrap()
        })
    });
}

fn bench_find_all_letters(c: &mut Criterion) {
    let board = crowded_board();
    c.bench_function("find_all_letters", |b| {
        b.iter(|| black_box(&board).find_all_letters())
    });
}

fn bench_board_clone(c: &mut Criterion) {
    let board = crowded_board();
    c.bench_function("board_clone", |b| b.iter(|| black_box(&board).clone()));
}

fn bench_selfplay_game(c: &mut Criterion) {
    let dictionary = Arc::new(Dictionary::from_reader(WORDS.as_bytes()).unwrap());
    let agent = LongestWordAgent::new(&dictionary);
    let config = RunConfig {
        max_rounds: 50,
        quiet: true,
        ..RunConfig::default()
    };

    let mut group = c.benchmark_group("selfplay");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("longest_word_game", |b| {
        b.iter(|| {
            let mut red = Seat::new("red", Box::new(agent.clone()));
            let mut blue = Seat::new("blue", Box::new(agent.clone()));
            let initial = State::initial(dictionary.clone(), LetterGenerator::seeded(7));
            play_game(&mut red, &mut blue, initial, &config, 0)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_floodfill_territory,
    bench_floodfill_whole_board,
    bench_use_tiles,
    bench_find_all_letters,
    bench_board_clone,
    bench_selfplay_game,
);
criterion_main!(benches);
