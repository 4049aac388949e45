//! Agents that choose moves, and a baseline longest-word player.

use std::collections::HashMap;

use crate::board::{adjacent_positions, Position};
use crate::dictionary::Dictionary;
use crate::game_log::Action;
use crate::state::State;

/// A player that picks a move for the side to act in `state`.
///
/// Returning `None` (or an empty action) passes the turn.
pub trait Agent {
    fn act(&mut self, state: &State) -> Option<Action>;
}

/// Plays the longest dictionary word that can be spelled from the letters on
/// the board, preferring letters next to its own territory so the word
/// claims as much as possible.
#[derive(Debug, Clone)]
pub struct LongestWordAgent {
    /// Candidate words, longest first.
    words: Vec<Vec<char>>,
}

impl LongestWordAgent {
    pub fn new(dictionary: &Dictionary) -> Self {
        let mut words: Vec<String> = dictionary.words().map(str::to_string).collect();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        LongestWordAgent {
            words: words.into_iter().map(|w| w.chars().collect()).collect(),
        }
    }

    /// Letter positions grouped by letter, frontier positions first.
    fn letter_buckets(state: &State) -> HashMap<char, Vec<Position>> {
        let board = &state.board;
        let on_frontier = |pos: Position| {
            adjacent_positions(pos)
                .any(|adj| board.get_tile(adj).is_ok_and(|t| t.is_territory_of(state.turn)))
        };

        let mut buckets: HashMap<char, Vec<Position>> = HashMap::new();
        for (pos, tile) in board.iter() {
            if let Some(c) = tile.letter() {
                buckets.entry(c).or_default().push(pos);
            }
        }
        for positions in buckets.values_mut() {
            // Stable sort keeps canonical order within each group.
            positions.sort_by_key(|&p| !on_frontier(p));
        }
        buckets
    }
}

impl Agent for LongestWordAgent {
    fn act(&mut self, state: &State) -> Option<Action> {
        let buckets = Self::letter_buckets(state);

        'words: for word in &self.words {
            let mut used: HashMap<char, usize> = HashMap::new();
            let mut action = Vec::with_capacity(word.len());
            for c in word {
                let next = used.entry(*c).or_insert(0);
                match buckets.get(c).and_then(|ps| ps.get(*next)) {
                    Some(&pos) => {
                        action.push(pos);
                        *next += 1;
                    }
                    None => continue 'words,
                }
            }
            if !action.is_empty() {
                return Some(action);
            }
        }
        None
    }
}
