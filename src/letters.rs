//! Random letter generation.
//!
//! Letters are drawn independently from a fixed weighted distribution (the
//! classic word-game tile frequencies, 98 tiles in total). The distribution
//! never depletes. The generator is an explicit, seedable value so that games
//! replay deterministically from a seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Letter weights, A through Z.
pub const LETTER_WEIGHTS: [(char, u32); 26] = [
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// Sum of all letter weights.
pub const TOTAL_WEIGHT: usize = 98;

/// Every letter repeated by its weight, so a uniform draw over the bag
/// follows the weighted distribution.
const LETTER_BAG: [char; TOTAL_WEIGHT] = build_bag();

const fn build_bag() -> [char; TOTAL_WEIGHT] {
    let mut bag = ['A'; TOTAL_WEIGHT];
    let mut i = 0;
    let mut l = 0;
    while l < LETTER_WEIGHTS.len() {
        let (c, w) = LETTER_WEIGHTS[l];
        let mut k = 0;
        while k < w {
            bag[i] = c;
            i += 1;
            k += 1;
        }
        l += 1;
    }
    bag
}

/// Anything that can hand out fresh letter tiles.
pub trait LetterSource {
    /// Draws one uppercase letter.
    fn sample(&mut self) -> char;
}

/// Weighted letter sampler backed by a seedable RNG.
///
/// Cloning a generator forks its random stream: both copies produce the same
/// subsequent letters.
#[derive(Debug, Clone)]
pub struct LetterGenerator {
    rng: SmallRng,
}

impl LetterGenerator {
    /// Creates a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        LetterGenerator {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        LetterGenerator {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seeds from `seed`, or from entropy when `seed` is zero.
    pub fn from_seed_or_entropy(seed: u64) -> Self {
        if seed != 0 {
            Self::seeded(seed)
        } else {
            Self::from_entropy()
        }
    }

    /// Picks a uniform index in `0..len`. Returns None for an empty range.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

impl LetterSource for LetterGenerator {
    fn sample(&mut self) -> char {
        LETTER_BAG[self.rng.gen_range(0..TOTAL_WEIGHT)]
    }
}
