//! Seed-deterministic Fisher-Yates shuffle.
//!
//! Walks `i` from the last index down to 1, draws
//! `j = floor(rng() * (i + 1))` and swaps `i` with `j`. Each call builds a
//! fresh [`SeededRng`], so the permutation depends only on the length of the
//! input and the seed.

use crate::rng::SeededRng;

/// The permutation applied by [`shuffle`] for a sequence of `len` elements:
/// `shuffle(cards, seed)[k] == cards[shuffle_indices(cards.len(), seed)[k]]`.
pub fn shuffle_indices(len: usize, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut rng = SeededRng::new(seed);
    for i in (1..len).rev() {
        let j = (rng.next_f64() * (i + 1) as f64).floor() as usize;
        order.swap(i, j);
    }
    order
}

/// Return a shuffled copy of `cards`; the input is left untouched.
pub fn shuffle<T: Clone>(cards: &[T], seed: u64) -> Vec<T> {
    shuffle_indices(cards.len(), seed)
        .into_iter()
        .map(|i| cards[i].clone())
        .collect()
}
