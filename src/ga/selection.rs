//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::seq::index;
use rand::Rng;

/// Tournament selection: sample `k` distinct individuals, return the index
/// of the one with the lowest fitness.
///
/// Sampling is without replacement. Among equal fitness values the
/// earliest-sampled contender wins. `k` is clamped to `1..=len`.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let k = k.clamp(1, n);

    let mut contenders = index::sample(rng, n, k).into_iter();
    let mut best_idx = contenders.next().expect("k >= 1");
    for idx in contenders {
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}
