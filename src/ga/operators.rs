//! Permutation operators for tour encodings.
//!
//! These operate on `&[usize]` index vectors.
//!
//! # Crossover
//!
//! - [`two_point_crossover`]: parent1 prefix + parent2 middle + parent1
//!   suffix. Does **not** preserve the permutation property on its own.
//! - [`repair_duplicates`]: restores a permutation after crossover.
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-gene swap with a uniformly random position
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 5 (multi-point crossover)
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::{index, SliceRandom};
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Uniform random permutation of `0..len`.
pub fn random_permutation<R: Rng>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..len).collect();
    perm.shuffle(rng);
    perm
}

// ============================================================================
// Crossover
// ============================================================================

/// Two-point crossover with random cut points.
///
/// Picks two distinct cut points `a < b` in `0..len` and returns
/// [`two_point_crossover_at`]`(parent1, parent2, a, b)`. Parents shorter
/// than two genes are copied from `parent1`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn two_point_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let cuts = index::sample(rng, n, 2);
    let (a, b) = (cuts.index(0), cuts.index(1));
    let (a, b) = if a < b { (a, b) } else { (b, a) };
    two_point_crossover_at(parent1, parent2, a, b)
}

/// Two-point crossover at fixed cut points.
///
/// `child = parent1[..a] ++ parent2[a..b] ++ parent1[b..]`. The child has
/// the parents' length; values may repeat when the segments disagree.
///
/// # Panics
/// Panics if parents have different lengths or unless `a <= b <= len`.
pub fn two_point_crossover_at(parent1: &[usize], parent2: &[usize], a: usize, b: usize) -> Vec<usize> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(a <= b && b <= parent1.len(), "invalid cut points {a}..{b}");

    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..a]);
    child.extend_from_slice(&parent2[a..b]);
    child.extend_from_slice(&parent1[b..]);
    child
}

/// Turns `genes` back into a permutation of `0..len`.
///
/// The first occurrence of each value is kept; later repeats and
/// out-of-range values are replaced by the missing values in ascending
/// order. A valid permutation is left untouched. Returns the number of
/// genes rewritten.
pub fn repair_duplicates(genes: &mut [usize]) -> usize {
    let n = genes.len();
    let mut seen = vec![false; n];
    let mut duplicate_positions = Vec::new();

    for (pos, &value) in genes.iter().enumerate() {
        if value < n && !seen[value] {
            seen[value] = true;
        } else {
            duplicate_positions.push(pos);
        }
    }

    let missing = (0..n).filter(|&v| !seen[v]);
    for (pos, value) in duplicate_positions.iter().zip(missing) {
        genes[*pos] = value;
    }
    duplicate_positions.len()
}

// ============================================================================
// Mutation
// ============================================================================

/// Per-gene swap mutation.
///
/// Each position, with probability `rate`, swaps its value with a
/// uniformly random position (possibly itself). The multiset of values is
/// preserved.
pub fn swap_mutation<R: Rng>(genes: &mut [usize], rate: f64, rng: &mut R) {
    let n = genes.len();
    for i in 0..n {
        if rng.random_range(0.0..1.0) < rate {
            let j = rng.random_range(0..n);
            genes.swap(i, j);
        }
    }
}

/// Whether `genes` is a permutation of `0..genes.len()`.
pub fn is_permutation(genes: &[usize]) -> bool {
    let n = genes.len();
    let mut seen = vec![false; n];
    for &v in genes {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_permutation_is_valid() {
        let mut rng = create_rng(42);
        for len in [0, 1, 2, 25, 64] {
            let perm = random_permutation(len, &mut rng);
            assert!(is_permutation(&perm), "not a permutation: {perm:?}");
        }
    }

    #[test]
    fn test_random_permutation_varies() {
        let mut rng = create_rng(42);
        let a = random_permutation(25, &mut rng);
        let b = random_permutation(25, &mut rng);
        assert_ne!(a, b);
    }

    // ---- Two-point crossover ----

    #[test]
    fn test_crossover_at_segments() {
        let p1 = vec![0, 1, 2, 3, 4, 5];
        let p2 = vec![5, 4, 3, 2, 1, 0];
        let child = two_point_crossover_at(&p1, &p2, 2, 4);
        assert_eq!(child, vec![0, 1, 3, 2, 4, 5]);
    }

    #[test]
    fn test_crossover_at_can_duplicate() {
        let p1 = vec![0, 1, 2, 3];
        let p2 = vec![3, 2, 1, 0];
        let child = two_point_crossover_at(&p1, &p2, 0, 1);
        assert_eq!(child, vec![3, 1, 2, 3]);
        assert!(!is_permutation(&child));
    }

    #[test]
    fn test_crossover_at_full_and_empty_segment() {
        let p1 = vec![0, 1, 2];
        let p2 = vec![2, 0, 1];
        assert_eq!(two_point_crossover_at(&p1, &p2, 0, 3), p2);
        assert_eq!(two_point_crossover_at(&p1, &p2, 1, 1), p1);
    }

    #[test]
    fn test_crossover_keeps_length() {
        let mut rng = create_rng(3);
        let p1 = random_permutation(25, &mut rng);
        let p2 = random_permutation(25, &mut rng);
        for _ in 0..100 {
            assert_eq!(two_point_crossover(&p1, &p2, &mut rng).len(), 25);
        }
    }

    #[test]
    fn test_crossover_single_gene() {
        let mut rng = create_rng(3);
        assert_eq!(two_point_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = create_rng(5);
        let p = vec![3, 0, 2, 1];
        for _ in 0..20 {
            assert_eq!(two_point_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        two_point_crossover_at(&[0, 1], &[0], 0, 1);
    }

    // ---- Repair ----

    #[test]
    fn test_repair_duplicates() {
        let mut genes = vec![3, 1, 2, 3];
        assert_eq!(repair_duplicates(&mut genes), 1);
        assert_eq!(genes, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_repair_out_of_range() {
        let mut genes = vec![7, 7, 1];
        assert_eq!(repair_duplicates(&mut genes), 2);
        assert_eq!(genes, vec![0, 2, 1]);
    }

    #[test]
    fn test_repair_leaves_permutation_alone() {
        let mut genes = vec![2, 0, 1];
        assert_eq!(repair_duplicates(&mut genes), 0);
        assert_eq!(genes, vec![2, 0, 1]);
    }

    #[test]
    fn test_crossover_then_repair_is_permutation() {
        let mut rng = create_rng(11);
        for _ in 0..100 {
            let p1 = random_permutation(16, &mut rng);
            let p2 = random_permutation(16, &mut rng);
            let mut child = two_point_crossover(&p1, &p2, &mut rng);
            repair_duplicates(&mut child);
            assert!(is_permutation(&child), "repair failed: {child:?}");
        }
    }

    // ---- Mutation ----

    #[test]
    fn test_swap_mutation_preserves_permutation() {
        let mut rng = create_rng(42);
        let mut perm = random_permutation(25, &mut rng);
        for _ in 0..100 {
            swap_mutation(&mut perm, 0.3, &mut rng);
            assert!(is_permutation(&perm));
        }
    }

    #[test]
    fn test_swap_mutation_zero_rate_is_identity() {
        let mut rng = create_rng(42);
        let original = random_permutation(25, &mut rng);
        let mut perm = original.clone();
        swap_mutation(&mut perm, 0.0, &mut rng);
        assert_eq!(perm, original);
    }

    #[test]
    fn test_swap_mutation_full_rate_changes_genes() {
        let mut rng = create_rng(42);
        let original: Vec<usize> = (0..25).collect();
        let mut perm = original.clone();
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert_ne!(perm, original);
    }

    #[test]
    fn test_swap_mutation_empty() {
        let mut rng = create_rng(42);
        let mut perm: Vec<usize> = vec![];
        swap_mutation(&mut perm, 1.0, &mut rng);
        assert!(perm.is_empty());
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[1, 0, 2]));
        assert!(!is_permutation(&[1, 1, 2]));
        assert!(!is_permutation(&[0, 3, 1]));
    }
}
