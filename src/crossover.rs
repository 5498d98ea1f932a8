//! # Ordered Crossover
//!
//! Ordered crossover (OX) recombines two permutations: a contiguous block of the
//! first parent is copied to the same positions of the child, and the remaining
//! positions are filled left to right with the genes of the second parent that are
//! not already present, in the order they appear in that parent.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::crossover::ordered_crossover_in_range;
//!
//! let child = ordered_crossover_in_range(
//!     &[1, 2, 3, 4, 5, 6, 7, 8],
//!     &[8, 7, 6, 5, 4, 3, 2, 1],
//!     2,
//!     4,
//! )
//! .unwrap();
//!
//! assert_eq!(child, vec![8, 7, 3, 4, 5, 6, 2, 1]);
//! ```

use std::collections::HashSet;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Ordered crossover over a random inclusive range `[start, end]` of `first`.
///
/// `start` is drawn uniformly from the whole genome and `end` uniformly from
/// `start..len`. Empty parents produce an empty child.
pub fn ordered_crossover(
    first: &[usize],
    second: &[usize],
    rng: &mut RandomNumberGenerator,
) -> Vec<usize> {
    if first.is_empty() {
        return Vec::new();
    }

    let start = rng.gen_index(first.len());
    let end = rng.gen_range(start..first.len());

    build_child(first, second, start, end)
}

/// Ordered crossover with an explicit inclusive range `[start, end]` of `first`.
///
/// # Errors
///
/// Returns a `Configuration` error if `start > end` or `end` lies outside `first`.
pub fn ordered_crossover_in_range(
    first: &[usize],
    second: &[usize],
    start: usize,
    end: usize,
) -> Result<Vec<usize>> {
    if start > end || end >= first.len() {
        return Err(GeneticError::Configuration(format!(
            "Crossover range [{}, {}] is invalid for a genome of length {}",
            start,
            end,
            first.len()
        )));
    }

    Ok(build_child(first, second, start, end))
}

/// Builds one child. Occupancy is tracked explicitly, so no gene value doubles as a
/// sentinel.
///
/// When the parents are permutations of the same set every slot gets filled. A slot
/// left empty by mismatched parents holds `0`, the depot index, which fitness
/// evaluation reads as a detour through the start city.
fn build_child(first: &[usize], second: &[usize], start: usize, end: usize) -> Vec<usize> {
    let len = first.len();
    let mut child: Vec<Option<usize>> = vec![None; len];
    let mut present = HashSet::with_capacity(len);

    for i in start..=end {
        child[i] = Some(first[i]);
        present.insert(first[i]);
    }

    let mut slot = 0;
    for &gene in second {
        if !present.insert(gene) {
            continue;
        }
        while slot < len && child[slot].is_some() {
            slot += 1;
        }
        if slot < len {
            child[slot] = Some(gene);
        }
    }

    child.into_iter().map(|gene| gene.unwrap_or(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(genes: &[usize], len: usize) -> bool {
        let mut sorted = genes.to_vec();
        sorted.sort_unstable();
        sorted == (1..=len).collect::<Vec<_>>()
    }

    #[test]
    fn test_known_child() {
        let child = ordered_crossover_in_range(
            &[1, 2, 3, 4, 5, 6, 7, 8],
            &[8, 7, 6, 5, 4, 3, 2, 1],
            2,
            4,
        )
        .unwrap();

        assert_eq!(child, vec![8, 7, 3, 4, 5, 6, 2, 1]);
    }

    #[test]
    fn test_full_range_copies_first_parent() {
        let first = [3, 1, 4, 2];
        let child = ordered_crossover_in_range(&first, &[1, 2, 3, 4], 0, 3).unwrap();
        assert_eq!(child, first.to_vec());
    }

    #[test]
    fn test_single_gene_range() {
        let child = ordered_crossover_in_range(&[1, 2, 3, 4], &[4, 3, 2, 1], 3, 3).unwrap();
        // position 3 keeps 4, the rest come from the second parent in order
        assert_eq!(child, vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_every_range_yields_permutation() {
        let first = [5, 3, 7, 1, 2, 6, 4];
        let second = [2, 4, 6, 1, 7, 5, 3];

        for start in 0..first.len() {
            for end in start..first.len() {
                let child = ordered_crossover_in_range(&first, &second, start, end).unwrap();
                assert!(is_permutation(&child, 7), "[{}, {}] -> {:?}", start, end, child);
                assert_eq!(&child[start..=end], &first[start..=end]);
            }
        }
    }

    #[test]
    fn test_remaining_genes_follow_second_parent_order() {
        let first = [1, 2, 3, 4, 5, 6];
        let second = [6, 2, 5, 1, 4, 3];
        let child = ordered_crossover_in_range(&first, &second, 1, 2).unwrap();

        let outside: Vec<usize> = child
            .iter()
            .enumerate()
            .filter(|(i, _)| !(1..=2).contains(i))
            .map(|(_, &g)| g)
            .collect();
        let expected: Vec<usize> = second.iter().copied().filter(|g| ![2, 3].contains(g)).collect();
        assert_eq!(outside, expected);
    }

    #[test]
    fn test_random_crossover_yields_permutation() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let mut first: Vec<usize> = (1..=30).collect();
        let mut second = first.clone();

        for _ in 0..200 {
            rng.shuffle(&mut first);
            rng.shuffle(&mut second);
            let child = ordered_crossover(&first, &second, &mut rng);
            assert!(is_permutation(&child, 30));
        }
    }

    #[test]
    fn test_empty_parents() {
        let mut rng = RandomNumberGenerator::new();
        assert!(ordered_crossover(&[], &[], &mut rng).is_empty());
    }

    #[test]
    fn test_invalid_range() {
        assert!(ordered_crossover_in_range(&[1, 2, 3], &[3, 2, 1], 2, 1).is_err());
        assert!(ordered_crossover_in_range(&[1, 2, 3], &[3, 2, 1], 0, 3).is_err());
        assert!(ordered_crossover_in_range(&[], &[], 0, 0).is_err());
    }
}
