//! # Tour
//!
//! A `Tour` is one candidate solution: the order in which the non-start cities are
//! visited. The depot (city `0`) is implicit at both ends and never stored.
//!
//! The tour caches its cost after the first evaluation. Every mutating operator
//! clears the cache; nothing else does, so a cached cost is only meaningful for the
//! city set it was computed against.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::city::City;
//! use genalg_tsp::tour::Tour;
//!
//! let cities = vec![
//!     City::new(0, 0, 0),
//!     City::new(3, 0, 1),
//!     City::new(3, 4, 2),
//! ];
//! let tour = Tour::try_new(&[1, 2], cities.len()).unwrap();
//!
//! // 0 -> 1 -> 2 -> 0 = 3 + 4 + 5
//! assert_eq!(tour.cost(&cities), 12);
//! assert_eq!(tour.cached_cost(), Some(12));
//! ```

use std::cell::Cell;

use crate::city::{distance, City};
use crate::crossover::ordered_crossover;
use crate::error::{GeneticError, Result};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Probability factor applied to the mutation rate for segment reversal.
const REVERSAL_RATE_FACTOR: f64 = 0.5;

/// An ordered visitation sequence over the non-start cities.
#[derive(Debug, Clone)]
pub struct Tour {
    path: Vec<usize>,
    cost: Cell<Option<u64>>,
}

impl Tour {
    /// Creates a tour from a copy of `path`.
    ///
    /// No validation is performed; see [`Tour::try_new`] for a checked constructor.
    pub fn new(path: &[usize]) -> Self {
        Self::from(path.to_vec())
    }

    /// Creates a tour after checking that `path` visits every city in
    /// `1..city_count` exactly once.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTour` when the length is wrong, an index is out of range or
    /// the start city is included, or a city appears twice.
    pub fn try_new(path: &[usize], city_count: usize) -> Result<Self> {
        validate_permutation(path, city_count)?;
        Ok(Self::new(path))
    }

    /// Creates a uniformly shuffled tour over `1..city_count`.
    pub fn random(city_count: usize, rng: &mut RandomNumberGenerator) -> Self {
        let mut path: Vec<usize> = (1..city_count).collect();
        rng.shuffle(&mut path);
        Self::from(path)
    }

    /// Read-only view of the visitation order.
    pub fn genes(&self) -> &[usize] {
        &self.path
    }

    /// Returns a copy of the visitation order.
    pub fn path(&self) -> Vec<usize> {
        self.path.clone()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns `true` if the tour visits every city in `1..city_count` exactly once.
    pub fn is_permutation_of(&self, city_count: usize) -> bool {
        validate_permutation(&self.path, city_count).is_ok()
    }

    /// The cached cost, if the tour has been evaluated since its last mutation.
    pub fn cached_cost(&self) -> Option<u64> {
        self.cost.get()
    }

    /// Total length of the closed tour `0 -> path... -> 0`.
    ///
    /// Returns the cached value when present. An index outside `cities` contributes
    /// no distance for the legs touching it; this only happens when a tour is
    /// evaluated against a city set other than the one it was built for, and the
    /// resulting cost is then not meaningful.
    pub fn cost(&self, cities: &[City]) -> u64 {
        if let Some(cost) = self.cost.get() {
            return cost;
        }

        let mut total = 0;
        let mut current = 0;
        for &next in &self.path {
            if let (Some(from), Some(to)) = (cities.get(current), cities.get(next)) {
                total += distance(from, to);
            }
            current = next;
        }
        if let (Some(from), Some(start)) = (cities.get(current), cities.first()) {
            total += distance(from, start);
        }

        self.cost.set(Some(total));
        total
    }

    /// Exchanges the genes at positions `i` and `j`.
    ///
    /// Out-of-range positions leave the tour unchanged.
    pub fn swap_genes(&mut self, i: usize, j: usize) {
        if i >= self.path.len() || j >= self.path.len() {
            return;
        }
        self.path.swap(i, j);
        self.invalidate();
    }

    /// Reverses the inclusive segment between positions `i` and `j`, in either order.
    ///
    /// Only segments spanning at least three genes (`|i - j| >= 2`) are reversed.
    /// Returns whether the tour changed.
    pub fn reverse_segment(&mut self, i: usize, j: usize) -> bool {
        let (start, end) = (i.min(j), i.max(j));
        if end >= self.path.len() || end - start < 2 {
            return false;
        }
        self.path[start..=end].reverse();
        self.invalidate();
        true
    }

    fn invalidate(&mut self) {
        self.cost.set(None);
    }
}

impl From<Vec<usize>> for Tour {
    fn from(path: Vec<usize>) -> Self {
        Self {
            path,
            cost: Cell::new(None),
        }
    }
}

impl PartialEq for Tour {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Tour {}

impl Phenotype for Tour {
    /// Ordered crossover with `self` contributing the preserved block.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self {
        Self::from(ordered_crossover(&self.path, &other.path, rng))
    }

    /// Runs two independent trials: a swap of two random positions with probability
    /// `mutation_rate`, then a segment reversal with probability `mutation_rate * 0.5`.
    fn mutate(&mut self, mutation_rate: f64, rng: &mut RandomNumberGenerator) {
        if self.path.is_empty() {
            return;
        }

        if rng.gen_probability() < mutation_rate {
            let i = rng.gen_index(self.path.len());
            let j = rng.gen_index(self.path.len());
            self.swap_genes(i, j);
        }

        if rng.gen_probability() < mutation_rate * REVERSAL_RATE_FACTOR {
            let i = rng.gen_index(self.path.len());
            let j = rng.gen_index(self.path.len());
            self.reverse_segment(i, j);
        }
    }
}

fn validate_permutation(path: &[usize], city_count: usize) -> Result<()> {
    let expected = city_count.saturating_sub(1);
    if path.len() != expected {
        return Err(GeneticError::InvalidTour(format!(
            "expected {} cities, got {}",
            expected,
            path.len()
        )));
    }

    let mut seen = vec![false; city_count];
    for &index in path {
        if index == 0 || index >= city_count {
            return Err(GeneticError::InvalidTour(format!(
                "city {} is outside 1..{}",
                index, city_count
            )));
        }
        if std::mem::replace(&mut seen[index], true) {
            return Err(GeneticError::InvalidTour(format!(
                "city {} is visited twice",
                index
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<City> {
        // start city duplicated at the first corner of a unit square
        vec![
            City::new(0, 0, 0),
            City::new(0, 0, 1),
            City::new(1, 0, 2),
            City::new(1, 1, 3),
            City::new(0, 1, 4),
        ]
    }

    fn sorted(genes: &[usize]) -> Vec<usize> {
        let mut genes = genes.to_vec();
        genes.sort_unstable();
        genes
    }

    #[test]
    fn test_unit_square_perimeter() {
        let tour = Tour::new(&[1, 2, 3, 4]);
        assert_eq!(tour.cost(&square()), 4);
    }

    #[test]
    fn test_cost_matches_closed_walk() {
        let cities = vec![
            City::new(10, 10, 0),
            City::new(40, 50, 1),
            City::new(-20, 7, 2),
            City::new(33, -8, 3),
        ];
        let tour = Tour::new(&[3, 1, 2]);
        let walk = [0, 3, 1, 2, 0];
        let expected: u64 = walk
            .windows(2)
            .map(|leg| cities[leg[0]].distance(&cities[leg[1]]))
            .sum();

        assert_eq!(tour.cost(&cities), expected);
    }

    #[test]
    fn test_cost_is_cached() {
        let tour = Tour::new(&[1, 2, 3, 4]);
        assert_eq!(tour.cached_cost(), None);

        let first = tour.cost(&square());
        assert_eq!(tour.cached_cost(), Some(first));

        // a different city set does not refresh the cache
        let far = vec![City::new(0, 0, 0); 5];
        assert_eq!(tour.cost(&far), first);
    }

    #[test]
    fn test_out_of_range_index_is_skipped() {
        let cities = vec![City::new(0, 0, 0), City::new(3, 4, 1)];
        // city 7 does not exist: the legs into and out of it contribute nothing
        let tour = Tour::new(&[7, 1]);
        assert_eq!(tour.cost(&cities), 5);

        let tour = Tour::new(&[1, 7]);
        assert_eq!(tour.cost(&cities), 5);
    }

    #[test]
    fn test_empty_tour_costs_nothing() {
        let cities = vec![City::new(4, 4, 0)];
        assert_eq!(Tour::new(&[]).cost(&cities), 0);
    }

    #[test]
    fn test_new_copies_input() {
        let mut source = vec![1, 2, 3];
        let tour = Tour::new(&source);
        source[0] = 9;
        assert_eq!(tour.genes(), &[1, 2, 3]);
    }

    #[test]
    fn test_try_new_validation() {
        assert!(Tour::try_new(&[2, 1, 3], 4).is_ok());
        assert!(matches!(
            Tour::try_new(&[1, 2], 4),
            Err(GeneticError::InvalidTour(_))
        ));
        assert!(Tour::try_new(&[1, 1, 3], 4).is_err());
        assert!(Tour::try_new(&[0, 1, 2], 4).is_err());
        assert!(Tour::try_new(&[1, 2, 4], 4).is_err());
    }

    #[test]
    fn test_random_is_permutation() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        for _ in 0..50 {
            let tour = Tour::random(12, &mut rng);
            assert!(tour.is_permutation_of(12));
        }
    }

    #[test]
    fn test_swap_invalidates_cache() {
        let mut tour = Tour::new(&[1, 2, 3, 4]);
        tour.cost(&square());
        tour.swap_genes(0, 2);
        assert_eq!(tour.genes(), &[3, 2, 1, 4]);
        assert_eq!(tour.cached_cost(), None);
    }

    #[test]
    fn test_reverse_segment() {
        let mut tour = Tour::new(&[1, 2, 3, 4, 5, 6]);
        tour.cost(&square());

        assert!(tour.reverse_segment(4, 1));
        assert_eq!(tour.genes(), &[1, 5, 4, 3, 2, 6]);
        assert_eq!(tour.cached_cost(), None);
    }

    #[test]
    fn test_reverse_segment_too_short() {
        let mut tour = Tour::new(&[1, 2, 3, 4]);
        tour.cost(&square());

        assert!(!tour.reverse_segment(1, 2));
        assert!(!tour.reverse_segment(3, 3));
        assert_eq!(tour.genes(), &[1, 2, 3, 4]);
        assert!(tour.cached_cost().is_some());
    }

    #[test]
    fn test_zero_rate_never_mutates() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let mut tour = Tour::new(&[1, 2, 3, 4, 5, 6, 7]);
        for _ in 0..200 {
            tour.mutate(0.0, &mut rng);
        }
        assert_eq!(tour.genes(), &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_mutation_preserves_genes() {
        let mut rng = RandomNumberGenerator::from_seed(21);
        let mut tour = Tour::random(25, &mut rng);
        let original = sorted(tour.genes());

        for _ in 0..500 {
            tour.mutate(1.0, &mut rng);
            assert_eq!(sorted(tour.genes()), original);
        }
    }

    #[test]
    fn test_full_rate_eventually_changes_tour() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut tour = Tour::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        for _ in 0..20 {
            tour.mutate(1.0, &mut rng);
        }
        assert_ne!(tour.genes(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_crossover_produces_valid_child() {
        let mut rng = RandomNumberGenerator::from_seed(10);
        let a = Tour::random(15, &mut rng);
        let b = Tour::random(15, &mut rng);
        let child = a.crossover(&b, &mut rng);

        assert!(child.is_permutation_of(15));
        assert_eq!(child.cached_cost(), None);
    }

    #[test]
    fn test_equality_ignores_cache() {
        let a = Tour::new(&[1, 2, 3, 4]);
        let b = Tour::new(&[1, 2, 3, 4]);
        a.cost(&square());
        assert_eq!(a, b);
    }
}
