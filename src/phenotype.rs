//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for types that represent individuals
//! in the evolutionary search: recombination with another individual and in-place
//! mutation. Both take the caller's random number generator so a seeded run stays
//! reproducible.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::phenotype::Phenotype;
//! use genalg_tsp::rng::RandomNumberGenerator;
//! use genalg_tsp::tour::Tour;
//!
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let mother = Tour::new(&[1, 2, 3, 4, 5]);
//! let father = Tour::new(&[5, 4, 3, 2, 1]);
//!
//! let mut child = mother.crossover(&father, &mut rng);
//! child.mutate(0.5, &mut rng);
//!
//! assert!(child.is_permutation_of(6));
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in an evolutionary algorithm.
///
/// Implementors must be `Clone` so parents can be copied unchanged into the next
/// generation, and `Debug` for diagnostics.
pub trait Phenotype: Clone + Debug {
    /// Produces a child combining the genetic material of `self` and `other`.
    ///
    /// Neither parent is modified.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self;

    /// Applies random changes in place.
    ///
    /// `mutation_rate` is the probability, in `[0, 1]`, driving the individual's
    /// mutation trials. A rate of zero leaves the individual untouched.
    fn mutate(&mut self, mutation_rate: f64, rng: &mut RandomNumberGenerator);
}
