use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Elitism: the share of a generation carried over unchanged into the next one.
///
/// As a [`SelectionStrategy`] it is purely greedy and always picks the cheapest
/// individual (the first one on ties).
///
/// # Examples
///
/// ```
/// use genalg_tsp::selection::{ElitistSelection, SelectionStrategy};
/// use genalg_tsp::rng::RandomNumberGenerator;
///
/// let elitism = ElitistSelection::default();
/// assert_eq!(elitism.elite_count(50), 10);
/// assert_eq!(elitism.elite_count(3), 1);
///
/// let mut rng = RandomNumberGenerator::new();
/// assert_eq!(elitism.select(&[40, 12, 12, 90], &mut rng).unwrap(), 1);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ElitistSelection {
    /// Fraction of the population kept, in `[0, 1]`.
    elite_ratio: f64,
    /// Lower bound on the number of elites.
    min_elites: usize,
}

impl ElitistSelection {
    /// Creates a new ElitistSelection keeping at least one elite.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `elite_ratio` is not within `[0, 1]`.
    pub fn new(elite_ratio: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&elite_ratio) {
            return Err(GeneticError::Configuration(format!(
                "Elite ratio must be within [0, 1], got {}",
                elite_ratio
            )));
        }

        Ok(Self {
            elite_ratio,
            min_elites: 1,
        })
    }

    pub fn elite_ratio(&self) -> f64 {
        self.elite_ratio
    }

    /// Number of individuals kept for a population of `population_size`:
    /// `max(1, floor(population_size * elite_ratio))`, never more than the
    /// population itself.
    pub fn elite_count(&self, population_size: usize) -> usize {
        let share = (population_size as f64 * self.elite_ratio).floor() as usize;
        share.max(self.min_elites).min(population_size)
    }
}

impl Default for ElitistSelection {
    fn default() -> Self {
        Self {
            elite_ratio: 0.2,
            min_elites: 1,
        }
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select(&self, costs: &[u64], _rng: &mut RandomNumberGenerator) -> Result<usize> {
        costs
            .iter()
            .enumerate()
            .min_by_key(|&(_, cost)| cost)
            .map(|(idx, _)| idx)
            .ok_or(GeneticError::EmptyPopulation)
    }
}
