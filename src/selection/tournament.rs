use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// How many individuals take part in one tournament.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentSize {
    /// `max(min, population_len / divisor)`, so selection pressure grows with the
    /// population.
    Scaled { min: usize, divisor: usize },
    /// A constant number of participants.
    Fixed(usize),
}

impl TournamentSize {
    /// Resolves the number of participants for a population of `population_len`.
    pub fn resolve(&self, population_len: usize) -> usize {
        match *self {
            TournamentSize::Scaled { min, divisor } => min.max(population_len / divisor),
            TournamentSize::Fixed(size) => size,
        }
    }
}

impl Default for TournamentSize {
    fn default() -> Self {
        TournamentSize::Scaled { min: 3, divisor: 50 }
    }
}

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws its participants uniformly at random with replacement and
/// returns the one with the lowest cost. Ties go to the participant drawn first.
///
/// - Smaller tournaments lead to more exploration (closer to random selection)
/// - Larger tournaments lead to more exploitation (closer to always picking the best)
///
/// # Examples
///
/// ```
/// use genalg_tsp::selection::{SelectionStrategy, TournamentSelection, TournamentSize};
/// use genalg_tsp::rng::RandomNumberGenerator;
///
/// let selection = TournamentSelection::default();
/// assert_eq!(selection.tournament_size(50), 3);
/// assert_eq!(selection.tournament_size(500), 10);
///
/// let fixed = TournamentSelection::new(TournamentSize::Fixed(2)).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(5);
/// assert!(fixed.select(&[10, 20, 30], &mut rng).unwrap() < 3);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct TournamentSelection {
    size: TournamentSize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the size would allow an empty tournament
    /// or the divisor is zero.
    pub fn new(size: TournamentSize) -> Result<Self> {
        match size {
            TournamentSize::Scaled { min, divisor } => {
                if min < 1 {
                    return Err(GeneticError::Configuration(
                        "Tournament size must be at least 1".to_string(),
                    ));
                }
                if divisor < 1 {
                    return Err(GeneticError::Configuration(
                        "Tournament size divisor must be at least 1".to_string(),
                    ));
                }
            }
            TournamentSize::Fixed(size) => {
                if size < 1 {
                    return Err(GeneticError::Configuration(
                        "Tournament size must be at least 1".to_string(),
                    ));
                }
            }
        }

        Ok(Self { size })
    }

    pub fn size(&self) -> TournamentSize {
        self.size
    }

    /// Number of participants per tournament for a population of `population_len`.
    pub fn tournament_size(&self, population_len: usize) -> usize {
        self.size.resolve(population_len)
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(&self, costs: &[u64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if costs.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let participants = self.tournament_size(costs.len());

        let mut best_idx = rng.gen_index(costs.len());
        for _ in 1..participants {
            let idx = rng.gen_index(costs.len());
            if costs[idx] < costs[best_idx] {
                best_idx = idx;
            }
        }

        Ok(best_idx)
    }
}
