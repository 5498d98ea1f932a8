use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A strategy picks one member of the population given the cost of every member,
/// where lower cost is better. It returns the index of the chosen member so the
/// caller decides whether to borrow or clone it.
///
/// # Examples
///
/// ```
/// use genalg_tsp::selection::{SelectionStrategy, TournamentSelection};
/// use genalg_tsp::rng::RandomNumberGenerator;
/// use genalg_tsp::error::Result;
///
/// fn main() -> Result<()> {
///     let costs = vec![120, 95, 143, 101];
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let selection = TournamentSelection::default();
///     let winner = selection.select(&costs, &mut rng)?;
///
///     assert!(winner < costs.len());
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug {
    /// Selects one individual and returns its index into `costs`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `costs` is empty.
    fn select(&self, costs: &[u64], rng: &mut RandomNumberGenerator) -> Result<usize>;
}
