use crate::{
    error::{GeneticError, OptionExt, Result},
    evolution::{engine::PopulationEngine, snapshot::GenerationSnapshot},
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
    stats::StatsTracker,
};

/// Represents the result of a run: the best tour found and how the run ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult {
    /// The best visitation order found, excluding the start city.
    pub path: Vec<usize>,
    /// Its cost.
    pub cost: u64,
    /// Generations the engine has advanced since initialization.
    pub generations: usize,
    pub total_improvements: usize,
    /// Whether the run stopped early because the best cost stopped improving.
    pub stagnated: bool,
}

/// Drives an engine in a loop until a generation budget is spent or the search
/// stagnates.
///
/// # Example
///
/// ```rust
/// use genalg_tsp::city::CitySetup;
/// use genalg_tsp::evolution::{EvolutionLauncher, EvolutionOptions, PopulationEngine};
/// use genalg_tsp::rng::RandomNumberGenerator;
/// use genalg_tsp::stats::StatsTracker;
///
/// # fn main() -> genalg_tsp::Result<()> {
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let mut engine = PopulationEngine::new(EvolutionOptions::default())?;
/// engine.setup_cities(&CitySetup::new(15, 300, 300), &mut rng)?;
/// engine.initialize_population(&mut rng)?;
///
/// let launcher = EvolutionLauncher::new(500).with_stagnation_limit(100);
/// let mut stats = StatsTracker::new();
/// let result = launcher.run(&mut engine, &mut rng, &mut stats)?;
///
/// assert_eq!(result.path.len(), 14);
/// assert_eq!(Some(result.cost), engine.best_cost());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionLauncher {
    max_generations: usize,
    stagnation_limit: Option<usize>,
}

impl EvolutionLauncher {
    /// Creates a launcher that advances at most `max_generations` generations per run.
    pub fn new(max_generations: usize) -> Self {
        Self {
            max_generations,
            stagnation_limit: None,
        }
    }

    /// Stops a run once `limit` consecutive generations brought no improvement.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = Some(limit);
        self
    }

    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn stagnation_limit(&self) -> Option<usize> {
        self.stagnation_limit
    }

    /// Runs the engine from its current state.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the generation budget or stagnation limit
    /// is zero, and `EmptyPopulation` if the engine has not been initialized.
    pub fn run<S>(
        &self,
        engine: &mut PopulationEngine<S>,
        rng: &mut RandomNumberGenerator,
        stats: &mut StatsTracker,
    ) -> Result<EvolutionResult>
    where
        S: SelectionStrategy,
    {
        self.run_with_observer(engine, rng, stats, |_| {})
    }

    /// Like [`EvolutionLauncher::run`], handing `observer` a snapshot of the engine
    /// after every generation.
    ///
    /// # Errors
    ///
    /// See [`EvolutionLauncher::run`].
    pub fn run_with_observer<S, F>(
        &self,
        engine: &mut PopulationEngine<S>,
        rng: &mut RandomNumberGenerator,
        stats: &mut StatsTracker,
        mut observer: F,
    ) -> Result<EvolutionResult>
    where
        S: SelectionStrategy,
        F: FnMut(&GenerationSnapshot),
    {
        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }
        if self.stagnation_limit == Some(0) {
            return Err(GeneticError::Configuration(
                "Stagnation limit cannot be zero".to_string(),
            ));
        }
        if engine.population_len() == 0 {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut stagnated = false;
        for _ in 0..self.max_generations {
            stats.start_generation_timer();
            engine.next_generation(rng)?;
            stats.stop_generation_timer();

            if let Some(cost) = engine.best_cost() {
                stats.track_cost(cost);
            }
            observer(&engine.snapshot());

            if let Some(limit) = self.stagnation_limit {
                if engine.generations_since_improvement() >= limit {
                    stagnated = true;
                    break;
                }
            }
        }

        let cost = engine.best_cost().ok_or_else_genetic(|| {
            GeneticError::Configuration(
                "Evolution completed but no best tour was recorded".to_string(),
            )
        })?;

        tracing::info!(
            generations = engine.generation_count(),
            best_cost = cost,
            improvements = engine.total_improvements(),
            stagnated,
            "evolution finished"
        );

        Ok(EvolutionResult {
            path: engine.best_path(),
            cost,
            generations: engine.generation_count(),
            total_improvements: engine.total_improvements(),
            stagnated,
        })
    }
}
