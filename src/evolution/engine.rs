//! # PopulationEngine
//!
//! The `PopulationEngine` owns the city set, the current generation of tours and the
//! best tour found so far. It does not schedule itself: the caller advances it one
//! generation at a time with [`PopulationEngine::next_generation`] and reads the
//! results between steps.
//!
//! Each step sorts the population by cost, records the leader, keeps the elites
//! unchanged and fills the rest of the next generation with children of tournament
//! winners. The new generation replaces the old one in a single assignment.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::city::{CityLayout, CitySetup};
//! use genalg_tsp::evolution::{EvolutionOptions, PopulationEngine};
//! use genalg_tsp::rng::RandomNumberGenerator;
//!
//! # fn main() -> genalg_tsp::Result<()> {
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let mut engine = PopulationEngine::new(EvolutionOptions::default())?;
//!
//! engine.setup_cities(&CitySetup::new(20, 400, 400).with_layout(CityLayout::Circular), &mut rng)?;
//! engine.initialize_population(&mut rng)?;
//!
//! for _ in 0..100 {
//!     engine.next_generation(&mut rng)?;
//! }
//!
//! assert_eq!(engine.generation_count(), 100);
//! assert_eq!(engine.best_path().len(), 19);
//! # Ok(())
//! # }
//! ```

use crate::{
    city::{generate_cities, City, CitySetup},
    error::{GeneticError, OptionExt, Result},
    evolution::{
        options::{EvolutionOptions, LogLevel},
        snapshot::GenerationSnapshot,
    },
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, SelectionStrategy, TournamentSelection},
    tour::Tour,
};

/// Counters describing the progress of a run since the last initialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RunState {
    generation_count: usize,
    best_cost: Option<u64>,
    current_best_cost: Option<u64>,
    initial_best_cost: Option<u64>,
    total_improvements: usize,
    generations_since_improvement: usize,
    improved: bool,
}

/// Evolves a population of tours over a fixed city set.
#[derive(Debug, Clone)]
pub struct PopulationEngine<S = TournamentSelection>
where
    S: SelectionStrategy,
{
    options: EvolutionOptions,
    selection: S,
    cities: Vec<City>,
    population: Vec<Tour>,
    best_tour: Option<Tour>,
    current_best_tour: Option<Tour>,
    state: RunState,
}

impl PopulationEngine<TournamentSelection> {
    /// Creates an engine with the default tournament selection.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `options` fail validation.
    pub fn new(options: EvolutionOptions) -> Result<Self> {
        Self::with_selection(options, TournamentSelection::default())
    }
}

impl<S> PopulationEngine<S>
where
    S: SelectionStrategy,
{
    /// Creates an engine that picks parents with `selection`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `options` fail validation.
    pub fn with_selection(options: EvolutionOptions, selection: S) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            options,
            selection,
            cities: Vec::new(),
            population: Vec::new(),
            best_tour: None,
            current_best_tour: None,
            state: RunState::default(),
        })
    }

    /// Generates a new city set from `setup` and installs it.
    ///
    /// See [`PopulationEngine::set_cities`] for what happens to the current run.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `setup` fails validation.
    pub fn setup_cities(&mut self, setup: &CitySetup, rng: &mut RandomNumberGenerator) -> Result<()> {
        let cities = generate_cities(setup, rng)?;
        self.set_cities(cities)
    }

    /// Replaces the city set.
    ///
    /// The population and run state built for the previous cities are discarded;
    /// [`PopulationEngine::initialize_population`] must be called before stepping
    /// again.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if fewer than two cities are given.
    pub fn set_cities(&mut self, cities: Vec<City>) -> Result<()> {
        if cities.len() < 2 {
            return Err(GeneticError::Configuration(format!(
                "At least 2 cities are required, got {}",
                cities.len()
            )));
        }

        self.cities = cities;
        self.clear_run();

        tracing::debug!(cities = self.cities.len(), "city set replaced");
        Ok(())
    }

    /// Builds `population_size` independently shuffled tours and resets all run
    /// counters.
    ///
    /// # Errors
    ///
    /// Returns `NoCities` if no city set has been installed.
    pub fn initialize_population(&mut self, rng: &mut RandomNumberGenerator) -> Result<()> {
        if self.cities.is_empty() {
            return Err(GeneticError::NoCities);
        }

        self.clear_run();
        let city_count = self.cities.len();
        self.population = (0..self.options.get_population_size())
            .map(|_| Tour::random(city_count, rng))
            .collect();

        tracing::debug!(
            population = self.population.len(),
            cities = city_count,
            "population initialized"
        );
        Ok(())
    }

    /// Advances the population by one generation.
    ///
    /// Returns `true` if this generation's best tour is strictly cheaper than every
    /// tour seen before it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if the population has not been initialized since
    /// the last city setup.
    pub fn next_generation(&mut self, rng: &mut RandomNumberGenerator) -> Result<bool> {
        if self.population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        self.state.improved = false;
        self.state.generation_count += 1;
        self.state.generations_since_improvement += 1;

        let cities = &self.cities;
        self.population.sort_by_cached_key(|tour| tour.cost(cities));

        let leader = self
            .population
            .first()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let current_best_cost = leader.cost(&self.cities);
        self.state.current_best_cost = Some(current_best_cost);

        if self
            .state
            .best_cost
            .map_or(true, |best| current_best_cost < best)
        {
            if self.state.initial_best_cost.is_none() {
                self.state.initial_best_cost = Some(current_best_cost);
            }
            self.state.best_cost = Some(current_best_cost);
            self.best_tour = Some(leader.clone());
            self.state.improved = true;
            self.state.generations_since_improvement = 0;
            self.state.total_improvements += 1;
        }
        self.current_best_tour = Some(leader);

        let next = self.breed(rng)?;
        self.population = next;

        self.log_generation();
        Ok(self.state.improved)
    }

    /// Builds the next generation from the sorted current one.
    fn breed(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<Tour>> {
        let target = self.options.get_population_size();
        let crossover_rate = self.options.get_crossover_rate();
        let mutation_rate = self.options.get_mutation_rate();

        let elites = ElitistSelection::new(self.options.get_elite_ratio())?.elite_count(target);
        let costs: Vec<u64> = self
            .population
            .iter()
            .map(|tour| tour.cost(&self.cities))
            .collect();

        let mut next = Vec::with_capacity(target);
        next.extend(self.population.iter().take(elites).cloned());

        while next.len() < target {
            let first = &self.population[self.selection.select(&costs, rng)?];
            let second = &self.population[self.selection.select(&costs, rng)?];

            let mut child = if rng.gen_probability() < crossover_rate {
                first.crossover(second, rng)
            } else {
                first.clone()
            };
            child.mutate(mutation_rate, rng);
            next.push(child);
        }

        Ok(next)
    }

    fn log_generation(&self) {
        let level = self.options.get_log_level();

        if self.state.improved && level != LogLevel::None {
            tracing::info!(
                generation = self.state.generation_count,
                best_cost = self.state.best_cost,
                improvements = self.state.total_improvements,
                "new best tour"
            );
        }

        if level == LogLevel::Verbose {
            tracing::debug!(
                generation = self.state.generation_count,
                current_best_cost = self.state.current_best_cost,
                best_cost = self.state.best_cost,
                stagnation = self.state.generations_since_improvement,
                "generation complete"
            );
        }
    }

    fn clear_run(&mut self) {
        self.population.clear();
        self.best_tour = None;
        self.current_best_tour = None;
        self.state = RunState::default();
    }

    /// Replaces all evolution parameters. Takes effect from the next generation.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `options` fail validation; the current
    /// options are kept in that case.
    pub fn set_options(&mut self, options: EvolutionOptions) -> Result<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Changes the number of tours built per generation.
    ///
    /// The current population keeps its size until the next generation is bred.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `population_size` is zero.
    pub fn set_population_size(&mut self, population_size: usize) -> Result<()> {
        let mut options = self.options.clone();
        options.set_population_size(population_size);
        self.set_options(options)
    }

    /// # Errors
    ///
    /// Returns a `Configuration` error if `mutation_rate` is not within `[0, 1]`.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) -> Result<()> {
        let mut options = self.options.clone();
        options.set_mutation_rate(mutation_rate);
        self.set_options(options)
    }

    /// # Errors
    ///
    /// Returns a `Configuration` error if `crossover_rate` is not within `[0, 1]`.
    pub fn set_crossover_rate(&mut self, crossover_rate: f64) -> Result<()> {
        let mut options = self.options.clone();
        options.set_crossover_rate(crossover_rate);
        self.set_options(options)
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of tours in the current generation.
    pub fn population_len(&self) -> usize {
        self.population.len()
    }

    /// Costs of the current generation, in population order.
    pub fn population_costs(&self) -> Vec<u64> {
        self.population
            .iter()
            .map(|tour| tour.cost(&self.cities))
            .collect()
    }

    /// Copies of the current generation's visitation orders.
    pub fn population_paths(&self) -> Vec<Vec<usize>> {
        self.population.iter().map(Tour::path).collect()
    }

    pub fn generation_count(&self) -> usize {
        self.state.generation_count
    }

    pub fn best_cost(&self) -> Option<u64> {
        self.state.best_cost
    }

    /// A copy of the best tour ever seen, empty before the first generation.
    pub fn best_path(&self) -> Vec<usize> {
        self.best_tour.as_ref().map(Tour::path).unwrap_or_default()
    }

    pub fn current_best_cost(&self) -> Option<u64> {
        self.state.current_best_cost
    }

    /// A copy of the most recent generation's leader, empty before the first
    /// generation.
    pub fn current_best_path(&self) -> Vec<usize> {
        self.current_best_tour
            .as_ref()
            .map(Tour::path)
            .unwrap_or_default()
    }

    pub fn initial_best_cost(&self) -> Option<u64> {
        self.state.initial_best_cost
    }

    pub fn total_improvements(&self) -> usize {
        self.state.total_improvements
    }

    pub fn generations_since_improvement(&self) -> usize {
        self.state.generations_since_improvement
    }

    /// Whether the most recent generation improved the best cost.
    pub fn improved(&self) -> bool {
        self.state.improved
    }

    /// Copies the whole read surface in one go.
    pub fn snapshot(&self) -> GenerationSnapshot {
        GenerationSnapshot {
            generation_count: self.state.generation_count,
            best_cost: self.state.best_cost,
            best_path: self.best_path(),
            current_best_cost: self.state.current_best_cost,
            current_best_path: self.current_best_path(),
            initial_best_cost: self.state.initial_best_cost,
            total_improvements: self.state.total_improvements,
            generations_since_improvement: self.state.generations_since_improvement,
            improved: self.state.improved,
        }
    }
}
