//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the parameters of the genetic search: the
//! population size, the mutation and crossover probabilities, the share of each
//! generation kept as elites, and how chatty the engine's logging is.
//!
//! ## Example
//!
//! ```rust
//! use genalg_tsp::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, 0.05, 0.9);
//! assert!(custom_options.validate().is_ok());
//!
//! // Or through the builder
//! let options = EvolutionOptions::builder()
//!     .population_size(120)
//!     .mutation_rate(0.2)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert_eq!(options.get_crossover_rate(), 0.8);
//! ```
//!
//! ## Defaults
//!
//! | Option | Default |
//! |---|---|
//! | `population_size` | 50 |
//! | `mutation_rate` | 0.1 |
//! | `crossover_rate` | 0.8 |
//! | `elite_ratio` | 0.2 |
//! | `log_level` | `LogLevel::None` |

use crate::error::{GeneticError, Result};

/// How much the engine reports through `tracing` while it runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// An event for every generation plus every improvement.
    Verbose,
    /// An event for every improvement of the best cost.
    Minimal,
    /// Disables per-generation logging.
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    elite_ratio: f64,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(population_size: usize, mutation_rate: f64, crossover_rate: f64) -> Self {
        Self {
            population_size,
            mutation_rate,
            crossover_rate,
            ..Self::default()
        }
    }

    /// Checks every parameter against its valid range.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the population is empty or a
    /// probability lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        check_probability("Mutation rate", self.mutation_rate)?;
        check_probability("Crossover rate", self.crossover_rate)?;
        check_probability("Elite ratio", self.elite_ratio)?;

        Ok(())
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_elite_ratio(&self) -> f64 {
        self.elite_ratio
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the swap mutation probability.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the crossover probability.
    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    /// Sets the elite ratio.
    pub fn set_elite_ratio(&mut self, elite_ratio: f64) {
        self.elite_ratio = elite_ratio;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genalg_tsp::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(300)
    ///     .mutation_rate(0.15)
    ///     .crossover_rate(0.95)
    ///     .elite_ratio(0.1)
    ///     .log_level(LogLevel::Verbose)
    ///     .build();
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            elite_ratio: 0.2,
            log_level: LogLevel::None,
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset values fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    crossover_rate: Option<f64>,
    elite_ratio: Option<f64>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the swap mutation probability.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the crossover probability.
    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    /// Sets the elite ratio.
    pub fn elite_ratio(mut self, value: f64) -> Self {
        self.elite_ratio = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            crossover_rate: self.crossover_rate.unwrap_or(default.crossover_rate),
            elite_ratio: self.elite_ratio.unwrap_or(default.elite_ratio),
            log_level: self.log_level.unwrap_or(default.log_level),
        }
    }
}
