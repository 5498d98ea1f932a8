//! # Error Types
//!
//! This module defines the error type returned by the fallible operations of the
//! library. Fitness evaluation never fails; errors come from configuration and
//! from driving an engine that has nothing to evolve.
//!
//! ## Examples
//!
//! ```rust
//! use genalg_tsp::error::{GeneticError, Result};
//! use genalg_tsp::evolution::EvolutionOptions;
//!
//! fn checked_options(population_size: usize) -> Result<EvolutionOptions> {
//!     let options = EvolutionOptions::builder()
//!         .population_size(population_size)
//!         .build();
//!     options.validate()?;
//!     Ok(options)
//! }
//!
//! assert!(matches!(
//!     checked_options(0),
//!     Err(GeneticError::Configuration(_))
//! ));
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genalg_tsp::error::{GeneticError, OptionExt};
//!
//! fn cheapest(costs: &[u64]) -> genalg_tsp::error::Result<u64> {
//!     costs.iter().min().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(cheapest(&[7, 3, 9]).unwrap(), 3);
//! assert!(cheapest(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or driving an evolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an operation needs a population but none exists.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when the engine has no city set to evaluate tours against.
    #[error("No cities error: Cities must be set up before the population is initialized")]
    NoCities,

    /// Error that occurs when a sequence is not a permutation of the non-start cities.
    #[error("Invalid tour: {0}")]
    InvalidTour(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
