pub mod city;
pub mod crossover;
pub mod error;
pub mod evolution;
pub mod phenotype;
pub mod rng;
pub mod selection;
pub mod stats;
pub mod tour;

// Re-export commonly used types for convenience
pub use city::{City, CityLayout, CitySetup};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, PopulationEngine};
pub use tour::Tour;
