pub mod engine;
pub mod launcher;
pub mod options;
pub mod snapshot;

pub use engine::PopulationEngine;
pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use snapshot::GenerationSnapshot;
