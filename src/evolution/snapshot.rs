/// A point-in-time copy of an engine's run state.
///
/// Snapshots own their data; later generations never change a snapshot already
/// taken, and two snapshots share nothing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSnapshot {
    /// Generations advanced since the population was initialized.
    pub generation_count: usize,
    /// Lowest cost ever observed, `None` before the first generation.
    pub best_cost: Option<u64>,
    /// Visitation order that achieved `best_cost`.
    pub best_path: Vec<usize>,
    /// Lowest cost within the most recent generation.
    pub current_best_cost: Option<u64>,
    /// Visitation order of the most recent generation's leader.
    pub current_best_path: Vec<usize>,
    /// The first best cost ever recorded; frozen afterwards.
    pub initial_best_cost: Option<u64>,
    pub total_improvements: usize,
    pub generations_since_improvement: usize,
    /// Whether the most recent generation lowered the best cost.
    pub improved: bool,
}
