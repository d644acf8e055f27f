use serde::{Deserialize, Serialize};

/// Summary of one online training run.
///
/// Serializable so callers can hand it to structured sinks unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Number of examples fed through the network.
    pub examples: usize,
    /// Examples whose outputs all landed within tolerance of their targets.
    pub correct: usize,
    /// RMS error recorded by the final backward pass.
    pub final_error: f64,
}
