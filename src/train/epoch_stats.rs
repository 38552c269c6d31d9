use serde::{Deserialize, Serialize};

/// Statistics for one completed epoch of `Network::train`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mini-batch updates applied during this epoch.
    pub updates: usize,
    /// Examples left out because they did not fill a whole mini-batch.
    pub dropped: usize,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// Summary of a whole training run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub epochs: Vec<EpochStats>,
}

impl TrainReport {
    pub fn total_updates(&self) -> usize {
        self.epochs.iter().map(|e| e.updates).sum()
    }
}
