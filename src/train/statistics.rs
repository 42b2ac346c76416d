use serde::{Serialize, Deserialize};
use std::time::Duration;

/// Summary of one training run: how many epochs ran, how long the run took
/// in wall-clock terms, and whether it ended by abort rather than by the
/// stopping condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStatistics {
    epochs: usize,
    time_taken: Duration,
    aborted: bool,
}

impl TrainingStatistics {
    pub fn new(epochs: usize, time_taken: Duration, aborted: bool) -> TrainingStatistics {
        TrainingStatistics {
            epochs,
            time_taken,
            aborted,
        }
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn time_taken(&self) -> Duration {
        self.time_taken
    }

    /// `true` if the run was aborted; `false` if the stopping condition was
    /// fulfilled.
    pub fn aborted(&self) -> bool {
        self.aborted
    }
}
