use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// One value is recorded in the `TrainingReport` for every completed epoch
/// and, when a `progress_tx` channel is configured in `TrainConfig`, sent on
/// that channel as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Upper bound on epochs requested for this run.
    pub total_epochs: usize,
    /// Correctly classified test samples; `None` without test data.
    pub correct: Option<usize>,
    /// Size of the test set (0 without test data).
    pub test_len: usize,
    /// Learning rate used during this epoch.
    pub learning_rate: f64,
    /// Whether the schedule halved the learning rate after this epoch.
    pub halved: bool,
    /// Halvings so far, including this epoch's.
    pub num_halves: u32,
    /// Total training cost, if `monitor_training_cost` is set.
    pub training_cost: Option<f64>,
    /// Wall-clock duration of this epoch in milliseconds.
    pub elapsed_ms: u64,
}
