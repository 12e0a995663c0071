use std::sync::mpsc;

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::schedule::ScheduleConfig;
use crate::train::epoch_stats::EpochStats;

/// Hyperparameters for a `train_loop` run.
///
/// # Fields
/// - `epochs`         : upper bound on full passes over the training data;
///                       the schedule may end the run sooner
/// - `mini_batch_size`: samples per mini-batch; the last batch of an epoch
///                       may be smaller
/// - `eta`            : initial learning rate
/// - `lambda`         : regularization strength for `L2Sgd` / `L1Sgd`
/// - `mu`             : momentum coefficient for `Momentum`
/// - `schedule`       : plateau policy driven by test-set accuracy
/// - `monitor_training_cost`: also compute the total training cost each
///                       epoch (costs one extra pass over the training data)
/// - `seed`           : shuffle seed; `None` draws one from the OS
/// - `progress_tx`    : optional channel sender; one `EpochStats` is sent per
///                       completed epoch.  If the receiver is dropped the loop
///                       terminates early.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub eta: f64,
    pub lambda: f64,
    pub mu: f64,
    pub schedule: ScheduleConfig,
    pub monitor_training_cost: bool,
    pub seed: Option<u64>,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with default regularization, momentum and
    /// schedule, and no progress channel.
    pub fn new(epochs: usize, mini_batch_size: usize, eta: f64) -> Self {
        TrainConfig {
            epochs,
            mini_batch_size,
            eta,
            ..TrainConfig::default()
        }
    }

    /// Checks every precondition that must hold before the first epoch.
    pub fn validate(&self) -> Result<()> {
        if !(self.eta.is_finite() && self.eta > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be positive and finite, got {}", self.eta
            )));
        }
        if self.mini_batch_size == 0 {
            return Err(Error::InvalidConfig("mini_batch_size must be at least 1".to_owned()));
        }
        if !(self.lambda.is_finite() && self.lambda >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "lambda must be non-negative and finite, got {}", self.lambda
            )));
        }
        if !(self.mu.is_finite() && self.mu >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "mu must be non-negative and finite, got {}", self.mu
            )));
        }
        self.schedule.validate()
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 30,
            mini_batch_size: 10,
            eta: 0.5,
            lambda: 0.0,
            mu: 0.5,
            schedule: ScheduleConfig::default(),
            monitor_training_cost: false,
            seed: None,
            progress_tx: None,
        }
    }
}
