use std::time::Instant;

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::data::sample::Sample;
use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::optim::UpdateStep;
use crate::schedule::{EarlyStopping, LearningRate, ScheduleConfig};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Why a training run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every requested epoch ran.
    Completed,
    /// The learning rate was halved `max_halvings` times.
    HalvingLimit,
    /// The early-stopping tracker reported a plateau.
    EarlyStopped,
    /// The `progress_tx` receiver was dropped.
    ProgressClosed,
}

/// Outcome of `train_loop`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub epochs: Vec<EpochStats>,
    /// Learning rate after the last schedule step.
    pub final_learning_rate: f64,
    pub num_halves: u32,
    pub termination: Termination,
}

impl TrainingReport {
    /// Highest test accuracy seen in any epoch.
    pub fn best_correct(&self) -> Option<usize> {
        self.epochs.iter().filter_map(|e| e.correct).max()
    }
}

enum ActiveSchedule {
    Halve { tracker: LearningRate, max_halvings: u32 },
    Stop(EarlyStopping),
}

impl ActiveSchedule {
    fn from_config(config: ScheduleConfig) -> ActiveSchedule {
        match config {
            ScheduleConfig::HalveOnPlateau { patience, max_halvings } => ActiveSchedule::Halve {
                tracker: LearningRate::new(patience),
                max_halvings,
            },
            ScheduleConfig::EarlyStopping { patience } => ActiveSchedule::Stop(EarlyStopping::new(patience)),
        }
    }

    fn num_halves(&self) -> u32 {
        match self {
            ActiveSchedule::Halve { tracker, .. } => tracker.num_halves(),
            ActiveSchedule::Stop(_) => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` with mini-batch stochastic gradient descent.
///
/// Each epoch shuffles the training set with `rng`, cuts it into contiguous
/// mini-batches of `config.mini_batch_size` (the last one may be shorter),
/// applies one update per batch in order, then scores the network on
/// `test_data`. That score drives the configured schedule:
/// - `HalveOnPlateau` halves η after `patience` epochs without improvement
///   and ends the run once η has been halved `max_halvings` times;
/// - `EarlyStopping` ends the run after `patience` epochs without improvement.
///
/// Without test data (or with an empty test set) the schedule never runs
/// and all `config.epochs` epochs are trained.
///
/// # Early termination
/// Besides the schedule, the loop breaks early if the `progress_tx`
/// receiver has been dropped.
///
/// # Errors
/// `InvalidConfig` for hyperparameters rejected by `TrainConfig::validate`,
/// `InvalidData` for an empty training set, and `InvalidShape` as soon as a
/// sample does not fit the network. Configuration errors are reported
/// before any parameter changes.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    training_data: &[Sample],
    test_data: Option<&[Sample]>,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainingReport> {
    config.validate()?;
    if training_data.is_empty() {
        return Err(Error::InvalidData("training data must not be empty".to_owned()));
    }

    let n = training_data.len();
    let test_data = test_data.filter(|t| !t.is_empty());
    let test_len = test_data.map_or(0, |t| t.len());
    if test_data.is_none() {
        warn!("no test data supplied; the {:?} schedule will not run", config.schedule);
    }

    let mut schedule = ActiveSchedule::from_config(config.schedule);
    let mut eta = config.eta;
    let mut indices: Vec<usize> = (0..n).collect();
    let mut epochs = Vec::with_capacity(config.epochs);
    let mut termination = Termination::Completed;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        // ── One full pass over the training data ───────────────────────────
        indices.shuffle(rng);
        let step = UpdateStep { eta, lambda: config.lambda, n, mu: config.mu };
        let mut batches = 0;
        for chunk in indices.chunks(config.mini_batch_size) {
            let batch: Vec<&Sample> = chunk.iter().map(|&i| &training_data[i]).collect();
            network.update_mini_batch(&batch, &step)?;
            batches += 1;
        }
        debug!("epoch {epoch}: {batches} mini-batches at learning rate {eta}");

        // ── Evaluation ────────────────────────────────────────────────────
        let correct = match test_data {
            Some(t) => Some(network.evaluate(t)?),
            None => None,
        };
        let training_cost = if config.monitor_training_cost {
            Some(network.total_cost(training_data, config.lambda)?)
        } else {
            None
        };

        match correct {
            Some(c) => info!("Epoch {epoch} : {c} / {test_len}"),
            None => info!("Epoch {epoch} complete"),
        }
        if let Some(cost) = training_cost {
            info!("Cost on training data: {cost:.6}");
        }

        // ── Schedule ──────────────────────────────────────────────────────
        let used_eta = eta;
        let mut halved = false;
        let mut stop = None;
        if let Some(c) = correct {
            match &mut schedule {
                ActiveSchedule::Halve { tracker, max_halvings } => {
                    if tracker.should_halve(c) {
                        eta /= 2.0;
                        halved = true;
                        info!("learning rate halved to {eta}");
                    }
                    debug!("num halves: {}", tracker.num_halves());
                    if tracker.num_halves() >= *max_halvings {
                        info!("stopping: learning rate halved {max_halvings} times");
                        stop = Some(Termination::HalvingLimit);
                    }
                }
                ActiveSchedule::Stop(tracker) => {
                    if tracker.should_stop(c) {
                        info!(
                            "stopping: no improvement on {} for {} epochs",
                            tracker.best_accuracy(),
                            tracker.counter()
                        );
                        stop = Some(Termination::EarlyStopped);
                    }
                }
            }
        }

        // ── Emit progress ─────────────────────────────────────────────────
        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            correct,
            test_len,
            learning_rate: used_eta,
            halved,
            num_halves: schedule.num_halves(),
            training_cost,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        epochs.push(stats.clone());

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                termination = Termination::ProgressClosed;
                break;
            }
        }

        if let Some(reason) = stop {
            termination = reason;
            break;
        }
    }

    Ok(TrainingReport {
        epochs,
        final_learning_rate: eta,
        num_halves: schedule.num_halves(),
        termination,
    })
}
