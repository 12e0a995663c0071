pub mod error;
pub mod math;
pub mod activation;
pub mod cost;
pub mod optim;
pub mod schedule;
pub mod data;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::{sigmoid, sigmoid_prime};
pub use cost::{CostFunction, CostType};
pub use optim::{Gradients, Parameters, UpdateRule, UpdateStep, UpdateStrategy};
pub use schedule::{EarlyStopping, LearningRate, PlateauTracker, ScheduleConfig};
pub use data::{Label, MiniBatch, Sample};
pub use network::{Network, NetworkSpec};
pub use train::{train_loop, EpochStats, RunConfig, TrainConfig, Termination, TrainingReport};
