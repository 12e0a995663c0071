pub mod epoch_stats;
pub mod train_config;
pub mod run_config;
pub mod loop_fn;

pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use run_config::RunConfig;
pub use loop_fn::{train_loop, Termination, TrainingReport};
