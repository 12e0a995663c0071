pub mod plateau;
pub mod learning_rate;
pub mod early_stopping;
pub mod schedule_config;

pub use plateau::{PlateauAction, PlateauTracker};
pub use learning_rate::LearningRate;
pub use early_stopping::EarlyStopping;
pub use schedule_config::ScheduleConfig;
