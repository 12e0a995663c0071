pub mod sample;
pub mod mini_batch;

pub use sample::{load_samples_json, Label, Sample};
pub use mini_batch::MiniBatch;
