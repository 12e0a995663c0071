use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::spec::NetworkSpec;
use crate::train::train_config::TrainConfig;

/// Everything the `mlp-sgd` binary needs for one run.
///
/// Data paths point at JSON arrays of `Sample`s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub network: NetworkSpec,
    #[serde(default)]
    pub train: TrainConfig,
    pub training_data: String,
    #[serde(default)]
    pub test_data: Option<String>,
    /// Where to write the trained network, if anywhere.
    #[serde(default)]
    pub output: Option<String>,
}

impl RunConfig {
    pub fn load_json(path: &str) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
