use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::cost::CostType;
use crate::error::Result;
use crate::network::network::Network;
use crate::optim::UpdateRule;

/// A serializable description of a network architecture plus the cost and
/// update rule it trains with.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of any
/// trained weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the model file stem.
    pub name: String,
    /// Layer widths, input layer first.
    pub sizes: Vec<usize>,
    #[serde(default)]
    pub cost: CostType,
    #[serde(default)]
    pub rule: UpdateRule,
}

impl NetworkSpec {
    /// Initializes a fresh network from this description.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        Network::new(&self.sizes, self.cost, self.rule, rng)
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn missing_cost_and_rule_use_defaults() {
        let spec: NetworkSpec = serde_json::from_str(r#"{"name":"digits","sizes":[784,30,10]}"#).unwrap();
        assert_eq!(spec.cost, CostType::CrossEntropy);
        assert_eq!(spec.rule, UpdateRule::L2Sgd);

        let net = spec.build(&mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(net.sizes(), &[784, 30, 10]);
    }
}
