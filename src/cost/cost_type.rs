use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

use super::{CostFunction, CrossEntropyCost, QuadraticCost};

/// Selects which cost the network trains against.
///
/// - `Quadratic`   : half squared error; its delta carries a σ'(z) factor
///   that slows learning when outputs saturate.
/// - `CrossEntropy`: the default; σ'(z) cancels out of its delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    Quadratic,
    #[default]
    CrossEntropy,
}

impl CostFunction for CostType {
    fn cost(&self, a: &Matrix, y: &Matrix) -> f64 {
        match self {
            CostType::Quadratic    => QuadraticCost.cost(a, y),
            CostType::CrossEntropy => CrossEntropyCost.cost(a, y),
        }
    }

    fn delta(&self, z: &Matrix, a: &Matrix, y: &Matrix) -> Matrix {
        match self {
            CostType::Quadratic    => QuadraticCost.delta(z, a, y),
            CostType::CrossEntropy => CrossEntropyCost.delta(z, a, y),
        }
    }
}
