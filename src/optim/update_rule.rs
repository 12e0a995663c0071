use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

use super::params::{Gradients, Parameters, UpdateStep};
use super::{L1Sgd, L2Sgd, Momentum, UpdateStrategy};

/// Selects how gradients turn into new parameters.
///
/// - `L2Sgd`   : the default; SGD with L2 weight decay.
/// - `Momentum`: velocity-based SGD without weight decay. Kept as its own
///   rule rather than folded into `L2Sgd`.
/// - `L1Sgd`   : SGD with L1 weight decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateRule {
    #[default]
    L2Sgd,
    Momentum,
    L1Sgd,
}

impl UpdateStrategy for UpdateRule {
    fn update(&self, params: Parameters, gradients: &Gradients, step: &UpdateStep) -> Parameters {
        match self {
            UpdateRule::L2Sgd    => L2Sgd.update(params, gradients, step),
            UpdateRule::Momentum => Momentum.update(params, gradients, step),
            UpdateRule::L1Sgd    => L1Sgd.update(params, gradients, step),
        }
    }

    fn penalty(&self, weights: &[Matrix], lambda: f64, n: usize) -> f64 {
        match self {
            UpdateRule::L2Sgd    => L2Sgd.penalty(weights, lambda, n),
            UpdateRule::Momentum => Momentum.penalty(weights, lambda, n),
            UpdateRule::L1Sgd    => L1Sgd.penalty(weights, lambda, n),
        }
    }
}
