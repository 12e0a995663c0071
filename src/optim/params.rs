use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// Every trainable value of a network, plus momentum velocities.
///
/// `weights[l]` is `sizes[l+1] × sizes[l]`, `biases[l]` is `sizes[l+1] × 1`
/// and `velocities[l]` has the shape of `weights[l]`. The bundle is moved
/// into an update strategy and replaced by the bundle it returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub weights: Vec<Matrix>,
    pub biases: Vec<Matrix>,
    pub velocities: Vec<Matrix>,
}

/// Per-layer gradients, shaped like `Parameters::weights` / `biases`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub weights: Vec<Matrix>,
    pub biases: Vec<Matrix>,
}

/// Scalars shared by every update rule for one mini-batch step.
///
/// - `eta`   : learning rate
/// - `lambda`: regularization strength (unused by `Momentum`)
/// - `n`     : size of the whole training set, not of the mini-batch
/// - `mu`    : momentum coefficient (used by `Momentum` only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateStep {
    pub eta: f64,
    pub lambda: f64,
    pub n: usize,
    pub mu: f64,
}

impl UpdateStep {
    /// Weight-decay factor `η·λ/n`.
    pub fn decay(&self) -> f64 {
        self.eta * self.lambda / self.n as f64
    }
}

/// `b ← b - η·∇b`, shared by every rule.
pub(crate) fn descend_biases(biases: Vec<Matrix>, gradients: &[Matrix], eta: f64) -> Vec<Matrix> {
    biases.into_iter().zip(gradients)
        .map(|(b, nb)| b.zip_map(nb, |b, g| b - eta * g))
        .collect()
}
