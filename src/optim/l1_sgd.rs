use crate::math::matrix::Matrix;

use super::params::{descend_biases, Gradients, Parameters, UpdateStep};
use super::UpdateStrategy;

/// `sign(x)` with `sign(0) == 0` (unlike `f64::signum`, which returns ±1).
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// SGD with L1 weight decay:
///   w ← w - (η·λ/n)·sign(w) - η·∇w
///   b ← b - η·∇b
pub struct L1Sgd;

impl UpdateStrategy for L1Sgd {
    fn update(&self, params: Parameters, gradients: &Gradients, step: &UpdateStep) -> Parameters {
        let decay = step.decay();
        let weights = params.weights.into_iter().zip(&gradients.weights)
            .map(|(w, nw)| w.zip_map(nw, |w, g| w - decay * sign(w) - step.eta * g))
            .collect();
        let biases = descend_biases(params.biases, &gradients.biases, step.eta);
        Parameters { weights, biases, velocities: params.velocities }
    }

    /// `(λ/n)·Σ|w|`
    fn penalty(&self, weights: &[Matrix], lambda: f64, n: usize) -> f64 {
        let sum_abs: f64 = weights.iter().flat_map(|w| w.values()).map(|x| x.abs()).sum();
        (lambda / n as f64) * sum_abs
    }
}
