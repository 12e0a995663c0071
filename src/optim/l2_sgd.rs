use crate::math::matrix::Matrix;

use super::params::{descend_biases, Gradients, Parameters, UpdateStep};
use super::UpdateStrategy;

/// Plain SGD with L2 weight decay:
///   w ← (1 - η·λ/n)·w - η·∇w
///   b ← b - η·∇b
/// Velocities pass through untouched.
pub struct L2Sgd;

impl UpdateStrategy for L2Sgd {
    fn update(&self, params: Parameters, gradients: &Gradients, step: &UpdateStep) -> Parameters {
        let shrink = 1.0 - step.decay();
        let weights = params.weights.into_iter().zip(&gradients.weights)
            .map(|(w, nw)| w.zip_map(nw, |w, g| shrink * w - step.eta * g))
            .collect();
        let biases = descend_biases(params.biases, &gradients.biases, step.eta);
        Parameters { weights, biases, velocities: params.velocities }
    }

    /// `0.5·(λ/n)·Σw²`
    fn penalty(&self, weights: &[Matrix], lambda: f64, n: usize) -> f64 {
        let sum_sq: f64 = weights.iter().flat_map(|w| w.values()).map(|x| x * x).sum();
        0.5 * (lambda / n as f64) * sum_sq
    }
}
