use crate::math::matrix::Matrix;

use super::params::{descend_biases, Gradients, Parameters, UpdateStep};
use super::UpdateStrategy;

/// Momentum SGD:
///   v ← μ·v - η·∇w
///   w ← w + v
///   b ← b - η·∇b
///
/// There is no weight-decay term; `λ` is ignored.
pub struct Momentum;

impl UpdateStrategy for Momentum {
    fn update(&self, params: Parameters, gradients: &Gradients, step: &UpdateStep) -> Parameters {
        let velocities: Vec<Matrix> = params.velocities.into_iter().zip(&gradients.weights)
            .map(|(v, nw)| v.zip_map(nw, |v, g| step.mu * v - step.eta * g))
            .collect();
        let weights = params.weights.into_iter().zip(&velocities)
            .map(|(w, v)| w + v.clone())
            .collect();
        let biases = descend_biases(params.biases, &gradients.biases, step.eta);
        Parameters { weights, biases, velocities }
    }

    fn penalty(&self, _weights: &[Matrix], _lambda: f64, _n: usize) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params() -> Parameters {
        Parameters {
            weights: vec![Matrix::from_data(vec![vec![0.3, -0.7], vec![1.5, 0.0]])],
            biases: vec![Matrix::column(&[0.1, -0.1])],
            velocities: vec![Matrix::from_data(vec![vec![0.2, 0.2], vec![-0.4, 1.0]])],
        }
    }

    fn grads() -> Gradients {
        Gradients {
            weights: vec![Matrix::from_data(vec![vec![1.0, -2.0], vec![0.5, 0.25]])],
            biases: vec![Matrix::column(&[0.4, 0.8])],
        }
    }

    #[test]
    fn zero_mu_is_plain_gradient_descent() {
        let step = UpdateStep { eta: 0.1, lambda: 5.0, n: 4, mu: 0.0 };
        let before = params();
        let out = Momentum.update(before.clone(), &grads(), &step);

        let expected = before.weights[0].zip_map(&grads().weights[0], |w, g| w - 0.1 * g);
        for (a, b) in out.weights[0].values().zip(expected.values()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
        assert_eq!(out.velocities[0], grads().weights[0].scale(-0.1));
    }

    #[test]
    fn velocity_accumulates() {
        let step = UpdateStep { eta: 0.1, lambda: 0.0, n: 4, mu: 0.5 };
        let out = Momentum.update(params(), &grads(), &step);
        // v = 0.5·0.2 - 0.1·1.0 = 0.0, w = 0.3 + 0.0
        assert_abs_diff_eq!(out.velocities[0].data[0][0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out.weights[0].data[0][0], 0.3, epsilon = 1e-12);
        // v = 0.5·1.0 - 0.1·0.25 = 0.475, w = 0.0 + 0.475
        assert_abs_diff_eq!(out.weights[0].data[1][1], 0.475, epsilon = 1e-12);
        assert_abs_diff_eq!(out.biases[0].data[1][0], -0.18, epsilon = 1e-12);
    }
}
