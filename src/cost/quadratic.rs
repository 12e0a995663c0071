use crate::activation::activation::sigmoid_prime_matrix;
use crate::math::matrix::Matrix;

use super::CostFunction;

pub struct QuadraticCost;

impl CostFunction for QuadraticCost {
    /// `0.5 · ‖a - y‖²`
    fn cost(&self, a: &Matrix, y: &Matrix) -> f64 {
        0.5 * a.zip_map(y, |p, t| (p - t).powi(2)).sum()
    }

    /// `(a - y) ⊙ σ'(z)`
    fn delta(&self, z: &Matrix, a: &Matrix, y: &Matrix) -> Matrix {
        a.zip_map(y, |p, t| p - t).hadamard(&sigmoid_prime_matrix(z))
    }
}
