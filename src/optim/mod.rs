pub mod params;
pub mod l2_sgd;
pub mod momentum;
pub mod l1_sgd;
pub mod update_rule;

pub use params::{Gradients, Parameters, UpdateStep};
pub use l2_sgd::L2Sgd;
pub use momentum::Momentum;
pub use l1_sgd::{sign, L1Sgd};
pub use update_rule::UpdateRule;

use crate::math::matrix::Matrix;

/// Turns a parameter bundle and its gradients into the next bundle.
///
/// Implementations hold no state: momentum velocities travel inside
/// `Parameters`. Every rule works layer by layer over however many layers
/// the bundle has.
pub trait UpdateStrategy {
    fn update(&self, params: Parameters, gradients: &Gradients, step: &UpdateStep) -> Parameters;

    /// Regularization term added to the reported total cost.
    fn penalty(&self, weights: &[Matrix], lambda: f64, n: usize) -> f64;
}
