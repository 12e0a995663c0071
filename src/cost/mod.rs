pub mod quadratic;
pub mod cross_entropy;
pub mod cost_type;

pub use quadratic::QuadraticCost;
pub use cross_entropy::CrossEntropyCost;
pub use cost_type::CostType;

use crate::math::matrix::Matrix;

/// A cost paired with the sigmoid output layer.
///
/// `a` and `y` are `out × m` matrices (one sample per column); `cost` sums
/// over every entry, so a single column gives the per-sample cost.
pub trait CostFunction {
    fn cost(&self, a: &Matrix, y: &Matrix) -> f64;

    /// Output-layer error `∂C/∂z` that seeds backpropagation.
    fn delta(&self, z: &Matrix, a: &Matrix, y: &Matrix) -> Matrix;
}
