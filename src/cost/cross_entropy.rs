use crate::math::matrix::Matrix;

use super::CostFunction;

/// Binary cross-entropy summed over the sigmoid outputs.
pub struct CrossEntropyCost;

/// Replaces NaN with 0 and infinities with the largest finite value of the
/// same sign.
fn nan_to_num(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else if x == f64::INFINITY {
        f64::MAX
    } else if x == f64::NEG_INFINITY {
        f64::MIN
    } else {
        x
    }
}

impl CrossEntropyCost {
    fn term(a: f64, y: f64) -> f64 {
        nan_to_num(-y * a.ln() - (1.0 - y) * (1.0 - a).ln())
    }
}

impl CostFunction for CrossEntropyCost {
    /// `Σ -y·ln(a) - (1-y)·ln(1-a)`. A term where `a` and `y` agree at 0 or
    /// 1 evaluates to `0·ln(0)` = NaN and contributes 0.
    fn cost(&self, a: &Matrix, y: &Matrix) -> f64 {
        a.zip_map(y, Self::term).sum()
    }

    /// `a - y`; the σ'(z) factor cancels, so `z` is unused.
    fn delta(&self, _z: &Matrix, a: &Matrix, y: &Matrix) -> Matrix {
        a.zip_map(y, |p, t| p - t)
    }
}
