use crate::math::matrix::Matrix;

/// The logistic function `1 / (1 + e^-z)`.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Derivative of the sigmoid: `σ(z)·(1 - σ(z))`.
pub fn sigmoid_prime(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}

/// Applies `sigmoid` to every entry.
pub fn sigmoid_matrix(z: &Matrix) -> Matrix {
    z.map(sigmoid)
}

/// Applies `sigmoid_prime` to every entry of a pre-activation matrix.
pub fn sigmoid_prime_matrix(z: &Matrix) -> Matrix {
    z.map(sigmoid_prime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sigmoid_is_symmetric() {
        for &z in &[-30.0, -4.5, -1.0, -1e-3, 0.0, 0.25, 2.0, 12.0, 30.0] {
            assert_abs_diff_eq!(sigmoid(z) + sigmoid(-z), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn sigmoid_prime_matches_closed_form() {
        for &z in &[-6.0, -0.5, 0.0, 0.5, 3.0] {
            let s = sigmoid(z);
            assert_abs_diff_eq!(sigmoid_prime(z), s * (1.0 - s), epsilon = 1e-15);
        }
        assert_abs_diff_eq!(sigmoid(0.0), 0.5);
        assert_abs_diff_eq!(sigmoid_prime(0.0), 0.25);
    }

    #[test]
    fn sigmoid_saturates_without_nan() {
        assert!(sigmoid(-1000.0).is_finite());
        assert!(sigmoid(1000.0).is_finite());
        assert_eq!(sigmoid_prime(1000.0), 0.0);
    }
}
