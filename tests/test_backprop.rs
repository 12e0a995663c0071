//! Backpropagation checked against finite differences, and the batch-mean
//! gradient convention.

use approx::assert_abs_diff_eq;
use mlp_sgd::{CostFunction, CostType, Matrix, Network, Parameters, UpdateRule};

const EPS: f64 = 1e-5;
const TOL: f64 = 1e-4;

fn sample_cost(net: &Network, x: &[f64], y: &[f64]) -> f64 {
    let a = net.feedforward(&Matrix::column(x)).unwrap();
    net.cost.cost(&a, &Matrix::column(y))
}

fn with_params(net: &Network, params: Parameters) -> Network {
    Network::from_parameters(net.sizes(), params, net.cost, net.rule).unwrap()
}

fn check_against_finite_differences(cost: CostType) {
    let net = Network::with_seed(&[2, 3, 1], cost, UpdateRule::L2Sgd, 2024).unwrap();
    let x = [0.35, -0.8];
    let y = [1.0];

    let grads = net.backprop(&Matrix::column(&x), &Matrix::column(&y)).unwrap();

    for l in 0..net.weights().len() {
        let (rows, cols) = net.weights()[l].shape();
        for i in 0..rows {
            for j in 0..cols {
                let mut plus = net.parameters().clone();
                plus.weights[l].data[i][j] += EPS;
                let mut minus = net.parameters().clone();
                minus.weights[l].data[i][j] -= EPS;
                let numeric = (sample_cost(&with_params(&net, plus), &x, &y)
                    - sample_cost(&with_params(&net, minus), &x, &y))
                    / (2.0 * EPS);
                assert_abs_diff_eq!(grads.weights[l].data[i][j], numeric, epsilon = TOL);
            }

            let mut plus = net.parameters().clone();
            plus.biases[l].data[i][0] += EPS;
            let mut minus = net.parameters().clone();
            minus.biases[l].data[i][0] -= EPS;
            let numeric = (sample_cost(&with_params(&net, plus), &x, &y)
                - sample_cost(&with_params(&net, minus), &x, &y))
                / (2.0 * EPS);
            assert_abs_diff_eq!(grads.biases[l].data[i][0], numeric, epsilon = TOL);
        }
    }
}

#[test]
fn cross_entropy_gradients_match_finite_differences() {
    check_against_finite_differences(CostType::CrossEntropy);
}

#[test]
fn quadratic_gradients_match_finite_differences() {
    check_against_finite_differences(CostType::Quadratic);
}

#[test]
fn gradients_are_means_over_the_batch() {
    let net = Network::with_seed(&[2, 3, 2], CostType::CrossEntropy, UpdateRule::L2Sgd, 3).unwrap();
    let a = [0.2, 0.9];
    let b = [-0.4, 0.1];
    let ya = [1.0, 0.0];
    let yb = [0.0, 1.0];

    let ga = net.backprop(&Matrix::column(&a), &Matrix::column(&ya)).unwrap();
    let gb = net.backprop(&Matrix::column(&b), &Matrix::column(&yb)).unwrap();
    let gab = net
        .backprop(&Matrix::column_stack(&[&a, &b]), &Matrix::column_stack(&[&ya, &yb]))
        .unwrap();

    for l in 0..2 {
        let mean_w = (ga.weights[l].clone() + gb.weights[l].clone()).scale(0.5);
        let mean_b = (ga.biases[l].clone() + gb.biases[l].clone()).scale(0.5);
        for (x, y) in gab.weights[l].values().zip(mean_w.values()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }
        for (x, y) in gab.biases[l].values().zip(mean_b.values()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }
    }
}

#[test]
fn output_delta_for_cross_entropy_is_prediction_error() {
    // One layer, so the output bias gradient is exactly δ = a - y.
    let net = Network::with_seed(&[3, 2], CostType::CrossEntropy, UpdateRule::L2Sgd, 11).unwrap();
    let x = [0.5, -1.0, 2.0];
    let y = [0.0, 1.0];
    let a = net.predict(&x).unwrap();
    let g = net.backprop(&Matrix::column(&x), &Matrix::column(&y)).unwrap();
    assert_eq!(g.biases[0].column_values(0), vec![a[0] - y[0], a[1] - y[1]]);
}

#[test]
fn mismatched_targets_are_rejected() {
    let net = Network::with_seed(&[2, 3, 1], CostType::CrossEntropy, UpdateRule::L2Sgd, 0).unwrap();
    let x = Matrix::column_stack(&[&[0.0, 1.0], &[1.0, 0.0]]);
    let y = Matrix::column(&[1.0]);
    assert!(net.backprop(&x, &y).is_err());
}
