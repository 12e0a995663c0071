//! End-to-end behaviour of a single update step and of full training runs.

use rand::rngs::StdRng;
use rand::SeedableRng;

use mlp_sgd::{
    train_loop, CostType, Matrix, Network, Sample, ScheduleConfig, Termination, TrainConfig,
    UpdateRule, UpdateStep,
};

fn two_points() -> Vec<Sample> {
    vec![
        Sample::with_target(vec![0.0, 0.0], vec![0.0]),
        Sample::with_target(vec![1.0, 1.0], vec![1.0]),
    ]
}

#[test]
fn one_mini_batch_step_moves_weights_by_eta_times_gradient() {
    let data = two_points();
    let mut net = Network::with_seed(&[2, 2, 1], CostType::CrossEntropy, UpdateRule::L2Sgd, 17).unwrap();
    let before = net.parameters().clone();

    let x = Matrix::column_stack(&[data[0].input.as_slice(), data[1].input.as_slice()]);
    let y = Matrix::column_stack(&[&[0.0], &[1.0]]);
    let grads = net.backprop(&x, &y).unwrap();

    let step = UpdateStep { eta: 0.1, lambda: 0.0, n: data.len(), mu: 0.0 };
    let batch: Vec<&Sample> = data.iter().collect();
    net.update_mini_batch(&batch, &step).unwrap();

    for l in 0..2 {
        let expected_w = before.weights[l].zip_map(&grads.weights[l], |w, g| w - 0.1 * g);
        let expected_b = before.biases[l].zip_map(&grads.biases[l], |b, g| b - 0.1 * g);
        assert_eq!(net.weights()[l], expected_w);
        assert_eq!(net.biases()[l], expected_b);
    }
    assert_eq!(net.velocities(), before.velocities.as_slice());
}

#[test]
fn same_seeds_reproduce_the_same_run() {
    let run = || {
        let mut net = Network::with_seed(&[2, 3, 1], CostType::CrossEntropy, UpdateRule::Momentum, 8).unwrap();
        let data = vec![
            Sample::with_target(vec![0.0, 0.0], vec![0.0]),
            Sample::with_target(vec![0.0, 1.0], vec![1.0]),
            Sample::with_target(vec![1.0, 0.0], vec![1.0]),
            Sample::with_target(vec![1.0, 1.0], vec![0.0]),
        ];
        let config = TrainConfig::new(5, 3, 0.5);
        train_loop(&mut net, &data, None, &config, &mut StdRng::seed_from_u64(99)).unwrap();
        net.parameters().clone()
    };
    assert_eq!(run(), run());
}

fn separable() -> Vec<Sample> {
    let mut data = Vec::new();
    for &x0 in &[0.0, 0.1, 0.2, 0.8, 0.9, 1.0] {
        for &x1 in &[0.0, 0.5, 1.0] {
            data.push(Sample::with_class(vec![x0, x1], usize::from(x0 > 0.5)));
        }
    }
    data
}

#[test]
fn learns_a_separable_problem() {
    let data = separable();
    for rule in [UpdateRule::L2Sgd, UpdateRule::Momentum, UpdateRule::L1Sgd] {
        let mut net = Network::with_seed(&[2, 4, 2], CostType::CrossEntropy, rule, 1).unwrap();
        let initial_cost = net.total_cost(&data, 0.0).unwrap();

        let mut config = TrainConfig::new(300, 3, 1.0);
        config.lambda = 0.01;
        config.schedule = ScheduleConfig::EarlyStopping { patience: 300 };
        let report = train_loop(&mut net, &data, Some(&data), &config, &mut StdRng::seed_from_u64(3)).unwrap();

        assert!(net.total_cost(&data, 0.0).unwrap() < initial_cost);
        assert_eq!(net.evaluate(&data).unwrap(), data.len(), "{rule:?} failed to separate");
        assert_eq!(report.best_correct(), Some(data.len()));
    }
}

#[test]
fn last_mini_batch_may_be_short() {
    // 5 samples in batches of 2: the third batch holds one sample.
    let data: Vec<Sample> = (0..5)
        .map(|i| Sample::with_class(vec![i as f64 / 4.0], i % 2))
        .collect();
    let mut net = Network::with_seed(&[1, 2], CostType::Quadratic, UpdateRule::L2Sgd, 0).unwrap();
    let config = TrainConfig::new(2, 2, 0.5);
    let report = train_loop(&mut net, &data, None, &config, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(report.termination, Termination::Completed);
    assert_eq!(report.epochs.len(), 2);
}

#[test]
fn bad_sample_width_fails_at_first_batch() {
    let data = vec![Sample::with_class(vec![0.0, 1.0, 2.0], 0)];
    let mut net = Network::with_seed(&[2, 2], CostType::CrossEntropy, UpdateRule::L2Sgd, 0).unwrap();
    let r = train_loop(&mut net, &data, None, &TrainConfig::new(1, 1, 0.1), &mut StdRng::seed_from_u64(0));
    assert!(matches!(r, Err(mlp_sgd::Error::InvalidShape(_))));
}

#[test]
fn empty_training_set_is_rejected() {
    let mut net = Network::with_seed(&[2, 2], CostType::CrossEntropy, UpdateRule::L2Sgd, 0).unwrap();
    let r = train_loop(&mut net, &[], None, &TrainConfig::new(1, 1, 0.1), &mut StdRng::seed_from_u64(0));
    assert!(matches!(r, Err(mlp_sgd::Error::InvalidData(_))));
}
