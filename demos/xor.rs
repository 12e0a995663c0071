use rand::rngs::StdRng;
use rand::SeedableRng;

use mlp_sgd::{train_loop, CostType, Network, Sample, ScheduleConfig, TrainConfig, UpdateRule};

fn main() -> mlp_sgd::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut network = Network::with_seed(&[2, 4, 2], CostType::CrossEntropy, UpdateRule::Momentum, 42)?;

    let data = vec![
        Sample::with_class(vec![1.0, 0.0], 1),
        Sample::with_class(vec![1.0, 1.0], 0),
        Sample::with_class(vec![0.0, 1.0], 1),
        Sample::with_class(vec![0.0, 0.0], 0),
    ];

    let mut config = TrainConfig::new(2000, 4, 2.0);
    config.mu = 0.9;
    config.schedule = ScheduleConfig::HalveOnPlateau { patience: 200, max_halvings: 4 };

    let report = train_loop(&mut network, &data, Some(&data), &config, &mut StdRng::seed_from_u64(7))?;
    println!(
        "stopped after {} epochs ({:?}), learning rate {}",
        report.epochs.len(),
        report.termination,
        report.final_learning_rate
    );

    for sample in &data {
        println!("Input: {:?} -> Output: {:.4?}", sample.input, network.predict(&sample.input)?);
    }
    Ok(())
}
