use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mlp_sgd::data::load_samples_json;
use mlp_sgd::{train_loop, RunConfig};

fn run(path: &str) -> mlp_sgd::Result<()> {
    let config = RunConfig::load_json(path)?;
    let training_data = load_samples_json(&config.training_data)?;
    let test_data = match &config.test_data {
        Some(p) => Some(load_samples_json(p)?),
        None => None,
    };

    let mut rng = match config.train.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut network = config.network.build(&mut rng)?;
    info!(
        "training {} {:?} on {} samples ({:?} cost, {:?} updates)",
        config.network.name,
        network.sizes(),
        training_data.len(),
        network.cost,
        network.rule,
    );

    let report = train_loop(
        &mut network,
        &training_data,
        test_data.as_deref(),
        &config.train,
        &mut rng,
    )?;
    info!(
        "finished after {} epochs ({:?}), final learning rate {}",
        report.epochs.len(),
        report.termination,
        report.final_learning_rate,
    );
    if let (Some(best), Some(test)) = (report.best_correct(), &test_data) {
        info!("best accuracy: {best} / {}", test.len());
    }

    if let Some(out) = &config.output {
        network.save_json(out)?;
        info!("saved trained network to {out}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: mlp-sgd <run.json>");
        eprintln!("Run `cargo run --example xor` to see the XOR demo.");
        std::process::exit(2);
    };

    if let Err(e) = run(&path) {
        error!("{e}");
        std::process::exit(1);
    }
}
