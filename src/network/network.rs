use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::activation::activation::{sigmoid_matrix, sigmoid_prime_matrix};
use crate::cost::{CostFunction, CostType};
use crate::data::mini_batch::MiniBatch;
use crate::data::sample::Sample;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::optim::{Gradients, Parameters, UpdateRule, UpdateStep, UpdateStrategy};

/// A fully connected stack of sigmoid layers.
///
/// `sizes` lists every layer width, input layer first. The cost and update
/// rule are fixed for the lifetime of the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    sizes: Vec<usize>,
    params: Parameters,
    pub cost: CostType,
    pub rule: UpdateRule,
}

impl Network {
    /// Builds a network with randomly initialized parameters:
    /// biases ~ N(0, 1), weights ~ N(0, 1) / sqrt(fan_in), velocities zero.
    pub fn new<R: Rng + ?Sized>(
        sizes: &[usize],
        cost: CostType,
        rule: UpdateRule,
        rng: &mut R,
    ) -> Result<Network> {
        check_sizes(sizes)?;

        let biases = sizes[1..].iter()
            .map(|&y| Matrix::random_normal(y, 1, 1.0, rng))
            .collect();
        let weights: Vec<Matrix> = sizes.windows(2)
            .map(|w| Matrix::random_normal(w[1], w[0], 1.0 / (w[0] as f64).sqrt(), rng))
            .collect();
        let velocities = weights.iter().map(|w| Matrix::zeros(w.rows, w.cols)).collect();

        Ok(Network {
            sizes: sizes.to_vec(),
            params: Parameters { weights, biases, velocities },
            cost,
            rule,
        })
    }

    /// Same as `new`, drawing from a `StdRng` seeded with `seed`.
    pub fn with_seed(sizes: &[usize], cost: CostType, rule: UpdateRule, seed: u64) -> Result<Network> {
        let mut rng = StdRng::seed_from_u64(seed);
        Network::new(sizes, cost, rule, &mut rng)
    }

    /// Wraps existing parameters after checking every shape against `sizes`.
    pub fn from_parameters(
        sizes: &[usize],
        params: Parameters,
        cost: CostType,
        rule: UpdateRule,
    ) -> Result<Network> {
        check_sizes(sizes)?;
        check_parameters(sizes, &params)?;
        Ok(Network { sizes: sizes.to_vec(), params, cost, rule })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.params.weights
    }

    pub fn biases(&self) -> &[Matrix] {
        &self.params.biases
    }

    pub fn velocities(&self) -> &[Matrix] {
        &self.params.velocities
    }

    /// Applies `σ(W·a + b)` layer by layer.
    ///
    /// `input` is `sizes[0] × m`: a single column or a batch of columns.
    pub fn feedforward(&self, input: &Matrix) -> Result<Matrix> {
        self.check_input(input)?;
        let mut a = input.clone();
        for (w, b) in self.params.weights.iter().zip(&self.params.biases) {
            a = sigmoid_matrix(&w.matmul(&a).add_column(b));
        }
        Ok(a)
    }

    /// Output activations for a single input vector.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(self.feedforward(&Matrix::column(input))?.column_values(0))
    }

    /// Returns the cost gradients for a batch `x` (`sizes[0] × m`) with
    /// targets `y` (`sizes[-1] × m`).
    ///
    /// Gradients are batch means: `∇b = mean_cols(δ)` and
    /// `∇W = δ·aᵀ / m`.
    pub fn backprop(&self, x: &Matrix, y: &Matrix) -> Result<Gradients> {
        self.check_input(x)?;
        if y.rows != self.output_size() || y.cols != x.cols {
            return Err(Error::InvalidShape(format!(
                "targets are {}×{}, expected {}×{}",
                y.rows, y.cols, self.output_size(), x.cols
            )));
        }
        let m = x.cols as f64;
        let layers = self.params.weights.len();

        // Forward pass, keeping every pre-activation and activation.
        let mut activations = Vec::with_capacity(layers + 1);
        let mut zs = Vec::with_capacity(layers);
        activations.push(x.clone());
        for (w, b) in self.params.weights.iter().zip(&self.params.biases) {
            let z = w.matmul(&activations[activations.len() - 1]).add_column(b);
            activations.push(sigmoid_matrix(&z));
            zs.push(z);
        }

        // Backward pass.
        let mut nabla_w = vec![Matrix::default(); layers];
        let mut nabla_b = vec![Matrix::default(); layers];

        let mut delta = self.cost.delta(&zs[layers - 1], &activations[layers], y);
        for l in (0..layers).rev() {
            if l + 1 < layers {
                delta = self.params.weights[l + 1].transpose().matmul(&delta)
                    .hadamard(&sigmoid_prime_matrix(&zs[l]));
            }
            nabla_b[l] = delta.row_means();
            nabla_w[l] = delta.matmul(&activations[l].transpose()).scale(1.0 / m);
        }

        Ok(Gradients { weights: nabla_w, biases: nabla_b })
    }

    /// One gradient step on a whole mini-batch.
    ///
    /// Nothing is modified unless the batch is well formed; the parameter
    /// bundle is then handed to the update rule and replaced in one move.
    pub fn update_mini_batch(&mut self, batch: &[&Sample], step: &UpdateStep) -> Result<()> {
        let batch = MiniBatch::from_samples(batch, self.input_size(), self.output_size())?;
        let gradients = self.backprop(&batch.inputs, &batch.targets)?;
        self.apply_gradients(&gradients, step)
    }

    /// Hands the parameters and `gradients` to the update rule and stores
    /// the returned bundle.
    ///
    /// `gradients` must hold one weight and one bias gradient per layer,
    /// each shaped like the parameter it updates; otherwise `InvalidShape`
    /// is returned and the parameters are left as they were.
    pub fn apply_gradients(&mut self, gradients: &Gradients, step: &UpdateStep) -> Result<()> {
        check_gradients(&self.params, gradients)?;
        let params = std::mem::take(&mut self.params);
        self.params = self.rule.update(params, gradients, step);
        Ok(())
    }

    /// Number of samples whose highest output activation lands on the
    /// labelled class. An empty set scores 0.
    ///
    /// A class index or target vector that does not fit the output layer is
    /// an `InvalidShape` error, as it is for training.
    pub fn evaluate(&self, test_data: &[Sample]) -> Result<usize> {
        let mut correct = 0;
        for sample in test_data {
            let output = self.feedforward(&Matrix::column(&sample.input))?;
            if sample.label.matches(output.argmax_column(0), self.output_size())? {
                correct += 1;
            }
        }
        Ok(correct)
    }

    /// Mean per-sample cost over `data`, plus the update rule's
    /// regularization penalty with `n = data.len()`.
    pub fn total_cost(&self, data: &[Sample], lambda: f64) -> Result<f64> {
        if data.is_empty() {
            return Ok(0.0);
        }
        let n = data.len();
        let mut cost = 0.0;
        for sample in data {
            let a = self.feedforward(&Matrix::column(&sample.input))?;
            let y = Matrix::column(&sample.label.to_target(self.output_size())?);
            cost += self.cost.cost(&a, &y) / n as f64;
        }
        Ok(cost + self.rule.penalty(&self.params.weights, lambda, n))
    }

    /// Serializes the network (architecture, parameters, cost and rule) to a
    /// pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network written by `save_json`, rejecting files whose
    /// parameter shapes disagree with their layer sizes.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader)?;
        check_sizes(&network.sizes)?;
        check_parameters(&network.sizes, &network.params)?;
        Ok(network)
    }

    fn check_input(&self, input: &Matrix) -> Result<()> {
        if input.rows != self.input_size() || input.cols == 0 {
            return Err(Error::InvalidShape(format!(
                "input is {}×{}, input layer expects {} rows and at least one column",
                input.rows, input.cols, self.input_size()
            )));
        }
        Ok(())
    }
}

fn check_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(Error::InvalidConfig(
            "sizes must include input and output layers".to_owned(),
        ));
    }
    if sizes.contains(&0) {
        return Err(Error::InvalidConfig("all layer sizes must be > 0".to_owned()));
    }
    Ok(())
}

fn check_parameters(sizes: &[usize], params: &Parameters) -> Result<()> {
    let layers = sizes.len() - 1;
    if params.weights.len() != layers
        || params.biases.len() != layers
        || params.velocities.len() != layers
    {
        return Err(Error::InvalidShape(format!(
            "expected {layers} weight, bias and velocity matrices"
        )));
    }
    for (l, w) in sizes.windows(2).enumerate() {
        let (n_in, n_out) = (w[0], w[1]);
        if params.weights[l].shape() != (n_out, n_in)
            || params.velocities[l].shape() != (n_out, n_in)
            || params.biases[l].shape() != (n_out, 1)
        {
            return Err(Error::InvalidShape(format!(
                "layer {l} parameters do not match a {n_in} → {n_out} transition"
            )));
        }
        if !(params.weights[l].is_well_formed()
            && params.velocities[l].is_well_formed()
            && params.biases[l].is_well_formed())
        {
            return Err(Error::InvalidShape(format!(
                "layer {l} parameter data disagrees with its declared rows and cols"
            )));
        }
    }
    Ok(())
}

fn check_gradients(params: &Parameters, gradients: &Gradients) -> Result<()> {
    let layers = params.weights.len();
    if gradients.weights.len() != layers || gradients.biases.len() != layers {
        return Err(Error::InvalidShape(format!(
            "expected {layers} weight and bias gradients, got {} and {}",
            gradients.weights.len(),
            gradients.biases.len()
        )));
    }
    let pairs = params.weights.iter().zip(&gradients.weights)
        .chain(params.biases.iter().zip(&gradients.biases));
    for (param, grad) in pairs {
        if param.shape() != grad.shape() || !grad.is_well_formed() {
            return Err(Error::InvalidShape(format!(
                "gradient is {:?}, parameter is {:?}",
                grad.shape(), param.shape()
            )));
        }
    }
    Ok(())
}
