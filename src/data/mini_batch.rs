use crate::data::sample::Sample;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Inputs and targets of a mini-batch, one sample per column.
#[derive(Debug, Clone, PartialEq)]
pub struct MiniBatch {
    pub inputs: Matrix,
    pub targets: Matrix,
}

impl MiniBatch {
    /// Stacks `samples` column-wise, checking every input against
    /// `input_width` and every label against `output_width`.
    pub fn from_samples(samples: &[&Sample], input_width: usize, output_width: usize) -> Result<MiniBatch> {
        if samples.is_empty() {
            return Err(Error::InvalidData("mini-batch is empty".to_owned()));
        }
        if let Some(bad) = samples.iter().find(|s| s.input.len() != input_width) {
            return Err(Error::InvalidShape(format!(
                "input has {} values, input layer has {input_width}",
                bad.input.len()
            )));
        }
        let targets = samples.iter()
            .map(|s| s.label.to_target(output_width))
            .collect::<Result<Vec<_>>>()?;

        let input_cols: Vec<&[f64]> = samples.iter().map(|s| s.input.as_slice()).collect();
        let target_cols: Vec<&[f64]> = targets.iter().map(|t| t.as_slice()).collect();

        Ok(MiniBatch {
            inputs: Matrix::column_stack(&input_cols),
            targets: Matrix::column_stack(&target_cols),
        })
    }

    pub fn len(&self) -> usize {
        self.inputs.cols
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.cols == 0
    }
}
