use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::math::matrix::argmax;

/// The desired output for one sample.
///
/// Serialized untagged: a bare integer is a class index, an array is a
/// target vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// Class index; expands to a one-hot vector for training.
    Class(usize),
    /// Target activations used as-is.
    Target(Vec<f64>),
}

impl Label {
    /// Target vector of length `width` used by the cost.
    pub fn to_target(&self, width: usize) -> Result<Vec<f64>> {
        match self {
            Label::Class(c) if *c < width => {
                let mut v = vec![0.0; width];
                v[*c] = 1.0;
                Ok(v)
            }
            Label::Class(c) => Err(Error::InvalidShape(format!(
                "class {c} does not fit an output layer of width {width}"
            ))),
            Label::Target(v) if v.len() == width => Ok(v.clone()),
            Label::Target(v) => Err(Error::InvalidShape(format!(
                "target has {} values, output layer has {width}", v.len()
            ))),
        }
    }

    /// Whether `predicted` (an output-layer index) matches this label.
    ///
    /// Labels are held to the same `width` as in `to_target`, so a label
    /// that cannot be trained on cannot be scored either.
    pub fn matches(&self, predicted: usize, width: usize) -> Result<bool> {
        match self {
            Label::Class(c) if *c < width => Ok(*c == predicted),
            Label::Target(v) if v.len() == width => Ok(argmax(v) == predicted),
            _ => self.to_target(width).map(|_| false),
        }
    }
}

/// One labelled training or test example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub label: Label,
}

impl Sample {
    pub fn with_class(input: Vec<f64>, class: usize) -> Sample {
        Sample { input, label: Label::Class(class) }
    }

    pub fn with_target(input: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample { input, label: Label::Target(target) }
    }
}

/// Reads a JSON array of samples.
pub fn load_samples_json(path: &str) -> Result<Vec<Sample>> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let samples: Vec<Sample> = serde_json::from_reader(reader)?;
    if samples.is_empty() {
        return Err(Error::InvalidData(format!("{path} contains no samples")));
    }
    Ok(samples)
}
