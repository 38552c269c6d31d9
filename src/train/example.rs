use serde::{Deserialize, Serialize};

/// One `(input, target)` pair, already converted to floating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> TrainingExample {
        TrainingExample { input, target }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for TrainingExample {
    fn from((input, target): (Vec<f64>, Vec<f64>)) -> Self {
        TrainingExample { input, target }
    }
}
