use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hyperparameters for a `Network::train` run.
///
/// # Fields
/// - `epochs`          — total number of full passes over the training data
/// - `mini_batch_size` — examples per mini-batch; use `1` for online SGD
/// - `learning_rate`   — step size η, scaled by `1 / mini_batch_size` per update
/// - `seed`            — seeds the shuffle generator; `None` draws from entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with an entropy-seeded shuffle.
    pub fn new(epochs: usize, mini_batch_size: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            mini_batch_size,
            learning_rate,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the configuration against a training set of `training_len`
    /// examples. Runs before any training work is done.
    pub fn validate(&self, training_len: usize) -> Result<()> {
        if training_len == 0 {
            return Err(Error::EmptyTrainingSet);
        }
        if self.epochs == 0 {
            return Err(Error::InvalidEpochs);
        }
        if self.mini_batch_size == 0 || self.mini_batch_size > training_len {
            return Err(Error::InvalidMiniBatchSize {
                size: self.mini_batch_size,
                len: training_len,
            });
        }
        check_learning_rate(self.learning_rate)
    }
}

pub(crate) fn check_learning_rate(rate: f64) -> Result<()> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(Error::InvalidLearningRate(rate));
    }
    Ok(())
}
