use tracing::trace;

use crate::error::{Error, Result};
use crate::math::{MatrixOps, VectorOps};
use crate::network::network::Network;
use crate::train::backprop::Gradients;
use crate::train::example::TrainingExample;
use crate::train::train_config::check_learning_rate;

impl<M: MatrixOps> Network<M> {
    /// One mini-batch gradient-descent step.
    ///
    /// Gradients of every example are summed into a fresh accumulator, all
    /// computed from the same parameter snapshot, and only then applied:
    /// W ← W − (η/m)·∇W and b ← b − (η/m)·∇b for a batch of size `m`.
    /// If any example fails its shape check the parameters are left untouched.
    pub fn update_mini_batch(&mut self, batch: &[TrainingExample], rate: f64) -> Result<()> {
        if batch.is_empty() {
            return Err(Error::EmptyBatch);
        }
        check_learning_rate(rate)?;

        let mut acc = Gradients::zeros_like(self);
        for example in batch {
            acc.accumulate(&self.backprop(example)?);
        }

        let step = rate / batch.len() as f64;
        for (w, g) in self.weights.iter_mut().zip(&acc.weights) {
            w.scaled_sub_assign(step, g);
        }
        for (b, g) in self.biases.iter_mut().zip(&acc.biases) {
            b.scaled_sub_assign(step, g);
        }

        trace!(batch_size = batch.len(), step, "applied mini-batch update");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn net() -> Network {
        Network::with_rng(vec![2, 3, 1], &mut StdRng::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn update_moves_parameters_by_averaged_gradient() {
        let mut net = net();
        let before = net.clone();
        let batch = vec![
            TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
            TrainingExample::new(vec![1.0, 0.0], vec![0.0]),
        ];

        let mut expected = Gradients::zeros_like(&before);
        for example in &batch {
            expected.accumulate(&before.backprop(example).unwrap());
        }

        net.update_mini_batch(&batch, 0.5).unwrap();

        let step = 0.5 / 2.0;
        for i in 0..before.transitions() {
            for r in 0..before.weights[i].rows {
                for c in 0..before.weights[i].cols {
                    let want = before.weights[i].data[r][c] - step * expected.weights[i].data[r][c];
                    assert!((net.weights[i].data[r][c] - want).abs() < 1e-12);
                }
                let want = before.biases[i].data[r] - step * expected.biases[i].data[r];
                assert!((net.biases[i].data[r] - want).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn bad_example_leaves_parameters_untouched() {
        let mut net = net();
        let before = net.clone();
        let batch = vec![
            TrainingExample::new(vec![0.0, 1.0], vec![1.0]),
            TrainingExample::new(vec![0.0, 1.0, 2.0], vec![1.0]),
        ];
        assert!(matches!(
            net.update_mini_batch(&batch, 1.0),
            Err(Error::ShapeMismatch { .. })
        ));
        assert_eq!(net, before);
    }

    #[test]
    fn rejects_empty_batch_and_bad_rate() {
        let mut net = net();
        let err = net.update_mini_batch(&[], 1.0).unwrap_err();
        assert!(matches!(err, Error::EmptyBatch));
        assert!(!err.is_config_error());
        let batch = vec![TrainingExample::new(vec![0.0, 1.0], vec![1.0])];
        assert!(matches!(
            net.update_mini_batch(&batch, 0.0),
            Err(Error::InvalidLearningRate(_))
        ));
    }
}
