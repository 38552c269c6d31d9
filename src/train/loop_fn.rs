use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::math::MatrixOps;
use crate::network::network::Network;
use crate::train::batch::shuffle_into_batches;
use crate::train::epoch_stats::{EpochStats, TrainReport};
use crate::train::example::TrainingExample;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

impl<M: MatrixOps> Network<M> {
    /// Trains the network with mini-batch SGD for `config.epochs` epochs.
    ///
    /// Each epoch shuffles `training_set` in place, splits it into
    /// consecutive mini-batches of exactly `config.mini_batch_size` examples
    /// and applies [`Network::update_mini_batch`] to each in turn. A tail
    /// shorter than a full batch is skipped for that epoch.
    ///
    /// A single shuffle generator is created before the first epoch and
    /// advanced across all of them.
    ///
    /// # Errors
    /// Configuration errors and examples whose lengths disagree with the
    /// blueprint are reported before any parameter is touched, wherever the
    /// shuffle would have placed them.
    pub fn train(
        &mut self,
        training_set: &mut [TrainingExample],
        config: &TrainConfig,
    ) -> Result<TrainReport> {
        config.validate(training_set.len())?;
        for example in training_set.iter() {
            self.check_example(example)?;
        }
        debug!(?config, examples = training_set.len(), "starting training");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let tail = training_set.len() % config.mini_batch_size;
        if tail != 0 {
            warn!(
                dropped = tail,
                mini_batch_size = config.mini_batch_size,
                "training set is not a multiple of the mini-batch size; \
                 the last examples of every epoch's ordering are skipped"
            );
        }

        let mut report = TrainReport::default();

        for epoch in 1..=config.epochs {
            let t_start = Instant::now();

            // ── One full pass over the shuffled training data ──────────────
            let batches = shuffle_into_batches(training_set, config.mini_batch_size, &mut rng)?;
            let dropped = batches.dropped().len();
            let mut updates = 0;
            for batch in batches {
                self.update_mini_batch(batch, config.learning_rate)?;
                updates += 1;
            }

            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                updates,
                dropped,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            info!(
                epoch,
                total = config.epochs,
                updates,
                elapsed_ms = stats.elapsed_ms,
                "epoch complete"
            );
            report.epochs.push(stats);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn tiny_set(n: usize) -> Vec<TrainingExample> {
        (0..n)
            .map(|i| TrainingExample::new(vec![i as f64 / n as f64], vec![(i % 2) as f64]))
            .collect()
    }

    #[test]
    fn config_errors_leave_network_untouched() {
        let mut net = Network::with_rng(vec![1, 2, 1], &mut StdRng::seed_from_u64(1)).unwrap();
        let before = net.clone();
        let mut set = tiny_set(4);
        let original = set.clone();

        let err = net.train(&mut set, &TrainConfig::new(1, 5, 1.0)).unwrap_err();
        assert!(err.is_config_error());
        assert_eq!(net, before);
        assert_eq!(set, original);

        assert!(matches!(
            net.train(&mut [], &TrainConfig::new(1, 1, 1.0)),
            Err(Error::EmptyTrainingSet)
        ));
    }

    #[test]
    fn malformed_example_fails_before_any_update_for_every_seed() {
        let start = Network::with_rng(vec![1, 2, 1], &mut StdRng::seed_from_u64(1)).unwrap();
        let mut set = tiny_set(4);
        // With a batch size of 2 the fifth example is the tail for some shuffles.
        set.push(TrainingExample::new(vec![0.5, 0.5], vec![1.0]));

        for seed in 0..10 {
            let mut net = start.clone();
            let mut shuffled = set.clone();
            let err = net
                .train(&mut shuffled, &TrainConfig::new(1, 2, 1.0).with_seed(seed))
                .unwrap_err();
            assert!(matches!(err, Error::ShapeMismatch { what: "input", .. }), "seed {}", seed);
            assert!(!err.is_config_error());
            assert_eq!(net, start, "seed {}", seed);
            assert_eq!(shuffled, set, "seed {}", seed);
        }
    }

    #[test]
    fn report_counts_updates_per_epoch() {
        let mut net = Network::with_rng(vec![1, 2, 1], &mut StdRng::seed_from_u64(1)).unwrap();
        let mut set = tiny_set(7);
        let report = net.train(&mut set, &TrainConfig::new(3, 3, 0.5).with_seed(9)).unwrap();
        assert_eq!(report.epochs.len(), 3);
        assert!(report.epochs.iter().all(|e| e.updates == 2 && e.dropped == 1));
        assert_eq!(report.total_updates(), 6);
        assert_eq!(report.epochs[2].epoch, 3);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let start = Network::with_rng(vec![1, 3, 1], &mut StdRng::seed_from_u64(2)).unwrap();
        let config = TrainConfig::new(5, 2, 1.0).with_seed(42);

        let mut a = start.clone();
        let mut set_a = tiny_set(6);
        a.train(&mut set_a, &config).unwrap();

        let mut b = start.clone();
        let mut set_b = tiny_set(6);
        b.train(&mut set_b, &config).unwrap();

        assert_eq!(a, b);
        assert_eq!(set_a, set_b);
        assert_ne!(a, start);
    }
}
