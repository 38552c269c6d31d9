pub mod backprop;
pub mod batch;
pub mod epoch_stats;
pub mod example;
pub mod loop_fn;
pub mod train_config;
pub mod update;

pub use backprop::Gradients;
pub use batch::{shuffle_into_batches, MiniBatches};
pub use epoch_stats::{EpochStats, TrainReport};
pub use example::TrainingExample;
pub use train_config::TrainConfig;
