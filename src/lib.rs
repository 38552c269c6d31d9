pub mod activation;
pub mod data;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::{Matrix, MatrixOps, Vector, VectorOps};
pub use network::{ForwardPass, NetBlueprint, Network, NetworkSpec};
pub use train::{EpochStats, Gradients, TrainConfig, TrainReport, TrainingExample};
