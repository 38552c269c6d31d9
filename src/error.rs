use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A blueprint with no layers at all.
    #[error("attempt to create an empty network")]
    EmptyBlueprint,

    /// A blueprint needs an input and an output layer.
    #[error("a network needs at least 2 layers, got {0}")]
    TooFewLayers(usize),

    #[error("layer {index} has size 0")]
    ZeroLayerSize { index: usize },

    #[error("epoch count must be at least 1")]
    InvalidEpochs,

    #[error("mini-batch size {size} is invalid for a training set of {len} examples")]
    InvalidMiniBatchSize { size: usize, len: usize },

    #[error("learning rate must be a positive finite number, got {0}")]
    InvalidLearningRate(f64),

    #[error("training set is empty")]
    EmptyTrainingSet,

    /// `Network::update_mini_batch` was handed no examples.
    #[error("mini-batch is empty")]
    EmptyBatch,

    /// An example's input or target length disagrees with the blueprint.
    #[error("{what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Explicit parameters handed to `Network::from_parameters` do not fit the blueprint.
    #[error("parameter shape mismatch: {0}")]
    ParameterShape(String),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors raised by configuration checks before any training work.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyBlueprint
                | Error::TooFewLayers(_)
                | Error::ZeroLayerSize { .. }
                | Error::InvalidEpochs
                | Error::InvalidMiniBatchSize { .. }
                | Error::InvalidLearningRate(_)
                | Error::EmptyTrainingSet
        )
    }
}
