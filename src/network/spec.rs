use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::blueprint::NetBlueprint;
use crate::train::train_config::TrainConfig;

/// A serializable description of a training run: the network topology plus
/// its training hyperparameters.
///
/// Only the architecture and configuration are stored, never trained
/// weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name of the run.
    pub name: String,
    /// Layer sizes, input first.
    pub blueprint: NetBlueprint,
    pub training: TrainConfig,
}

impl NetworkSpec {
    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
