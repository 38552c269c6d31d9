use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Layer sizes of a network, input layer first and output layer last.
///
/// A validated blueprint always has at least two entries and no zero sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct NetBlueprint {
    sizes: Vec<usize>,
}

impl NetBlueprint {
    pub fn new(sizes: Vec<usize>) -> Result<NetBlueprint> {
        if sizes.is_empty() {
            return Err(Error::EmptyBlueprint);
        }
        if sizes.len() < 2 {
            return Err(Error::TooFewLayers(sizes.len()));
        }
        if let Some(index) = sizes.iter().position(|&s| s == 0) {
            return Err(Error::ZeroLayerSize { index });
        }
        Ok(NetBlueprint { sizes })
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Layer count L, including input and output layers.
    pub fn layers(&self) -> usize {
        self.sizes.len()
    }

    /// Number of weight/bias transitions, L − 1.
    pub fn transitions(&self) -> usize {
        self.sizes.len() - 1
    }

    pub fn input_size(&self) -> usize {
        self.sizes[0]
    }

    pub fn output_size(&self) -> usize {
        self.sizes[self.sizes.len() - 1]
    }

    /// `(fan_in, fan_out)` for each transition.
    pub fn transition_shapes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sizes.windows(2).map(|w| (w[0], w[1]))
    }
}

impl TryFrom<Vec<usize>> for NetBlueprint {
    type Error = Error;

    fn try_from(sizes: Vec<usize>) -> Result<Self> {
        NetBlueprint::new(sizes)
    }
}

impl From<NetBlueprint> for Vec<usize> {
    fn from(blueprint: NetBlueprint) -> Self {
        blueprint.sizes
    }
}
