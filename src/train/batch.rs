use std::slice::ChunksExact;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::train::example::TrainingExample;

/// Consecutive mini-batches of exactly `size` examples over one epoch's
/// ordering of the training set.
///
/// When `set.len()` is not a multiple of `size` the trailing
/// `set.len() % size` examples are not part of any batch for this epoch.
pub struct MiniBatches<'a> {
    chunks: ChunksExact<'a, TrainingExample>,
}

impl<'a> MiniBatches<'a> {
    /// Fails with `InvalidMiniBatchSize` when `size` is 0.
    pub fn new(set: &'a [TrainingExample], size: usize) -> Result<MiniBatches<'a>> {
        if size == 0 {
            return Err(Error::InvalidMiniBatchSize { size, len: set.len() });
        }
        Ok(MiniBatches { chunks: set.chunks_exact(size) })
    }

    /// Examples left out of every batch.
    pub fn dropped(&self) -> &'a [TrainingExample] {
        self.chunks.remainder()
    }
}

impl<'a> Iterator for MiniBatches<'a> {
    type Item = &'a [TrainingExample];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for MiniBatches<'_> {}

/// Shuffles `set` in place with `rng`, then partitions it into mini-batches.
pub fn shuffle_into_batches<'a, R: Rng>(
    set: &'a mut [TrainingExample],
    size: usize,
    rng: &mut R,
) -> Result<MiniBatches<'a>> {
    if size == 0 {
        return Err(Error::InvalidMiniBatchSize { size, len: set.len() });
    }
    set.shuffle(rng);
    MiniBatches::new(set, size)
}
