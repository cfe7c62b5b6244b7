//! Ordered composition of sized sub-transforms.
//!
//! A model's parameter vector is laid out as contiguous blocks, one per
//! basis-function parameter (all component amplitudes, then all centres,
//! ...). Each block's transform sees only its own sub-slice and has no
//! knowledge of its global offset.

use bf_core::{Error, Result};

use crate::prior::Prior;

/// One block: a prior and the number of hypercube coordinates it consumes.
///
/// Adaptive blocks' declared size already includes the +1 leading count
/// coordinate; that accounting is the configuration's responsibility.
#[derive(Debug, Clone)]
pub struct TransformBlock {
    /// Transform applied to this block's sub-slice.
    pub prior: Prior,
    /// Number of hypercube coordinates consumed.
    pub size: usize,
}

/// Prior applying an ordered sequence of blocks to contiguous,
/// non-overlapping sub-slices of the hypercube vector.
#[derive(Debug, Clone)]
pub struct BlockPrior {
    blocks: Vec<TransformBlock>,
    total: usize,
}

impl BlockPrior {
    /// Pair priors with block sizes. Fails if the two lists have
    /// different lengths; the sum-of-sizes invariant is fixed here and
    /// never re-checked per call.
    pub fn new(priors: Vec<Prior>, sizes: Vec<usize>) -> Result<Self> {
        if priors.len() != sizes.len() {
            return Err(Error::Validation(format!(
                "got {} priors but {} block sizes ({:?})",
                priors.len(),
                sizes.len(),
                sizes
            )));
        }
        let total = sizes.iter().sum();
        let blocks = priors
            .into_iter()
            .zip(sizes)
            .map(|(prior, size)| TransformBlock { prior, size })
            .collect();
        Ok(Self { blocks, total })
    }

    /// Total dimensionality (sum of block sizes).
    pub fn total_dim(&self) -> usize {
        self.total
    }

    /// The blocks, in application order.
    pub fn blocks(&self) -> &[TransformBlock] {
        &self.blocks
    }

    /// Apply each block's prior to its sub-slice and concatenate in order.
    pub fn transform(&self, cube: &[f64]) -> Result<Vec<f64>> {
        if cube.len() != self.total {
            return Err(Error::Domain(format!(
                "block prior expects {} coordinates, got {}",
                self.total,
                cube.len()
            )));
        }
        let mut theta = Vec::with_capacity(self.total);
        let mut start = 0;
        for block in &self.blocks {
            let end = start + block.size;
            theta.extend(block.prior.transform(&cube[start..end])?);
            start = end;
        }
        Ok(theta)
    }
}
