//! Two-family hierarchical selector.
//!
//! One hypercube coordinate chooses between two alternative model
//! families; the rest of the vector is transformed so that every
//! coordinate always has a defined value, whichever family is selected.
//! Family A's transform is always evaluated as the baseline, so crossing
//! the selector boundary only changes the family-specific middle range,
//! which keeps the map total across the whole hypercube (the sampler's
//! proposal machinery assumes this).

use bf_core::{Error, Result};

use crate::block::BlockPrior;
use crate::primitive::Uniform;

/// Threshold of the selector coordinate: `s >= 1.5` selects family B.
const FAMILY_B_THRESHOLD: f64 = 1.5;

/// Hierarchical prior choosing between two model families.
#[derive(Debug, Clone)]
pub struct FamilySelector {
    selector: Uniform,
    family_a: BlockPrior,
    family_b: BlockPrior,
    nfunc: usize,
}

impl FamilySelector {
    /// Combine two family priors sharing `nfunc` trailing slots.
    ///
    /// Family B's transform covers the shared coordinate range minus the
    /// trailing `nfunc` family-invariant slots, so its dimensionality
    /// must be exactly `nfunc` short of family A's.
    pub fn new(family_a: BlockPrior, family_b: BlockPrior, nfunc: usize) -> Result<Self> {
        if family_b.total_dim() + nfunc != family_a.total_dim() {
            return Err(Error::Validation(format!(
                "family B dim {} + {} shared slots != family A dim {}",
                family_b.total_dim(),
                nfunc,
                family_a.total_dim()
            )));
        }
        Ok(Self {
            selector: Uniform::new(0.5, 2.5)?,
            family_a,
            family_b,
            nfunc,
        })
    }

    /// Total dimensionality: selector coordinate plus family A's block.
    pub fn total_dim(&self) -> usize {
        1 + self.family_a.total_dim()
    }

    /// Map hypercube coordinates to physical parameters.
    ///
    /// `theta[0]` is the selector value in `[0.5, 2.5]`. Family A fills
    /// `theta[1..]` unconditionally; if the selector lands in family B's
    /// half, the family-specific range `theta[1..D-nfunc]` is overwritten
    /// with family B's transform of the same coordinates. The trailing
    /// `nfunc` slots always retain family A's values.
    pub fn transform(&self, cube: &[f64]) -> Result<Vec<f64>> {
        if cube.len() != self.total_dim() {
            return Err(Error::Domain(format!(
                "family selector expects {} coordinates, got {}",
                self.total_dim(),
                cube.len()
            )));
        }
        let mut theta = Vec::with_capacity(cube.len());
        theta.push(self.selector.transform_one(cube[0]));
        theta.extend(self.family_a.transform(&cube[1..])?);
        if theta[0] >= FAMILY_B_THRESHOLD {
            let end = cube.len() - self.nfunc;
            let alt = self.family_b.transform(&cube[1..end])?;
            theta[1..end].copy_from_slice(&alt);
        }
        Ok(theta)
    }
}
