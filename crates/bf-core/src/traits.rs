//! Core traits for BasisFit
//!
//! This module defines the trait-based architecture that enables
//! dependency inversion: the external nested sampler and the external
//! likelihood evaluator depend on these seams, not on concrete prior
//! implementations.

use crate::Result;

/// Unit-hypercube to physical-space prior transform.
///
/// This is the boundary contract consumed by the external nested-sampling
/// sampler: a deterministic map from a point in `[0,1]^D` to the physical
/// parameter vector of the same length. Implementations hold only
/// immutable configuration, so one instance may be invoked concurrently
/// from many sampler workers without locks.
pub trait PriorTransform: Send + Sync {
    /// Map hypercube coordinates to physical parameter values.
    ///
    /// The output has the same length as `cube`. The input is never
    /// mutated or retained. A NaN in the leading coordinate of an
    /// adaptive block is the one tolerated sentinel and yields an
    /// all-NaN output of matching length; any other malformed input is
    /// an error.
    fn transform(&self, cube: &[f64]) -> Result<Vec<f64>>;
}

/// Static description of a fitted model, as seen by the external
/// likelihood evaluator.
pub trait Model: Send + Sync {
    /// Total number of physical parameters (the transform's dimensionality).
    fn n_parameters(&self) -> usize;

    /// Parameter names, in the argument order the likelihood evaluator
    /// expects.
    fn parameter_names(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IdentityPrior;

    impl PriorTransform for IdentityPrior {
        fn transform(&self, cube: &[f64]) -> Result<Vec<f64>> {
            Ok(cube.to_vec())
        }
    }

    #[test]
    fn test_identity_prior() {
        let prior = IdentityPrior;
        let theta = prior.transform(&[0.25, 0.75]).unwrap();
        assert_eq!(theta, vec![0.25, 0.75]);
    }

    #[test]
    fn test_trait_object_is_shareable() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PriorTransform>();
        assert_send_sync::<dyn Model>();
    }
}
