//! The closed set of prior transforms.
//!
//! `Prior` is a tagged enum rather than a trait object so the whole
//! transform tree is statically known: every variant owns immutable
//! configuration and dispatch is a plain `match`. The enum implements
//! [`PriorTransform`], which is what the external sampler holds.

use bf_core::{PriorTransform, Result};

use crate::adaptive::adaptive_split;
use crate::block::BlockPrior;
use crate::family::FamilySelector;
use crate::ordering::forced_identifiability;
use crate::primitive::Primitive;

/// A unit-hypercube prior transform.
#[derive(Debug, Clone)]
pub enum Prior {
    /// Elementwise primitive inverse CDF.
    Primitive(Primitive),
    /// Forced-identifiability ordering followed by an elementwise
    /// primitive (e.g. SortedExponential for component amplitudes).
    Sorted {
        /// Primitive applied after the ordering step.
        primitive: Primitive,
    },
    /// Adaptive block: leading count coordinate, sorted active slots,
    /// primitive-transformed inactive slots.
    AdaptiveSorted {
        /// Primitive applied to every slot after the count coordinate.
        primitive: Primitive,
        /// Minimum active component count.
        nfunc_min: usize,
    },
    /// Ordered composition of sized sub-transforms.
    Block(BlockPrior),
    /// Two-family hierarchical selector.
    AdaptiveFamily(Box<FamilySelector>),
}

impl Prior {
    /// Map hypercube coordinates to physical parameters.
    ///
    /// Pure: the input is never mutated and no state survives the call.
    pub fn transform(&self, cube: &[f64]) -> Result<Vec<f64>> {
        match self {
            Prior::Primitive(primitive) => Ok(primitive.transform(cube)),
            Prior::Sorted { primitive } => {
                Ok(primitive.transform(&forced_identifiability(cube)))
            }
            Prior::AdaptiveSorted { primitive, nfunc_min } => {
                match adaptive_split(cube, *nfunc_min)? {
                    // NaN sentinel: undefined point, NaN-fill the whole block.
                    None => Ok(vec![f64::NAN; cube.len()]),
                    Some(split) => {
                        let slots = &cube[1..];
                        let mut theta = Vec::with_capacity(cube.len());
                        theta.push(split.leading);
                        // Active slots are canonicalized before the inverse
                        // CDF; inactive slots still get a defined value from
                        // their raw coordinate.
                        for &u in &forced_identifiability(&slots[..split.nfunc]) {
                            theta.push(primitive.transform_one(u));
                        }
                        for &u in &slots[split.nfunc..] {
                            theta.push(primitive.transform_one(u));
                        }
                        Ok(theta)
                    }
                }
            }
            Prior::Block(block) => block.transform(cube),
            Prior::AdaptiveFamily(selector) => selector.transform(cube),
        }
    }
}

impl PriorTransform for Prior {
    fn transform(&self, cube: &[f64]) -> Result<Vec<f64>> {
        Prior::transform(self, cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{Exponential, Uniform};
    use approx::assert_relative_eq;

    fn unit_uniform() -> Primitive {
        Primitive::Uniform(Uniform::new(0.0, 1.0).unwrap())
    }

    #[test]
    fn test_sorted_uniform_orders_output() {
        let prior = Prior::Sorted { primitive: unit_uniform() };
        let theta = prior.transform(&[0.25, 0.5, 1.0]).unwrap();
        assert_relative_eq!(theta[0], 0.25 * 0.5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(theta[1], 0.5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(theta[2], 1.0);
    }

    #[test]
    fn test_adaptive_sorted_layout() {
        let prior = Prior::AdaptiveSorted {
            primitive: unit_uniform(),
            nfunc_min: 1,
        };
        // u0 = 0.6 with nfunc_max = 3: leading = 0.5 + 3*0.6 = 2.3, T = 2.
        let theta = prior.transform(&[0.6, 0.25, 1.0, 0.49]).unwrap();
        assert_eq!(theta.len(), 4);
        assert_relative_eq!(theta[0], 2.3, epsilon = 1e-12);
        // active slots: forced_identifiability([0.25, 1.0]) = [0.25, 1.0]
        assert_relative_eq!(theta[1], 0.25, epsilon = 1e-12);
        assert_relative_eq!(theta[2], 1.0);
        // inactive slot keeps its raw coordinate under the unit uniform
        assert_relative_eq!(theta[3], 0.49);
    }

    #[test]
    fn test_adaptive_sorted_nan_sentinel() {
        let prior = Prior::AdaptiveSorted {
            primitive: Primitive::Exponential(Exponential::new(2.0).unwrap()),
            nfunc_min: 1,
        };
        let theta = prior.transform(&[f64::NAN, 0.5, 0.5]).unwrap();
        assert_eq!(theta.len(), 3);
        assert!(theta.iter().all(|t| t.is_nan()), "{:?}", theta);
    }

    #[test]
    fn test_dimension_preserved_all_variants() {
        let cube = [0.3, 0.6, 0.2, 0.9];
        let variants = [
            Prior::Primitive(unit_uniform()),
            Prior::Sorted { primitive: unit_uniform() },
            Prior::AdaptiveSorted { primitive: unit_uniform(), nfunc_min: 1 },
        ];
        for prior in &variants {
            assert_eq!(prior.transform(&cube).unwrap().len(), cube.len());
        }
    }

    #[test]
    fn test_deterministic() {
        let prior = Prior::AdaptiveSorted {
            primitive: Primitive::Exponential(Exponential::new(0.5).unwrap()),
            nfunc_min: 1,
        };
        let cube = [0.7, 0.1, 0.9, 0.4];
        assert_eq!(prior.transform(&cube).unwrap(), prior.transform(&cube).unwrap());
    }
}
