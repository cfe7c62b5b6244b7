//! Prior transforms for nested sampling of basis-function models.
//!
//! A nested sampler explores the unit hypercube `[0,1]^D` and asks this
//! crate, once per proposed point, to map hypercube coordinates to the
//! physical parameters of a basis-function model via the inverse CDF of
//! each parameter's prior. This crate hosts:
//! - primitive inverse-CDF maps (uniform, Gaussian, exponential)
//! - the forced-identifiability ordering transform that canonicalizes
//!   exchangeable component amplitudes
//! - the adaptive (trans-dimensional) transform that encodes an inferred
//!   component count in a fixed-length vector
//! - block composition and the two-family selector
//! - a declarative builder assembling the default prior per model family
//!
//! All transforms are immutable after construction and pure per call, so a
//! single prior can serve many parallel sampler workers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adaptive;
pub mod block;
pub mod builder;
pub mod family;
pub mod ordering;
pub mod primitive;
pub mod prior;

pub use adaptive::{adaptive_split, AdaptiveSplit};
pub use block::{BlockPrior, TransformBlock};
pub use builder::default_prior;
pub use family::FamilySelector;
pub use ordering::forced_identifiability;
pub use primitive::{Exponential, Gaussian, Primitive, Uniform};
pub use prior::Prior;
