//! # bf-core
//!
//! Core building blocks for BasisFit.
//!
//! This crate provides:
//! - Error taxonomy shared across the workspace
//! - The `PriorTransform` trait (the sampler-facing seam) and the
//!   `Model` trait (the likelihood-evaluator-facing seam)
//! - Serde-backed model configuration types
//!
//! ## Architecture
//!
//! Higher-level crates (bf-prior) depend on the traits defined here, NOT
//! the other way round: the external nested sampler only needs to hold a
//! `&dyn PriorTransform` and never sees concrete prior types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Model, PriorTransform};
pub use types::{nn_num_params, BasisFamily, ComponentCount, ModelConfig};
