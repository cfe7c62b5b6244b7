//! Model configuration types for BasisFit
//!
//! A `ModelConfig` is the static description of one fitted model: which
//! basis-function family, how many components (or which network layers),
//! and whether the component count is itself inferred (adaptive). It is
//! fixed before a sampling run starts and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::traits::Model;
use crate::{Error, Result};

/// Supported basis-function / model families.
///
/// Identifiers match the argument-name contract of the external
/// likelihood evaluators, so serde names are the evaluator names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasisFamily {
    /// 1d generalised Gaussian: params `a, mu, sigma, beta` per component.
    #[serde(rename = "gg_1d")]
    Gg1d,
    /// 2d generalised Gaussian: per-axis `mu/sigma/beta` plus rotation `omega`.
    #[serde(rename = "gg_2d")]
    Gg2d,
    /// 1d tanh basis: params `a, w_0, w_1` per component.
    #[serde(rename = "ta_1d")]
    Ta1d,
    /// 2d tanh basis: params `a, w_0, w_1, w_2` per component.
    #[serde(rename = "ta_2d")]
    Ta2d,
    /// Adaptive family choice between `gg_1d` and `ta_1d`.
    #[serde(rename = "adfam_gg_ta_1d")]
    AdFamGgTa1d,
    /// Feed-forward neural network (single parameter block of weights).
    #[serde(rename = "nn")]
    Nn,
}

impl BasisFamily {
    /// Per-component parameter names, in the argument order the external
    /// likelihood evaluator expects.
    ///
    /// For `AdFamGgTa1d` these are family A's (`gg_1d`) names; family B
    /// (`ta_1d`) reuses the leading subset of slots. For `Nn` the single
    /// weight vector has no per-component naming.
    pub fn basis_param_names(self) -> &'static [&'static str] {
        match self {
            BasisFamily::Gg1d | BasisFamily::AdFamGgTa1d => &["a", "mu", "sigma", "beta"],
            BasisFamily::Gg2d => {
                &["a", "mu1", "mu2", "sigma1", "sigma2", "beta1", "beta2", "omega"]
            }
            BasisFamily::Ta1d => &["a", "w_0", "w_1"],
            BasisFamily::Ta2d => &["a", "w_0", "w_1", "w_2"],
            BasisFamily::Nn => &[],
        }
    }
}

/// Component count: a fixed number of basis functions, or the layer
/// widths of a neural network (first entry is the input dimension).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentCount {
    /// Fixed number of basis-function components.
    Fixed(usize),
    /// Network layer widths, `[input_dim, hidden_1, ..., hidden_k]`.
    Layers(Vec<usize>),
}

/// Number of weights of a dense feed-forward network with layer widths
/// `layers = [l0, l1, ..., lk]` (`l0` is the input dimension): each layer
/// carries `l_i * (l_{i-1} + 1)` weights-plus-biases, and the scalar
/// output adds `l_k + 1` more.
pub fn nn_num_params(layers: &[usize]) -> usize {
    let dense: usize = layers.windows(2).map(|w| w[1] * (w[0] + 1)).sum();
    dense + layers.last().map_or(0, |&l| l + 1)
}

fn default_nfunc_min() -> usize {
    1
}

/// Static configuration of one model, fixed for a whole sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Basis-function family.
    pub family: BasisFamily,

    /// Component count (fixed number or network layers).
    pub nfunc: ComponentCount,

    /// Minimum number of active components for adaptive models.
    #[serde(default = "default_nfunc_min")]
    pub nfunc_min: usize,

    /// Whether the active component count is itself inferred.
    #[serde(default)]
    pub adaptive: bool,
}

impl ModelConfig {
    /// Create and validate a model configuration.
    pub fn new(
        family: BasisFamily,
        nfunc: ComponentCount,
        nfunc_min: usize,
        adaptive: bool,
    ) -> Result<Self> {
        let config = Self { family, nfunc, nfunc_min, adaptive };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the family / count / adaptivity combination.
    pub fn validate(&self) -> Result<()> {
        if self.nfunc_min == 0 {
            return Err(Error::Validation("nfunc_min must be >= 1".into()));
        }
        match (&self.family, &self.nfunc) {
            (BasisFamily::Nn, ComponentCount::Layers(layers)) => {
                if layers.len() < 2 {
                    return Err(Error::Validation(format!(
                        "nn needs at least [input_dim, hidden] layers, got {:?}",
                        layers
                    )));
                }
                if layers.iter().any(|&l| l == 0) {
                    return Err(Error::Validation(format!(
                        "nn layer widths must be >= 1, got {:?}",
                        layers
                    )));
                }
                let hidden = &layers[1..];
                if self.adaptive && hidden.iter().any(|&l| l != hidden[0]) {
                    return Err(Error::Validation(format!(
                        "adaptive nn needs equal hidden-layer widths, got {:?}",
                        layers
                    )));
                }
                Ok(())
            }
            (BasisFamily::Nn, ComponentCount::Fixed(_)) => Err(Error::Validation(
                "nn takes a layer list, not a fixed component count".into(),
            )),
            (_, ComponentCount::Layers(_)) => Err(Error::Validation(format!(
                "{:?} takes a fixed component count, not a layer list",
                self.family
            ))),
            (family, ComponentCount::Fixed(n)) => {
                if *n == 0 {
                    return Err(Error::Validation("component count must be >= 1".into()));
                }
                if self.adaptive && self.nfunc_min > *n {
                    return Err(Error::Validation(format!(
                        "nfunc_min={} exceeds component count {}",
                        self.nfunc_min, n
                    )));
                }
                if *family == BasisFamily::AdFamGgTa1d && !self.adaptive {
                    return Err(Error::Validation(
                        "adfam_gg_ta_1d is only defined with adaptive=true".into(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Fixed component count, or a validation error for layer-based configs.
    pub fn fixed_nfunc(&self) -> Result<usize> {
        match &self.nfunc {
            ComponentCount::Fixed(n) => Ok(*n),
            ComponentCount::Layers(layers) => Err(Error::Validation(format!(
                "expected fixed component count, got layers {:?}",
                layers
            ))),
        }
    }
}

impl Model for ModelConfig {
    /// Transform dimensionality for a validated configuration.
    fn n_parameters(&self) -> usize {
        match (&self.family, &self.nfunc) {
            (BasisFamily::Nn, ComponentCount::Layers(layers)) => {
                nn_num_params(layers) + usize::from(self.adaptive)
            }
            (BasisFamily::AdFamGgTa1d, ComponentCount::Fixed(n)) => {
                // family selector + adaptive count + four gg_1d blocks
                2 + BasisFamily::Gg1d.basis_param_names().len() * n
            }
            (family, ComponentCount::Fixed(n)) => {
                family.basis_param_names().len() * n + usize::from(self.adaptive)
            }
            _ => 0,
        }
    }

    fn parameter_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.n_parameters());
        match (&self.family, &self.nfunc) {
            (BasisFamily::Nn, ComponentCount::Layers(layers)) => {
                if self.adaptive {
                    names.push("nfunc".to_string());
                }
                for i in 0..nn_num_params(layers) {
                    names.push(format!("w_{}", i));
                }
            }
            (BasisFamily::AdFamGgTa1d, ComponentCount::Fixed(n)) => {
                names.push("family".to_string());
                names.push("nfunc".to_string());
                for param in BasisFamily::Gg1d.basis_param_names() {
                    for i in 0..*n {
                        names.push(format!("{}_{}", param, i));
                    }
                }
            }
            (family, ComponentCount::Fixed(n)) => {
                if self.adaptive {
                    names.push("nfunc".to_string());
                }
                for param in family.basis_param_names() {
                    for i in 0..*n {
                        names.push(format!("{}_{}", param, i));
                    }
                }
            }
            _ => {}
        }
        names
    }
}
