//! Default prior assembly per model family.
//!
//! Each family's priors come from a declarative table mapping parameter
//! name to primitive transform; the table is consulted once at
//! construction, never per call. The amplitude block (`a`) is always
//! sorted for identifiability, and carries the leading count coordinate
//! when the model is adaptive.

use bf_core::{nn_num_params, BasisFamily, ComponentCount, Error, ModelConfig, Result};

use crate::block::BlockPrior;
use crate::family::FamilySelector;
use crate::primitive::{Exponential, Gaussian, Primitive, Uniform};
use crate::prior::Prior;

/// Primitive prior for one basis-function parameter.
fn param_primitive(family: BasisFamily, param: &str) -> Result<Primitive> {
    let primitive = match (family, param) {
        (BasisFamily::Gg1d | BasisFamily::Gg2d, "a") => {
            Primitive::Exponential(Exponential::new(2.0)?)
        }
        (BasisFamily::Gg1d | BasisFamily::Gg2d, "mu" | "mu1" | "mu2") => {
            Primitive::Uniform(Uniform::new(0.0, 1.0)?)
        }
        (BasisFamily::Gg1d | BasisFamily::Gg2d, "sigma" | "sigma1" | "sigma2") => {
            Primitive::Exponential(Exponential::new(2.0)?)
        }
        (BasisFamily::Gg1d | BasisFamily::Gg2d, "beta" | "beta1" | "beta2") => {
            Primitive::Exponential(Exponential::new(0.5)?)
        }
        (BasisFamily::Gg2d, "omega") => Primitive::Uniform(Uniform::new(
            -0.25 * std::f64::consts::PI,
            0.25 * std::f64::consts::PI,
        )?),
        (BasisFamily::Ta1d | BasisFamily::Ta2d, "a") => {
            Primitive::Exponential(Exponential::new(0.5)?)
        }
        (BasisFamily::Ta1d | BasisFamily::Ta2d, "w_0" | "w_1" | "w_2") => {
            Primitive::Gaussian(Gaussian::new(10.0)?)
        }
        (family, param) => {
            return Err(Error::Validation(format!(
                "no default prior for parameter {:?} of family {:?}",
                param, family
            )));
        }
    };
    Ok(primitive)
}

/// Build the block prior of one basis family (not `nn` or `adfam`).
fn basis_block(
    family: BasisFamily,
    nfunc: usize,
    nfunc_min: usize,
    adaptive: bool,
) -> Result<BlockPrior> {
    let names = family.basis_param_names();
    let mut priors = Vec::with_capacity(names.len());
    let mut sizes = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let primitive = param_primitive(family, name)?;
        if i == 0 {
            // amplitude block: sorted, adaptive count folded in front
            if adaptive {
                priors.push(Prior::AdaptiveSorted { primitive, nfunc_min });
                sizes.push(nfunc + 1);
            } else {
                priors.push(Prior::Sorted { primitive });
                sizes.push(nfunc);
            }
        } else {
            priors.push(Prior::Primitive(primitive));
            sizes.push(nfunc);
        }
    }
    tracing::debug!(?family, nfunc, adaptive, ?sizes, "assembled basis block prior");
    BlockPrior::new(priors, sizes)
}

/// Build the single-block network prior, with an optional leading
/// node-count coordinate.
fn nn_block(layers: &[usize], nfunc_min: usize, adaptive: bool) -> Result<BlockPrior> {
    let mut priors = vec![Prior::Primitive(Primitive::Gaussian(Gaussian::new(10.0)?))];
    let mut sizes = vec![nn_num_params(layers)];
    if adaptive {
        let count = Uniform::new(nfunc_min as f64 - 0.5, layers[1] as f64 + 0.5)?;
        priors.insert(0, Prior::Primitive(Primitive::Uniform(count)));
        sizes.insert(0, 1);
    }
    tracing::debug!(?layers, adaptive, ?sizes, "assembled nn block prior");
    BlockPrior::new(priors, sizes)
}

/// Construct the default prior for a validated model configuration.
///
/// The returned `Prior` is the one instance reused for the whole
/// sampling run; its dimensionality equals
/// [`Model::n_parameters`](bf_core::Model::n_parameters) for the same
/// configuration.
pub fn default_prior(config: &ModelConfig) -> Result<Prior> {
    config.validate()?;
    match (&config.family, &config.nfunc) {
        (BasisFamily::Nn, ComponentCount::Layers(layers)) => Ok(Prior::Block(nn_block(
            layers,
            config.nfunc_min,
            config.adaptive,
        )?)),
        (BasisFamily::AdFamGgTa1d, ComponentCount::Fixed(n)) => {
            let gg = basis_block(BasisFamily::Gg1d, *n, config.nfunc_min, true)?;
            let ta = basis_block(BasisFamily::Ta1d, *n, config.nfunc_min, true)?;
            let selector = FamilySelector::new(gg, ta, *n)?;
            Ok(Prior::AdaptiveFamily(Box::new(selector)))
        }
        (family, ComponentCount::Fixed(n)) => Ok(Prior::Block(basis_block(
            *family,
            *n,
            config.nfunc_min,
            config.adaptive,
        )?)),
        // validate() has already rejected every other combination
        (family, nfunc) => Err(Error::Validation(format!(
            "unsupported family/count combination: {:?} / {:?}",
            family, nfunc
        ))),
    }
}
