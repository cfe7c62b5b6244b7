//! Primitive inverse-CDF maps from one hypercube coordinate to one
//! physical coordinate.
//!
//! Each map is stateless, elementwise, and bijective on `(0,1)`; boundary
//! hypercube values may map to infinities, which are accepted as valid
//! (degenerate) outputs rather than errors. Hyperparameters are validated
//! once at construction.

use bf_core::{Error, Result};
use statrs::function::erf::erf_inv;

/// Uniform prior on `[minimum, maximum]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    minimum: f64,
    maximum: f64,
}

impl Uniform {
    /// Create a uniform map. Fails unless `maximum > minimum` and both
    /// are finite.
    pub fn new(minimum: f64, maximum: f64) -> Result<Self> {
        if !minimum.is_finite() || !maximum.is_finite() || maximum <= minimum {
            return Err(Error::Validation(format!(
                "uniform bounds must be finite with maximum > minimum, got [{}, {}]",
                minimum, maximum
            )));
        }
        Ok(Self { minimum, maximum })
    }

    /// Inverse CDF at `u`.
    #[inline]
    pub fn transform_one(&self, u: f64) -> f64 {
        self.minimum + (self.maximum - self.minimum) * u
    }
}

/// Symmetric Gaussian prior centred on the origin, optionally truncated
/// to positive values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    sigma: f64,
    positive: bool,
}

impl Gaussian {
    /// Create a zero-mean Gaussian map with standard deviation `sigma`.
    pub fn new(sigma: f64) -> Result<Self> {
        Self::build(sigma, false)
    }

    /// Create a positive-truncated Gaussian map.
    pub fn positive(sigma: f64) -> Result<Self> {
        Self::build(sigma, true)
    }

    fn build(sigma: f64, positive: bool) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::Validation(format!(
                "sigma must be finite and > 0, got {}",
                sigma
            )));
        }
        Ok(Self { sigma, positive })
    }

    /// Inverse CDF at `u`. `u = 0` or `u = 1` map to infinities.
    #[inline]
    pub fn transform_one(&self, u: f64) -> f64 {
        let arg = if self.positive { u } else { 2.0 * u - 1.0 };
        self.sigma * std::f64::consts::SQRT_2 * erf_inv(arg)
    }
}

/// Exponential prior with the given rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Create an exponential map. Fails unless `rate` is finite and > 0.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::Validation(format!(
                "rate must be finite and > 0, got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    /// Inverse CDF at `u`. `u = 1` maps to `+inf`.
    ///
    /// `ln_1p(-u)` keeps precision for small `u` where `1 - u` would
    /// round.
    #[inline]
    pub fn transform_one(&self, u: f64) -> f64 {
        -(-u).ln_1p() / self.rate
    }
}

/// Closed set of primitive inverse-CDF maps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Uniform on `[min, max]`.
    Uniform(Uniform),
    /// Zero-mean Gaussian, optionally positive-truncated.
    Gaussian(Gaussian),
    /// Exponential with fixed rate.
    Exponential(Exponential),
}

impl Primitive {
    /// Inverse CDF of one coordinate.
    #[inline]
    pub fn transform_one(&self, u: f64) -> f64 {
        match self {
            Primitive::Uniform(p) => p.transform_one(u),
            Primitive::Gaussian(p) => p.transform_one(u),
            Primitive::Exponential(p) => p.transform_one(u),
        }
    }

    /// Elementwise inverse CDF over a hypercube sub-vector.
    pub fn transform(&self, cube: &[f64]) -> Vec<f64> {
        cube.iter().map(|&u| self.transform_one(u)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_affine() {
        let p = Uniform::new(-2.0, 6.0).unwrap();
        assert_relative_eq!(p.transform_one(0.0), -2.0);
        assert_relative_eq!(p.transform_one(0.5), 2.0);
        assert_relative_eq!(p.transform_one(1.0), 6.0);
    }

    #[test]
    fn test_uniform_unit_interval_is_identity() {
        let p = Primitive::Uniform(Uniform::new(0.0, 1.0).unwrap());
        let cube = [0.5, 0.8, 0.3, 0.6];
        assert_eq!(p.transform(&cube), cube.to_vec());
    }

    #[test]
    fn test_uniform_rejects_bad_bounds() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, 1.0).is_err());
        assert!(Uniform::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_gaussian_median_and_symmetry() {
        let p = Gaussian::new(3.0).unwrap();
        assert_relative_eq!(p.transform_one(0.5), 0.0);
        assert_relative_eq!(p.transform_one(0.8), -p.transform_one(0.2), epsilon = 1e-12);
    }

    #[test]
    fn test_gaussian_matches_quantile() {
        // erfinv(2*0.975 - 1) * sqrt(2) is the 97.5% normal quantile.
        let p = Gaussian::new(1.0).unwrap();
        assert_relative_eq!(p.transform_one(0.975), 1.959_963_984_540_054, epsilon = 1e-9);
    }

    #[test]
    fn test_gaussian_positive_truncation() {
        let p = Gaussian::positive(2.0).unwrap();
        for u in [0.1, 0.3, 0.7, 0.99] {
            assert!(p.transform_one(u) >= 0.0, "u={}", u);
        }
        assert_relative_eq!(p.transform_one(0.0), 0.0);
    }

    #[test]
    fn test_gaussian_boundary_is_infinite() {
        let p = Gaussian::new(1.0).unwrap();
        assert_eq!(p.transform_one(1.0), f64::INFINITY);
        assert_eq!(p.transform_one(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_gaussian_rejects_bad_sigma() {
        assert!(Gaussian::new(0.0).is_err());
        assert!(Gaussian::new(-1.0).is_err());
        assert!(Gaussian::new(f64::NAN).is_err());
    }

    #[test]
    fn test_exponential_quantiles() {
        let p = Exponential::new(2.0).unwrap();
        assert_relative_eq!(p.transform_one(0.0), 0.0);
        // median = ln(2)/rate
        assert_relative_eq!(p.transform_one(0.5), 0.5 * std::f64::consts::LN_2, epsilon = 1e-12);
        assert_eq!(p.transform_one(1.0), f64::INFINITY);
    }

    #[test]
    fn test_exponential_rejects_bad_rate() {
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-2.0).is_err());
    }

    #[test]
    fn test_dimension_preserved() {
        let p = Primitive::Exponential(Exponential::new(1.0).unwrap());
        let cube = vec![0.1; 7];
        assert_eq!(p.transform(&cube).len(), cube.len());
    }
}
