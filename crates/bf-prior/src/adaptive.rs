//! Adaptive (trans-dimensional) transform.
//!
//! The true number of active components T is itself inferred, but the
//! sampler needs a fixed-length vector. The leading coordinate of an
//! adaptive block therefore encodes T: an affine map sends `u0` into
//! `(nfunc_min - 0.5, nfunc_max + 0.5)` and T is its nearest integer,
//! while the unrounded value stays in slot 0 of the output so the map
//! remains bijective.

use bf_core::{Error, Result};

/// Result of splitting an adaptive block's leading coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveSplit {
    /// Active component count, in `[nfunc_min, nfunc_max]`.
    pub nfunc: usize,
    /// Unrounded physical value of the count coordinate.
    pub leading: f64,
}

/// Decode the active component count from an adaptive block.
///
/// `cube` is the whole block (1 count coordinate + `cube.len() - 1`
/// component slots), so `nfunc_max = cube.len() - 1`. Rounding is
/// half-away-from-zero, which lands `u0 = 0.0` exactly on `nfunc_min`;
/// the clamp covers `u0 = 1.0`, whose half-integer midpoint would round
/// one past `nfunc_max`.
///
/// Returns `Ok(None)` when the leading coordinate is the NaN sentinel
/// (an undefined point propagated from upstream); the caller must turn
/// that into an all-NaN output of matching length. Any other non-finite
/// leading coordinate is a domain error.
pub fn adaptive_split(cube: &[f64], nfunc_min: usize) -> Result<Option<AdaptiveSplit>> {
    if cube.is_empty() {
        return Err(Error::Domain("adaptive block needs at least 1 coordinate".into()));
    }
    let u0 = cube[0];
    if u0.is_nan() {
        return Ok(None);
    }
    if !u0.is_finite() {
        return Err(Error::Domain(format!(
            "adaptive count coordinate must be finite or NaN, got {}",
            u0
        )));
    }
    let nfunc_max = cube.len() - 1;
    if nfunc_max < nfunc_min {
        return Err(Error::Domain(format!(
            "adaptive block of size {} cannot hold nfunc_min={}",
            cube.len(),
            nfunc_min
        )));
    }
    let leading = (nfunc_min as f64 - 0.5) + (1.0 + nfunc_max as f64 - nfunc_min as f64) * u0;
    let nfunc = (leading.round() as i64).clamp(nfunc_min as i64, nfunc_max as i64) as usize;
    Ok(Some(AdaptiveSplit { nfunc, leading }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lower_boundary_rounds_to_nfunc_min() {
        // D=4, nfunc_min=1: leading = 0.5, half-away-from-zero rounds to 1.
        let split = adaptive_split(&[0.0, 0.2, 0.3, 0.4], 1).unwrap().unwrap();
        assert_relative_eq!(split.leading, 0.5);
        assert_eq!(split.nfunc, 1);
    }

    #[test]
    fn test_upper_boundary() {
        // u0 just under 1 lands just under nfunc_max + 0.5.
        let split = adaptive_split(&[1.0 - 1e-12, 0.2, 0.3, 0.4], 1).unwrap().unwrap();
        assert_eq!(split.nfunc, 3);
        // u0 = 1.0 exactly: midpoint clamps back into range.
        let split = adaptive_split(&[1.0, 0.2, 0.3, 0.4], 1).unwrap().unwrap();
        assert_eq!(split.nfunc, 3);
    }

    #[test]
    fn test_count_within_bounds_across_grid() {
        for d in 3..8 {
            let mut cube = vec![0.5; d];
            for i in 0..=100 {
                cube[0] = i as f64 / 100.0;
                let split = adaptive_split(&cube, 2).unwrap().unwrap();
                assert!((2..=d - 1).contains(&split.nfunc), "d={}, u0={}", d, cube[0]);
            }
        }
    }

    #[test]
    fn test_leading_value_affine() {
        // nfunc_min=2, nfunc_max=5: leading = 1.5 + 4*u0.
        let split = adaptive_split(&[0.25, 0.0, 0.0, 0.0, 0.0, 0.0], 2).unwrap().unwrap();
        assert_relative_eq!(split.leading, 2.5);
        assert_eq!(split.nfunc, 3);
    }

    #[test]
    fn test_nan_sentinel() {
        assert_eq!(adaptive_split(&[f64::NAN, 0.2, 0.3], 1).unwrap(), None);
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(adaptive_split(&[], 1).is_err());
        assert!(adaptive_split(&[f64::INFINITY, 0.2], 1).is_err());
        // block too small for nfunc_min
        assert!(adaptive_split(&[0.5, 0.5], 3).is_err());
    }
}
