//! Forced-identifiability ordering transform.
//!
//! K exchangeable components (e.g. component amplitudes) give a posterior
//! with K! equivalent modes under index permutation ("label switching").
//! Sampling a canonical ordering instead removes that symmetry. Inverting
//! the joint CDF of uniform order statistics keeps the map
//! measure-preserving, which the sampler's volume bookkeeping requires.
//!
//! Note the formula in the 2015 MNRAS PolyChord paper contains a typo;
//! the recurrence below is the corrected one.

/// Map a hypercube sub-vector to the order statistics of K i.i.d.
/// Uniform(0,1) draws, non-decreasing left-to-right.
///
/// `o[K-1] = c[K-1]^(1/K)`, then `o[n] = c[n]^(1/(n+1)) * o[n+1]` going
/// down from `n = K-2`. Every output lies in `[0,1]` and
/// `o[0] <= o[1] <= ... <= o[K-1]`; the k-th output (1-indexed) is
/// marginally Beta(k, K+1-k). Returns a new vector; the input is never
/// mutated.
pub fn forced_identifiability(cube: &[f64]) -> Vec<f64> {
    let k = cube.len();
    let mut ordered = vec![0.0; k];
    if k == 0 {
        return ordered;
    }
    ordered[k - 1] = cube[k - 1].powf(1.0 / k as f64);
    for n in (0..k - 1).rev() {
        ordered[n] = cube[n].powf(1.0 / (n + 1) as f64) * ordered[n + 1];
    }
    ordered
}
