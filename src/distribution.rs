//! Small numeric helpers over per-arm `f64` slices.

use rand::Rng;

/// Index of the largest value, first occurrence on ties.
pub(crate) fn first_argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Draw an index from a probability vector by inverting its cumulative sum.
///
/// Returns the lowest `i` with `cdf[i] > s` for `s ~ U[0, 1)`. When rounding
/// leaves the total mass just below `s`, the last arm with positive
/// probability is returned.
pub(crate) fn sample_cdf(probabilities: &[f64], rng: &mut dyn rand::RngCore) -> usize {
    let s: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if cumulative > s {
            return i;
        }
    }
    probabilities
        .iter()
        .rposition(|&p| p > 0.0)
        .unwrap_or(probabilities.len().saturating_sub(1))
}
