//! Random helpers for building bandit experiments around the policies.
//!
//! These are thin wrappers over `rand` / `rand_distr`; like the policies they
//! take the random source as an argument so runs can be seeded.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution, Normal};

use crate::error::{BanditError, Result};

/// Default location of [`sample_folded_normal`] draws
pub const DEFAULT_FOLDED_MEAN: f64 = 0.5;

/// Default scale of [`sample_folded_normal`] draws, `sqrt(12)`
pub const DEFAULT_FOLDED_STD: f64 = 3.464_101_615_137_754_6;

/// Boolean mask of length `total` with `min(count, total)` randomly placed `true` entries
pub fn select_subset_mask(total: usize, count: usize, rng: &mut dyn rand::RngCore) -> Vec<bool> {
    let count = count.min(total);
    let mut mask: Vec<bool> = (0..total).map(|i| i < count).collect();
    mask.shuffle(rng);
    mask
}

/// `count` independent draws from `U[0, 1)`
pub fn sample_uniform(count: usize, rng: &mut dyn rand::RngCore) -> Vec<f64> {
    (0..count).map(|_| rng.random::<f64>()).collect()
}

/// `count` independent draws of `|X|` with `X ~ N(mean, std)`
///
/// # Errors
/// Returns [`BanditError::InvalidConfiguration`] if `mean` is not finite or
/// `std` is negative or not finite.
pub fn sample_folded_normal(
    count: usize,
    mean: f64,
    std: f64,
    rng: &mut dyn rand::RngCore,
) -> Result<Vec<f64>> {
    if !mean.is_finite() || !std.is_finite() || std < 0.0 {
        return Err(BanditError::config(format!(
            "folded normal needs finite mean and non-negative finite std, got mean {mean}, std {std}"
        )));
    }
    let normal = Normal::new(mean, std)
        .map_err(|e| BanditError::config(format!("folded normal: {e}")))?;
    Ok((0..count).map(|_| normal.sample(rng).abs()).collect())
}
