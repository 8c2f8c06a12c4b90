//! Running per-arm reward means, the input every policy consumes.

use crate::error::{BanditError, Result};

/// Empirical mean reward per arm, updated one observation at a time
///
/// Arms without observations report a mean of 0.0. Pass [`means`] to
/// [`Policy::select_arm`](crate::Policy::select_arm) and [`record`] the
/// observed reward for the returned arm.
///
/// [`means`]: RewardEstimates::means
/// [`record`]: RewardEstimates::record
#[derive(Clone, Debug, PartialEq)]
pub struct RewardEstimates {
    pulls: Vec<u64>,
    means: Vec<f64>,
}

impl RewardEstimates {
    pub fn new(n_arms: usize) -> Result<Self> {
        if n_arms == 0 {
            return Err(BanditError::config("number of arms must be positive"));
        }
        Ok(Self {
            pulls: vec![0; n_arms],
            means: vec![0.0; n_arms],
        })
    }

    /// Fold one observed reward for `arm` into its running mean
    pub fn record(&mut self, arm: usize, reward: f64) -> Result<()> {
        if arm >= self.means.len() {
            return Err(BanditError::input(format!(
                "arm {arm} out of range for {} arms",
                self.means.len()
            )));
        }
        if !reward.is_finite() {
            return Err(BanditError::input(format!("reward is not finite: {reward}")));
        }

        self.pulls[arm] += 1;
        let n = self.pulls[arm] as f64;
        self.means[arm] += (reward - self.means[arm]) / n;
        Ok(())
    }

    /// Current mean estimate per arm
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Observations per arm
    pub fn pulls(&self) -> &[u64] {
        &self.pulls
    }

    pub fn total_pulls(&self) -> u64 {
        self.pulls.iter().sum()
    }

    pub fn n_arms(&self) -> usize {
        self.means.len()
    }

    pub fn reset(&mut self) {
        self.pulls.iter_mut().for_each(|n| *n = 0);
        self.means.iter_mut().for_each(|m| *m = 0.0);
    }
}
