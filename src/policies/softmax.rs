use super::Anneal;
use crate::distribution::sample_cdf;
use crate::error::{BanditError, Result};
use crate::policy::{Policy, SelectionLog};

/// Softmax (Boltzmann) exploration policy
///
/// Mean estimates are min-max normalized, scaled by `1 / tau` and pushed
/// through a softmax. The next arm is drawn from the resulting distribution,
/// so low temperatures concentrate on the best arm and high temperatures
/// approach uniform play.
#[derive(Clone)]
pub struct Softmax {
    tau: f64,
    log: SelectionLog,
}

impl std::fmt::Debug for Softmax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Softmax")
            .field("n_arms", &self.log.n_arms())
            .field("tau", &self.tau)
            .field("plays", &self.log.selected().len())
            .finish()
    }
}

fn check_tau(tau: f64) -> Result<()> {
    if !(tau.is_finite() && tau > 0.0) {
        return Err(BanditError::config(format!(
            "tau must be positive and finite, got {tau}"
        )));
    }
    Ok(())
}

/// Selection probabilities for `mean_estimates` at temperature `tau`
///
/// When every estimate is equal the min-max range is zero and the result is
/// the uniform distribution.
///
/// # Errors
/// Returns [`BanditError::NumericalError`] if the weights cannot be normalized.
pub fn softmax_probabilities(mean_estimates: &[f64], tau: f64) -> Result<Vec<f64>> {
    let k = mean_estimates.len();
    if k == 0 {
        return Ok(Vec::new());
    }

    let min = mean_estimates.iter().copied().fold(f64::INFINITY, f64::min);
    let max = mean_estimates
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if max - min == 0.0 {
        return Ok(vec![1.0 / k as f64; k]);
    }

    // A spread wider than f64::MAX overflows; halving every value keeps the
    // normalized gaps unchanged.
    let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
    let range = max * scale - min * scale;

    // Shift by the maximum so the largest weight is exactly 1.
    let weights: Vec<f64> = mean_estimates
        .iter()
        .map(|&m| (-((max * scale - m * scale) / range) / tau).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(BanditError::NumericalError {
            message: format!("softmax weights sum to {total} at tau {tau}"),
        });
    }

    Ok(weights.into_iter().map(|w| w / total).collect())
}

impl Softmax {
    /// Creates a new Softmax policy over `n_arms` arms with temperature `tau`
    pub fn new(n_arms: usize, tau: f64) -> Result<Self> {
        check_tau(tau)?;
        Ok(Self {
            tau,
            log: SelectionLog::new("softmax", n_arms)?,
        })
    }

    /// Enables diagnostic logging for this instance
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.log.set_verbose(verbose);
        if verbose {
            log::debug!("tau: {:6.4}", self.tau);
        }
        self
    }

    /// Gets the temperature
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Sets the temperature
    pub fn set_tau(&mut self, tau: f64) -> Result<()> {
        check_tau(tau)?;
        self.tau = tau;
        Ok(())
    }

    /// Selection probabilities this policy would sample from for `mean_estimates`
    pub fn probabilities(&self, mean_estimates: &[f64]) -> Result<Vec<f64>> {
        self.log.validate(mean_estimates)?;
        softmax_probabilities(mean_estimates, self.tau)
    }
}

impl Policy for Softmax {
    fn select_arm(
        &mut self,
        mean_estimates: &[f64],
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        let p = self.probabilities(mean_estimates)?;
        let arm = sample_cdf(&p, rng);
        self.log.record(arm);
        Ok(arm)
    }

    fn selected_arms(&self) -> &[usize] {
        self.log.selected()
    }

    fn n_arms(&self) -> usize {
        self.log.n_arms()
    }

    fn name(&self) -> &'static str {
        self.log.name()
    }

    fn reset(&mut self) {
        self.log.clear();
    }
}

impl Anneal for Softmax {
    const ANNEALED_NAME: &'static str = "softmax-annealing";

    fn parameter(&self) -> f64 {
        self.tau
    }

    fn set_parameter(&mut self, value: f64) {
        self.tau = value.max(f64::MIN_POSITIVE);
    }

    fn verbose(&self) -> bool {
        self.log.verbose()
    }

    fn set_verbose(&mut self, verbose: bool) {
        self.log.set_verbose(verbose);
    }
}
