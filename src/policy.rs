//! Policy trait definition for multi-armed bandit action selection

use crate::error::{BanditError, Result};

/// Common contract shared by every action-selection policy
///
/// A policy never owns the reward estimates. The caller keeps one empirical
/// mean per arm, hands a snapshot to [`Policy::select_arm`], pulls the
/// returned arm, and updates its estimates before the next call.
///
/// Note: the random source is passed as `dyn rand::RngCore` rather than a
/// generic parameter so that `Box<dyn Policy>` stays object-safe.
pub trait Policy {
    /// Select the next arm to pull given the current mean reward estimates
    ///
    /// # Arguments
    /// - `mean_estimates`: One empirical mean per arm, length must equal [`Policy::n_arms`]
    /// - `rng`: Random number generator for stochastic decisions
    ///
    /// # Returns
    /// The chosen arm index in `0..n_arms`, which is also appended to the
    /// selection history
    fn select_arm(&mut self, mean_estimates: &[f64], rng: &mut dyn rand::RngCore)
    -> Result<usize>;

    /// Every arm chosen so far, in call order
    fn selected_arms(&self) -> &[usize];

    /// Number of arms this policy was built for
    fn n_arms(&self) -> usize;

    /// Short human-readable name, used in log records
    fn name(&self) -> &'static str;

    /// Forget the selection history and any learned state
    fn reset(&mut self);
}

/// Bookkeeping shared by all policies: arm count, verbosity and history.
#[derive(Clone, Debug)]
pub(crate) struct SelectionLog {
    policy: &'static str,
    n_arms: usize,
    verbose: bool,
    selected: Vec<usize>,
}

impl SelectionLog {
    pub(crate) fn new(policy: &'static str, n_arms: usize) -> Result<Self> {
        if n_arms == 0 {
            return Err(BanditError::config("number of arms must be positive"));
        }
        Ok(Self {
            policy,
            n_arms,
            verbose: false,
            selected: Vec::new(),
        })
    }

    pub(crate) fn name(&self) -> &'static str {
        self.policy
    }

    pub(crate) fn n_arms(&self) -> usize {
        self.n_arms
    }

    pub(crate) fn verbose(&self) -> bool {
        self.verbose
    }

    pub(crate) fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub(crate) fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Reject estimate vectors that would index out of bounds or poison the math.
    pub(crate) fn validate(&self, mean_estimates: &[f64]) -> Result<()> {
        if mean_estimates.len() != self.n_arms {
            return Err(BanditError::input(format!(
                "expected {} mean estimates, got {}",
                self.n_arms,
                mean_estimates.len()
            )));
        }
        if let Some(i) = mean_estimates.iter().position(|m| !m.is_finite()) {
            return Err(BanditError::input(format!(
                "mean estimate for arm {i} is not finite: {}",
                mean_estimates[i]
            )));
        }
        Ok(())
    }

    pub(crate) fn record(&mut self, arm: usize) {
        let policy = self.policy;
        debug_assert!(arm < self.n_arms);
        self.selected.push(arm);
        if self.verbose {
            log::debug!("{policy}: play {} selected arm {arm}", self.selected.len());
        } else {
            log::trace!("{policy}: selected arm {arm}");
        }
    }

    pub(crate) fn clear(&mut self) {
        self.selected.clear();
    }
}
